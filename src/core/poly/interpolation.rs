use itertools::Itertools;
use tracing::{span, Level};

use super::{PolyError, Polynomial};
use crate::core::fields::Field;

/// Interpolates a monomial polynomial through arbitrary distinct points.
///
/// Unlike [`Polynomial::ifft`] the points need not form a subgroup. Costs `O(n^2)` field
/// multiplications per Lagrange basis polynomial, so it is meant for a small number of points.
#[derive(Clone, Debug)]
pub struct InterpolationPoly<F: Field> {
    xs: Vec<F>,
    ys: Vec<F>,
}

impl<F: Field> InterpolationPoly<F> {
    /// Creates the interpolation problem `p(xs[i]) = ys[i]`.
    pub fn new(xs: Vec<F>, ys: Vec<F>) -> Result<Self, PolyError> {
        if xs.len() != ys.len() {
            return Err(PolyError::LengthMismatch {
                lhs: xs.len(),
                rhs: ys.len(),
            });
        }
        for ((first, a), (second, b)) in xs.iter().enumerate().tuple_combinations() {
            if a == b {
                return Err(PolyError::DuplicatePoint { first, second });
            }
        }
        Ok(Self { xs, ys })
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[F] {
        &self.xs
    }

    pub fn ys(&self) -> &[F] {
        &self.ys
    }

    /// Returns `X - a`.
    pub fn root_poly(a: F) -> Polynomial<F> {
        Polynomial::monomial(vec![-a, F::one()])
    }

    /// Returns the constant `a`.
    pub fn const_poly(a: F) -> Polynomial<F> {
        Polynomial::monomial(vec![a])
    }

    /// Returns `(X - xs[0])(X - xs[1])..(X - xs[n-1])`.
    pub fn vanishing_poly(&self) -> Result<Polynomial<F>, PolyError> {
        self.xs
            .iter()
            .try_fold(Self::const_poly(F::one()), |acc, &x| {
                acc.try_mul(&Self::root_poly(x))
            })
    }

    /// Returns the derivative of [`Self::vanishing_poly`].
    ///
    /// For `Z(X) = Π (X - x_i)` with distinct roots, `Z'(X) = Σ Z(X) / (X - x_i)`, so this only
    /// needs exact divisions.
    pub fn vanishing_poly_diff(&self) -> Result<Polynomial<F>, PolyError> {
        let vanishing = self.vanishing_poly()?;
        self.vanishing_poly_diff_of(&vanishing)
    }

    /// Returns the `i`th Lagrange basis polynomial: one at `xs[i]` and zero at every other point.
    pub fn lagrange_poly(&self, i: usize) -> Result<Polynomial<F>, PolyError> {
        if i >= self.len() {
            return Err(PolyError::IndexOutOfRange {
                index: i,
                len: self.len(),
            });
        }
        let vanishing = self.vanishing_poly()?;
        let vanishing_diff = self.vanishing_poly_diff_of(&vanishing)?;
        self.lagrange_poly_of(i, &vanishing, &vanishing_diff)
    }

    /// Returns the unique polynomial of degree less than `n` through all the points.
    pub fn poly(&self) -> Result<Polynomial<F>, PolyError> {
        let _span = span!(Level::INFO, "Interpolation", n_points = self.len()).entered();

        let vanishing = self.vanishing_poly()?;
        let vanishing_diff = self.vanishing_poly_diff_of(&vanishing)?;
        (0..self.len()).try_fold(Self::const_poly(F::zero()), |acc, i| {
            let basis = self.lagrange_poly_of(i, &vanishing, &vanishing_diff)?;
            acc.try_add(&(basis * self.ys[i]))
        })
    }

    fn vanishing_poly_diff_of(
        &self,
        vanishing: &Polynomial<F>,
    ) -> Result<Polynomial<F>, PolyError> {
        self.xs
            .iter()
            .try_fold(Self::const_poly(F::zero()), |acc, &x| {
                acc.try_add(&vanishing.try_div(&Self::root_poly(x))?)
            })
    }

    fn lagrange_poly_of(
        &self,
        i: usize,
        vanishing: &Polynomial<F>,
        vanishing_diff: &Polynomial<F>,
    ) -> Result<Polynomial<F>, PolyError> {
        let x = self.xs[i];
        vanishing
            .try_div(&Self::root_poly(x))?
            .div_scalar(vanishing_diff.coeff_eval(x)?)
    }
}
