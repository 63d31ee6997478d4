use std::iter::zip;
use std::ops::{Add, Mul, Neg, Sub};

use super::utils::{add_coeffs, div_rem_coeffs, mul_coeffs, sub_coeffs, trim_zeros};
use super::{Basis, PolyError};
use crate::core::fields::Field;

/// A univariate polynomial tagged with the [`Basis`] its values are expressed in.
///
/// Operations never mutate their inputs and never convert between bases implicitly. Only
/// [`Polynomial::fft`] and [`Polynomial::ifft`] change the basis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<F: Field> {
    values: Vec<F>,
    basis: Basis,
}

impl<F: Field> Polynomial<F> {
    pub fn new(values: Vec<F>, basis: Basis) -> Self {
        Self { values, basis }
    }

    /// Creates a polynomial from its coefficients, constant term first.
    pub fn monomial(coeffs: Vec<F>) -> Self {
        Self::new(coeffs, Basis::Monomial)
    }

    /// Creates a polynomial from its evaluations over the subgroup of order `evals.len()`.
    pub fn lagrange(evals: Vec<F>) -> Self {
        Self::new(evals, Basis::Lagrange)
    }

    pub fn values(&self) -> &[F] {
        &self.values
    }

    pub fn into_values(self) -> Vec<F> {
        self.values
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if every value is zero. Holds in either basis.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| v.is_zero())
    }

    /// Returns the degree of a monomial polynomial, ignoring trailing zero coefficients.
    ///
    /// The zero polynomial has degree 0.
    pub fn degree(&self) -> Result<usize, PolyError> {
        self.check_basis(Basis::Monomial)?;
        Ok(trim_zeros(&self.values).len().saturating_sub(1))
    }

    pub fn try_add(&self, rhs: &Self) -> Result<Self, PolyError> {
        self.check_compatible(rhs)?;
        let values = match self.basis {
            Basis::Lagrange => zip(&self.values, &rhs.values)
                .map(|(&a, &b)| a + b)
                .collect(),
            Basis::Monomial => add_coeffs(&self.values, &rhs.values),
        };
        Ok(Self::new(values, self.basis))
    }

    pub fn try_sub(&self, rhs: &Self) -> Result<Self, PolyError> {
        self.check_compatible(rhs)?;
        let values = match self.basis {
            Basis::Lagrange => zip(&self.values, &rhs.values)
                .map(|(&a, &b)| a - b)
                .collect(),
            Basis::Monomial => sub_coeffs(&self.values, &rhs.values),
        };
        Ok(Self::new(values, self.basis))
    }

    /// Multiplies two polynomials.
    ///
    /// In the Lagrange basis this is pointwise, which equals the true product only if the domain
    /// is larger than the sum of both degrees. Otherwise the result wraps around the domain. This
    /// is not checked.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, PolyError> {
        self.check_compatible(rhs)?;
        let values = match self.basis {
            Basis::Lagrange => zip(&self.values, &rhs.values)
                .map(|(&a, &b)| a * b)
                .collect(),
            Basis::Monomial => mul_coeffs(&self.values, &rhs.values),
        };
        Ok(Self::new(values, self.basis))
    }

    /// Divides two polynomials.
    ///
    /// In the monomial basis the division must be exact, a nonzero remainder is an
    /// [`PolyError::InexactDivision`]. In the Lagrange basis the division is pointwise and carries
    /// the same aliasing caveat as [`Polynomial::try_mul`].
    pub fn try_div(&self, rhs: &Self) -> Result<Self, PolyError> {
        self.check_compatible(rhs)?;
        let values = match self.basis {
            Basis::Lagrange => {
                if rhs.values.iter().any(|v| v.is_zero()) {
                    return Err(PolyError::DivisionByZero);
                }
                zip(&self.values, &rhs.values)
                    .map(|(&a, &b)| a / b)
                    .collect()
            }
            Basis::Monomial => {
                let (quotient, rem) = div_rem_coeffs(&self.values, &rhs.values)?;
                if rem.iter().any(|v| !v.is_zero()) {
                    return Err(PolyError::InexactDivision);
                }
                quotient
            }
        };
        Ok(Self::new(values, self.basis))
    }

    /// Divides every value by `rhs`.
    pub fn div_scalar(&self, rhs: F) -> Result<Self, PolyError> {
        if rhs.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        Ok(self.clone() * rhs.inverse())
    }

    /// Rotates the evaluations left by `shift`, so that `values[i]` becomes the evaluation at
    /// `ω^(i + shift)`.
    pub fn shift(&self, shift: usize) -> Result<Self, PolyError> {
        self.check_basis(Basis::Lagrange)?;
        if shift >= self.len() {
            return Err(PolyError::IndexOutOfRange {
                index: shift,
                len: self.len(),
            });
        }
        let mut values = self.values.clone();
        values.rotate_left(shift);
        Ok(Self::new(values, self.basis))
    }

    pub(super) fn check_basis(&self, expected: Basis) -> Result<(), PolyError> {
        if self.basis != expected {
            return Err(PolyError::BasisMismatch {
                expected,
                actual: self.basis,
            });
        }
        Ok(())
    }

    fn check_compatible(&self, rhs: &Self) -> Result<(), PolyError> {
        rhs.check_basis(self.basis)?;
        if self.basis == Basis::Lagrange && self.len() != rhs.len() {
            return Err(PolyError::LengthMismatch {
                lhs: self.len(),
                rhs: rhs.len(),
            });
        }
        Ok(())
    }
}

impl<F: Field> Add<F> for Polynomial<F> {
    type Output = Self;

    /// Adds a constant: to every evaluation, or to the constant coefficient.
    fn add(mut self, rhs: F) -> Self {
        match self.basis {
            Basis::Lagrange => self.values.iter_mut().for_each(|v| *v += rhs),
            Basis::Monomial => match self.values.first_mut() {
                Some(constant) => *constant += rhs,
                None => self.values.push(rhs),
            },
        }
        self
    }
}

impl<F: Field> Sub<F> for Polynomial<F> {
    type Output = Self;

    fn sub(self, rhs: F) -> Self {
        self + (-rhs)
    }
}

impl<F: Field> Mul<F> for Polynomial<F> {
    type Output = Self;

    /// Scales every value, which is the same operation in both bases.
    fn mul(mut self, rhs: F) -> Self {
        self.values.iter_mut().for_each(|v| *v *= rhs);
        self
    }
}

impl<F: Field> Neg for Polynomial<F> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.values.iter_mut().for_each(|v| *v = -*v);
        self
    }
}
