use itertools::{izip, Itertools};
use tracing::{span, Level};

use super::utils::{fft_domain, horner_eval};
use super::{Basis, PolyError, Polynomial};
use crate::core::fft::{fft, inverse_domain};
use crate::core::fields::{batch_inverse, Field};

impl<F: Field> Polynomial<F> {
    /// Converts coefficients to evaluations over the subgroup of order `self.len()`.
    pub fn fft(&self) -> Result<Self, PolyError> {
        self.check_basis(Basis::Monomial)?;
        let n = self.len();
        let roots = fft_domain::<F>(n)?;
        let _span = span!(Level::INFO, "FFT", log_size = n.ilog2()).entered();

        let values = fft(&self.raw_values(), &roots, F::MODULUS)
            .into_iter()
            .map(F::from_raw)
            .collect();
        Ok(Self::new(values, Basis::Lagrange))
    }

    /// Converts evaluations over the subgroup of order `self.len()` back to coefficients.
    pub fn ifft(&self) -> Result<Self, PolyError> {
        self.check_basis(Basis::Lagrange)?;
        let n = self.len();
        let roots = fft_domain::<F>(n)?;
        let _span = span!(Level::INFO, "IFFT", log_size = n.ilog2()).entered();

        let n_inv = F::from_raw(n as u64).inverse();
        let values = fft(&self.raw_values(), &inverse_domain(&roots), F::MODULUS)
            .into_iter()
            .map(|v| F::from_raw(v) * n_inv)
            .collect();
        Ok(Self::new(values, Basis::Monomial))
    }

    /// Evaluates a Lagrange polynomial at `x` without converting it to coefficients.
    ///
    /// See <https://hackmd.io/@vbuterin/barycentric_evaluation>.
    pub fn barycentric_eval(&self, x: F) -> Result<F, PolyError> {
        self.check_basis(Basis::Lagrange)?;
        let n = self.len();
        if !F::supports_domain(n) {
            return Err(PolyError::InvalidDomainSize { size: n });
        }
        let roots = F::roots_of_unity(n);

        // The general formula divides by zero on the domain itself.
        if let Some(i) = roots.iter().position(|&root| root == x) {
            return Ok(self.values()[i]);
        }

        let denominators = roots.iter().map(|&root| x - root).collect_vec();
        let denominator_inverses = batch_inverse(&denominators);
        let sum = izip!(self.values(), &roots, &denominator_inverses)
            .map(|(&value, &root, &inverse)| value * root * inverse)
            .sum::<F>();
        let size = F::from_raw(n as u64);
        Ok((x.pow(n as u128) - F::one()) / size * sum)
    }

    /// Evaluates a monomial polynomial at `x`.
    pub fn coeff_eval(&self, x: F) -> Result<F, PolyError> {
        self.check_basis(Basis::Monomial)?;
        Ok(horner_eval(self.values(), x))
    }

    fn raw_values(&self) -> Vec<u64> {
        self.values().iter().map(|v| v.to_raw()).collect()
    }
}
