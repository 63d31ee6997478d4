use itertools::{EitherOrBoth, Itertools};

use super::PolyError;
use crate::core::fields::Field;

/// Evaluates univariate polynomial using [Horner's method].
///
/// [Horner's method]: https://en.wikipedia.org/wiki/Horner%27s_method
pub fn horner_eval<F: Field>(coeffs: &[F], x: F) -> F {
    coeffs
        .iter()
        .rfold(F::zero(), |acc, &coeff| acc * x + coeff)
}

/// Returns `coeffs` without its trailing zeros.
pub(super) fn trim_zeros<F: Field>(coeffs: &[F]) -> &[F] {
    let len = coeffs
        .iter()
        .rposition(|c| !c.is_zero())
        .map_or(0, |i| i + 1);
    &coeffs[..len]
}

pub(super) fn add_coeffs<F: Field>(lhs: &[F], rhs: &[F]) -> Vec<F> {
    lhs.iter()
        .zip_longest(rhs)
        .map(|pair| match pair {
            EitherOrBoth::Both(&a, &b) => a + b,
            EitherOrBoth::Left(&a) => a,
            EitherOrBoth::Right(&b) => b,
        })
        .collect()
}

pub(super) fn sub_coeffs<F: Field>(lhs: &[F], rhs: &[F]) -> Vec<F> {
    lhs.iter()
        .zip_longest(rhs)
        .map(|pair| match pair {
            EitherOrBoth::Both(&a, &b) => a - b,
            EitherOrBoth::Left(&a) => a,
            EitherOrBoth::Right(&b) => -b,
        })
        .collect()
}

/// Multiplies two coefficient vectors by schoolbook convolution.
pub(super) fn mul_coeffs<F: Field>(lhs: &[F], rhs: &[F]) -> Vec<F> {
    if lhs.is_empty() || rhs.is_empty() {
        return vec![];
    }

    let mut res = vec![F::zero(); lhs.len() + rhs.len() - 1];
    for (i, &coeff_a) in lhs.iter().enumerate() {
        for (j, &coeff_b) in rhs.iter().enumerate() {
            res[i + j] += coeff_a * coeff_b;
        }
    }
    res
}

/// Long division of `num` by `den`, returning `(quotient, remainder)`.
///
/// The remainder has fewer coefficients than the trimmed divisor.
pub(super) fn div_rem_coeffs<F: Field>(
    num: &[F],
    den: &[F],
) -> Result<(Vec<F>, Vec<F>), PolyError> {
    let den = trim_zeros(den);
    let Some(&lead) = den.last() else {
        return Err(PolyError::DivisionByZero);
    };
    if num.len() < den.len() {
        return Ok((vec![F::zero()], num.to_vec()));
    }

    let lead_inv = lead.inverse();
    let mut rem = num.to_vec();
    let mut quotient = vec![F::zero(); num.len() - den.len() + 1];
    for i in (0..quotient.len()).rev() {
        let coeff = rem[i + den.len() - 1] * lead_inv;
        if coeff.is_zero() {
            continue;
        }
        quotient[i] = coeff;
        for (j, &d) in den.iter().enumerate() {
            rem[i + j] -= coeff * d;
        }
    }
    rem.truncate(den.len() - 1);
    Ok((quotient, rem))
}

/// Returns the domain of size `n` as raw integers, checking it is usable by the FFT.
pub(super) fn fft_domain<F: Field>(n: usize) -> Result<Vec<u64>, PolyError> {
    if !n.is_power_of_two() || !F::supports_domain(n) {
        return Err(PolyError::InvalidDomainSize { size: n });
    }
    Ok(F::roots_of_unity(n).iter().map(|r| r.to_raw()).collect())
}
