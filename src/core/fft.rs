//! Radix-2 FFT over canonical integer residues.
//!
//! Works on raw `u64` representatives rather than field elements so that the recursion does not
//! pay for repeated field-element construction. Every value passed in must already be reduced
//! modulo `p`.

use std::iter::zip;

use itertools::Itertools;

/// Replaces `(v0, v1)` with `(v0 + v1 * twid, v0 - v1 * twid)` modulo `p`.
pub fn butterfly(v0: &mut u64, v1: &mut u64, twid: u64, p: u64) {
    let tmp = mul_mod(*v1, twid, p);
    *v1 = sub_mod(*v0, tmp, p);
    *v0 = add_mod(*v0, tmp, p);
}

/// Evaluates the polynomial with coefficients `values` at every point of `roots`.
///
/// `roots` must be the domain in order, i.e. `[1, ω, ω^2, ..]`, with the same length as `values`,
/// and that length must be a power of two. Recurses `log2(values.len())` levels deep.
pub fn fft(values: &[u64], roots: &[u64], p: u64) -> Vec<u64> {
    debug_assert_eq!(values.len(), roots.len());
    if values.len() <= 1 {
        return values.to_vec();
    }

    let half_roots = roots.iter().step_by(2).copied().collect_vec();
    let evens = values.iter().step_by(2).copied().collect_vec();
    let odds = values.iter().skip(1).step_by(2).copied().collect_vec();

    let mut left = fft(&evens, &half_roots, p);
    let mut right = fft(&odds, &half_roots, p);
    for ((l, r), &root) in zip(zip(&mut left, &mut right), roots) {
        butterfly(l, r, root, p);
    }

    left.extend(right);
    left
}

/// Reorders a domain as `[ω^0, ω^-1, ω^-2, ..]`.
///
/// Running [`fft`] over the reordered domain and dividing by its size inverts the transform.
pub fn inverse_domain(roots: &[u64]) -> Vec<u64> {
    roots
        .iter()
        .take(1)
        .chain(roots.iter().skip(1).rev())
        .copied()
        .collect()
}

fn add_mod(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 + b as u128) % p as u128) as u64
}

fn sub_mod(a: u64, b: u64, p: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        p - (b - a)
    }
}

fn mul_mod(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 * b as u128) % p as u128) as u64
}
