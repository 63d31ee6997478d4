//! Univariate polynomials held either as coefficients or as evaluations over a subgroup of roots
//! of unity.

use std::fmt::Display;

use thiserror::Error;

mod eval;
mod interpolation;
mod polynomial;
mod utils;

pub use interpolation::InterpolationPoly;
pub use polynomial::Polynomial;
pub use utils::horner_eval;

/// Representation of a [`Polynomial`]'s values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Basis {
    /// `values[i]` is the coefficient of `X^i`.
    Monomial,
    /// `values[i]` is the evaluation at `ω^i`, where `ω` generates the subgroup of order
    /// `values.len()`.
    Lagrange,
}

impl Display for Basis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Basis::Monomial => write!(f, "monomial"),
            Basis::Lagrange => write!(f, "lagrange"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyError {
    #[error("expected a polynomial in {expected} basis, got {actual}")]
    BasisMismatch { expected: Basis, actual: Basis },
    #[error("length mismatch (lhs {lhs}, rhs {rhs})")]
    LengthMismatch { lhs: usize, rhs: usize },
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("polynomial division has a nonzero remainder")]
    InexactDivision,
    #[error("division by zero")]
    DivisionByZero,
    #[error("no evaluation domain of size {size}")]
    InvalidDomainSize { size: usize },
    #[error("interpolation points {first} and {second} coincide")]
    DuplicatePoint { first: usize, second: usize },
}
