//! Polynomial arithmetic over prime fields, in coefficient and evaluation form.
//!
//! A [`Polynomial`](core::poly::Polynomial) is either a coefficient vector (monomial basis) or a
//! vector of evaluations over a multiplicative subgroup of roots of unity (Lagrange basis). The
//! FFT moves between the two. [`InterpolationPoly`](core::poly::InterpolationPoly) builds
//! polynomials through arbitrary points.
pub mod core;
