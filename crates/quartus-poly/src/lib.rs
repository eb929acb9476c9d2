//! # quartus-poly
//!
//! Exact dense univariate polynomial arithmetic for the Quartus engine.
//!
//! This crate provides:
//! - `DensePoly<R>`: the generic dense polynomial value type
//! - Euclidean division and gcd over field coefficients
//! - Resultants and discriminants via the Sylvester matrix
//! - Integer-polynomial utilities: content, primitive part, lift to Q,
//!   reduction modulo a prime
//! - `ModPoly`: polynomials over F_p with a runtime prime modulus, the
//!   substrate of the factorization pipeline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;
pub mod error;
pub mod integer;
pub mod modp;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
pub use error::PolyError;
pub use modp::ModPoly;
