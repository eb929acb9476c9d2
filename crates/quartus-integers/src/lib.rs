//! # quartus-integers
//!
//! Arbitrary precision arithmetic for the Quartus polynomial engine.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`), always in lowest terms
//! - Runtime modular arithmetic (`modular`): canonical residues, inverses,
//!   modular exponentiation, a Miller-Rabin primality screen, and uniform
//!   residue sampling

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod modular;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
