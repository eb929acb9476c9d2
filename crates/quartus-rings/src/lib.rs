//! # quartus-rings
//!
//! Algebraic structures for the Quartus polynomial engine.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `EuclideanDomain`, `Field`
//! - Concrete coefficient domains: `Z` (integers) and `Q` (rationals)
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── IntegralDomain
//!            └── EuclideanDomain
//!                 └── Field
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod rationals;
pub mod traits;

pub use integers::Z;
pub use rationals::Q;
pub use traits::{EuclideanDomain, Field, OrderedRing, Ring};
