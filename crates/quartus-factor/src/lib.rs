//! # quartus-factor
//!
//! Polynomial factorization over prime fields for the Quartus engine.
//!
//! This crate provides the classic three-stage pipeline:
//! - **Squarefree factorization**: gcd-with-derivative refinement
//! - **Distinct-degree factorization**: Frobenius-iterate probing
//! - **Cantor-Zassenhaus**: probabilistic equal-degree splitting
//!
//! The top-level entry points live in [`univariate`]; randomized stages
//! take an injected RNG for reproducibility, and [`factor_batch`] runs
//! independent inputs in parallel with rayon.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cantor_zassenhaus;
pub mod distinct_degree;
pub mod error;
pub mod squarefree;
pub mod univariate;

pub use cantor_zassenhaus::{
    equal_degree_split, CantorZassenhausResult, OnExhaustion, SplitOptions,
};
pub use distinct_degree::{distinct_degree_factorization, DistinctDegreeFactor};
pub use error::FactorError;
pub use squarefree::{squarefree_factorization, SquarefreeFactor};
pub use univariate::{factor, factor_batch, factor_with};
