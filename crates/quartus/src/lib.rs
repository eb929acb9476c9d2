//! # Quartus
//!
//! An exact polynomial algebra engine written in Rust.
//!
//! Quartus provides arbitrary-precision rational arithmetic and dense
//! univariate polynomials over Q, Z, and prime fields F_p, with complete
//! randomized factorization over F_p.
//!
//! ## Features
//!
//! - **Arbitrary Precision**: Big integers and exact rationals on `dashu`
//! - **Algebraic Structures**: Ring/field traits with Z and Q instances
//! - **Polynomial Arithmetic**: Dense polynomials, gcd, resultants,
//!   discriminants
//! - **Factorization over F_p**: Squarefree, distinct-degree, and
//!   Cantor-Zassenhaus equal-degree splitting with a runtime prime
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quartus::prelude::*;
//!
//! let p = Integer::new(5);
//! let f = ModPoly::new(vec![Integer::new(1), Integer::new(0), Integer::new(1)], p);
//! let factors = factor(&f)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quartus_factor as factor;
pub use quartus_integers as integers;
pub use quartus_poly as poly;
pub use quartus_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quartus_factor::{factor, factor_with, FactorError, OnExhaustion, SplitOptions};
    pub use quartus_integers::{Integer, Rational};
    pub use quartus_poly::{DensePoly, ModPoly, PolyError};
    pub use quartus_rings::{Field, Ring, Q, Z};
}
