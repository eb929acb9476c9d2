//! Polynomial algorithms over field coefficients.
//!
//! - Euclidean division and gcd
//! - Resultants and discriminants via the Sylvester matrix

pub mod gcd;
pub mod resultant;
