//! Utilities for polynomials over Q.
//!
//! The exact machinery (division, gcd, resultants) is generic and lives in
//! [`crate::algorithms`]; this module adds the approximate complex Horner
//! evaluation used for display and plotting.

use num_complex::Complex64;
use quartus_rings::rationals::Q;

use crate::dense::DensePoly;

/// Evaluates a rational polynomial at a complex point.
///
/// Coefficients are approximated as `f64` before the Horner loop, so the
/// result is a floating-point approximation. Exact queries should go
/// through [`DensePoly::eval`] instead.
#[must_use]
pub fn eval_complex(f: &DensePoly<Q>, z: Complex64) -> Complex64 {
    let mut result = Complex64::new(0.0, 0.0);
    for c in f.coeffs().iter().rev() {
        result = result * z + Complex64::new(c.as_inner().to_f64(), 0.0);
    }
    result
}
