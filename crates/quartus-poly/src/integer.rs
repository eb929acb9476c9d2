//! Utilities for polynomials over Z.
//!
//! Content and primitive part in the Gauss sense, the exact lift into Q,
//! and reduction modulo a prime into [`ModPoly`].

use num_traits::{One, Zero};
use quartus_integers::{modular, Integer, Rational};
use quartus_rings::integers::Z;
use quartus_rings::rationals::Q;

use crate::dense::DensePoly;
use crate::modp::ModPoly;

/// Computes the content: the gcd of the absolute values of all
/// coefficients.
///
/// The zero polynomial has content 1 so that [`primitive_part`] is total.
#[must_use]
pub fn content(f: &DensePoly<Z>) -> Integer {
    if f.is_zero() {
        return Integer::one();
    }

    let mut g = Integer::zero();
    for c in f.coeffs() {
        g = g.gcd(c.as_inner());
        if g.is_one() {
            break;
        }
    }

    g
}

/// Divides out the content, leaving a primitive polynomial.
#[must_use]
pub fn primitive_part(f: &DensePoly<Z>) -> DensePoly<Z> {
    let c = content(f);
    DensePoly::new(
        f.coeffs()
            .iter()
            .map(|z| Z(z.as_inner().clone() / &c))
            .collect(),
    )
}

/// Lifts an integer polynomial into Q coefficient-wise.
#[must_use]
pub fn to_rational(f: &DensePoly<Z>) -> DensePoly<Q> {
    DensePoly::new(
        f.coeffs()
            .iter()
            .map(|z| Q(Rational::from_integer(z.as_inner().clone())))
            .collect(),
    )
}

/// Reduces an integer polynomial modulo `p`, canonicalizing every
/// coefficient into `[0, p)`.
///
/// `p` must be prime for the resulting [`ModPoly`] to sit over a field;
/// this is the caller's obligation, checkable via [`ModPoly::checked`].
#[must_use]
pub fn reduce_mod_prime(f: &DensePoly<Z>, p: &Integer) -> ModPoly {
    ModPoly::new(
        f.coeffs()
            .iter()
            .map(|z| modular::canonical(z.as_inner(), p))
            .collect(),
        p.clone(),
    )
}
