//! Squarefree factorization over F_p.
//!
//! Splits a polynomial into pairwise coprime squarefree parts with their
//! multiplicities, the first stage of the factorization pipeline. Built on
//! the gcd-with-derivative refinement loop.
//!
//! In characteristic p the derivative of a polynomial whose exponents are
//! all multiples of p vanishes identically. That case is returned as a
//! single unfactored part with multiplicity 1; no inverse-Frobenius
//! recursion is attempted.

use quartus_poly::ModPoly;

use crate::error::FactorError;

/// A squarefree part of a polynomial together with its multiplicity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquarefreeFactor {
    /// A monic squarefree polynomial.
    pub factor: ModPoly,
    /// The exponent with which it divides the input.
    pub multiplicity: usize,
}

/// Computes the squarefree factorization of a polynomial over F_p.
///
/// The input is normalized to be monic first; the product of the returned
/// parts, each raised to its multiplicity, equals that monic polynomial.
/// Constants (and the zero polynomial) have no squarefree parts and yield
/// an empty list.
///
/// # Errors
///
/// Propagates [`FactorError::Poly`] from the underlying gcd and division
/// steps (composite modulus).
pub fn squarefree_factorization(f: &ModPoly) -> Result<Vec<SquarefreeFactor>, FactorError> {
    let f = f.make_monic()?;

    if f.is_zero() || f.degree() == 0 {
        return Ok(Vec::new());
    }

    let fp = f.derivative();
    if fp.is_zero() {
        // All exponents divisible by p.
        return Ok(vec![SquarefreeFactor {
            factor: f,
            multiplicity: 1,
        }]);
    }

    let g = f.gcd(&fp)?;
    if g.degree() == 0 {
        return Ok(vec![SquarefreeFactor {
            factor: f,
            multiplicity: 1,
        }]);
    }

    let mut parts = Vec::new();
    let mut w = f.div_rem(&g)?.0.make_monic()?;
    let mut v = g;
    let mut multiplicity = 1usize;

    while w.degree() > 0 {
        let h = w.gcd(&v)?;

        if w.degree() > h.degree() {
            let part = w.div_rem(&h)?.0.make_monic()?;
            parts.push(SquarefreeFactor {
                factor: part,
                multiplicity,
            });
        }

        v = v.div_rem(&h)?.0;
        w = h;
        multiplicity += 1;
    }

    // A nontrivial leftover carries the coefficients the derivative lost.
    if v.degree() > 0 {
        parts.push(SquarefreeFactor {
            factor: v.make_monic()?,
            multiplicity,
        });
    }

    Ok(parts)
}
