//! Complete factorization over F_p.
//!
//! Chains the three stages: squarefree factorization, distinct-degree
//! factorization, and equal-degree splitting. Returns monic irreducible
//! factors repeated according to multiplicity; the leading coefficient of
//! the input is dropped (factorization is up to units).

use quartus_poly::ModPoly;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::cantor_zassenhaus::{equal_degree_split, SplitOptions};
use crate::distinct_degree::distinct_degree_factorization;
use crate::error::FactorError;
use crate::squarefree::squarefree_factorization;

/// Factors a polynomial over F_p into monic irreducible factors, repeated
/// by multiplicity.
///
/// The zero polynomial yields an empty list; a nonzero constant yields
/// its monic normalization, the constant 1. A polynomial with vanishing
/// derivative (every exponent a multiple of p) is returned unfactored as
/// a single entry.
///
/// Seeds a fresh generator from OS entropy; use [`factor_with`] to
/// control the RNG and the splitting policy.
///
/// # Errors
///
/// See [`factor_with`].
pub fn factor(f: &ModPoly) -> Result<Vec<ModPoly>, FactorError> {
    let mut rng = ChaCha8Rng::from_entropy();
    factor_with(f, &mut rng, &SplitOptions::default())
}

/// Factors a polynomial over F_p with an injected RNG and explicit
/// splitting options.
///
/// # Errors
///
/// Returns [`FactorError::UnresolvedFactorization`] if equal-degree
/// splitting exhausts its budget under the default policy, and
/// [`FactorError::Poly`] if the modulus turns out not to support field
/// arithmetic.
pub fn factor_with<R: Rng + ?Sized>(
    f: &ModPoly,
    rng: &mut R,
    options: &SplitOptions,
) -> Result<Vec<ModPoly>, FactorError> {
    if f.is_zero() {
        return Ok(Vec::new());
    }

    let monic = f.make_monic()?;
    if monic.degree() == 0 {
        return Ok(vec![monic]);
    }

    if monic.derivative().is_zero() {
        // Inverse Frobenius is not implemented; hand the block back whole.
        return Ok(vec![monic]);
    }

    let mut factors = Vec::new();

    for part in squarefree_factorization(&monic)? {
        for block in distinct_degree_factorization(&part.factor)? {
            let split = equal_degree_split(&block.factor, block.degree, rng, options)?;
            for irreducible in split.factors {
                for _ in 0..part.multiplicity {
                    factors.push(irreducible.clone());
                }
            }
        }
    }

    Ok(factors)
}

/// Factors independent polynomials in parallel, each with its own seeded
/// generator and default options.
///
/// # Errors
///
/// Fails if any single factorization fails, with that polynomial's error.
pub fn factor_batch(polys: &[ModPoly]) -> Result<Vec<Vec<ModPoly>>, FactorError> {
    polys
        .par_iter()
        .enumerate()
        .map(|(i, f)| {
            let mut rng = ChaCha8Rng::seed_from_u64(i as u64);
            factor_with(f, &mut rng, &SplitOptions::default())
        })
        .collect()
}
