//! Cantor-Zassenhaus equal-degree splitting over F_p.
//!
//! A probabilistic method for the final pipeline stage: breaking a block
//! of known-degree irreducible factors apart. For a block `f` whose
//! irreducible factors all have degree `d`, a random `r` with
//! `deg r < deg f` satisfies `r^((p^d - 1)/2) ≡ ±1` independently modulo
//! each factor, so `gcd(f, r^((p^d - 1)/2) - 1)` is a proper divisor with
//! probability about 1/2 per trial.
//!
//! The quadratic-residue exponent degenerates for p = 2; blocks over F_2
//! that actually need splitting exhaust their budget. Distinct-degree
//! blocks over F_2 that are already irreducible are unaffected.

use quartus_integers::modular::random_residue;
use quartus_integers::Integer;
use quartus_poly::ModPoly;
use rand::Rng;

use crate::error::FactorError;

/// What to do when the random trial budget runs out before a block splits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OnExhaustion {
    /// Fail loudly with [`FactorError::UnresolvedFactorization`].
    #[default]
    Error,
    /// Emit the unsplit block as if it were a factor, and record it in
    /// [`CantorZassenhausResult::unresolved`] so the caller can tell.
    AcceptUnsplit,
}

/// Tuning knobs for equal-degree splitting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitOptions {
    /// Random trials per block before giving up. Default 50.
    pub max_trials: usize,
    /// Policy when the budget is exhausted.
    pub on_exhaustion: OnExhaustion,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            max_trials: 50,
            on_exhaustion: OnExhaustion::Error,
        }
    }
}

/// Outcome of equal-degree splitting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CantorZassenhausResult {
    /// Monic factors of the common degree (plus any accepted unsplit
    /// blocks under [`OnExhaustion::AcceptUnsplit`]).
    pub factors: Vec<ModPoly>,
    /// Total number of random trials consumed.
    pub attempts: usize,
    /// Blocks that exhausted the budget without splitting. Empty under
    /// [`OnExhaustion::Error`], which fails instead.
    pub unresolved: Vec<ModPoly>,
}

/// Splits a product of degree-`d` irreducible polynomials into its
/// factors.
///
/// The input must be a monic squarefree product of irreducible
/// polynomials all of degree `d`, as produced by
/// [`distinct_degree_factorization`](crate::distinct_degree::distinct_degree_factorization).
/// The RNG is injected so callers can fix a seed for reproducible runs.
///
/// # Errors
///
/// Returns [`FactorError::UnresolvedFactorization`] when a block fails to
/// split within the budget under [`OnExhaustion::Error`], and propagates
/// [`FactorError::Poly`] from the underlying arithmetic.
pub fn equal_degree_split<R: Rng + ?Sized>(
    f: &ModPoly,
    d: usize,
    rng: &mut R,
    options: &SplitOptions,
) -> Result<CantorZassenhausResult, FactorError> {
    let p = f.modulus().clone();
    let monic = f.make_monic()?;

    let mut result = CantorZassenhausResult {
        factors: Vec::new(),
        attempts: 0,
        unresolved: Vec::new(),
    };

    if monic.is_zero() || monic.degree() == 0 {
        return Ok(result);
    }

    // (p^d - 1) / 2, an arbitrary-precision exponent
    let exp = (p.pow(d as u32) - Integer::new(1)) / Integer::new(2);
    let one = ModPoly::one(p.clone());

    let mut stack = vec![monic];

    while let Some(cur) = stack.pop() {
        if cur.degree() == d {
            result.factors.push(cur);
            continue;
        }

        let mut split = None;

        for _ in 0..options.max_trials {
            result.attempts += 1;

            let r = random_poly_below(rng, cur.degree(), &p);
            if r.is_zero() {
                continue;
            }

            let power = r.pow_mod(&exp, &cur)?;
            let candidate = cur.gcd(&power.sub(&one))?;

            if candidate.degree() > 0 && candidate.degree() < cur.degree() {
                let cofactor = cur.div_rem(&candidate)?.0;
                split = Some((candidate.make_monic()?, cofactor.make_monic()?));
                break;
            }
        }

        match split {
            Some((a, b)) => {
                stack.push(a);
                stack.push(b);
            }
            None => match options.on_exhaustion {
                OnExhaustion::Error => return Err(FactorError::UnresolvedFactorization),
                OnExhaustion::AcceptUnsplit => {
                    result.unresolved.push(cur.clone());
                    result.factors.push(cur);
                }
            },
        }
    }

    Ok(result)
}

/// Draws a random polynomial of degree below `bound` with uniform
/// coefficients in `[0, p)`.
fn random_poly_below<R: Rng + ?Sized>(rng: &mut R, bound: usize, p: &Integer) -> ModPoly {
    let coeffs = (0..bound).map(|_| random_residue(rng, p)).collect();
    ModPoly::new(coeffs, p.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn poly(coeffs: &[i64], p: i64) -> ModPoly {
        ModPoly::new(
            coeffs.iter().map(|&n| Integer::new(n)).collect(),
            Integer::new(p),
        )
    }

    #[test]
    fn test_splits_two_roots() {
        // x^2 + 1 = (x + 2)(x + 3) over F_5
        let f = poly(&[1, 0, 1], 5);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let result = equal_degree_split(&f, 1, &mut rng, &SplitOptions::default()).unwrap();

        let mut factors = result.factors.clone();
        factors.sort_by_key(|g| g.coeff(0).to_i64());
        assert_eq!(factors, vec![poly(&[2, 1], 5), poly(&[3, 1], 5)]);
        assert!(result.unresolved.is_empty());
        assert!(result.attempts >= 1);
    }

    #[test]
    fn test_already_irreducible() {
        // degree equals d: accepted without consuming randomness
        let f = poly(&[1, 1, 1], 2);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let result = equal_degree_split(&f, 2, &mut rng, &SplitOptions::default()).unwrap();
        assert_eq!(result.factors, vec![poly(&[1, 1, 1], 2)]);
        assert_eq!(result.attempts, 0);
    }

    #[test]
    fn test_splits_three_roots() {
        // x^3 - x = x(x + 1)(x + 2) over F_3
        let f = poly(&[0, -1, 0, 1], 3);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let result = equal_degree_split(&f, 1, &mut rng, &SplitOptions::default()).unwrap();

        let mut factors = result.factors.clone();
        factors.sort_by_key(|g| g.coeff(0).to_i64());
        assert_eq!(
            factors,
            vec![poly(&[0, 1], 3), poly(&[1, 1], 3), poly(&[2, 1], 3)]
        );
    }

    #[test]
    fn test_quartic_into_quadratics() {
        // (x^2 + 2)(x^2 + 3) over F_5, both irreducible
        let a = poly(&[2, 0, 1], 5);
        let b = poly(&[3, 0, 1], 5);
        let f = a.mul(&b);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let result = equal_degree_split(&f, 2, &mut rng, &SplitOptions::default()).unwrap();

        let mut factors = result.factors.clone();
        factors.sort_by_key(|g| g.coeff(0).to_i64());
        assert_eq!(factors, vec![a, b]);
    }

    #[test]
    fn test_exhaustion_errors_by_default() {
        // x^2 + 2 is irreducible over F_5; demanding d = 1 cannot succeed
        let f = poly(&[2, 0, 1], 5);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let err = equal_degree_split(&f, 1, &mut rng, &SplitOptions::default());
        assert_eq!(err, Err(FactorError::UnresolvedFactorization));
    }

    #[test]
    fn test_exhaustion_accept_unsplit() {
        let f = poly(&[2, 0, 1], 5);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let options = SplitOptions {
            on_exhaustion: OnExhaustion::AcceptUnsplit,
            ..SplitOptions::default()
        };

        let result = equal_degree_split(&f, 1, &mut rng, &options).unwrap();
        assert_eq!(result.factors, vec![f.clone()]);
        assert_eq!(result.unresolved, vec![f]);
        assert_eq!(result.attempts, 50);
    }

    #[test]
    fn test_trial_budget_respected() {
        let f = poly(&[2, 0, 1], 5);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let options = SplitOptions {
            max_trials: 5,
            on_exhaustion: OnExhaustion::AcceptUnsplit,
        };

        let result = equal_degree_split(&f, 1, &mut rng, &options).unwrap();
        assert_eq!(result.attempts, 5);
    }

    #[test]
    fn test_constant_block_is_empty() {
        let f = poly(&[3], 5);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let result = equal_degree_split(&f, 1, &mut rng, &SplitOptions::default()).unwrap();
        assert!(result.factors.is_empty());
    }
}
