//! Runtime modular arithmetic.
//!
//! Residue arithmetic with an arbitrary-precision, runtime modulus: the
//! building blocks for polynomials over F_p where p is supplied by the
//! caller rather than baked into the type.

use dashu::integer::UBig;
use num_traits::{One, Zero};
use rand::Rng;

use crate::Integer;

/// Reduces `a` into the canonical residue range `[0, m)`.
///
/// # Panics
///
/// Panics if `m` is not positive.
#[must_use]
pub fn canonical(a: &Integer, m: &Integer) -> Integer {
    assert!(m.signum() > 0, "modulus must be positive");
    let r = a.clone() % m;
    if r.is_negative() {
        r + m
    } else {
        r
    }
}

/// Computes the modular inverse of `a` modulo `m` via the extended
/// Euclidean algorithm.
///
/// Returns `None` when `gcd(a, m) != 1`, i.e. when `a` is not invertible.
#[must_use]
pub fn mod_inverse(a: &Integer, m: &Integer) -> Option<Integer> {
    let a = canonical(a, m);
    if a.is_zero() {
        return None;
    }

    let (g, x, _) = a.extended_gcd(m);
    if !g.is_one() {
        return None;
    }

    Some(canonical(&x, m))
}

/// Computes `base^exp mod m` by square-and-multiply.
///
/// # Panics
///
/// Panics if `exp` is negative or `m` is not positive.
#[must_use]
pub fn mod_pow(base: &Integer, exp: &Integer, m: &Integer) -> Integer {
    assert!(!exp.is_negative(), "exponent must be non-negative");

    if m.is_one() {
        return Integer::zero();
    }

    let mut result = Integer::one();
    let mut square = canonical(base, m);

    for i in 0..exp.bit_len() {
        if exp.bit(i) {
            result = canonical(&(result * &square), m);
        }
        square = canonical(&(square.clone() * &square), m);
    }

    result
}

/// Miller-Rabin probable-prime test with a fixed witness set.
///
/// The witnesses 2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37 make the test
/// deterministic for all n below 3.3 * 10^24; beyond that it is a strong
/// probabilistic screen. Used to make the "p is prime" caller obligation
/// checkable at the field boundary.
#[must_use]
pub fn is_probable_prime(n: &Integer) -> bool {
    const WITNESSES: [i64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    let two = Integer::new(2);
    if *n < two {
        return false;
    }

    for &w in &WITNESSES {
        let w = Integer::new(w);
        if *n == w {
            return true;
        }
        if (n.clone() % &w).is_zero() {
            return false;
        }
    }

    // Write n - 1 = d * 2^s with d odd
    let n_minus_one = n.clone() - Integer::one();
    let mut d = n_minus_one.clone();
    let mut s = 0usize;
    while !d.bit(0) {
        d = d / &two;
        s += 1;
    }

    'witness: for &w in &WITNESSES {
        let mut x = mod_pow(&Integer::new(w), &d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = canonical(&(x.clone() * &x), n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

/// Draws a uniformly random residue in `[0, m)` by rejection sampling.
///
/// # Panics
///
/// Panics if `m` is not positive.
pub fn random_residue<R: Rng + ?Sized>(rng: &mut R, m: &Integer) -> Integer {
    assert!(m.signum() > 0, "modulus must be positive");

    if m.is_one() {
        return Integer::zero();
    }

    let bits = m.bit_len();
    let bytes = bits.div_ceil(8);
    let excess = bytes * 8 - bits;
    let mut buf = vec![0u8; bytes];

    loop {
        rng.fill_bytes(&mut buf);
        // Mask the high bits so the candidate has at most `bits` bits,
        // keeping the acceptance probability above 1/2.
        buf[bytes - 1] &= 0xff >> excess;
        let candidate = Integer::from(dashu::integer::IBig::from(UBig::from_le_bytes(&buf)));
        if candidate < *m {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_canonical() {
        let m = Integer::new(7);
        assert_eq!(canonical(&Integer::new(10), &m), Integer::new(3));
        assert_eq!(canonical(&Integer::new(-3), &m), Integer::new(4));
        assert_eq!(canonical(&Integer::new(0), &m), Integer::new(0));
    }

    #[test]
    fn test_mod_inverse() {
        let p = Integer::new(7);
        // 3 * 5 = 15 ≡ 1 (mod 7)
        assert_eq!(mod_inverse(&Integer::new(3), &p), Some(Integer::new(5)));
        assert_eq!(mod_inverse(&Integer::new(0), &p), None);

        // 4 shares a factor with 8
        assert_eq!(mod_inverse(&Integer::new(4), &Integer::new(8)), None);
    }

    #[test]
    fn test_mod_pow() {
        let p = Integer::new(7);
        // Fermat: 3^6 ≡ 1 (mod 7)
        assert_eq!(
            mod_pow(&Integer::new(3), &Integer::new(6), &p),
            Integer::new(1)
        );
        assert_eq!(
            mod_pow(&Integer::new(3), &Integer::new(0), &p),
            Integer::new(1)
        );
        assert_eq!(
            mod_pow(&Integer::new(2), &Integer::new(10), &Integer::new(1000)),
            Integer::new(24)
        );
    }

    #[test]
    fn test_is_probable_prime() {
        for p in [2i64, 3, 5, 7, 11, 13, 101, 997, 1_000_003] {
            assert!(is_probable_prime(&Integer::new(p)), "{p} is prime");
        }
        for n in [0i64, 1, 4, 9, 91, 561, 1_000_001] {
            assert!(!is_probable_prime(&Integer::new(n)), "{n} is composite");
        }
    }

    #[test]
    fn test_random_residue_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let m = Integer::new(101);
        for _ in 0..200 {
            let r = random_residue(&mut rng, &m);
            assert!(!r.is_negative() && r < m);
        }
    }

    #[test]
    fn test_random_residue_large_modulus() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let m = Integer::from_str_radix("170141183460469231731687303715884105727", 10).unwrap();
        for _ in 0..20 {
            let r = random_residue(&mut rng, &m);
            assert!(!r.is_negative() && r < m);
        }
    }
}
