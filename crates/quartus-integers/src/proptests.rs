//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::modular::{canonical, mod_inverse, mod_pow};
    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn small_prime() -> impl Strategy<Value = i64> {
        prop_oneof![Just(2i64), Just(3), Just(5), Just(7), Just(101), Just(997)]
    }

    proptest! {
        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn integer_mul_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_extended_gcd_bezout(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let (g, x, y) = a.extended_gcd(&b);
            prop_assert_eq!(a.clone() * x + b.clone() * y, g.clone());
            prop_assert_eq!(g, a.gcd(&b));
        }

        // Rational exactness: (a/b) + (c/d) equals the cross-multiplied
        // exact sum in lowest terms.
        #[test]
        fn rational_exact_addition(
            a in small_int(),
            b in non_zero_int(),
            c in small_int(),
            d in non_zero_int(),
        ) {
            let sum = Rational::from_i64(a, b) + Rational::from_i64(c, d);
            let expected = Rational::from_i64(a * d + c * b, b * d);
            prop_assert_eq!(sum, expected);
        }

        // gcd(numerator, denominator) = 1 always holds post-construction,
        // and the denominator is positive.
        #[test]
        fn rational_lowest_terms(a in small_int(), b in non_zero_int()) {
            let r = Rational::from_i64(a, b);
            prop_assert!(r.denominator().signum() > 0);
            prop_assert!(r.numerator().gcd(&r.denominator()).is_one());
        }

        #[test]
        fn rational_recip_involution(a in non_zero_int(), b in non_zero_int()) {
            let r = Rational::from_i64(a, b);
            prop_assert!((r.clone() * r.recip()).is_one());
        }

        #[test]
        fn modular_inverse_is_inverse(a in 1i64..1000, p in small_prime()) {
            let p = Integer::new(p);
            let a = canonical(&Integer::new(a), &p);
            if !a.is_zero() {
                let inv = mod_inverse(&a, &p).unwrap();
                prop_assert!(canonical(&(a * inv), &p).is_one());
            }
        }

        #[test]
        fn modular_fermat_little(a in 1i64..1000, p in small_prime()) {
            let p = Integer::new(p);
            let a = canonical(&Integer::new(a), &p);
            if !a.is_zero() {
                let e = p.clone() - Integer::one();
                prop_assert!(mod_pow(&a, &e, &p).is_one());
            }
        }
    }
}
