//! Property-based tests for dense polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use quartus_integers::Integer;
    use quartus_rings::rationals::Q;

    use crate::algorithms::gcd::{poly_div_rem, poly_gcd};
    use crate::algorithms::resultant::resultant;
    use crate::dense::DensePoly;
    use crate::modp::ModPoly;

    fn q_poly() -> impl Strategy<Value = DensePoly<Q>> {
        prop::collection::vec(-50i64..50i64, 1..6)
            .prop_map(|cs| DensePoly::new(cs.into_iter().map(Q::from_integer).collect()))
    }

    fn nonzero_q_poly() -> impl Strategy<Value = DensePoly<Q>> {
        q_poly().prop_filter("nonzero", |f| !f.is_zero())
    }

    fn fp_poly() -> impl Strategy<Value = ModPoly> {
        prop::collection::vec(0i64..7i64, 1..6).prop_map(|cs| {
            ModPoly::new(cs.into_iter().map(Integer::new).collect(), Integer::new(7))
        })
    }

    proptest! {
        #[test]
        fn poly_add_commutative(f in q_poly(), g in q_poly()) {
            prop_assert_eq!(f.add(&g), g.add(&f));
        }

        #[test]
        fn poly_mul_distributive(f in q_poly(), g in q_poly(), h in q_poly()) {
            prop_assert_eq!(f.mul(&g.add(&h)), f.mul(&g).add(&f.mul(&h)));
        }

        #[test]
        fn poly_mul_degree_additive(f in nonzero_q_poly(), g in nonzero_q_poly()) {
            prop_assert_eq!(f.mul(&g).degree(), f.degree() + g.degree());
        }

        // f = q*g + r with deg r < deg g
        #[test]
        fn poly_division_law(f in q_poly(), g in nonzero_q_poly()) {
            let (q, r) = poly_div_rem(&f, &g).unwrap();
            prop_assert_eq!(q.mul(&g).add(&r), f);
            prop_assert!(r.is_zero() || r.degree() < g.degree());
        }

        #[test]
        fn poly_gcd_symmetric_and_divides(f in q_poly(), g in nonzero_q_poly()) {
            let d = poly_gcd(&f, &g);
            prop_assert_eq!(d.clone(), poly_gcd(&g, &f));
            let (_, r) = poly_div_rem(&g, &d).unwrap();
            prop_assert!(r.is_zero());
            if !f.is_zero() {
                let (_, r) = poly_div_rem(&f, &d).unwrap();
                prop_assert!(r.is_zero());
            }
        }

        // res(f*g, h) = res(f, h) * res(g, h) for nonzero operands
        #[test]
        fn resultant_multiplicative(
            f in nonzero_q_poly(),
            g in nonzero_q_poly(),
            h in nonzero_q_poly(),
        ) {
            prop_assert_eq!(
                resultant(&f.mul(&g), &h),
                resultant(&f, &h) * resultant(&g, &h)
            );
        }

        #[test]
        fn modpoly_division_law(f in fp_poly(), g in fp_poly()) {
            prop_assume!(!g.is_zero());
            let (q, r) = f.div_rem(&g).unwrap();
            prop_assert_eq!(q.mul(&g).add(&r), f);
            prop_assert!(r.is_zero() || r.degree() < g.degree());
        }

        #[test]
        fn modpoly_eval_hom(f in fp_poly(), g in fp_poly(), x in 0i64..7i64) {
            let x = Integer::new(x);
            let lhs = f.mul(&g).eval(&x);
            let rhs = quartus_integers::modular::canonical(
                &(f.eval(&x) * g.eval(&x)),
                f.modulus(),
            );
            prop_assert_eq!(lhs, rhs);
        }
    }
}
