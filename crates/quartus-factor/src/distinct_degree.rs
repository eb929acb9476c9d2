//! Distinct-degree factorization over F_p.
//!
//! Separates a monic squarefree polynomial into blocks whose irreducible
//! factors all share the same degree, by probing with Frobenius iterates:
//! `x^(p^d) - x` is the product of every irreducible polynomial over F_p
//! of degree dividing d.

use quartus_poly::ModPoly;

use crate::error::FactorError;

/// A product of distinct irreducible factors sharing one degree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistinctDegreeFactor {
    /// Monic product of irreducible polynomials of degree `degree`.
    pub factor: ModPoly,
    /// The common degree of the irreducible factors of this block.
    pub degree: usize,
}

/// Computes the distinct-degree factorization of a monic squarefree
/// polynomial.
///
/// Maintains `h = x^(p^d) mod f`, advancing one Frobenius power per
/// round; `gcd(f, h - x)` then peels off the product of all irreducible
/// factors of degree `d`. Once `deg f < 2d` the remainder cannot split
/// further and is itself irreducible.
///
/// The input must be squarefree (see
/// [`squarefree_factorization`](crate::squarefree::squarefree_factorization));
/// repeated factors would end up merged into the wrong block.
///
/// # Errors
///
/// Propagates [`FactorError::Poly`] from gcd, division, and modular
/// exponentiation (composite modulus).
pub fn distinct_degree_factorization(
    f: &ModPoly,
) -> Result<Vec<DistinctDegreeFactor>, FactorError> {
    let mut f = f.make_monic()?;

    if f.is_zero() || f.degree() == 0 {
        return Ok(Vec::new());
    }

    let p = f.modulus().clone();
    let x = ModPoly::x(p.clone());
    let n = f.degree();

    let mut blocks = Vec::new();
    let mut h = x.clone();

    for d in 1..=n {
        if f.degree() < 2 * d {
            break;
        }

        h = h.pow_mod(&p, &f)?;

        let g = f.gcd(&h.sub(&x))?;
        if g.degree() > 0 {
            blocks.push(DistinctDegreeFactor {
                factor: g.clone(),
                degree: d,
            });
            f = f.div_rem(&g)?.0.make_monic()?;
            if f.degree() == 0 {
                break;
            }
            h = h.rem(&f)?;
        }
    }

    if f.degree() > 0 {
        blocks.push(DistinctDegreeFactor {
            degree: f.degree(),
            factor: f,
        });
    }

    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartus_integers::Integer;

    fn poly(coeffs: &[i64], p: i64) -> ModPoly {
        ModPoly::new(
            coeffs.iter().map(|&n| Integer::new(n)).collect(),
            Integer::new(p),
        )
    }

    #[test]
    fn test_all_linear() {
        // x(x + 1)(x + 2) = x^3 - x over F_3 splits completely
        let f = poly(&[0, -1, 0, 1], 3);
        let blocks = distinct_degree_factorization(&f).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].degree, 1);
        assert_eq!(blocks[0].factor, f);
    }

    #[test]
    fn test_irreducible_quadratic() {
        // x^2 + x + 1 has no root in F_2
        let f = poly(&[1, 1, 1], 2);
        let blocks = distinct_degree_factorization(&f).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].degree, 2);
        assert_eq!(blocks[0].factor, f);
    }

    #[test]
    fn test_mixed_degrees() {
        // (x + 1) * (x^2 + x + 1) over F_2
        let linear = poly(&[1, 1], 2);
        let quad = poly(&[1, 1, 1], 2);
        let f = linear.mul(&quad);

        let blocks = distinct_degree_factorization(&f).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].degree, 1);
        assert_eq!(blocks[0].factor, linear);
        assert_eq!(blocks[1].degree, 2);
        assert_eq!(blocks[1].factor, quad);
    }

    #[test]
    fn test_two_roots_one_block() {
        // x^2 + 1 = (x + 2)(x + 3) over F_5: both factors linear, one block
        let f = poly(&[1, 0, 1], 5);
        let blocks = distinct_degree_factorization(&f).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].degree, 1);
        assert_eq!(blocks[0].factor, f);
    }

    #[test]
    fn test_irreducible_over_f5() {
        // x^2 + 2 has no root in F_5 (squares are 0, 1, 4)
        let f = poly(&[2, 0, 1], 5);
        let blocks = distinct_degree_factorization(&f).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].degree, 2);
    }

    #[test]
    fn test_degrees_partition_input() {
        // (x)(x + 1)(x^2 + 2) over F_5
        let f = poly(&[0, 1], 5)
            .mul(&poly(&[1, 1], 5))
            .mul(&poly(&[2, 0, 1], 5));

        let blocks = distinct_degree_factorization(&f).unwrap();

        let total: usize = blocks.iter().map(|b| b.factor.degree()).sum();
        assert_eq!(total, f.degree());

        let mut product = ModPoly::one(Integer::new(5));
        for b in &blocks {
            assert_eq!(b.factor.degree() % b.degree, 0);
            product = product.mul(&b.factor);
        }
        assert_eq!(product, f);
    }

    #[test]
    fn test_blocks_divide_frobenius_product() {
        // A block of degree d must divide x^(p^d) - x: the gcd of the
        // block with the reduced Frobenius difference is the block itself.
        let p = 5i64;
        let f = poly(&[0, 1], p)
            .mul(&poly(&[1, 1], p))
            .mul(&poly(&[2, 0, 1], p));

        for block in distinct_degree_factorization(&f).unwrap() {
            let x = ModPoly::x(Integer::new(p));
            let exp = Integer::new(p).pow(block.degree as u32);
            let frob = x.pow_mod(&exp, &block.factor).unwrap();
            let shared = block.factor.gcd(&frob.sub(&x.rem(&block.factor).unwrap())).unwrap();
            assert_eq!(shared, block.factor);
        }
    }

    #[test]
    fn test_constant_input() {
        assert!(distinct_degree_factorization(&poly(&[4], 5))
            .unwrap()
            .is_empty());
    }
}
