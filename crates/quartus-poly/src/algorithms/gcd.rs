//! Euclidean division and gcd over field coefficients.

use quartus_rings::traits::{Field, Ring};

use crate::dense::DensePoly;
use crate::error::PolyError;

/// Normalizes a polynomial to have leading coefficient 1.
///
/// The zero polynomial is returned unchanged.
#[must_use]
pub fn make_monic<F: Field>(f: &DensePoly<F>) -> DensePoly<F> {
    if f.is_zero() {
        return f.clone();
    }

    let lead_inv = f
        .leading_coeff()
        .inv()
        .expect("leading coefficient of a nonzero polynomial is invertible");
    f.scale(&lead_inv)
}

/// Divides polynomial `a` by `b`, returning `(quotient, remainder)` with
/// `a = quotient*b + remainder` and `deg(remainder) < deg(b)` (or a zero
/// remainder).
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZeroPolynomial`] if `b` is zero.
pub fn poly_div_rem<F: Field>(
    a: &DensePoly<F>,
    b: &DensePoly<F>,
) -> Result<(DensePoly<F>, DensePoly<F>), PolyError> {
    if b.is_zero() {
        return Err(PolyError::DivisionByZeroPolynomial);
    }

    if a.is_zero() || a.degree() < b.degree() {
        return Ok((DensePoly::zero(), a.clone()));
    }

    let lead_inv = b
        .leading_coeff()
        .inv()
        .expect("leading coefficient of a nonzero polynomial is invertible");

    let mut quotient = vec![F::zero(); a.degree() - b.degree() + 1];
    let mut remainder = a.coeffs().to_vec();

    // Scratch-buffer long division; only the freshly built values escape.
    while remainder.len() >= b.coeffs().len() {
        let shift = remainder.len() - b.coeffs().len();
        let q = remainder.last().expect("remainder is non-empty").clone() * lead_inv.clone();

        quotient[shift] = q.clone();

        for (i, bc) in b.coeffs().iter().enumerate() {
            remainder[shift + i] = remainder[shift + i].clone() - q.clone() * bc.clone();
        }

        while remainder.len() > 1 && remainder.last().is_some_and(Ring::is_zero) {
            remainder.pop();
        }

        if remainder.last().is_some_and(Ring::is_zero) {
            break;
        }
    }

    Ok((DensePoly::new(quotient), DensePoly::new(remainder)))
}

/// Computes the remainder of `a` divided by `b`.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZeroPolynomial`] if `b` is zero.
pub fn poly_rem<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> Result<DensePoly<F>, PolyError> {
    poly_div_rem(a, b).map(|(_, r)| r)
}

/// Computes the gcd of two polynomials by the Euclidean algorithm, with
/// the result normalized to be monic.
///
/// `gcd(0, 0) = 0` and `gcd(f, 0) = monic(f)`.
#[must_use]
pub fn poly_gcd<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> DensePoly<F> {
    let mut p = a.clone();
    let mut q = b.clone();

    while !q.is_zero() {
        let r = poly_rem(&p, &q).expect("divisor is nonzero inside the Euclidean loop");
        p = q;
        q = r;
    }

    make_monic(&p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartus_rings::rationals::Q;

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| Q::from_integer(n)).collect())
    }

    #[test]
    fn test_div_rem_exact() {
        // x^2 + 3x + 2 = (x + 1)(x + 2)
        let f = poly(&[2, 3, 1]);
        let g = poly(&[1, 1]);

        let (q, r) = poly_div_rem(&f, &g).unwrap();
        assert_eq!(q, poly(&[2, 1]));
        assert!(r.is_zero());
    }

    #[test]
    fn test_div_rem_with_remainder() {
        // x^3 + 1 = (x^2 - x + 1)(x + 1), so x^3 + 2 leaves remainder 1
        let f = poly(&[2, 0, 0, 1]);
        let g = poly(&[1, 1]);

        let (q, r) = poly_div_rem(&f, &g).unwrap();
        assert_eq!(f, q.mul(&g).add(&r));
        assert_eq!(r, poly(&[1]));
    }

    #[test]
    fn test_div_by_zero() {
        let f = poly(&[1, 1]);
        assert_eq!(
            poly_div_rem(&f, &DensePoly::zero()),
            Err(PolyError::DivisionByZeroPolynomial)
        );
    }

    #[test]
    fn test_gcd() {
        // gcd((x+1)(x+2), (x+1)(x+3)) = x + 1
        let f = poly(&[2, 3, 1]);
        let g = poly(&[3, 4, 1]);
        assert_eq!(poly_gcd(&f, &g), poly(&[1, 1]));
    }

    #[test]
    fn test_gcd_monic_normalization() {
        // gcd(2x + 2, 4x + 4) = x + 1
        let f = poly(&[2, 2]);
        let g = poly(&[4, 4]);
        assert_eq!(poly_gcd(&f, &g), poly(&[1, 1]));
    }

    #[test]
    fn test_gcd_zero_cases() {
        let f = poly(&[2, 4]);
        assert_eq!(poly_gcd(&f, &DensePoly::zero()), poly(&[1, 2]).scale(&Q::new(1, 2)));
        assert!(poly_gcd::<Q>(&DensePoly::zero(), &DensePoly::zero()).is_zero());
    }
}
