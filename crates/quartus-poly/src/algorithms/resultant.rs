//! Resultants and discriminants via the Sylvester matrix.
//!
//! The resultant of two polynomials is the determinant of their Sylvester
//! matrix, computed here by Gaussian elimination with exact field
//! division. The discriminant is derived from `res(f, f')` with the
//! usual sign and leading-coefficient normalization.

use quartus_rings::traits::Field;

use crate::dense::DensePoly;

/// Builds the Sylvester matrix of `f` and `g`.
///
/// The matrix is `(m + n) x (m + n)` for `m = deg(f)`, `n = deg(g)`:
/// the first `n` rows hold the coefficients of `f` in descending degree
/// order, each row shifted one column right of the previous, followed by
/// `m` rows of `g` laid out the same way.
///
/// # Panics
///
/// Panics if either polynomial is zero.
#[must_use]
pub fn sylvester_matrix<F: Field>(f: &DensePoly<F>, g: &DensePoly<F>) -> Vec<Vec<F>> {
    assert!(
        !f.is_zero() && !g.is_zero(),
        "Sylvester matrix requires nonzero polynomials"
    );

    let m = f.degree();
    let n = g.degree();
    let size = m + n;

    let mut matrix = vec![vec![F::zero(); size]; size];

    for row in 0..n {
        for (j, k) in (0..=m).rev().enumerate() {
            matrix[row][row + j] = f.coeff(k);
        }
    }

    for row in 0..m {
        for (j, k) in (0..=n).rev().enumerate() {
            matrix[n + row][row + j] = g.coeff(k);
        }
    }

    matrix
}

/// Computes the determinant of a square matrix by Gaussian elimination
/// with partial pivoting and exact field division.
#[must_use]
pub fn determinant<F: Field>(mut matrix: Vec<Vec<F>>) -> F {
    let size = matrix.len();
    if size == 0 {
        return F::one();
    }

    let mut det = F::one();

    for col in 0..size {
        let pivot_row = (col..size).find(|&r| !matrix[r][col].is_zero());

        let Some(pivot_row) = pivot_row else {
            return F::zero();
        };

        if pivot_row != col {
            matrix.swap(pivot_row, col);
            det = -det;
        }

        let pivot = matrix[col][col].clone();
        let pivot_inv = pivot
            .inv()
            .expect("pivot was selected to be nonzero");
        det = det * pivot.clone();

        for row in col + 1..size {
            if matrix[row][col].is_zero() {
                continue;
            }

            let factor = matrix[row][col].clone() * pivot_inv.clone();
            for k in col..size {
                let delta = factor.clone() * matrix[col][k].clone();
                matrix[row][k] = matrix[row][k].clone() - delta;
            }
        }
    }

    det
}

/// Computes the resultant of two polynomials.
///
/// Boundary conventions: if either polynomial is zero the resultant is
/// zero; a constant polynomial `c` paired with a polynomial of degree
/// `n` yields `c^n` (so two constants yield 1).
#[must_use]
pub fn resultant<F: Field>(f: &DensePoly<F>, g: &DensePoly<F>) -> F {
    if f.is_zero() || g.is_zero() {
        return F::zero();
    }

    if f.degree() == 0 {
        return f.leading_coeff().clone().pow(g.degree() as u32);
    }

    if g.degree() == 0 {
        return g.leading_coeff().clone().pow(f.degree() as u32);
    }

    determinant(sylvester_matrix(f, g))
}

/// Computes the discriminant:
///
/// `disc(f) = (-1)^(n(n-1)/2) * res(f, f') / lc(f)`
///
/// Constants and the zero polynomial have discriminant 0.
#[must_use]
pub fn discriminant<F: Field>(f: &DensePoly<F>) -> F {
    if f.is_zero() || f.degree() == 0 {
        return F::zero();
    }

    let n = f.degree();
    let res = resultant(f, &f.derivative());

    let lc_inv = f
        .leading_coeff()
        .inv()
        .expect("leading coefficient of a nonzero polynomial is invertible");
    let scaled = res * lc_inv;

    if (n * (n - 1) / 2) % 2 == 1 {
        -scaled
    } else {
        scaled
    }
}
