//! Dense polynomials over F_p with a runtime prime modulus.
//!
//! Unlike [`DensePoly`](crate::dense::DensePoly), the modulus is a value
//! carried by the polynomial, so the prime can be chosen at runtime and be
//! arbitrarily large. Coefficients are canonical residues in `[0, p)`.
//!
//! Primality of the modulus is a caller obligation. [`ModPoly::new`]
//! trusts it; [`ModPoly::checked`] screens it with a Miller-Rabin test.
//! Over a composite modulus the field operations surface
//! [`PolyError::NotInvertible`] as soon as a non-unit leading coefficient
//! needs inverting.

use num_traits::{One, Zero};
use quartus_integers::modular::{canonical, is_probable_prime, mod_inverse};
use quartus_integers::Integer;

use crate::error::PolyError;

/// A dense univariate polynomial over F_p.
///
/// Coefficients ascend by degree with no trailing zeros; the zero
/// polynomial is the single-element `[0]`. Value type: operations return
/// new polynomials.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ModPoly {
    /// Canonical residues in `[0, p)`, ascending by degree.
    coeffs: Vec<Integer>,
    /// The (prime) modulus.
    modulus: Integer,
}

impl ModPoly {
    /// Creates a polynomial from coefficients, canonicalizing each into
    /// `[0, p)` and stripping trailing zeros.
    ///
    /// The modulus must be prime for field semantics; this constructor
    /// does not verify it (see [`Self::checked`]).
    ///
    /// # Panics
    ///
    /// Panics if the modulus is not positive.
    #[must_use]
    pub fn new(coeffs: Vec<Integer>, modulus: Integer) -> Self {
        let mut coeffs: Vec<Integer> = coeffs
            .iter()
            .map(|c| canonical(c, &modulus))
            .collect();

        while coeffs.len() > 1 && coeffs.last().is_some_and(Zero::is_zero) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(Integer::zero());
        }

        Self { coeffs, modulus }
    }

    /// Creates a polynomial after screening the modulus for primality.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CompositeModulus`] if the Miller-Rabin screen
    /// rejects the modulus.
    pub fn checked(coeffs: Vec<Integer>, modulus: Integer) -> Result<Self, PolyError> {
        if !is_probable_prime(&modulus) {
            return Err(PolyError::CompositeModulus(modulus));
        }
        Ok(Self::new(coeffs, modulus))
    }

    /// Creates the zero polynomial over F_p.
    #[must_use]
    pub fn zero(modulus: Integer) -> Self {
        Self {
            coeffs: vec![Integer::zero()],
            modulus,
        }
    }

    /// Creates the constant polynomial 1 over F_p.
    #[must_use]
    pub fn one(modulus: Integer) -> Self {
        Self::new(vec![Integer::one()], modulus)
    }

    /// Creates a constant polynomial over F_p.
    #[must_use]
    pub fn constant(c: Integer, modulus: Integer) -> Self {
        Self::new(vec![c], modulus)
    }

    /// Creates the polynomial x over F_p.
    #[must_use]
    pub fn x(modulus: Integer) -> Self {
        Self::new(vec![Integer::zero(), Integer::one()], modulus)
    }

    /// Creates the monomial c * x^n over F_p.
    #[must_use]
    pub fn monomial(c: Integer, n: usize, modulus: Integer) -> Self {
        let mut coeffs = vec![Integer::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs, modulus)
    }

    /// Returns the degree.
    ///
    /// The zero polynomial reports degree 0; use [`Self::is_zero`] to
    /// distinguish it from a nonzero constant.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &Integer {
        self.coeffs.last().expect("coefficient vector is never empty")
    }

    /// Returns the coefficient of x^i (zero beyond the degree).
    #[must_use]
    pub fn coeff(&self, i: usize) -> Integer {
        self.coeffs.get(i).cloned().unwrap_or_else(Integer::zero)
    }

    /// Returns all coefficients, ascending by degree.
    #[must_use]
    pub fn coeffs(&self) -> &[Integer] {
        &self.coeffs
    }

    /// Returns the modulus.
    #[must_use]
    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    /// Evaluates at a point using Horner's method, reducing mod p.
    #[must_use]
    pub fn eval(&self, x: &Integer) -> Integer {
        let x = canonical(x, &self.modulus);
        let mut result = Integer::zero();
        for c in self.coeffs.iter().rev() {
            result = canonical(&(result * &x + c), &self.modulus);
        }
        result
    }

    fn assert_same_modulus(&self, other: &Self) {
        debug_assert_eq!(
            self.modulus, other.modulus,
            "mixed moduli in ModPoly arithmetic"
        );
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.assert_same_modulus(other);

        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);
        for i in 0..len {
            result.push(self.coeff(i) + other.coeff(i));
        }

        Self::new(result, self.modulus.clone())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.assert_same_modulus(other);

        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);
        for i in 0..len {
            result.push(self.coeff(i) - other.coeff(i));
        }

        Self::new(result, self.modulus.clone())
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(
            self.coeffs.iter().map(|c| -c.clone()).collect(),
            self.modulus.clone(),
        )
    }

    /// Multiplies two polynomials (schoolbook), reducing mod p.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        self.assert_same_modulus(other);

        if self.is_zero() || other.is_zero() {
            return Self::zero(self.modulus.clone());
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![Integer::zero(); n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                let prod = canonical(&(a * b), &self.modulus);
                result[i + j] = canonical(&(result[i + j].clone() + prod), &self.modulus);
            }
        }

        Self::new(result, self.modulus.clone())
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &Integer) -> Self {
        Self::new(
            self.coeffs.iter().map(|x| x * c).collect(),
            self.modulus.clone(),
        )
    }

    /// Computes the formal derivative.
    ///
    /// In characteristic p the derivative of x^p is zero, so a nonzero
    /// polynomial can have a zero derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero(self.modulus.clone());
        }

        let mut result = Vec::with_capacity(self.coeffs.len() - 1);
        for (i, c) in self.coeffs.iter().skip(1).enumerate() {
            result.push(c.clone() * Integer::from(i as u64 + 1));
        }

        Self::new(result, self.modulus.clone())
    }

    /// Normalizes to a monic polynomial.
    ///
    /// The zero polynomial is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NotInvertible`] if the leading coefficient has
    /// no inverse mod p (possible only when the modulus is composite).
    pub fn make_monic(&self) -> Result<Self, PolyError> {
        if self.is_zero() {
            return Ok(self.clone());
        }

        let lead_inv =
            mod_inverse(self.leading_coeff(), &self.modulus).ok_or_else(|| {
                PolyError::NotInvertible {
                    value: self.leading_coeff().clone(),
                    modulus: self.modulus.clone(),
                }
            })?;

        Ok(self.scale(&lead_inv))
    }

    /// Divides by `other`, returning `(quotient, remainder)` with
    /// `self = quotient*other + remainder` and
    /// `deg(remainder) < deg(other)` (or a zero remainder).
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZeroPolynomial`] if `other` is zero,
    /// or [`PolyError::NotInvertible`] if its leading coefficient has no
    /// inverse mod p.
    pub fn div_rem(&self, other: &Self) -> Result<(Self, Self), PolyError> {
        self.assert_same_modulus(other);

        if other.is_zero() {
            return Err(PolyError::DivisionByZeroPolynomial);
        }

        if self.is_zero() || self.degree() < other.degree() {
            return Ok((Self::zero(self.modulus.clone()), self.clone()));
        }

        let lead_inv =
            mod_inverse(other.leading_coeff(), &self.modulus).ok_or_else(|| {
                PolyError::NotInvertible {
                    value: other.leading_coeff().clone(),
                    modulus: self.modulus.clone(),
                }
            })?;

        let mut quotient = vec![Integer::zero(); self.degree() - other.degree() + 1];
        let mut remainder = self.coeffs.clone();

        while remainder.len() >= other.coeffs.len() {
            let shift = remainder.len() - other.coeffs.len();
            let lead = remainder.last().expect("remainder is non-empty");
            let q = canonical(&(lead * &lead_inv), &self.modulus);

            quotient[shift] = q.clone();

            for (i, bc) in other.coeffs.iter().enumerate() {
                let delta = canonical(&(q.clone() * bc), &self.modulus);
                remainder[shift + i] =
                    canonical(&(remainder[shift + i].clone() - delta), &self.modulus);
            }

            while remainder.len() > 1 && remainder.last().is_some_and(Zero::is_zero) {
                remainder.pop();
            }

            if remainder.last().is_some_and(Zero::is_zero) {
                break;
            }
        }

        Ok((
            Self::new(quotient, self.modulus.clone()),
            Self::new(remainder, self.modulus.clone()),
        ))
    }

    /// Computes the remainder of division by `other`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::div_rem`].
    pub fn rem(&self, other: &Self) -> Result<Self, PolyError> {
        self.div_rem(other).map(|(_, r)| r)
    }

    /// Computes the monic gcd by the Euclidean algorithm.
    ///
    /// `gcd(0, 0) = 0` and `gcd(f, 0) = monic(f)`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NotInvertible`] if a leading coefficient fails
    /// to invert (composite modulus).
    pub fn gcd(&self, other: &Self) -> Result<Self, PolyError> {
        self.assert_same_modulus(other);

        let mut a = self.clone();
        let mut b = other.clone();

        while !b.is_zero() {
            let r = a.rem(&b)?;
            a = b;
            b = r;
        }

        a.make_monic()
    }

    /// Computes `self^exp mod modulus_poly` by repeated squaring over an
    /// arbitrary-precision exponent.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZeroPolynomial`] if `modulus_poly`
    /// is zero, or [`PolyError::NotInvertible`] from the inner reductions.
    ///
    /// # Panics
    ///
    /// Panics if `exp` is negative.
    pub fn pow_mod(&self, exp: &Integer, modulus_poly: &Self) -> Result<Self, PolyError> {
        self.assert_same_modulus(modulus_poly);
        assert!(!exp.is_negative(), "exponent must be non-negative");

        let mut result = Self::one(self.modulus.clone()).rem(modulus_poly)?;
        let mut base = self.rem(modulus_poly)?;

        for i in 0..exp.bit_len() {
            if exp.bit(i) {
                result = result.mul(&base).rem(modulus_poly)?;
            }
            base = base.mul(&base).rem(modulus_poly)?;
        }

        Ok(result)
    }
}

impl std::fmt::Display for ModPoly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0 (mod {})", self.modulus);
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            let term = match i {
                0 => format!("{c}"),
                1 => format!("{c}*x"),
                _ => format!("{c}*x^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{} (mod {})", terms.join(" + "), self.modulus)
    }
}
