//! The field of rational numbers Q.

use crate::traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, OrderedRing, Ring};
use quartus_integers::Rational;

/// The field of rational numbers.
///
/// A wrapper around `quartus_integers::Rational` implementing the algebraic
/// traits; the coefficient domain of `RationalPolynomial`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::from_i64(num, den))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Rational::from(n))
    }

    /// Returns the inner Rational.
    #[must_use]
    pub fn into_inner(self) -> Rational {
        self.0
    }

    /// Returns a reference to the inner Rational.
    #[must_use]
    pub fn as_inner(&self) -> &Rational {
        &self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(Rational::from(0))
    }

    fn one() -> Self {
        Self(Rational::from(1))
    }

    fn is_zero(&self) -> bool {
        use num_traits::Zero;
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        use num_traits::One;
        self.0.is_one()
    }
}

impl CommutativeRing for Q {}
impl IntegralDomain for Q {}

impl EuclideanDomain for Q {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        // In a field, division is exact
        (Self(self.0.clone() / &other.0), Self::zero())
    }

    fn gcd(&self, other: &Self) -> Self {
        // In a field, gcd of any two non-zero elements is 1
        if self.is_zero() && other.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.recip()))
        }
    }
}

impl OrderedRing for Q {
    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn signum(&self) -> i8 {
        self.0.signum()
    }
}

impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
