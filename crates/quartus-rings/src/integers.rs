//! The ring of integers Z.

use crate::traits::{CommutativeRing, EuclideanDomain, IntegralDomain, OrderedRing, Ring};
use quartus_integers::Integer;

/// The ring of integers.
///
/// A wrapper around `quartus_integers::Integer` implementing the algebraic
/// traits so integer polynomials can share the generic dense machinery.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(pub Integer);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(Integer::new(value))
    }

    /// Returns the inner Integer.
    #[must_use]
    pub fn into_inner(self) -> Integer {
        self.0
    }

    /// Returns a reference to the inner Integer.
    #[must_use]
    pub fn as_inner(&self) -> &Integer {
        &self.0
    }
}

impl Ring for Z {
    fn zero() -> Self {
        Self(Integer::new(0))
    }

    fn one() -> Self {
        Self(Integer::new(1))
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

impl CommutativeRing for Z {}
impl IntegralDomain for Z {}

impl EuclideanDomain for Z {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        let q = self.0.clone() / &other.0;
        let r = self.0.clone() % &other.0;
        (Self(q), Self(r))
    }

    fn gcd(&self, other: &Self) -> Self {
        Self(self.0.gcd(&other.0))
    }
}

impl OrderedRing for Z {
    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn signum(&self) -> i8 {
        self.0.signum()
    }
}

impl std::ops::Add for Z {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Z {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Z {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Z {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Integer> for Z {
    fn from(value: Integer) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Z {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
