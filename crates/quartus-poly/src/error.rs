//! Polynomial arithmetic errors.

use quartus_integers::Integer;
use thiserror::Error;

/// Errors raised by polynomial arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// Euclidean division by the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZeroPolynomial,

    /// A modular inverse of an element not coprime to the modulus was
    /// requested. Signals a caller error: non-prime modulus or a logic
    /// defect upstream.
    #[error("{value} is not invertible modulo {modulus}")]
    NotInvertible {
        /// The non-invertible element.
        value: Integer,
        /// The modulus in effect.
        modulus: Integer,
    },

    /// The primality screen rejected the requested modulus.
    #[error("modulus {0} is not prime")]
    CompositeModulus(Integer),
}
