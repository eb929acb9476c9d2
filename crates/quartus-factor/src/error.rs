//! Factorization errors.

use quartus_poly::PolyError;
use thiserror::Error;

/// Errors raised by the factorization pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FactorError {
    /// Equal-degree splitting exhausted its random trial budget without
    /// separating a reducible block.
    #[error("equal-degree splitting exhausted its trial budget")]
    UnresolvedFactorization,

    /// An underlying polynomial operation failed.
    #[error(transparent)]
    Poly(#[from] PolyError),
}
