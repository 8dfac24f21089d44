//! Failure conditions for vector and hyperplane operations.

use thiserror::Error;

/// Errors raised by vector and hyperplane operations.
///
/// Every variant is a local, synchronous failure signal; nothing here is
/// transient or retryable. Callers match structurally, never on message
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A vector was constructed from an empty coordinate list.
    #[error("the coordinates must be nonempty")]
    EmptyVector,

    /// A binary operation was attempted between operands of different
    /// dimensions.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Dimension of the left operand.
        left: usize,
        /// Dimension of the right operand.
        right: usize,
    },

    /// Normalization or angle computation was attempted on a zero vector.
    #[error("cannot normalize zero vector")]
    ZeroVector,

    /// Projection onto a zero basis vector is undefined.
    #[error("no unique parallel component")]
    NoUniqueParallelComponent,

    /// Orthogonal decomposition against a zero basis vector is undefined.
    #[error("no unique orthogonal component")]
    NoUniqueOrthogonalComponent,

    /// The cross product is only defined for 2D and 3D vectors.
    #[error("cross product is only defined in 2 or 3 dimensions, got {dim}")]
    CrossProductDimension {
        /// Dimension of the offending operand.
        dim: usize,
    },

    /// A hyperplane was built with insufficient arguments.
    #[error("either a normal vector or a nonzero dimension must be provided")]
    InvalidConstruction,
}
