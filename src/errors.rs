//! Input-validation and evaluation errors

use crate::float_types::Real;

/// Everything that can go wrong while sampling a function or assembling
/// the mesh buffers.
///
/// Sampling is deterministic, so none of these are worth retrying; the
/// builder never returns partial buffers alongside an error.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Grid order below the minimum needed to form a single cell.
    /// `order == 1` would divide by zero when computing the step size.
    #[error("grid order must be at least 2, got {0}")]
    OrderTooSmall(usize),

    /// A grid row's length disagrees with the declared order.
    #[error("grid row {row} has length {len}, expected {expected}")]
    RaggedRow { expected: usize, row: usize, len: usize },

    /// A grid built at one order was handed to a builder configured for another.
    #[error("sample grid order {got} does not match builder order {expected}")]
    OrderMismatch { expected: usize, got: usize },

    /// Domain or range bounds contain a NaN or infinity.
    #[error("bounds [{min}, {max}] are not finite")]
    NonFiniteBounds { min: Real, max: Real },

    /// A texture scale divisor that would produce non-finite or mirrored UVs.
    #[error("texture scale must be finite and positive, got {0}")]
    InvalidUvScale(Real),

    /// The value function produced a NaN or infinity at a sampled point.
    #[error("sampled value at ({x}, {z}) is not finite")]
    NonFiniteSample { x: Real, z: Real },

    /// A pre-computed grid contains a NaN or infinity at the given indices.
    #[error("grid value at row {row}, column {col} is not finite")]
    NonFiniteValue { row: usize, col: usize },

    /// The value function failed outright; the offending sample coordinate
    /// is carried for diagnosis.
    #[error("value function failed at ({x}, {z})")]
    Evaluation {
        x: Real,
        z: Real,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
