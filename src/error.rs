//! Error types for the solver.

/// Errors that abort a run.
///
/// None of these are recoverable: every generation depends on the
/// previous one holding valid permutations, so the driver surfaces the
/// first error to the caller and stops.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TspError {
    /// A parameter is outside its valid domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Crossover ran out of filler points from the second parent.
    #[error("exhausted input: needed {needed} filler points, only {available} available")]
    ExhaustedInput { needed: usize, available: usize },
}

impl TspError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        TspError::InvalidArgument(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;
