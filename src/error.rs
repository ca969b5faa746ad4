//! Error types shared across all ground-motion models.

use thiserror::Error;

/// Result alias for model construction and data loading.
pub type ModelResult<T> = Result<T, ModelError>;

/// Unified error type for scenario validation and coefficient loading.
///
/// All variants surface at model construction; once a model is built its
/// evaluation cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A required scenario input violates its declared bound.
    ///
    /// Open-ended bounds are reported as infinities.
    #[error("parameter `{name}` = {value} is out of bounds [{min}, {max}]")]
    ParameterOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A required scenario input was not supplied.
    #[error("required parameter `{name}` was not provided")]
    MissingParameter { name: &'static str },

    /// The coefficient table could not be loaded or is malformed.
    #[error("coefficient table failed to load: {reason}")]
    DataLoad { reason: String },
}

impl ModelError {
    /// Shorthand for a [`ModelError::DataLoad`] with a formatted reason.
    pub fn data_load(reason: impl Into<String>) -> Self {
        ModelError::DataLoad {
            reason: reason.into(),
        }
    }
}
