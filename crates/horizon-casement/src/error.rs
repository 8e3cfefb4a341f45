//! Error types for the window layer.
//!
//! Only invalid arguments are reported as errors. Disallowed mode transitions
//! are silent no-ops, clamped values are not errors, and a missing
//! collaborator turns the operation into a no-op.

use thiserror::Error;

/// Errors returned by window operations that reject their arguments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WindowError {
    /// The always-on-top level name is not recognized.
    #[error("invalid window level: {level:?}")]
    InvalidLevel {
        /// The rejected level name.
        level: String,
    },

    /// The resulting window level falls outside the supported range.
    #[error("relativeLevel must be between {min} and {max}")]
    RelativeLevelOutOfRange {
        /// Smallest accepted absolute level.
        min: i64,
        /// Largest accepted absolute level.
        max: i64,
    },

    /// A colour string could not be parsed.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// The creation options could not be interpreted.
    #[error("invalid window options: {0}")]
    InvalidOptions(String),

    /// An icon could not be created.
    #[error(transparent)]
    Icon(#[from] crate::window::IconError),
}

/// Result type for window operations.
pub type WindowResult<T> = Result<T, WindowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_error_display() {
        let err = WindowError::InvalidLevel {
            level: "invalid-level".to_string(),
        };
        assert!(err.to_string().contains("invalid-level"));

        let err = WindowError::RelativeLevelOutOfRange { min: -5, max: 5 };
        assert_eq!(err.to_string(), "relativeLevel must be between -5 and 5");

        let err = WindowError::InvalidColor("#zz".to_string());
        assert!(err.to_string().contains("#zz"));
    }
}
