//! Easing error types

use thiserror::Error;

/// Errors raised by the curve catalog and by [`Tween`](crate::Tween)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EasingError {
    /// Curve name is not in the catalog
    #[error("Unknown easing curve: {0}")]
    UnknownCurve(String),

    /// Stepped before time, begin, change and duration were set
    #[error("Must set properties first: time, begin, change and duration")]
    IncompleteConfiguration,

    /// Reconfiguration called with the wrong number of arguments
    #[error("Expected exactly 4 arguments (time, begin, change, duration), got {got}")]
    MalformedReconfiguration { got: usize },

    /// Reconfiguration argument is not a number
    #[error("Argument {index} is not a number")]
    NonNumericParameter { index: usize },
}

/// Result type for easing operations
pub type Result<T> = std::result::Result<T, EasingError>;
