use thiserror::Error;

use crate::error::{EvalError, InputError, ParseError};

/// Status shown once a plot has been drawn.
pub const STATUS_READY: &str = "Ready...";
/// Status shown when either of the bounds or the function is left empty.
pub const STATUS_EMPTY_FIELD: &str = "Invalid input the function or x min or x max is empty";
/// Status shown when a bound is not numeric.
pub const STATUS_NOT_A_NUMBER: &str = "x min and x max must be numbers";
/// Status shown when the range is empty or inverted.
pub const STATUS_INVALID_RANGE: &str = "x min must be less than x max";
/// Status shown when the step is unusable.
pub const STATUS_INVALID_STEP: &str = "step must be a positive number";
/// Status shown when the range holds too many points for its step.
pub const STATUS_TOO_MANY_SAMPLES: &str = "too many points; increase the step or shrink the range";
/// Status shown for every parse or evaluation failure.
pub const STATUS_INVALID_FUNCTION: &str = "Invalid function";

/// Represents every way a plot request can fail.
///
/// The three families stay distinct so callers and logs can tell them apart,
/// while [`PlotError::status_message`] collapses parse and evaluation failures
/// into the single message users see.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    /// The raw request fields were rejected.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The expression text did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression failed at some sample point.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl PlotError {
    /// Returns the user-facing status message for this error.
    ///
    /// # Example
    /// ```
    /// use fplot::error::{ParseError, PlotError};
    ///
    /// let err = PlotError::from(ParseError::MissingOperand);
    /// assert_eq!(err.status_message(), "Invalid function");
    /// ```
    #[must_use]
    pub const fn status_message(&self) -> &'static str {
        match self {
            Self::Input(InputError::EmptyField) => STATUS_EMPTY_FIELD,
            Self::Input(InputError::NotANumber { .. }) => STATUS_NOT_A_NUMBER,
            Self::Input(InputError::InvalidRange { .. }) => STATUS_INVALID_RANGE,
            Self::Input(InputError::InvalidStep { .. }) => STATUS_INVALID_STEP,
            Self::Input(InputError::TooManySamples { .. }) => STATUS_TOO_MANY_SAMPLES,
            Self::Parse(_) | Self::Eval(_) => STATUS_INVALID_FUNCTION,
        }
    }
}
