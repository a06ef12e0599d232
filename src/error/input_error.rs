use thiserror::Error;

/// Represents all errors in the raw fields of a plot request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// The function, x min or x max field was empty.
    #[error("A required field is empty.")]
    EmptyField,
    /// A bound could not be read as a finite number.
    #[error("'{text}' is not a finite number.")]
    NotANumber {
        /// The offending field text.
        text: String,
    },
    /// The lower bound was not strictly below the upper bound.
    #[error("Invalid range: {x_min} is not less than {x_max}.")]
    InvalidRange {
        /// The requested lower bound.
        x_min: f64,
        /// The requested upper bound.
        x_max: f64,
    },
    /// The sampling step was zero, negative or not finite.
    #[error("Invalid step: {step}.")]
    InvalidStep {
        /// The requested step.
        step: f64,
    },
    /// The range and step would produce more points than allowed.
    #[error("Too many sample points; at most {limit} are allowed.")]
    TooManySamples {
        /// The maximum number of points per range.
        limit: usize,
    },
}
