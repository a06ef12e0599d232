use crate::error::EvalError;

/// Returns `true` if `value` is finite and has no fractional part.
///
/// # Example
/// ```
/// use fplot::util::num::is_integer;
///
/// assert!(is_integer(-3.0));
/// assert!(!is_integer(0.5));
/// assert!(!is_integer(f64::INFINITY));
/// ```
#[must_use]
pub fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Passes `result` through if it is finite.
///
/// ## Errors
/// Returns `Err(error())` if `result` is `NaN` or infinite. The error is built
/// lazily, so the happy path allocates nothing.
///
/// ## Example
/// ```
/// use fplot::{error::EvalError, util::num::finite_or};
///
/// assert_eq!(finite_or(2.0, || EvalError::unary("exp", 1.0)), Ok(2.0));
/// assert!(finite_or(f64::INFINITY, || EvalError::unary("exp", 1000.0)).is_err());
/// ```
pub fn finite_or<F>(result: f64, error: F) -> Result<f64, EvalError>
    where F: FnOnce() -> EvalError
{
    if result.is_finite() { Ok(result) } else { Err(error()) }
}
