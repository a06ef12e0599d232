use crate::{
    ast::Function,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
    util::num::finite_or,
};

/// Returns `true` if `value` lies in the real domain of `function`.
///
/// The domains are the ones of the real-valued math routines:
/// - `asin`, `acos`: `[-1, 1]`
/// - `acosh`: `[1, ∞)`
/// - `atanh`: `(-1, 1)`
/// - `log`, `log10`: `(0, ∞)`
/// - `sqrt`: `[0, ∞)`
/// - every other function: all finite reals
///
/// # Example
/// ```
/// use fplot::{ast::Function, interpreter::evaluator::builtin::in_domain};
///
/// assert!(in_domain(Function::Sqrt, 0.0));
/// assert!(!in_domain(Function::Log, 0.0));
/// assert!(!in_domain(Function::Atanh, 1.0));
/// ```
#[must_use]
pub fn in_domain(function: Function, value: f64) -> bool {
    match function {
        Function::Asin | Function::Acos => (-1.0..=1.0).contains(&value),
        Function::Acosh => value >= 1.0 && value.is_finite(),
        Function::Atanh => value.abs() < 1.0,
        Function::Log | Function::Log10 => value > 0.0 && value.is_finite(),
        Function::Sqrt => value >= 0.0 && value.is_finite(),
        Function::Sin
        | Function::Cos
        | Function::Tan
        | Function::Atan
        | Function::Sinh
        | Function::Cosh
        | Function::Tanh
        | Function::Asinh
        | Function::Exp => value.is_finite(),
    }
}

/// Applies a builtin function to a real value.
///
/// The argument is checked against [`in_domain`] first, and the result must be
/// finite, so `exp(1000)` is an error rather than infinity.
///
/// # Errors
/// Returns [`EvalError::DomainError`] naming the function and the argument.
///
/// # Example
/// ```
/// use fplot::{ast::Function, interpreter::evaluator::builtin::eval_builtin};
///
/// assert_eq!(eval_builtin(Function::Sqrt, 9.0), Ok(3.0));
/// assert!(eval_builtin(Function::Sqrt, -1.0).is_err());
/// ```
pub fn eval_builtin(function: Function, value: f64) -> EvalResult<f64> {
    let error = || EvalError::unary(function.name(), value);

    if !in_domain(function, value) {
        return Err(error());
    }

    let result = match function {
        Function::Sin => value.sin(),
        Function::Cos => value.cos(),
        Function::Tan => value.tan(),
        Function::Asin => value.asin(),
        Function::Acos => value.acos(),
        Function::Atan => value.atan(),
        Function::Sinh => value.sinh(),
        Function::Cosh => value.cosh(),
        Function::Tanh => value.tanh(),
        Function::Asinh => value.asinh(),
        Function::Acosh => value.acosh(),
        Function::Atanh => value.atanh(),
        Function::Log => value.ln(),
        Function::Log10 => value.log10(),
        Function::Exp => value.exp(),
        Function::Sqrt => value.sqrt(),
    };

    finite_or(result, error)
}
