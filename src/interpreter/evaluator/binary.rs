use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
    util::num::{finite_or, is_integer},
};

/// Evaluates a binary operation on two already evaluated operands.
///
/// Results that are not finite, such as `1e308 * 10`, are reported as domain
/// errors of the operator.
///
/// # Parameters
/// - `op`: The operator to apply.
/// - `lhs`: Left operand.
/// - `rhs`: Right operand.
///
/// # Returns
/// The finite result of `lhs op rhs`.
///
/// # Example
/// ```
/// use fplot::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary_op};
///
/// assert_eq!(eval_binary_op(BinaryOperator::Sub, 7.0, 2.0), Ok(5.0));
/// assert!(eval_binary_op(BinaryOperator::Div, 1.0, 0.0).is_err());
/// ```
pub fn eval_binary_op(op: BinaryOperator, lhs: f64, rhs: f64) -> EvalResult<f64> {
    let error = || EvalError::binary(op.symbol(), lhs, rhs);

    let result = match op {
        BinaryOperator::Add => lhs + rhs,
        BinaryOperator::Sub => lhs - rhs,
        BinaryOperator::Mul => lhs * rhs,
        BinaryOperator::Div => {
            if rhs == 0.0 {
                return Err(error());
            }
            lhs / rhs
        },
        BinaryOperator::Pow => return eval_pow(lhs, rhs),
    };

    finite_or(result, error)
}

/// Evaluates `base ^ exponent` over the reals.
///
/// Zero raised to a negative power and a negative base raised to a
/// non-integer exponent have no real value and are rejected. Everything else
/// is computed with `powf`.
///
/// # Errors
/// Returns [`EvalError::DomainError`] with operation `^` for undefined powers
/// and for results too large to represent.
///
/// # Example
/// ```
/// use fplot::interpreter::evaluator::binary::eval_pow;
///
/// assert_eq!(eval_pow(-2.0, 3.0), Ok(-8.0));
/// assert!(eval_pow(-2.0, 0.5).is_err());
/// assert!(eval_pow(0.0, -1.0).is_err());
/// ```
pub fn eval_pow(base: f64, exponent: f64) -> EvalResult<f64> {
    let error = || EvalError::binary(BinaryOperator::Pow.symbol(), base, exponent);

    if (base == 0.0 && exponent < 0.0) || (base < 0.0 && !is_integer(exponent)) {
        return Err(error());
    }

    finite_or(base.powf(exponent), error)
}
