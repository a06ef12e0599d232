use log::trace;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::{binary::eval_binary_op, builtin::eval_builtin},
    util::num::finite_or,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree at the given value of `x`.
///
/// Evaluation is pure and recursive. Operands are evaluated left to right and
/// the first domain violation aborts the whole evaluation. Every successful
/// result is finite.
///
/// # Errors
/// Returns [`EvalError::DomainError`] for division by zero, undefined powers,
/// arguments outside a function's domain, and any non-finite result.
///
/// # Example
/// ```
/// use fplot::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::core::evaluate,
/// };
///
/// let square = Expr::binary(BinaryOperator::Pow, Expr::Variable, Expr::Constant(2.0));
/// assert_eq!(evaluate(&square, -5.0), Ok(25.0));
///
/// let reciprocal = Expr::binary(BinaryOperator::Div, Expr::Constant(1.0), Expr::Variable);
/// assert!(evaluate(&reciprocal, 0.0).is_err());
/// ```
pub fn evaluate(expr: &Expr, x: f64) -> EvalResult<f64> {
    let result = match expr {
        Expr::Constant(value) => Ok(*value),
        Expr::Variable => finite_or(x, || EvalError::unary("x", x)),
        Expr::NamedConstant(constant) => Ok(constant.value()),
        Expr::FunctionCall { function, argument } => {
            let value = evaluate(argument, x)?;
            eval_builtin(*function, value)
        },
        Expr::UnaryMinus(operand) => evaluate(operand, x).map(|v| -v),
        Expr::BinaryOp { op, left, right } => {
            let lhs = evaluate(left, x)?;
            let rhs = evaluate(right, x)?;
            eval_binary_op(*op, lhs, rhs)
        },
    };

    if let Err(e) = &result {
        trace!("Evaluation failed at x = {x}: {e}");
    }
    result
}
