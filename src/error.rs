/// Parsing errors.
///
/// Defines every way an expression can be rejected before evaluation:
/// unlexable characters, misplaced tokens, unbalanced parentheses, unknown
/// names and missing operands.
pub mod parse_error;
/// Evaluation errors.
///
/// Numeric-domain violations raised while evaluating a parsed expression at a
/// sample point, such as division by zero or `sqrt` of a negative number.
pub mod eval_error;
/// Caller-level input errors.
///
/// Problems with the raw plot request fields, detected before the expression
/// ever reaches the parser.
pub mod input_error;
/// The unified error of a plot request.
///
/// Wraps the three error families and maps each of them to the status message
/// shown to the user.
pub mod plot_error;

pub use eval_error::EvalError;
pub use input_error::InputError;
pub use parse_error::ParseError;
pub use plot_error::PlotError;
