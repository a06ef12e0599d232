//! # fplot
//!
//! fplot turns a free-text single-variable function such as `sin(x) + 5` into
//! a safely evaluable expression and samples it over a numeric range for
//! plotting.
//!
//! The grammar is closed: numbers, the variable `x`, the constants `pi` and
//! `e`, a fixed table of unary functions, `+ - * / ^` (with `**` as an alias of
//! `^`), negation and parentheses. Nothing is ever executed dynamically.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum together with the operator, function
/// and constant tables it refers to. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the node types of the closed expression grammar.
/// - Maps function and constant names to enums, and back.
/// - Renders trees in a fully parenthesized form for diagnostics.
pub mod ast;
/// Provides the error types of every stage.
///
/// This module defines the errors raised while validating a request, parsing
/// an expression and evaluating it, plus the unified error of a plot request
/// and the status message each error maps to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (input, parser, evaluator).
/// - Keeps parse and evaluation failures distinct internally.
/// - Collapses them into the single user-facing "Invalid function" message.
pub mod error;
/// Orchestrates parsing, evaluation and sampling.
///
/// This module ties together the lexer, parser, evaluator and sampler that
/// make up the core. All of it is pure: no shared state, no I/O.
///
/// # Responsibilities
/// - Provides the `ParsedFunction` type, parsed once per request.
/// - Evaluates it at arbitrary points with well-defined domain errors.
/// - Drives the evaluation across a sampling grid.
pub mod interpreter;
/// The caller-level plot request.
///
/// Validates the raw input fields, runs the core, and hands back either the
/// samples with their label or an error with its status message.
pub mod plot;
/// Floating-point helpers shared by the evaluator.
pub mod util;

use crate::{
    ast::Expr,
    error::{ParseError, PlotError},
    interpreter::{evaluator::core::EvalResult, function::ParsedFunction},
    plot::{Plot, PlotRequest},
};
pub use crate::interpreter::sampler::{
    DEFAULT_STEP, GridPolicy, SampleRange, SampleResult, Samples, sample,
};

/// Parses a function of `x` from free text.
///
/// # Errors
/// Returns a [`ParseError`] if the text is not a valid expression.
///
/// # Examples
/// ```
/// use fplot::{error::ParseError, parse};
///
/// assert!(parse("sin(x) + 5").is_ok());
/// assert!(matches!(parse("2x"), Err(ParseError::UnexpectedToken(_))));
/// ```
pub fn parse(text: &str) -> Result<ParsedFunction, ParseError> {
    ParsedFunction::parse(text)
}

/// Evaluates an expression tree at `x`.
///
/// # Errors
/// Returns an [`error::EvalError`] if the expression is undefined at `x`.
///
/// # Examples
/// ```
/// use fplot::{evaluate, parse};
///
/// let f = parse("x**2").unwrap();
/// assert_eq!(evaluate(f.expr(), 5.0), Ok(25.0));
/// assert_eq!(evaluate(f.expr(), -5.0), Ok(25.0));
/// ```
pub fn evaluate(expr: &Expr, x: f64) -> EvalResult<f64> {
    interpreter::evaluator::core::evaluate(expr, x)
}

/// Runs a plot request from the three raw input fields.
///
/// This is the whole pipeline: the fields are validated, the function is
/// parsed and then sampled with the default step of `0.01`.
///
/// # Errors
/// Returns a [`PlotError`]; [`PlotError::status_message`] gives the text to
/// show the user.
///
/// # Examples
/// ```
/// use fplot::plot_function;
///
/// let plot = plot_function("x^2", "-5", "5").unwrap();
/// assert_eq!(plot.samples()[0], (-5.0, 25.0));
///
/// let err = plot_function("x^2", "5", "-5").unwrap_err();
/// assert_eq!(err.status_message(), "x min must be less than x max");
/// ```
pub fn plot_function(function_text: &str, x_min: &str, x_max: &str) -> Result<Plot, PlotError> {
    PlotRequest::new(function_text, x_min, x_max).run()
}
