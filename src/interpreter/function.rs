use std::fmt;

use log::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        evaluator::core::{EvalResult, evaluate},
        lexer::{normalize, tokenize},
        parser::core::parse_tokens,
    },
};

/// Prefix of the title shown above a plot.
pub const TITLE_PREFIX: &str = "Function Plot: ";

/// A validated, immutable single-variable function.
///
/// Holds the parsed tree together with the text the user typed. The text is
/// kept verbatim, before whitespace stripping and lowercasing, and is only
/// used for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFunction {
    expr:   Expr,
    source: String,
}

impl ParsedFunction {
    /// Parses a function of `x` from free text.
    ///
    /// The text is normalized first (all whitespace removed, everything
    /// lowercased), then tokenized and parsed. Parsing either succeeds
    /// completely or fails; no partial tree is ever produced.
    ///
    /// # Errors
    /// Returns a [`ParseError`] describing the first problem found.
    ///
    /// # Example
    /// ```
    /// use fplot::interpreter::function::ParsedFunction;
    ///
    /// let f = ParsedFunction::parse("SIN(x) + 5").unwrap();
    /// assert_eq!(f.label(), "SIN(x) + 5");
    /// assert_eq!(f.evaluate(0.0), Ok(5.0));
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let normalized = normalize(text);
        debug!("Parsing normalized expression '{normalized}'");

        let tokens = tokenize(&normalized)?;
        let expr = parse_tokens(&tokens)?;
        debug!("Parsed '{text}' as {expr}");

        Ok(Self { expr,
                  source: text.to_string() })
    }

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    /// Returns an [`crate::error::EvalError`] if the function is undefined
    /// at `x`.
    pub fn evaluate(&self, x: f64) -> EvalResult<f64> {
        evaluate(&self.expr, x)
    }

    /// The parsed expression tree.
    #[must_use]
    pub const fn expr(&self) -> &Expr {
        &self.expr
    }

    /// The original text, exactly as it was given to [`Self::parse`].
    #[must_use]
    pub fn label(&self) -> &str {
        &self.source
    }

    /// The plot title, `Function Plot: <label>`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{TITLE_PREFIX}{}", self.source)
    }
}

impl fmt::Display for ParsedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
