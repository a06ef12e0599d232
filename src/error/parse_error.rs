use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the normalized source, i.e. after all
/// whitespace has been stripped and the text lowercased.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing was left to parse after normalization.
    #[error("Empty expression.")]
    EmptyExpression,
    /// A character could not be lexed, or a token appeared where none was
    /// allowed.
    #[error("Unexpected token at position {0}.")]
    UnexpectedToken(usize),
    /// An opening parenthesis was never closed, or a closing one was never
    /// opened.
    #[error("Unmatched parenthesis.")]
    UnmatchedParenthesis,
    /// The identifier is neither `x`, a constant nor a called function.
    #[error("Unknown identifier '{0}'.")]
    UnknownIdentifier(String),
    /// An operator or function call is missing an operand.
    #[error("Missing operand.")]
    MissingOperand,
}
