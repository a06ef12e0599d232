use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token of an expression.
///
/// The lexer only ever sees normalized text (see [`normalize`]), so there is
/// no whitespace to skip and identifiers are always lowercase.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; the variable, constant and function names.
    #[regex(r"[a-z_][a-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`, or its alias `**`.
    #[token("^")]
    #[token("**")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// A token paired with its byte position in the normalized source.
pub type Spanned = (Token, usize);

/// Parses a numeric literal from the current token slice.
///
/// Literals that overflow to infinity are rejected, which surfaces as an
/// unexpected token at the literal's position.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Strips all whitespace and lowercases the input.
///
/// This happens before anything else, so `SIN( X )` and `sin(x)` are the same
/// expression. It also means a name that lowercases to a function name is
/// always that function.
///
/// # Example
/// ```
/// use fplot::interpreter::lexer::normalize;
///
/// assert_eq!(normalize(" Sin( X ) + 5 "), "sin(x)+5");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Converts normalized source into a token stream.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] with the byte position of the first
/// character that does not start a valid token.
///
/// # Example
/// ```
/// use fplot::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x**2").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x".into()), 0), (Token::Caret, 1), (Token::Number(2.0), 3)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            return Err(ParseError::UnexpectedToken(lexer.span().start));
        }
    }

    Ok(tokens)
}
