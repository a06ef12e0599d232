use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting an expression may use.
///
/// Bounds both the nesting of negations, groups, calls and powers while
/// parsing, and the height of the finished tree, so that neither the parser
/// nor the evaluator can run out of stack.
pub const MAX_DEPTH: usize = 256;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: Current nesting level, `0` at the top.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    parse_additive(tokens, depth)
}

/// Parses a complete token stream into a single expression tree.
///
/// Parsing is all or nothing: after the expression, the stream must be
/// exhausted. A leftover `)` means the parentheses do not balance; any other
/// leftover token is reported at its position, which is how `2x` is rejected.
///
/// # Errors
/// - [`ParseError::EmptyExpression`] if `tokens` is empty.
/// - [`ParseError::UnmatchedParenthesis`] for a stray `)`.
/// - [`ParseError::UnexpectedToken`] for any other trailing token, or at the
///   token that nests the expression deeper than [`MAX_DEPTH`].
/// - Any error raised while parsing the expression itself.
///
/// # Example
/// ```
/// use fplot::{
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::parse_tokens},
/// };
///
/// let tokens = tokenize("2x").unwrap();
/// assert_eq!(parse_tokens(&tokens), Err(ParseError::UnexpectedToken(1)));
/// ```
pub fn parse_tokens(tokens: &[Spanned]) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    match iter.next() {
        None => Ok(expr),
        Some((Token::RParen, _)) => Err(ParseError::UnmatchedParenthesis),
        Some((_, position)) => Err(ParseError::UnexpectedToken(*position)),
    }
}

/// Consumes the `)` that closes a group or a function call.
///
/// # Errors
/// - [`ParseError::UnmatchedParenthesis`] if the input ends first.
/// - [`ParseError::UnexpectedToken`] if another token is found instead.
pub(in crate::interpreter::parser) fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(()),
        Some((_, position)) => Err(ParseError::UnexpectedToken(*position)),
        None => Err(ParseError::UnmatchedParenthesis),
    }
}

/// Enters one nesting level below `depth`.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] at `position` once the nesting
/// would pass [`MAX_DEPTH`].
pub(in crate::interpreter::parser) const fn descend(depth: usize,
                                                    position: usize)
                                                    -> ParseResult<usize> {
    if depth >= MAX_DEPTH {
        Err(ParseError::UnexpectedToken(position))
    } else {
        Ok(depth + 1)
    }
}

/// Accepts a freshly built node unless its tree is taller than [`MAX_DEPTH`].
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] at `position`, the operator that
/// built the node.
pub(in crate::interpreter::parser) fn within_depth(expr: Expr, position: usize) -> ParseResult<Expr> {
    if expr.height() > MAX_DEPTH {
        return Err(ParseError::UnexpectedToken(position));
    }
    Ok(expr)
}
