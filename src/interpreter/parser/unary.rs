use std::iter::Peekable;

use crate::{
    ast::{Constant, Expr, Function},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::core::{
            ParseResult, descend, expect_closing_paren, parse_expression, within_depth,
        },
    },
};

/// The name of the sampling variable.
pub const VARIABLE_NAME: &str = "x";

/// Parses a unary expression.
///
/// The only prefix operator is `-`. It is right-associative, so `--x` parses
/// as `-(-x)`. Without a prefix the function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let operand = parse_unary(tokens, descend(depth, position)?)?;
        within_depth(Expr::negate(operand), position)
    } else {
        parse_primary(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := number
///              | identifier
///              | function "(" expression ")"
///              | "(" expression ")"
/// ```
///
/// # Errors
/// Returns [`ParseError::MissingOperand`] when the input ends or a `)` or
/// binary operator sits where an operand is required.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.peek() {
        Some((Token::Number(value), _)) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Constant(value))
        },
        Some((Token::LParen, position)) => {
            let position = *position;
            parse_grouping(tokens, descend(depth, position)?)
        },
        Some((Token::Identifier(_), _)) => parse_identifier(tokens, depth),
        Some((Token::RParen
              | Token::Plus
              | Token::Minus
              | Token::Star
              | Token::Slash
              | Token::Caret,
              _))
        | None => Err(ParseError::MissingOperand),
    }
}

/// Parses a parenthesized expression one nesting level below the caller.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    tokens.next();
    let inner = parse_expression(tokens, depth)?;
    expect_closing_paren(tokens)?;
    Ok(inner)
}

/// Parses an identifier: a function call, the variable or a constant.
///
/// Names are resolved in a fixed order:
/// 1. a known function immediately followed by `(` is a call,
/// 2. `x` is the variable,
/// 3. `pi` and `e` are constants,
/// 4. anything else, including a bare function name, is unknown.
///
/// # Errors
/// Returns [`ParseError::UnknownIdentifier`] for an unresolvable name, and
/// propagates errors from the call argument.
fn parse_identifier<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let name = match tokens.next() {
        Some((Token::Identifier(name), _)) => name,
        Some((_, position)) => return Err(ParseError::UnexpectedToken(*position)),
        None => return Err(ParseError::MissingOperand),
    };

    if let Some(function) = Function::from_name(name)
       && let Some((Token::LParen, position)) = tokens.peek()
    {
        let position = *position;
        tokens.next();
        let argument = parse_expression(tokens, descend(depth, position)?)?;
        expect_closing_paren(tokens)?;
        return within_depth(Expr::call(function, argument), position);
    }

    if name == VARIABLE_NAME {
        return Ok(Expr::Variable);
    }

    Constant::from_name(name).map(Expr::NamedConstant)
                             .ok_or_else(|| ParseError::UnknownIdentifier(name.clone()))
}
