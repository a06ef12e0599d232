/// Entry points of the parser.
///
/// Holds the top-level expression rule and the driver that turns a whole
/// token stream into a tree, rejecting anything left over.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level: additive, multiplicative and
/// exponentiation.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles negation, literals, identifiers, function calls and parenthesized
/// groups.
pub mod unary;
