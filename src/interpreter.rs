/// The evaluator module computes the value of a tree at a given `x`.
///
/// The evaluator walks the AST, applies arithmetic and builtin functions, and
/// reports numeric-domain errors instead of producing `NaN` or infinity.
///
/// # Responsibilities
/// - Evaluates every AST node over `f64`.
/// - Checks the real domain of each operation and function.
/// - Guarantees that every successful result is finite.
pub mod evaluator;
/// The function module ties parsing and evaluation together.
///
/// [`function::ParsedFunction`] is the immutable, validated form of a user's
/// expression, created once per plot request and evaluated at every sample
/// point.
pub mod function;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer normalizes the raw text (whitespace removed, lowercased) and
/// produces a stream of numbers, identifiers, operators and parentheses, each
/// tagged with its position.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Treats `**` as an alias of `^`.
/// - Reports the position of the first character that cannot be lexed.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser over a closed grammar: numbers, `x`, `pi`, `e`,
/// the fixed function table, `+ - * / ^`, negation and parentheses. There is
/// no implicit multiplication.
///
/// # Responsibilities
/// - Converts tokens into AST nodes, honouring precedence and associativity.
/// - Resolves identifiers to the variable, constants or functions.
/// - Rejects malformed input as a whole, never producing a partial tree.
pub mod parser;
/// The sampler module evaluates a function across a range.
///
/// Defines the validated [`sampler::SampleRange`], the grid policies, and
/// the all-or-nothing sampling run.
pub mod sampler;
