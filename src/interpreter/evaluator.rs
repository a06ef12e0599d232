/// Core evaluation logic.
///
/// Walks the tree, resolves the variable and constants, and dispatches
/// operators and function calls.
pub mod core;

/// Binary operator evaluation.
///
/// Arithmetic for `+ - * / ^`, with the domain checks for division and
/// exponentiation.
pub mod binary;

/// Built-in function evaluation.
///
/// The fixed unary function table and the domain of each function.
pub mod builtin;
