use thiserror::Error;

/// Represents all errors that can occur while evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The operation is undefined, or not finite, for its operands.
    #[error("Domain error: '{operation}' is undefined for {input:?}.")]
    DomainError {
        /// The operator symbol or function name that failed.
        operation: &'static str,
        /// The operands the operation was applied to, left to right.
        input:     Vec<f64>,
    },
}

impl EvalError {
    /// Builds a domain error for a unary operation.
    #[must_use]
    pub fn unary(operation: &'static str, value: f64) -> Self {
        Self::DomainError { operation,
                            input: vec![value] }
    }

    /// Builds a domain error for a binary operation.
    #[must_use]
    pub fn binary(operation: &'static str, left: f64, right: f64) -> Self {
        Self::DomainError { operation,
                            input: vec![left, right] }
    }
}
