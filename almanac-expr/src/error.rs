//! Expression errors

use thiserror::Error;

/// Errors from parsing or evaluating expressions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("undefined variable: {0}")]
    UndefinedVariable(String),

    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("{name} expects {expected} argument(s), got {got}")]
    ArgCount {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("parameter {0} shadows a bound variable")]
    ParameterShadowsVariable(String),

    #[error("expected {expected} value(s), got {got}")]
    Arity { expected: usize, got: usize },
}
