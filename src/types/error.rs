use thiserror::Error;

use super::expr::CompareOp;
use super::value::{Value, ValueKind};

/// Errors raised while evaluating a rule against a [`Context`](super::Context).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),

    #[error("type mismatch in {context}: expected {expected}, found {found}")]
    TypeMismatch {
        expected: ValueKind,
        found: ValueKind,
        context: String,
    },

    #[error("operator '{op}' is not supported for {kind} values")]
    UnsupportedComparison { op: CompareOp, kind: ValueKind },

    #[error("rule condition must be boolean, found {found}")]
    NonBooleanCondition { found: ValueKind },
}

impl EvalError {
    pub(crate) fn mismatch(expected: ValueKind, found: &Value, op: CompareOp) -> Self {
        EvalError::TypeMismatch {
            expected,
            found: found.kind(),
            context: format!("comparison '{op}'"),
        }
    }
}
