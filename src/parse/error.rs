use thiserror::Error;

/// Errors produced when parsing rule text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("rule must contain exactly one 'ENTAO' keyword, found {found}")]
    MissingThenKeyword { found: usize },

    #[error("invalid discount percentage '{text}'")]
    InvalidDiscountNumber { text: String },

    #[error("unsupported operator in '{token}'")]
    UnsupportedOperator { token: String },

    #[error("empty operand in '{fragment}'")]
    EmptyOperand { fragment: String },

    #[error("condition nests {depth} levels deep, the limit is {max}")]
    TooDeeplyNested { depth: usize, max: usize },
}
