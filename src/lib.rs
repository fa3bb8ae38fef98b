mod error;
mod evaluate;
pub mod parse;
mod types;

pub use error::DiscountError;
pub use parse::{parse, ParseError};
pub use types::{
    constant, var, CompareOp, Context, DiscountReport, EvalError, Expr, LogicalOp, Outcome,
    RejectedRule, Rule, RuleBook, RuleOutcome, Value, ValueKind,
};
