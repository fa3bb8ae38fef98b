mod context;
mod discount_report;
mod error;
mod expr;
mod rule;
mod rulebook;
mod value;

pub use context::Context;
pub use discount_report::{DiscountReport, Outcome, RuleOutcome};
pub use error::EvalError;
pub use expr::{constant, var, CompareOp, Expr, LogicalOp};
pub use rule::Rule;
pub use rulebook::{RejectedRule, RuleBook};
pub use value::{Value, ValueKind};
