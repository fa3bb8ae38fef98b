use std::fmt;

use rust_decimal::Decimal;

use super::context::Context;
use super::error::EvalError;
use super::expr::Expr;
use super::value::Value;

/// A discount rule: a boolean condition, the discount percentage it grants,
/// and the text it was parsed from.
///
/// Rules are normally created by [`parse()`](crate::parse::parse). A rule is
/// immutable and holds no interior state, so a single instance can be
/// evaluated concurrently against any number of contexts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    condition: Expr,
    discount: Decimal,
    source_text: String,
}

impl Rule {
    #[must_use]
    pub fn new(condition: Expr, discount: Decimal, source_text: impl Into<String>) -> Self {
        Self {
            condition,
            discount,
            source_text: source_text.into(),
        }
    }

    /// Evaluate the condition against `ctx`.
    ///
    /// Returns `Some(discount)` when the condition holds and `None` when it
    /// does not.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError`] if a variable is unknown, an operand has the
    /// wrong type, or the condition does not produce a boolean.
    pub fn evaluate(&self, ctx: &Context) -> Result<Option<Decimal>, EvalError> {
        match crate::evaluate::eval_expr(&self.condition, ctx)? {
            Value::Boolean(true) => Ok(Some(self.discount)),
            Value::Boolean(false) => Ok(None),
            other => Err(EvalError::NonBooleanCondition {
                found: other.kind(),
            }),
        }
    }

    #[must_use]
    pub fn condition(&self) -> &Expr {
        &self.condition
    }

    /// Discount percentage granted when the condition holds.
    #[must_use]
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// The rule text exactly as it was given to the parser.
    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source_text)
    }
}
