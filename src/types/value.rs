use std::fmt;

use rust_decimal::Decimal;

use super::error::EvalError;
use super::expr::CompareOp;
use crate::parse::grammar;

/// Runtime values produced by evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A decimal number. Integer quantities are promoted on lookup.
    Number(Decimal),
    /// A boolean value.
    Boolean(bool),
    /// A UTF-8 string.
    Text(String),
}

/// The runtime type of a [`Value`], used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Boolean,
    Text,
}

impl Value {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// Coerce to a number. Text is accepted only when it holds a numeric literal,
    /// read with the same grammar as literals in rule text.
    #[must_use]
    pub fn to_number(&self) -> Option<Decimal> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => grammar::number(s.trim()),
            Value::Boolean(_) => None,
        }
    }

    /// Coerce to a boolean. Text is accepted only when it is exactly `true` or `false`.
    #[must_use]
    pub fn to_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            Value::Text(s) => match s.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            Value::Number(_) => None,
        }
    }

    /// Coerce to text. Every value has a textual form.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Boolean(b) => b.to_string(),
        }
    }

    /// Compare this value to another using the given operator.
    ///
    /// The left-hand side (`self`) decides the comparison type: the right-hand
    /// side is coerced to it. Numbers support every operator; booleans and
    /// text support only equality.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::TypeMismatch`] when `other` cannot be coerced and
    /// [`EvalError::UnsupportedComparison`] for ordering operators on
    /// booleans or text.
    pub fn compare(&self, op: CompareOp, other: &Value) -> Result<bool, EvalError> {
        match self {
            Value::Number(a) => {
                let b = other
                    .to_number()
                    .ok_or_else(|| EvalError::mismatch(ValueKind::Number, other, op))?;
                Ok(match op {
                    CompareOp::Gt => *a > b,
                    CompareOp::Lt => *a < b,
                    CompareOp::Eq => *a == b,
                    CompareOp::Gte => *a >= b,
                    CompareOp::Lte => *a <= b,
                })
            }
            Value::Boolean(a) => {
                require_equality(op, ValueKind::Boolean)?;
                let b = other
                    .to_boolean()
                    .ok_or_else(|| EvalError::mismatch(ValueKind::Boolean, other, op))?;
                Ok(*a == b)
            }
            Value::Text(a) => {
                require_equality(op, ValueKind::Text)?;
                Ok(*a == other.to_text())
            }
        }
    }
}

fn require_equality(op: CompareOp, kind: ValueKind) -> Result<(), EvalError> {
    if op == CompareOp::Eq {
        Ok(())
    } else {
        Err(EvalError::UnsupportedComparison { op, kind })
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(Decimal::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "\"{v}\""),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Number => write!(f, "number"),
            ValueKind::Boolean => write!(f, "boolean"),
            ValueKind::Text => write!(f, "text"),
        }
    }
}
