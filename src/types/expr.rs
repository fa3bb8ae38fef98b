use std::fmt;
use std::ops::Not;

use super::Value;

/// Comparison operators supported in rule conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Gt,
    Lt,
    Eq,
    Gte,
    Lte,
}

impl CompareOp {
    /// Operators in the order the parser searches for them. Two-character
    /// operators come first so `>=` is never split at its `>`.
    pub const SEARCH_ORDER: [CompareOp; 5] = [
        CompareOp::Gte,
        CompareOp::Lte,
        CompareOp::Gt,
        CompareOp::Lt,
        CompareOp::Eq,
    ];

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Eq => "=",
            CompareOp::Gte => ">=",
            CompareOp::Lte => "<=",
        }
    }
}

/// Logical connectives. `E` is conjunction, `OU` is disjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            LogicalOp::And => "E",
            LogicalOp::Or => "OU",
        }
    }
}

/// A node of a rule's condition tree.
///
/// Trees are built by [`parse`](crate::parse::parse) or by hand with
/// [`var()`], [`constant()`] and the combinator methods below. Each node owns
/// its children; there is no sharing between trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Constant(Value),
    Variable(String),
    Compare {
        left: Box<Expr>,
        op: CompareOp,
        right: Box<Expr>,
    },
    Logical {
        left: Box<Expr>,
        op: LogicalOp,
        right: Box<Expr>,
    },
    Not(Box<Expr>),
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => write!(f, "{value}"),
            Expr::Variable(name) => write!(f, "{name}"),
            Expr::Compare { left, op, right } => write!(f, "{left} {op} {right}"),
            Expr::Logical { left, op, right } => write!(f, "({left} {op} {right})"),
            Expr::Not(inner) => write!(f, "NÃO {inner}"),
        }
    }
}

impl Expr {
    #[must_use]
    pub fn and(self, other: Expr) -> Expr {
        self.logical(LogicalOp::And, other)
    }

    #[must_use]
    pub fn or(self, other: Expr) -> Expr {
        self.logical(LogicalOp::Or, other)
    }

    #[must_use]
    pub fn logical(self, op: LogicalOp, other: Expr) -> Expr {
        Expr::Logical {
            left: Box::new(self),
            op,
            right: Box::new(other),
        }
    }

    /// Compare this expression against another expression.
    #[must_use]
    pub fn compare(self, op: CompareOp, right: Expr) -> Expr {
        Expr::Compare {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn equals(self, value: impl Into<Value>) -> Expr {
        self.compare(CompareOp::Eq, constant(value))
    }

    #[must_use]
    pub fn gt(self, value: impl Into<Value>) -> Expr {
        self.compare(CompareOp::Gt, constant(value))
    }

    #[must_use]
    pub fn gte(self, value: impl Into<Value>) -> Expr {
        self.compare(CompareOp::Gte, constant(value))
    }

    #[must_use]
    pub fn lt(self, value: impl Into<Value>) -> Expr {
        self.compare(CompareOp::Lt, constant(value))
    }

    #[must_use]
    pub fn lte(self, value: impl Into<Value>) -> Expr {
        self.compare(CompareOp::Lte, constant(value))
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }
}

/// Reference a context variable by name (`quantidade`, `valor`, `categoria`,
/// `primeiraCompra`). Names are resolved at evaluation time.
#[must_use]
pub fn var(name: &str) -> Expr {
    Expr::Variable(name.to_owned())
}

#[must_use]
pub fn constant(value: impl Into<Value>) -> Expr {
    Expr::Constant(value.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn var_gt_builds_compare() {
        let expr = var("quantidade").gt(10_i64);
        assert_eq!(
            expr,
            Expr::Compare {
                left: Box::new(Expr::Variable("quantidade".to_owned())),
                op: CompareOp::Gt,
                right: Box::new(Expr::Constant(Value::from(10_i64))),
            }
        );
    }

    #[test]
    fn equals_with_text() {
        let expr = var("categoria").equals("VIP");
        match expr {
            Expr::Compare { op, right, .. } => {
                assert_eq!(op, CompareOp::Eq);
                assert_eq!(*right, Expr::Constant(Value::Text("VIP".to_owned())));
            }
            other => panic!("expected Compare, got {other:?}"),
        }
    }

    #[test]
    fn and_or_chaining_is_left_associative() {
        let expr = var("a").and(var("b")).or(var("c"));
        match &expr {
            Expr::Logical {
                left,
                op: LogicalOp::Or,
                right,
            } => {
                assert_eq!(**right, var("c"));
                assert!(matches!(
                    left.as_ref(),
                    Expr::Logical {
                        op: LogicalOp::And,
                        ..
                    }
                ));
            }
            other => panic!("expected Or at the root, got {other:?}"),
        }
    }

    #[test]
    fn not_expr() {
        let expr = !var("primeiraCompra");
        assert_eq!(expr, Expr::Not(Box::new(var("primeiraCompra"))));
    }

    #[test]
    fn search_order_puts_two_char_ops_first() {
        let symbols: Vec<&str> = CompareOp::SEARCH_ORDER
            .iter()
            .map(|op| op.symbol())
            .collect();
        assert_eq!(symbols, vec![">=", "<=", ">", "<", "="]);
    }

    #[test]
    fn display_renders_rule_language() {
        let expr = (!var("primeiraCompra")).and(var("quantidade").gte(5_i64));
        assert_eq!(expr.to_string(), "(NÃO primeiraCompra E quantidade >= 5)");

        let expr = var("categoria").equals("VIP").or(constant(true));
        assert_eq!(expr.to_string(), "(categoria = \"VIP\" OU true)");
    }
}
