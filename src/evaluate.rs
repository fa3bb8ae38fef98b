use crate::{Context, EvalError, Expr, LogicalOp, Value, ValueKind};

pub(crate) fn eval_expr(expr: &Expr, ctx: &Context) -> Result<Value, EvalError> {
    match expr {
        Expr::Constant(value) => Ok(value.clone()),
        Expr::Variable(name) => ctx
            .get(name)
            .ok_or_else(|| EvalError::UnknownVariable(name.clone())),
        Expr::Compare { left, op, right } => {
            let lhs = eval_expr(left, ctx)?;
            let rhs = eval_expr(right, ctx)?;
            lhs.compare(*op, &rhs).map(Value::Boolean)
        }
        Expr::Logical { left, op, right } => {
            let context = op.keyword();
            let lhs = expect_boolean(eval_expr(left, ctx)?, context)?;
            // The right operand is only evaluated when it can change the result.
            let result = match (op, lhs) {
                (LogicalOp::And, false) => false,
                (LogicalOp::Or, true) => true,
                _ => expect_boolean(eval_expr(right, ctx)?, context)?,
            };
            Ok(Value::Boolean(result))
        }
        Expr::Not(inner) => {
            let value = expect_boolean(eval_expr(inner, ctx)?, "NÃO")?;
            Ok(Value::Boolean(!value))
        }
    }
}

fn expect_boolean(value: Value, context: &str) -> Result<bool, EvalError> {
    match value {
        Value::Boolean(b) => Ok(b),
        other => Err(EvalError::TypeMismatch {
            expected: ValueKind::Boolean,
            found: other.kind(),
            context: format!("'{context}'"),
        }),
    }
}
