use thiserror::Error;

use crate::parse::ParseError;
use crate::EvalError;

/// Unified error type covering rule files, parsing, and evaluation.
///
/// Returned by the [`RuleBook`](crate::RuleBook) constructors and by
/// [`RuleBook::best_discount()`](crate::RuleBook::best_discount).
#[derive(Debug, Error)]
pub enum DiscountError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_carries_line() {
        let err = DiscountError::Parse {
            line: 4,
            source: ParseError::MissingThenKeyword { found: 0 },
        };
        assert_eq!(
            err.to_string(),
            "line 4: rule must contain exactly one 'ENTAO' keyword, found 0"
        );
    }

    #[test]
    fn eval_error_is_transparent() {
        let err = DiscountError::from(EvalError::UnknownVariable("x".into()));
        assert_eq!(err.to_string(), "unknown variable 'x'");
    }
}
