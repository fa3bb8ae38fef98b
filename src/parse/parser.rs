use crate::{CompareOp, Expr, LogicalOp, Rule, Value};

use super::error::ParseError;
use super::grammar;

const THEN_KEYWORD: &str = "ENTAO";
const OR_SEPARATOR: &str = " OU ";
const AND_SEPARATOR: &str = " E ";
const NOT_PREFIX: &str = "NÃO ";

/// Characters that may only appear in an operator position.
const OPERATOR_CHARS: &[char] = &['<', '>', '=', '!'];

pub(crate) fn parse_rule(text: &str) -> Result<Rule, ParseError> {
    let pieces: Vec<&str> = text.split(THEN_KEYWORD).collect();
    let &[condition_text, discount_text] = pieces.as_slice() else {
        return Err(ParseError::MissingThenKeyword {
            found: pieces.len() - 1,
        });
    };

    let discount_text = discount_text.trim();
    let discount =
        grammar::number(discount_text).ok_or_else(|| ParseError::InvalidDiscountNumber {
            text: discount_text.to_owned(),
        })?;

    let condition = parse_condition(condition_text.trim())?;
    Ok(Rule::new(condition, discount, text))
}

/// Deepest chain of connectives and `NÃO` prefixes a condition may build.
/// Evaluating and dropping an expression recurse once per level.
pub const MAX_NESTING: usize = 256;

// Grouping symbols are not tracked: every split happens at the first
// occurrence of a keyword, whatever parentheses surround it. `OU` is split
// before `E`, which is what makes it the loosest connective.

pub(crate) fn parse_condition(text: &str) -> Result<Expr, ParseError> {
    split_connective(text, OR_SEPARATOR, LogicalOp::Or, |piece| {
        split_connective(piece, AND_SEPARATOR, LogicalOp::And, parse_negation)
    })
    .map(|(expr, _)| expr)
}

/// Split `text` at every `separator` and join the pieces right to left, so
/// `a OU b OU c` becomes `a OU (b OU c)`: the shape produced by splitting at
/// the first separator and recursing on the remainder.
///
/// Each piece comes back with its nesting; the result's nesting is checked
/// against [`MAX_NESTING`] before any deeper tree is built.
fn split_connective(
    text: &str,
    separator: &str,
    op: LogicalOp,
    operand: impl Fn(&str) -> Result<(Expr, usize), ParseError>,
) -> Result<(Expr, usize), ParseError> {
    let pieces = text
        .split(separator)
        .map(operand)
        .collect::<Result<Vec<_>, _>>()?;

    let deepest = pieces.iter().map(|(_, depth)| *depth).max().unwrap_or(0);
    let depth = check_nesting(deepest + pieces.len().saturating_sub(1))?;

    pieces
        .into_iter()
        .map(|(expr, _)| expr)
        .rev()
        .reduce(|right, left| left.logical(op, right))
        .map(|expr| (expr, depth))
        .ok_or_else(|| ParseError::EmptyOperand {
            fragment: text.to_owned(),
        })
}

fn parse_negation(text: &str) -> Result<(Expr, usize), ParseError> {
    let mut rest = text;
    let mut depth = 0_usize;
    while let Some(inner) = rest.trim_start().strip_prefix(NOT_PREFIX) {
        rest = inner;
        depth += 1;
    }
    check_nesting(depth)?;

    let expr = parse_comparison(rest)?;
    Ok(((0..depth).fold(expr, |inner, _| !inner), depth))
}

fn check_nesting(depth: usize) -> Result<usize, ParseError> {
    if depth > MAX_NESTING {
        return Err(ParseError::TooDeeplyNested {
            depth,
            max: MAX_NESTING,
        });
    }
    Ok(depth)
}

fn parse_comparison(text: &str) -> Result<Expr, ParseError> {
    for op in CompareOp::SEARCH_ORDER {
        if let Some((left, right)) = text.split_once(op.symbol()) {
            let left = parse_operand(left, text)?;
            let right = parse_operand(right, text)?;
            return Ok(left.compare(op, right));
        }
    }

    parse_operand(text, text)
}

/// Literal trial order: number, boolean, quoted text, then variable name.
///
/// A token that is none of the literals and still holds `<`, `>`, `=`, `!` or
/// whitespace is rejected here as [`ParseError::UnsupportedOperator`]. A bare
/// splitter would keep it as a variable name and only fail at evaluation, or
/// never fail when a connective short-circuits past it.
fn parse_operand(token: &str, fragment: &str) -> Result<Expr, ParseError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ParseError::EmptyOperand {
            fragment: fragment.trim().to_owned(),
        });
    }

    if let Some(n) = grammar::number(token) {
        return Ok(Expr::Constant(Value::Number(n)));
    }
    if let Some(b) = grammar::boolean(token) {
        return Ok(Expr::Constant(Value::Boolean(b)));
    }
    if let Some(s) = grammar::quoted_text(token) {
        return Ok(Expr::Constant(Value::Text(s.to_owned())));
    }

    // Left-over operator characters or inner whitespace mean an operator or
    // connective the grammar does not know (`!=`, `=>`, `AND`, lowercase `e`).
    if token.contains(OPERATOR_CHARS) || token.contains(char::is_whitespace) {
        return Err(ParseError::UnsupportedOperator {
            token: token.to_owned(),
        });
    }

    Ok(Expr::Variable(token.to_owned()))
}
