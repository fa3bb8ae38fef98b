use std::str::FromStr;

use rust_decimal::Decimal;
use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt, preceded};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::one_of;

// -- Literals ---------------------------------------------------------------

fn number_literal(input: &mut &str) -> ModalResult<Decimal> {
    let digits = alt((
        (digit1, opt(preceded('.', digit0))).map(|(int, frac)| (int, frac.unwrap_or(""))),
        preceded('.', digit1).map(|frac| ("0", frac)),
    ));
    (opt(one_of(['+', '-'])), digits)
        .try_map(|(sign, (int, frac))| {
            let mut literal = String::with_capacity(int.len() + frac.len() + 2);
            if sign == Some('-') {
                literal.push('-');
            }
            literal.push_str(int);
            if !frac.is_empty() {
                literal.push('.');
                literal.push_str(frac);
            }
            Decimal::from_str(&literal)
        })
        .parse_next(input)
}

fn boolean_literal(input: &mut &str) -> ModalResult<bool> {
    alt(("true".value(true), "false".value(false))).parse_next(input)
}

// -- Whole-token recognizers ------------------------------------------------
//
// Each of these succeeds only when the entire token is the literal.

/// `15`, `-3`, `+2`, `1000.50`, `.5`, `10.`. Values outside the range of
/// [`Decimal`] are not numbers. Rule literals and numeric text compared
/// against a number both go through this.
pub(crate) fn number(token: &str) -> Option<Decimal> {
    number_literal.parse(token).ok()
}

/// Exactly `true` or `false`.
pub(crate) fn boolean(token: &str) -> Option<bool> {
    boolean_literal.parse(token).ok()
}

/// A token that starts and ends with a double quote. Inner quotes are kept
/// as-is; there are no escape sequences.
pub(crate) fn quoted_text(token: &str) -> Option<&str> {
    token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
}
