mod error;
pub(crate) mod grammar;
mod parser;

pub use error::ParseError;
pub use parser::MAX_NESTING;

use crate::Rule;

/// Parse one rule of the form `<condition> ENTAO <percentage>` into a [`Rule`].
///
/// The returned rule keeps `text` verbatim as its
/// [`source_text()`](Rule::source_text).
///
/// # Errors
///
/// Returns [`ParseError`] if the text is not a valid rule.
pub fn parse(text: &str) -> Result<Rule, ParseError> {
    parser::parse_rule(text)
}
