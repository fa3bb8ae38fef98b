use std::fmt;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::context::Context;
use super::discount_report::{DiscountReport, Outcome, RuleOutcome};
use super::rule::Rule;
use crate::error::DiscountError;
use crate::parse::{parse, ParseError};

/// A rule line that could not be parsed and was left out of a [`RuleBook`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRule {
    pub line: usize,
    pub text: String,
    pub error: ParseError,
}

/// An ordered collection of discount rules evaluated together.
///
/// Rule files hold one rule per line. Blank lines and lines starting with `#`
/// are ignored.
///
/// # Example
///
/// ```
/// use discount_rules::{Context, RuleBook};
/// use rust_decimal::Decimal;
///
/// let book = RuleBook::parse(
///     "# volume\n\
///      quantidade > 10 E valor > 1000 ENTAO 15\n\
///      categoria = \"VIP\" ENTAO 20",
/// )
/// .unwrap();
///
/// let ctx = Context::new(15, 1500, "VIP", false);
/// assert_eq!(book.evaluate(&ctx).best_discount(), Decimal::from(20));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    rules: Vec<Rule>,
    rejected: Vec<RejectedRule>,
}

impl RuleBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already parsed rule.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Parse rule text, failing on the first invalid line.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::Parse`] with the 1-based line number of the
    /// first rule that does not parse.
    pub fn parse(input: &str) -> Result<Self, DiscountError> {
        let mut book = Self::new();
        for (line, text) in rule_lines(input) {
            let rule = parse(text).map_err(|source| DiscountError::Parse { line, source })?;
            book.push(rule);
        }
        Ok(book)
    }

    /// Parse rule text, skipping invalid lines. Skipped lines are logged and
    /// kept in [`rejected()`](Self::rejected).
    pub fn parse_lenient(input: &str) -> Self {
        let mut book = Self::new();
        for (line, text) in rule_lines(input) {
            book.push_lenient(line, text);
        }
        book
    }

    /// Parse each string as one rule, skipping the ones that fail.
    /// Positions in [`rejected()`](Self::rejected) are 1-based indices.
    pub fn from_rules<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut book = Self::new();
        for (idx, text) in rules.into_iter().enumerate() {
            book.push_lenient(idx + 1, text.as_ref());
        }
        book
    }

    /// Read a rule file and parse it strictly.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError`] on I/O or parse failure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DiscountError> {
        let input = std::fs::read_to_string(path)?;
        Self::parse(&input)
    }

    /// Read a rule file and parse it leniently.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::Io`] if the file cannot be read.
    pub fn from_file_lenient(path: impl AsRef<Path>) -> Result<Self, DiscountError> {
        let input = std::fs::read_to_string(path)?;
        Ok(Self::parse_lenient(&input))
    }

    fn push_lenient(&mut self, line: usize, text: &str) {
        match parse(text) {
            Ok(rule) => self.rules.push(rule),
            Err(error) => {
                warn!(line, rule = text, %error, "skipping unparsable rule");
                self.rejected.push(RejectedRule {
                    line,
                    text: text.to_owned(),
                    error,
                });
            }
        }
    }

    /// Evaluate every rule against `ctx`. A rule counts as applied only when its
    /// condition holds and its discount is positive. Rules that fail to
    /// evaluate are logged and reported as [`Outcome::Failed`]; the rest still
    /// run.
    pub fn evaluate(&self, ctx: &Context) -> DiscountReport {
        let outcomes = self
            .rules
            .iter()
            .map(|rule| {
                let outcome = match rule.evaluate(ctx) {
                    Ok(Some(discount)) if discount > Decimal::ZERO => Outcome::Applied(discount),
                    Ok(_) => Outcome::NotApplied,
                    Err(error) => {
                        warn!(rule = rule.source_text(), %error, "rule evaluation failed");
                        Outcome::Failed(error)
                    }
                };
                debug!(rule = rule.source_text(), ?outcome, "evaluated rule");
                RuleOutcome::new(rule.source_text(), outcome)
            })
            .collect();
        DiscountReport::new(outcomes)
    }

    /// The largest discount any rule grants for `ctx`, or zero.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::Eval`] for the first rule that fails to evaluate.
    pub fn best_discount(&self, ctx: &Context) -> Result<Decimal, DiscountError> {
        let mut best = Decimal::ZERO;
        for rule in &self.rules {
            if let Some(discount) = rule.evaluate(ctx)? {
                best = best.max(discount);
            }
        }
        Ok(best)
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Lines skipped by the lenient constructors.
    #[must_use]
    pub fn rejected(&self) -> &[RejectedRule] {
        &self.rejected
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Non-blank, non-comment lines with their 1-based line numbers.
fn rule_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(idx, text)| (idx + 1, text))
        .filter(|(_, text)| {
            let trimmed = text.trim_start();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
}

impl fmt::Display for RuleBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RuleBook({} rules, {} rejected)",
            self.rules.len(),
            self.rejected.len()
        )
    }
}
