use std::fmt;

use rust_decimal::Decimal;

use super::error::EvalError;

/// What happened to one rule when a [`RuleBook`](super::RuleBook) was evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The condition held and the discount is positive; carries the percentage.
    Applied(Decimal),
    NotApplied,
    /// Evaluation failed; the rule was skipped.
    Failed(EvalError),
}

/// A rule's source text paired with its [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    source_text: String,
    outcome: Outcome,
}

impl RuleOutcome {
    pub(crate) fn new(source_text: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            source_text: source_text.into(),
            outcome,
        }
    }

    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

/// Per-rule results of evaluating a [`RuleBook`](super::RuleBook) against one
/// context, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct DiscountReport {
    outcomes: Vec<RuleOutcome>,
}

impl DiscountReport {
    pub(crate) fn new(outcomes: Vec<RuleOutcome>) -> Self {
        Self { outcomes }
    }

    #[must_use]
    pub fn outcomes(&self) -> &[RuleOutcome] {
        &self.outcomes
    }

    /// Discounts of the rules whose condition held.
    pub fn applied(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.outcomes.iter().filter_map(|o| match o.outcome {
            Outcome::Applied(discount) => Some(discount),
            _ => None,
        })
    }

    /// Rules that failed to evaluate, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &EvalError)> + '_ {
        self.outcomes.iter().filter_map(|o| match &o.outcome {
            Outcome::Failed(err) => Some((o.source_text(), err)),
            _ => None,
        })
    }

    /// The largest applied discount, or zero when nothing applied.
    /// Discounts do not stack.
    #[must_use]
    pub fn best_discount(&self) -> Decimal {
        self.applied().fold(Decimal::ZERO, Decimal::max)
    }
}

impl fmt::Display for RuleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Applied(discount) => {
                write!(f, "[applied] {} -> {discount}%", self.source_text)
            }
            Outcome::NotApplied => write!(f, "[not applied] {}", self.source_text),
            Outcome::Failed(err) => write!(f, "[failed] {}: {err}", self.source_text),
        }
    }
}

impl fmt::Display for DiscountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{outcome}")?;
        }
        write!(f, "best discount: {}%", self.best_discount())
    }
}
