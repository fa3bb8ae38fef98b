use rust_decimal::Decimal;

use super::Value;

/// Purchase facts a rule can read.
///
/// Built once per evaluated scenario and never mutated by evaluation. Rules
/// address the fields through the variable names `quantidade`, `valor`,
/// `categoria` and `primeiraCompra`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    quantity: i64,
    total: Decimal,
    category: String,
    first_purchase: bool,
}

impl Context {
    pub const QUANTITY: &'static str = "quantidade";
    pub const TOTAL: &'static str = "valor";
    pub const CATEGORY: &'static str = "categoria";
    pub const FIRST_PURCHASE: &'static str = "primeiraCompra";

    /// Create a context with every field set.
    #[must_use]
    pub fn new(
        quantity: i64,
        total: impl Into<Decimal>,
        category: impl Into<String>,
        first_purchase: bool,
    ) -> Self {
        Self {
            quantity,
            total: total.into(),
            category: category.into(),
            first_purchase,
        }
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_total(mut self, total: impl Into<Decimal>) -> Self {
        self.total = total.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn with_first_purchase(mut self, first_purchase: bool) -> Self {
        self.first_purchase = first_purchase;
        self
    }

    #[must_use]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn first_purchase(&self) -> bool {
        self.first_purchase
    }

    /// Look up a rule variable by name.
    /// Returns `None` for names that do not map to a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match name {
            Self::QUANTITY => Some(Value::from(self.quantity)),
            Self::TOTAL => Some(Value::Number(self.total)),
            Self::CATEGORY => Some(Value::Text(self.category.clone())),
            Self::FIRST_PURCHASE => Some(Value::Boolean(self.first_purchase)),
            _ => None,
        }
    }
}
