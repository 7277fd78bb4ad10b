use rust_decimal::Decimal;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// A bank account keyed by its account number.
///
/// The account number is fixed at construction. Stores keep their accounts
/// ordered by it and rely on it never changing once inserted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    number: String,
    #[serde(default, deserialize_with = "deserialize_balance_or_zero")]
    balance: Decimal,
}

impl Account {
    pub fn new(number: impl Into<String>) -> Self {
        Self::with_balance(number, Decimal::ZERO)
    }

    pub fn with_balance(number: impl Into<String>, balance: Decimal) -> Self {
        Self {
            number: number.into(),
            balance,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }
}

/// A single lookup request read from a queries file.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Query {
    pub number: String,
}

/// Output row answering a [`Query`].
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LookupRow {
    pub number: String,
    pub found: bool,
    pub balance: Option<Decimal>,
}

impl LookupRow {
    pub fn new(number: String, account: Option<&Account>) -> Self {
        Self {
            number,
            found: account.is_some(),
            balance: account.map(Account::balance),
        }
    }
}

/// Empty balance cells load as zero.
fn deserialize_balance_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Decimal>::deserialize(deserializer).map(Option::unwrap_or_default)
}
