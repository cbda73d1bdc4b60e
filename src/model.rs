use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar-month bucket in fixed-width `YYYY-MM` form.
///
/// Ordering is derived from the string, which is safe because the format is
/// zero-padded: `"2023-12" < "2024-01"` lexicographically and chronologically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Month(String);

impl Month {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized transaction: split parents flattened, amount in major currency
/// units, month bucket derived from the date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub month: Month,
    pub category_name: String,
    pub amount: f64,
}

/// Transaction as returned by the provider, amount in milliunits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTransaction {
    pub date: NaiveDate,
    #[serde(default)]
    pub category_name: Option<String>,
    pub amount: i64,
    #[serde(default)]
    pub subtransactions: Vec<RawSubTransaction>,
}

/// Child record of a split transaction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSubTransaction {
    pub amount: i64,
    #[serde(default)]
    pub category_name: Option<String>,
}

/// Account as returned by the provider, balance in milliunits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawAccount {
    pub closed: bool,
    #[serde(rename = "type")]
    pub account_type: String,
    pub on_budget: bool,
    pub balance: i64,
}

/// Category balance within a month summary, in milliunits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCategory {
    pub balance: i64,
}

/// Month summary as returned by the provider.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawMonth {
    pub to_be_budgeted: i64,
    #[serde(default)]
    pub categories: Vec<RawCategory>,
}
