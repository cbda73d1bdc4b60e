//! Shared fixtures: an in-memory provider and a deterministic clock.

use chrono::{DateTime, NaiveDate, Utc};

use runway::model::{RawAccount, RawMonth, RawSubTransaction, RawTransaction};
use runway::{BudgetError, BudgetProvider, Clock, Result};

/// Provider backed by fixed record sets. `transactions` honors the
/// `since_date` contract by filtering the stored records.
#[derive(Default)]
pub struct FakeProvider {
    pub transactions: Vec<RawTransaction>,
    pub accounts: Vec<RawAccount>,
    pub month: RawMonth,
}

impl BudgetProvider for FakeProvider {
    fn transactions(&self, since_date: NaiveDate) -> Result<Vec<RawTransaction>> {
        Ok(self
            .transactions
            .iter()
            .filter(|tx| tx.date >= since_date)
            .cloned()
            .collect())
    }

    fn accounts(&self) -> Result<Vec<RawAccount>> {
        Ok(self.accounts.clone())
    }

    fn month(&self, _first_of_month: NaiveDate) -> Result<RawMonth> {
        Ok(self.month.clone())
    }
}

/// Provider whose every fetch fails, for error-propagation tests.
pub struct FailingProvider;

impl BudgetProvider for FailingProvider {
    fn transactions(&self, _since_date: NaiveDate) -> Result<Vec<RawTransaction>> {
        Err(BudgetError::UpstreamStatus {
            status: 503,
            message: "Service Unavailable".into(),
        })
    }

    fn accounts(&self) -> Result<Vec<RawAccount>> {
        Err(BudgetError::Upstream("connection refused".into()))
    }

    fn month(&self, _first_of_month: NaiveDate) -> Result<RawMonth> {
        Err(BudgetError::UnexpectedPayload("missing data.month".into()))
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0.and_hms_opt(12, 0, 0).expect("valid time").and_utc()
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn transaction(d: NaiveDate, category: &str, amount: i64) -> RawTransaction {
    RawTransaction {
        date: d,
        category_name: Some(category.to_string()),
        amount,
        subtransactions: Vec::new(),
    }
}

pub fn split_transaction(d: NaiveDate, children: &[(i64, &str)]) -> RawTransaction {
    RawTransaction {
        date: d,
        category_name: Some("Split (Multiple Categories)".to_string()),
        amount: children.iter().map(|(amount, _)| amount).sum(),
        subtransactions: children
            .iter()
            .map(|(amount, category)| RawSubTransaction {
                amount: *amount,
                category_name: Some(category.to_string()),
            })
            .collect(),
    }
}

pub fn account(closed: bool, account_type: &str, on_budget: bool, balance: i64) -> RawAccount {
    RawAccount {
        closed,
        account_type: account_type.to_string(),
        on_budget,
        balance,
    }
}
