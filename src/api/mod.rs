//! Provider seam for the external budgeting service.

pub mod ynab;

use chrono::NaiveDate;

use crate::errors::Result;
use crate::model::{RawAccount, RawMonth, RawTransaction};

/// Read-only view of the budgeting service, one method per consumed endpoint.
///
/// All state is call-local; implementations take `&self` so callers may share
/// one provider across threads without locking.
pub trait BudgetProvider {
    /// All transactions dated on or after `since_date`.
    fn transactions(&self, since_date: NaiveDate) -> Result<Vec<RawTransaction>>;

    /// All accounts in the budget.
    fn accounts(&self) -> Result<Vec<RawAccount>>;

    /// The month summary keyed by `first_of_month` (always a first-of-month date).
    fn month(&self, first_of_month: NaiveDate) -> Result<RawMonth>;
}
