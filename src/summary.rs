//! Scalar balance and spend aggregations.

use std::collections::BTreeMap;

use tracing::debug;

use crate::api::BudgetProvider;
use crate::errors::{BudgetError, Result};
use crate::model::{Month, Transaction};
use crate::time::{month_delta, Clock};

/// Milliunits per major currency unit.
const MILLIUNITS: f64 = 1000.0;

/// Provider classification excluded from the cash total.
const OTHER_ASSET: &str = "otherAsset";

/// Lower cutoff for a single essential transaction, in major units.
/// Anything more negative is treated as an outlier; anything positive is
/// income or a refund, not spend.
const SPEND_FLOOR: f64 = -5000.0;

/// Total balance of open, on-budget cash accounts, in major units.
pub fn cash_balance(provider: &dyn BudgetProvider) -> Result<f64> {
    let accounts = provider.accounts()?;
    let total: i64 = accounts
        .iter()
        .filter(|account| !account.closed && account.account_type != OTHER_ASSET && account.on_budget)
        .map(|account| account.balance)
        .sum();
    let cash = total as f64 / MILLIUNITS;
    debug!(accounts = accounts.len(), cash, "computed cash balance");
    Ok(cash)
}

/// To-be-budgeted plus the sum of plausible category balances for the current
/// month, in major units.
///
/// `max_category_balance` is expressed in major units but compared against a
/// hundredfold threshold in milliunits (`* 100`, not `* 1000`). Existing
/// reports depend on that constant, so it is kept verbatim. The ceiling
/// exists to keep an implausibly large catch-all "available funds" category
/// from double counting as ordinary budgeted balance.
pub fn budgeted_balance(
    provider: &dyn BudgetProvider,
    clock: &dyn Clock,
    max_category_balance: i64,
) -> Result<f64> {
    let first_of_month = month_delta(clock.today(), 0);
    let month = provider.month(first_of_month)?;
    let to_be_budgeted = month.to_be_budgeted as f64 / MILLIUNITS;
    let ceiling = max_category_balance * 100;
    let current: i64 = month
        .categories
        .iter()
        .filter(|category| category.balance < ceiling)
        .map(|category| category.balance)
        .sum();
    let budgeted = current as f64 / MILLIUNITS + to_be_budgeted;
    debug!(%first_of_month, to_be_budgeted, budgeted, "computed budgeted balance");
    Ok(budgeted)
}

/// Mean of per-month sums of essential spend, in major units.
///
/// Category names must match the provider's labels exactly. Months with no
/// qualifying transaction contribute no row and are excluded from the mean;
/// if no month qualifies at all this is `EmptyAggregation` rather than a NaN
/// sentinel.
pub fn avg_monthly_spend(
    transactions: &[Transaction],
    essential_categories: &[String],
) -> Result<f64> {
    let mut by_month: BTreeMap<&Month, f64> = BTreeMap::new();
    for tx in transactions {
        let essential = essential_categories.iter().any(|c| *c == tx.category_name);
        if essential && tx.amount <= 0.0 && tx.amount >= SPEND_FLOOR {
            *by_month.entry(&tx.month).or_insert(0.0) += tx.amount;
        }
    }
    if by_month.is_empty() {
        return Err(BudgetError::EmptyAggregation(
            "no essential spend in the requested window".into(),
        ));
    }
    let mean = by_month.values().sum::<f64>() / by_month.len() as f64;
    debug!(months = by_month.len(), mean, "computed average monthly spend");
    Ok(mean)
}
