//! Transaction fetch and normalization pipeline.

use tracing::{debug, warn};

use crate::api::BudgetProvider;
use crate::errors::Result;
use crate::model::{Month, RawTransaction, Transaction};
use crate::time::{month_delta, Clock};

/// Category label substring marking a split parent transaction.
const SPLIT_MARKER: &str = "Split";

/// Milliunits per major currency unit.
const MILLIUNITS: f64 = 1000.0;

/// Controls how split parents are flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// When true (the default), a split parent is replaced by its FIRST child
    /// only and the remaining children are discarded. The truncation loses
    /// data, but existing reports depend on the resulting numbers, so it
    /// stays the default. Set to false to expand a split into all of its
    /// children.
    pub legacy_first_child_only: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            legacy_first_child_only: true,
        }
    }
}

/// Fetches and normalizes all transactions from the last `n_months` months.
///
/// `since_date` is the first day of the month `n_months` before the current
/// month. The upper month bound is that same target month, not the current
/// month, so with a nonzero lookback the effective window is the target month
/// alone. Existing reports depend on this window; widen it by lowering
/// `n_months`, not by changing the bound.
pub fn fetch_transactions(
    provider: &dyn BudgetProvider,
    clock: &dyn Clock,
    n_months: u32,
    options: NormalizeOptions,
) -> Result<Vec<Transaction>> {
    let since_date = month_delta(clock.today(), -(n_months as i32));
    let end_month = Month::from_date(since_date);
    let raw = provider.transactions(since_date)?;
    debug!(
        count = raw.len(),
        %since_date,
        end_month = %end_month,
        "fetched transactions"
    );
    Ok(normalize(raw, &end_month, options))
}

/// Pure normalization transform: flatten splits, derive month buckets, rescale
/// milliunits to major units, and drop records past `end_month`.
pub fn normalize(
    raw: Vec<RawTransaction>,
    end_month: &Month,
    options: NormalizeOptions,
) -> Vec<Transaction> {
    let mut normalized = Vec::with_capacity(raw.len());
    for record in raw {
        let category = record.category_name.clone().unwrap_or_default();
        if category.contains(SPLIT_MARKER) {
            if record.subtransactions.is_empty() {
                warn!(date = %record.date, "split transaction without children, dropping");
                continue;
            }
            let children: &[_] = if options.legacy_first_child_only {
                &record.subtransactions[..1]
            } else {
                &record.subtransactions[..]
            };
            for child in children {
                normalized.push(Transaction {
                    date: record.date,
                    month: Month::from_date(record.date),
                    category_name: child.category_name.clone().unwrap_or_default(),
                    amount: child.amount as f64 / MILLIUNITS,
                });
            }
        } else {
            normalized.push(Transaction {
                date: record.date,
                month: Month::from_date(record.date),
                category_name: category,
                amount: record.amount as f64 / MILLIUNITS,
            });
        }
    }
    normalized.retain(|tx| &tx.month <= end_month);
    normalized
}
