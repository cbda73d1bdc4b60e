//! Emergency-fund status: the headline surplus/deficit number and the
//! intermediate scalars it is built from.

use tracing::info;

use crate::api::BudgetProvider;
use crate::errors::Result;
use crate::normalize::{fetch_transactions, NormalizeOptions};
use crate::summary::{avg_monthly_spend, budgeted_balance, cash_balance};
use crate::time::Clock;

/// Tuning knobs for the emergency-fund calculation.
///
/// Defaults: a six-month lookback, a six-month fund target, and a 50,000
/// major-unit category ceiling.
#[derive(Debug, Clone)]
pub struct EmergencyFundConfig {
    /// Category labels counted as non-discretionary spend. Must match the
    /// provider's names exactly.
    pub essential_categories: Vec<String>,
    /// How many months to look back when sampling spend.
    pub n_months: u32,
    /// How many months of essential spend the fund should cover.
    pub emergency_fund_months: u32,
    /// Ceiling for plausible category balances, in major units.
    pub max_category_balance: i64,
    /// Split-flattening behavior for the transaction fetch.
    pub normalize: NormalizeOptions,
}

impl Default for EmergencyFundConfig {
    fn default() -> Self {
        Self {
            essential_categories: Vec::new(),
            n_months: 6,
            emergency_fund_months: 6,
            max_category_balance: 50_000,
            normalize: NormalizeOptions::default(),
        }
    }
}

impl EmergencyFundConfig {
    pub fn with_essential_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            essential_categories: categories.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// Full breakdown of an emergency-fund evaluation, all values in major units.
#[derive(Debug, Clone, PartialEq)]
pub struct EmergencyFundReport {
    /// Mean essential spend per sampled month; typically negative.
    pub monthly_spend: f64,
    /// Open on-budget cash.
    pub cash: f64,
    /// To-be-budgeted plus plausible category balances.
    pub budgeted: f64,
    /// `monthly_spend * emergency_fund_months`; negative target.
    pub emergency_fund_size: f64,
    /// `cash - budgeted`.
    pub unbudgeted_cash: f64,
    /// The headline number: positive is surplus over the fund target,
    /// negative is the amount still missing.
    pub non_emergency_cash: f64,
}

/// Evaluates the emergency fund and returns the full breakdown.
pub fn emergency_fund_report(
    provider: &dyn BudgetProvider,
    clock: &dyn Clock,
    config: &EmergencyFundConfig,
) -> Result<EmergencyFundReport> {
    let transactions = fetch_transactions(provider, clock, config.n_months, config.normalize)?;
    let monthly_spend = avg_monthly_spend(&transactions, &config.essential_categories)?;
    let cash = cash_balance(provider)?;
    let budgeted = budgeted_balance(provider, clock, config.max_category_balance)?;

    let emergency_fund_size = monthly_spend * config.emergency_fund_months as f64;
    let unbudgeted_cash = cash - budgeted;
    let non_emergency_cash = unbudgeted_cash - (emergency_fund_size * -1.0);

    info!(
        monthly_spend,
        cash, budgeted, emergency_fund_size, unbudgeted_cash, non_emergency_cash,
        "evaluated emergency fund"
    );

    Ok(EmergencyFundReport {
        monthly_spend,
        cash,
        budgeted,
        emergency_fund_size,
        unbudgeted_cash,
        non_emergency_cash,
    })
}

/// Evaluates the emergency fund and returns only the headline number:
/// the surplus over the fund target, or (when negative) the deficit.
pub fn emergency_fund_status(
    provider: &dyn BudgetProvider,
    clock: &dyn Clock,
    config: &EmergencyFundConfig,
) -> Result<f64> {
    emergency_fund_report(provider, clock, config).map(|report| report.non_emergency_cash)
}
