#![doc(test(attr(deny(warnings))))]

//! Runway computes emergency-fund adequacy metrics — cash balance, budgeted
//! balance, average monthly essential spend — from a YNAB-style budgeting API,
//! and reduces them to a single surplus/deficit number.

pub mod api;
pub mod emergency;
pub mod errors;
pub mod model;
pub mod normalize;
pub mod summary;
pub mod time;

pub use api::ynab::{AccessToken, YnabClient};
pub use api::BudgetProvider;
pub use emergency::{emergency_fund_status, EmergencyFundConfig, EmergencyFundReport};
pub use errors::{BudgetError, Result};
pub use model::{Month, Transaction};
pub use normalize::{fetch_transactions, NormalizeOptions};
pub use summary::{avg_monthly_spend, budgeted_balance, cash_balance};
pub use time::{Clock, SystemClock};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("runway=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Runway tracing initialized.");
    });
}
