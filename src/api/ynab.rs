//! `ureq`-backed client for the YNAB v1 API.

use std::fmt;
use std::time::Duration;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::errors::{BudgetError, Result};
use crate::model::{RawAccount, RawMonth, RawTransaction};

use super::BudgetProvider;

const DEFAULT_BASE_URL: &str = "https://api.youneedabudget.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Opaque bearer token for the budgeting service.
///
/// The token is deliberately excluded from `Debug` output so it cannot leak
/// through logs or error messages.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Synchronous HTTP client for the `last-used` budget of the token's owner.
pub struct YnabClient {
    agent: ureq::Agent,
    base_url: String,
    token: AccessToken,
}

impl YnabClient {
    pub fn new(token: AccessToken) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Points the client at a non-default host, e.g. a local test server.
    pub fn with_base_url(token: AccessToken, base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}/budgets/last-used/{}", self.base_url, path);
        debug!(%path, "fetching from budgeting service");
        let mut request = self
            .agent
            .get(&url)
            .set("Authorization", &self.token.bearer());
        for (key, value) in query {
            request = request.query(key, value);
        }
        let response = request.call().map_err(map_http_error)?;
        response
            .into_json::<T>()
            .map_err(|err| BudgetError::UnexpectedPayload(err.to_string()))
    }
}

fn map_http_error(err: ureq::Error) -> BudgetError {
    match err {
        ureq::Error::Status(status, response) => BudgetError::UpstreamStatus {
            status,
            message: response.status_text().to_string(),
        },
        ureq::Error::Transport(transport) => BudgetError::Upstream(transport.to_string()),
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct TransactionsData {
    transactions: Vec<RawTransaction>,
}

#[derive(Deserialize)]
struct AccountsData {
    accounts: Vec<RawAccount>,
}

#[derive(Deserialize)]
struct MonthData {
    month: RawMonth,
}

impl BudgetProvider for YnabClient {
    fn transactions(&self, since_date: NaiveDate) -> Result<Vec<RawTransaction>> {
        let since = since_date.format("%Y-%m-%d").to_string();
        let envelope: Envelope<TransactionsData> =
            self.get("transactions", &[("since_date", since)])?;
        Ok(envelope.data.transactions)
    }

    fn accounts(&self) -> Result<Vec<RawAccount>> {
        let envelope: Envelope<AccountsData> = self.get("accounts", &[])?;
        Ok(envelope.data.accounts)
    }

    fn month(&self, first_of_month: NaiveDate) -> Result<RawMonth> {
        let path = format!("months/{}", first_of_month.format("%Y-%m-%d"));
        let envelope: Envelope<MonthData> = self.get(&path, &[])?;
        Ok(envelope.data.month)
    }
}
