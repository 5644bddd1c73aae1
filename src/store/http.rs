//! An [ExpenseStore] backed by a remote HTTP API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use url::Url;

use crate::{
    Error,
    expense::{Expense, IDEMPOTENCY_KEY_HEADER, IdempotencyKey, NewExpense},
    store::ExpenseStore,
};

/// Talks to an expense API that serves `GET /expenses` and `POST /expenses`.
///
/// No request timeout is set and failed requests are not retried.
#[derive(Debug, Clone)]
pub struct HttpExpenseStore {
    client: Client,
    base_url: Url,
}

impl HttpExpenseStore {
    /// Create a store for the API at `base_url`, e.g. `http://localhost:8000/`.
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a store that sends requests with `client`.
    pub fn with_client(client: Client, mut base_url: Url) -> Self {
        // Without the trailing slash `join` would replace the last path segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self { client, base_url }
    }

    fn expenses_url(&self) -> Result<Url, Error> {
        self.base_url
            .join("expenses")
            .map_err(|error| Error::InvalidStoreUrl(format!("{}: {error}", self.base_url)))
    }
}

fn check_status(response: Response) -> Result<Response, Error> {
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::StoreStatus(status.as_u16()))
    }
}

#[async_trait]
impl ExpenseStore for HttpExpenseStore {
    async fn list_expenses(&self) -> Result<Vec<Expense>, Error> {
        let url = self.expenses_url()?;
        tracing::debug!("Fetching expenses from {url}");

        let response = self
            .client
            .get(url)
            .query(&[("sort", "date_desc")])
            .send()
            .await?;
        let expenses = check_status(response)?.json::<Vec<Expense>>().await?;

        tracing::debug!("Fetched {} expenses", expenses.len());

        Ok(expenses)
    }

    async fn create_expense(
        &self,
        expense: &NewExpense,
        key: &IdempotencyKey,
    ) -> Result<Expense, Error> {
        let url = self.expenses_url()?;
        tracing::debug!("Creating expense at {url} with idempotency key {key}");

        let response = self
            .client
            .post(url)
            .header(IDEMPOTENCY_KEY_HEADER, key.as_str())
            .json(expense)
            .send()
            .await?;
        let created = check_status(response)?.json::<Expense>().await?;

        tracing::info!("Created expense {}", created.id);

        Ok(created)
    }
}
