//! Access to the expense store that holds the canonical list of expenses.

mod http;
mod in_memory;

use std::fmt::Debug;

use async_trait::async_trait;

pub use http::HttpExpenseStore;
pub use in_memory::InMemoryExpenseStore;

use crate::{
    Error,
    expense::{Expense, IdempotencyKey, NewExpense},
};

/// Reads and creates expenses.
#[async_trait]
pub trait ExpenseStore: Debug + Send + Sync {
    /// Get every expense, newest first.
    ///
    /// # Errors
    /// Returns an error if the store cannot be reached, responds with an error
    /// status or responds with a body that is not a list of expenses.
    async fn list_expenses(&self) -> Result<Vec<Expense>, Error>;

    /// Create an expense.
    ///
    /// Repeating a request with the same `key` returns the expense created by
    /// the first request instead of creating a duplicate.
    ///
    /// # Errors
    /// Returns an error if the store cannot be reached or rejects the expense.
    async fn create_expense(
        &self,
        expense: &NewExpense,
        key: &IdempotencyKey,
    ) -> Result<Expense, Error>;
}
