//! An [ExpenseStore] that keeps expenses in process memory.

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use time::{Date, macros::format_description};

use crate::{
    Error,
    expense::{Expense, ExpenseId, IdempotencyKey, NewExpense},
    store::ExpenseStore,
};

#[derive(Debug)]
struct Inner {
    expenses: Vec<Expense>,
    created_by_key: HashMap<IdempotencyKey, ExpenseId>,
    next_id: ExpenseId,
}

/// Stores expenses in memory, for tests and for running without a remote API.
///
/// Expenses get sequential IDs starting at 1. Creating an expense with a key
/// that was already used returns the expense created for that key.
#[derive(Debug)]
pub struct InMemoryExpenseStore {
    inner: Mutex<Inner>,
}

impl Default for InMemoryExpenseStore {
    fn default() -> Self {
        Self::with_expenses(Vec::new())
    }
}

impl InMemoryExpenseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `expenses`.
    ///
    /// New expenses get IDs after the largest ID in `expenses`.
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        let next_id = expenses.iter().map(|expense| expense.id).max().unwrap_or(0) + 1;

        Self {
            inner: Mutex::new(Inner {
                expenses,
                created_by_key: HashMap::new(),
                next_id,
            }),
        }
    }
}

fn parse_date(text: &str) -> Option<Date> {
    Date::parse(text, format_description!("[year]-[month]-[day]")).ok()
}

#[async_trait]
impl ExpenseStore for InMemoryExpenseStore {
    async fn list_expenses(&self) -> Result<Vec<Expense>, Error> {
        let inner = self.inner.lock().map_err(|error| {
            tracing::error!("could not acquire in-memory store lock: {error}");
            Error::StoreLockError
        })?;

        let mut expenses = inner.expenses.clone();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        Ok(expenses)
    }

    async fn create_expense(
        &self,
        expense: &NewExpense,
        key: &IdempotencyKey,
    ) -> Result<Expense, Error> {
        let mut inner = self.inner.lock().map_err(|error| {
            tracing::error!("could not acquire in-memory store lock: {error}");
            Error::StoreLockError
        })?;

        let existing = inner
            .created_by_key
            .get(key)
            .and_then(|id| inner.expenses.iter().find(|existing| existing.id == *id));
        if let Some(existing) = existing {
            tracing::debug!("Idempotency key {key} already used for expense {}", existing.id);
            return Ok(existing.clone());
        }

        let is_valid_amount = expense.amount.is_finite() && expense.amount > 0.0;
        let date = parse_date(&expense.date);
        let (true, Some(date), false) = (is_valid_amount, date, expense.category.trim().is_empty())
        else {
            return Err(Error::StoreStatus(422));
        };

        let id = inner.next_id;
        inner.next_id += 1;

        let created = Expense {
            id,
            amount: expense.amount,
            category: expense.category.clone(),
            description: expense.description.clone(),
            date,
        };
        inner.expenses.push(created.clone());
        inner.created_by_key.insert(key.clone(), id);

        Ok(created)
    }
}
