use std::{
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use time::Date;

use crate::{
    Error,
    expense::{Expense, ExpenseId, IdempotencyKey, NewExpense},
    store::{ExpenseStore, InMemoryExpenseStore},
};

/// Build an expense with an empty description.
pub(crate) fn expense(id: ExpenseId, amount: f64, category: &str, date: Date) -> Expense {
    Expense {
        id,
        amount,
        category: category.to_owned(),
        description: String::new(),
        date,
    }
}

/// An [ExpenseStore] that counts calls and can be told to fail.
///
/// Listing returns `expenses` as is, so tests control the order.
#[derive(Debug, Default)]
pub(crate) struct StubExpenseStore {
    pub expenses: Mutex<Vec<Expense>>,
    pub keys: Mutex<Vec<IdempotencyKey>>,
    pub list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    list_error: Mutex<Option<Error>>,
    create_error: Mutex<Option<Error>>,
    create_delay: Option<Duration>,
    created: InMemoryExpenseStore,
}

impl StubExpenseStore {
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            created: InMemoryExpenseStore::with_expenses(expenses.clone()),
            expenses: Mutex::new(expenses),
            ..Default::default()
        }
    }

    pub fn failing_create(error: Error) -> Self {
        let store = Self::default();
        *store.create_error.lock().unwrap() = Some(error);
        store
    }

    /// A store that waits for `delay` before answering each create request.
    pub fn slow_create(delay: Duration) -> Self {
        Self {
            create_delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn fail_list(&self, error: Error) {
        *self.list_error.lock().unwrap() = Some(error);
    }
}

#[async_trait]
impl ExpenseStore for StubExpenseStore {
    async fn list_expenses(&self) -> Result<Vec<Expense>, Error> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.list_error.lock().unwrap().clone() {
            return Err(error);
        }

        Ok(self.expenses.lock().unwrap().clone())
    }

    async fn create_expense(
        &self,
        expense: &NewExpense,
        key: &IdempotencyKey,
    ) -> Result<Expense, Error> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.keys.lock().unwrap().push(key.clone());

        if let Some(delay) = self.create_delay {
            tokio::time::sleep(delay).await;
        }

        let create_error = self.create_error.lock().unwrap().clone();
        if let Some(error) = create_error {
            return Err(error);
        }

        let created = self.created.create_expense(expense, key).await?;
        self.expenses.lock().unwrap().insert(0, created.clone());

        Ok(created)
    }
}
