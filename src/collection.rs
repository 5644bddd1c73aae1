//! The in-memory snapshot of the expense collection shared by the views.

use std::sync::{Arc, Mutex};

use crate::{Error, expense::Expense, store::ExpenseStore};

/// Owns the snapshot of every expense in the store.
///
/// The snapshot starts empty and is replaced wholesale by [ExpenseCollection::refresh].
#[derive(Debug, Clone)]
pub struct ExpenseCollection {
    store: Arc<dyn ExpenseStore>,
    snapshot: Arc<Mutex<Vec<Expense>>>,
}

impl ExpenseCollection {
    /// Create a collection with an empty snapshot.
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self {
            store,
            snapshot: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a collection and fetch its first snapshot.
    ///
    /// If the fetch fails the snapshot stays empty.
    pub async fn load(store: Arc<dyn ExpenseStore>) -> Self {
        let collection = Self::new(store);
        // The error has been logged already and the empty snapshot is still usable.
        let _ = collection.refresh().await;

        collection
    }

    /// Fetch every expense from the store and replace the snapshot.
    ///
    /// The snapshot is left unchanged if the fetch fails.
    ///
    /// # Errors
    /// Returns the error from the store or [Error::SnapshotLockError] if the
    /// snapshot lock is poisoned.
    pub async fn refresh(&self) -> Result<(), Error> {
        let expenses = self
            .store
            .list_expenses()
            .await
            .inspect_err(|error| tracing::error!("Could not fetch expenses: {error}"))?;

        let mut snapshot = self.snapshot.lock().map_err(|error| {
            tracing::error!("could not acquire expense snapshot lock: {error}");
            Error::SnapshotLockError
        })?;
        tracing::debug!("Replacing snapshot with {} expenses", expenses.len());
        *snapshot = expenses;

        Ok(())
    }

    /// A copy of the current snapshot.
    ///
    /// # Errors
    /// Returns [Error::SnapshotLockError] if the snapshot lock is poisoned.
    pub fn snapshot(&self) -> Result<Vec<Expense>, Error> {
        self.snapshot
            .lock()
            .map(|snapshot| snapshot.clone())
            .map_err(|error| {
                tracing::error!("could not acquire expense snapshot lock: {error}");
                Error::SnapshotLockError
            })
    }

    /// The store the snapshot is fetched from.
    pub fn store(&self) -> &dyn ExpenseStore {
        self.store.as_ref()
    }
}
