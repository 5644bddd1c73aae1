//! Implements a struct that holds the state of the web server.

use std::sync::Arc;

use crate::{collection::ExpenseCollection, expense::SubmissionLock, store::ExpenseStore};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The snapshot of the expense collection and the store it is fetched from.
    pub collection: ExpenseCollection,

    /// Tracks which entry forms have an expense submission in flight.
    pub submission_lock: SubmissionLock,
}

impl AppState {
    /// Create a new [AppState] and fetch the first snapshot from `store`.
    ///
    /// A failed fetch is logged and leaves the snapshot empty.
    pub async fn load(store: Arc<dyn ExpenseStore>) -> Self {
        Self {
            collection: ExpenseCollection::load(store).await,
            submission_lock: SubmissionLock::new(),
        }
    }
}
