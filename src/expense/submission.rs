//! Submitting a draft to the expense store, one submission per form at a time.

use std::{
    collections::HashSet,
    fmt::Display,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use rand::Rng;
use serde::Deserialize;

use crate::{
    Error,
    expense::{Draft, Expense, FieldErrors, IdempotencyKey},
    store::ExpenseStore,
};

/// Identifies one rendered entry form, e.g. `form-8214036`.
///
/// The id is rendered into the form's submit URL so that every submission
/// from the same form carries it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct FormId(String);

impl FormId {
    /// Create an id for a newly rendered form.
    pub fn generate() -> Self {
        Self(format!("form-{}", rand::rng().random::<u64>()))
    }

    /// The id as sent in the `form_id` query parameter.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FormId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Allows at most one submission to be in flight for each form.
#[derive(Debug, Clone, Default)]
pub struct SubmissionLock {
    in_flight: Arc<Mutex<HashSet<FormId>>>,
}

/// Marks a form's submission as in flight until dropped.
#[derive(Debug)]
pub struct SubmissionGuard {
    lock: SubmissionLock,
    form: FormId,
}

impl SubmissionLock {
    /// Create a lock with no submission in flight.
    pub fn new() -> Self {
        Self::default()
    }

    fn forms(&self) -> MutexGuard<'_, HashSet<FormId>> {
        // Inserts and removes are single calls, so the set is still valid after a panic.
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mark a submission from `form` as in flight, or return `None` if one
    /// from the same form already is.
    pub fn try_acquire(&self, form: &FormId) -> Option<SubmissionGuard> {
        self.forms().insert(form.clone()).then(|| SubmissionGuard {
            lock: self.clone(),
            form: form.clone(),
        })
    }

    /// Whether a submission from `form` is currently in flight.
    pub fn is_in_flight(&self, form: &FormId) -> bool {
        self.forms().contains(form)
    }
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        self.lock.forms().remove(&self.form);
    }
}

/// The result of [submit_draft].
#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The store created the expense.
    Created(Expense),
    /// The draft failed validation and nothing was sent to the store.
    Invalid(FieldErrors),
    /// The store could not be reached or rejected the expense.
    Failed(Error),
    /// The same form still had a submission in flight and nothing was sent to the store.
    InProgress,
}

/// Validate `draft` and, if it is valid, create it in `store` with a fresh
/// idempotency key.
///
/// Submissions from other forms are not affected by an in-flight submission
/// from `form`. The lock is held until the store responds, including when it
/// fails.
pub async fn submit_draft(
    draft: &Draft,
    form: &FormId,
    store: &dyn ExpenseStore,
    lock: &SubmissionLock,
) -> SubmitOutcome {
    let new_expense = match draft.validate() {
        Ok(new_expense) => new_expense,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };

    let Some(_guard) = lock.try_acquire(form) else {
        tracing::warn!("Rejected expense submission from {form} while another is in flight");
        return SubmitOutcome::InProgress;
    };

    let key = IdempotencyKey::generate();

    match store.create_expense(&new_expense, &key).await {
        Ok(expense) => {
            tracing::info!("Expense created: {expense:?}");
            SubmitOutcome::Created(expense)
        }
        Err(error) => {
            tracing::error!("Could not create expense: {error}");
            SubmitOutcome::Failed(error)
        }
    }
}
