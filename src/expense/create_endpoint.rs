//! Endpoints behind the entry form: submit, validate a field and reset.

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HX_TRIGGER;
use serde::Deserialize;

use crate::{
    AppState, Error,
    collection::ExpenseCollection,
    expense::{
        Draft, DraftField, FieldErrors, FormId, FormMessage, SubmissionLock, SubmitOutcome,
        expense_form_view, field_error_view, submit_draft, validate_field,
    },
};

/// The htmx event raised after an expense is added or the form is reset.
///
/// The list view listens for this event to reload itself.
pub const ADDED_EVENT: &str = "expense-added";

/// The state needed for submitting expenses.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    pub collection: ExpenseCollection,
    pub submission_lock: SubmissionLock,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            collection: state.collection.clone(),
            submission_lock: state.submission_lock.clone(),
        }
    }
}

/// The query parameters that identify the entry form a request came from.
#[derive(Debug, Default, Deserialize)]
pub struct FormQuery {
    pub form_id: Option<FormId>,
}

impl FormQuery {
    /// The form id sent with the request, or a new one if there was none.
    fn into_form_id(self) -> FormId {
        self.form_id.unwrap_or_else(FormId::generate)
    }
}

/// A route handler for submitting the entry form.
///
/// Responds with the form to swap in: cleared on success, or with the draft
/// kept on a validation error or store failure. A second submission from the
/// same form while the first is in flight gets a conflict alert.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Query(query): Query<FormQuery>,
    Form(draft): Form<Draft>,
) -> Response {
    let form = query.into_form_id();
    let outcome = submit_draft(
        &draft,
        &form,
        state.collection.store(),
        &state.submission_lock,
    )
    .await;

    match outcome {
        SubmitOutcome::Created(_) => {
            // A failed refresh is logged and the old snapshot is kept.
            let _ = state.collection.refresh().await;

            (
                [(HX_TRIGGER, ADDED_EVENT)],
                expense_form_view(
                    &form,
                    &Draft::default(),
                    &FieldErrors::default(),
                    Some(FormMessage::Created),
                ),
            )
                .into_response()
        }
        SubmitOutcome::Invalid(errors) => {
            expense_form_view(&form, &draft, &errors, None).into_response()
        }
        SubmitOutcome::Failed(_) => expense_form_view(
            &form,
            &draft,
            &FieldErrors::default(),
            Some(FormMessage::CreateFailed),
        )
        .into_response(),
        SubmitOutcome::InProgress => Error::SubmissionInProgress.into_alert_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct ValidateQuery {
    pub field: DraftField,
}

/// A route handler that checks a single field of the entry form and responds
/// with its error element.
pub async fn validate_field_endpoint(
    Query(query): Query<ValidateQuery>,
    Form(draft): Form<Draft>,
) -> Response {
    let error = validate_field(query.field, draft.value(query.field));

    field_error_view(query.field, error).into_response()
}

/// A route handler that clears the entry form and reloads the expenses.
pub async fn reset_expense_form_endpoint(
    State(state): State<CreateExpenseState>,
    Query(query): Query<FormQuery>,
) -> Response {
    // A failed refresh is logged and the old snapshot is kept.
    let _ = state.collection.refresh().await;

    (
        [(HX_TRIGGER, ADDED_EVENT)],
        expense_form_view(
            &query.into_form_id(),
            &Draft::default(),
            &FieldErrors::default(),
            None,
        ),
    )
        .into_response()
}
