//! Expense entry, validation and the list view.

mod core;
mod create_endpoint;
mod draft;
mod expenses_page;
mod form;
mod idempotency;
mod list;
mod submission;
mod table;

pub use core::{Expense, ExpenseId, NewExpense};
pub use create_endpoint::{
    ADDED_EVENT, create_expense_endpoint, reset_expense_form_endpoint, validate_field_endpoint,
};
pub use draft::{
    AMOUNT_ERROR, CATEGORY_ERROR, DATE_ERROR, Draft, DraftField, FieldErrors, validate_field,
};
pub use expenses_page::get_expenses_page;
#[cfg(test)]
pub use form::{CREATE_FAILED_MESSAGE, CREATED_MESSAGE};
pub use form::{FormMessage, expense_form_view, field_error_view};
pub use idempotency::{IDEMPOTENCY_KEY_HEADER, IdempotencyKey};
pub use list::{ExpenseListView, ListOptions, ListQuery, SortOrder, build_list_view};
pub use submission::{FormId, SubmissionLock, SubmitOutcome, submit_draft};
pub use table::{ExpenseTableState, expense_table_view, get_expense_table};
