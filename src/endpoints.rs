//! The endpoint URIs served by the application.

/// The root route which redirects to the expenses page.
pub const ROOT: &str = "/";
/// The page with the entry form and the list of expenses.
pub const EXPENSES_VIEW: &str = "/expenses";
/// The fragment with the expense filters, totals and table.
pub const EXPENSE_TABLE: &str = "/expenses/table";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route for submitting a new expense.
pub const EXPENSES_API: &str = "/api/expenses";
/// The route for validating a single field of the entry form.
pub const VALIDATE_EXPENSE_FIELD: &str = "/api/expenses/validate";
/// The route for clearing the entry form and reloading the expenses.
pub const RESET_EXPENSE_FORM: &str = "/api/expenses/reset";
