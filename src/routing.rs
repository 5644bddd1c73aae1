//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    expense::{
        create_expense_endpoint, get_expense_table, get_expenses_page,
        reset_expense_form_endpoint, validate_field_endpoint,
    },
    not_found::get_404_not_found,
    server_error::get_server_error_page,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(endpoints::EXPENSE_TABLE, get(get_expense_table))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_server_error_page),
        )
        .route(endpoints::EXPENSES_API, post(create_expense_endpoint))
        .route(
            endpoints::VALIDATE_EXPENSE_FIELD,
            post(validate_field_endpoint),
        )
        .route(
            endpoints::RESET_EXPENSE_FORM,
            post(reset_expense_form_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the expenses page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::EXPENSES_VIEW)
}
