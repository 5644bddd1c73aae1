//! The page with the entry form and the list of expenses.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    expense::{
        Draft, ExpenseListView, ExpenseTableState, FieldErrors, FormId, ListOptions, ListQuery,
        build_list_view, expense_form_view, expense_table_view,
    },
    html::{FORM_CONTAINER_STYLE, PAGE_CONTAINER_STYLE, base},
};

/// Render the expenses page for the current snapshot.
pub async fn get_expenses_page(
    State(state): State<ExpenseTableState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, Error> {
    let expenses = state.collection.snapshot()?;
    let view = build_list_view(&expenses, ListOptions::from(query));

    Ok(expenses_view(&view).into_response())
}

fn expenses_view(view: &ExpenseListView) -> Markup {
    let form = expense_form_view(
        &FormId::generate(),
        &Draft::default(),
        &FieldErrors::default(),
        None,
    );
    let table = expense_table_view(view);

    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold" { "Expense Tracker" }

            div class=(FORM_CONTAINER_STYLE) { (form) }

            (table)
        }
    };

    base("Expenses", &content)
}
