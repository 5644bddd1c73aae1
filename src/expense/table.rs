//! The list view: category filter, sort order, totals and the table of expenses.

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    collection::ExpenseCollection,
    endpoints,
    expense::{
        ADDED_EVENT, ExpenseListView, ListOptions, ListQuery, SortOrder, build_list_view,
    },
    html::{
        CATEGORY_BADGE_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency,
    },
};

/// The state needed to render the list view.
#[derive(Debug, Clone)]
pub struct ExpenseTableState {
    pub collection: ExpenseCollection,
}

impl FromRef<AppState> for ExpenseTableState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            collection: state.collection.clone(),
        }
    }
}

/// Render the list view fragment for the current snapshot.
pub async fn get_expense_table(
    State(state): State<ExpenseTableState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, Error> {
    let expenses = state.collection.snapshot()?;
    let view = build_list_view(&expenses, ListOptions::from(query));

    Ok(expense_table_view(&view).into_response())
}

/// The controls for the category filter and sort order.
///
/// A filter that matches no known category is still shown as the selected option.
fn list_controls_view(view: &ExpenseListView) -> Markup {
    let active_filter = view.options.category.as_deref();
    let selected_category = active_filter.map(str::to_lowercase);
    let selected_option = selected_category.as_ref().and_then(|selected| {
        view.categories
            .iter()
            .find(|category| category.to_lowercase() == *selected)
    });
    let unknown_filter = active_filter.filter(|_| selected_option.is_none());
    let sort = view.options.sort;

    html! {
        form
            id="expense-list-controls"
            hx-get=(endpoints::EXPENSE_TABLE)
            hx-trigger="change"
            hx-target="#expense-list"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="flex flex-wrap gap-4 items-end"
        {
            div
            {
                label for="category-filter" class=(FORM_LABEL_STYLE) { "Category" }

                select id="category-filter" name="category" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[active_filter.is_none()] { "All" }

                    @if let Some(filter) = unknown_filter {
                        option value=(filter) selected { (filter) }
                    }

                    @for category in &view.categories {
                        option
                            value=(category)
                            selected[selected_option == Some(category)]
                        {
                            (category)
                        }
                    }
                }
            }

            div
            {
                label for="sort-order" class=(FORM_LABEL_STYLE) { "Sort" }

                select id="sort-order" name="sort" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option
                        value=(SortOrder::Desc.as_str())
                        selected[sort == SortOrder::Desc]
                    {
                        "Newest First"
                    }
                    option
                        value=(SortOrder::Asc.as_str())
                        selected[sort == SortOrder::Asc]
                    {
                        "Oldest First"
                    }
                }
            }
        }
    }
}

fn category_summary_view(view: &ExpenseListView) -> Markup {
    html! {
        section class="w-full"
        {
            h3 class="text-lg font-semibold mb-2" { "Category Summary" }

            ul id="category-summary" class="space-y-1"
            {
                @for total in &view.totals_per_category {
                    li data-category-total=(total.category) class="flex justify-between"
                    {
                        span class=(CATEGORY_BADGE_STYLE) { (total.category) }
                        span class="font-mono" { (format_currency(total.total)) }
                    }
                }
            }
        }
    }
}

/// Render the list view as a fragment that reloads itself whenever an expense is added.
pub fn expense_table_view(view: &ExpenseListView) -> Markup {
    let refresh_trigger = format!("{ADDED_EVENT} from:body");

    html! {
        div
            id="expense-list"
            hx-get=(endpoints::EXPENSE_TABLE)
            hx-trigger=(refresh_trigger)
            hx-include="#expense-list-controls"
            hx-swap="outerHTML"
            class="w-full max-w-4xl space-y-6"
        {
            (list_controls_view(view))

            p id="expense-total" class="text-xl font-bold"
            {
                "Total: " (format_currency(view.total))
            }

            (category_summary_view(view))

            div class="relative overflow-x-auto shadow-md rounded"
            {
                table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        }
                    }

                    tbody
                    {
                        @for expense in &view.expenses {
                            tr class=(TABLE_ROW_STYLE) data-expense-row="true"
                            {
                                td class=(TABLE_CELL_STYLE) { (expense.id) }
                                td class={(TABLE_CELL_STYLE) " font-mono"} { (format_currency(expense.amount)) }
                                td class=(TABLE_CELL_STYLE)
                                {
                                    span class=(CATEGORY_BADGE_STYLE) { (expense.category) }
                                }
                                td class=(TABLE_CELL_STYLE) { (expense.description) }
                                td class=(TABLE_CELL_STYLE) { (expense.date) }
                            }
                        }

                        @if view.expenses.is_empty() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td
                                    colspan="5"
                                    data-empty-state="true"
                                    class="px-6 py-4 text-center"
                                {
                                    "No expenses to show."
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::extract::{Query, State};
    use scraper::Html;
    use time::macros::date;

    use crate::{
        collection::ExpenseCollection,
        expense::{ListQuery, SortOrder},
        test_utils::{
            StubExpenseStore, assert_content_type, assert_status_ok, assert_valid_html, expense,
            get_text_by_id, parse_html_fragment, select_all,
        },
    };

    use super::{ExpenseTableState, get_expense_table};

    async fn get_state() -> ExpenseTableState {
        let store = StubExpenseStore::with_expenses(vec![
            expense(1, 50.0, "Food", date!(2024 - 01 - 01)),
            expense(2, 30.0, "Food", date!(2024 - 02 - 01)),
            expense(3, 20.0, "Travel", date!(2024 - 01 - 15)),
        ]);

        ExpenseTableState {
            collection: ExpenseCollection::load(Arc::new(store)).await,
        }
    }

    async fn render(query: ListQuery) -> Html {
        let response = get_expense_table(State(get_state().await), Query(query))
            .await
            .unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        html
    }

    fn row_ids(html: &Html) -> Vec<String> {
        select_all(html, "tr[data-expense-row] td:first-child")
            .iter()
            .map(|cell| cell.text().collect::<String>())
            .collect()
    }

    fn category_totals(html: &Html) -> Vec<(String, String)> {
        select_all(html, "li[data-category-total]")
            .iter()
            .map(|item| {
                let spans: Vec<String> = item
                    .child_elements()
                    .map(|span| span.text().collect::<String>())
                    .collect();
                (spans[0].clone(), spans[1].clone())
            })
            .collect()
    }

    fn option_values(html: &Html, select_id: &str) -> Vec<String> {
        select_all(html, &format!("select#{select_id} option"))
            .iter()
            .map(|option| option.value().attr("value").unwrap_or_default().to_owned())
            .collect()
    }

    fn selected_value(html: &Html, select_id: &str) -> String {
        select_all(html, &format!("select#{select_id} option[selected]"))
            .first()
            .map(|option| option.value().attr("value").unwrap_or_default().to_owned())
            .unwrap_or_else(|| panic!("no selected option in #{select_id}"))
    }

    #[tokio::test]
    async fn renders_all_expenses_newest_first() {
        let html = render(ListQuery::default()).await;

        assert_eq!(row_ids(&html), vec!["2", "3", "1"]);
        assert_eq!(get_text_by_id(&html, "expense-total"), "Total: ₹100.00");
        assert_eq!(
            category_totals(&html),
            vec![
                ("Food".to_owned(), "₹80.00".to_owned()),
                ("Travel".to_owned(), "₹20.00".to_owned()),
            ]
        );
        assert_eq!(option_values(&html, "category-filter"), vec!["", "Food", "Travel"]);
        assert_eq!(selected_value(&html, "category-filter"), "");
        assert_eq!(selected_value(&html, "sort-order"), "desc");
    }

    #[tokio::test]
    async fn filters_by_category_and_keeps_all_options() {
        let html = render(ListQuery {
            category: Some("food".to_owned()),
            sort: None,
        })
        .await;

        assert_eq!(row_ids(&html), vec!["2", "1"]);
        assert_eq!(get_text_by_id(&html, "expense-total"), "Total: ₹80.00");
        assert_eq!(
            category_totals(&html),
            vec![("Food".to_owned(), "₹80.00".to_owned())]
        );
        assert_eq!(option_values(&html, "category-filter"), vec!["", "Food", "Travel"]);
        assert_eq!(selected_value(&html, "category-filter"), "Food");
    }

    #[tokio::test]
    async fn sorts_oldest_first() {
        let html = render(ListQuery {
            category: None,
            sort: Some(SortOrder::Asc),
        })
        .await;

        assert_eq!(row_ids(&html), vec!["1", "3", "2"]);
        assert_eq!(selected_value(&html, "sort-order"), "asc");
    }

    #[tokio::test]
    async fn renders_empty_state_when_nothing_matches() {
        let html = render(ListQuery {
            category: Some("Rent".to_owned()),
            sort: None,
        })
        .await;

        assert!(row_ids(&html).is_empty());
        let empty_state = select_all(&html, "td[data-empty-state]");
        assert_eq!(empty_state.len(), 1);
        assert_eq!(empty_state[0].value().attr("colspan"), Some("5"));
        assert_eq!(get_text_by_id(&html, "expense-total"), "Total: ₹0.00");
    }

    #[tokio::test]
    async fn unknown_category_filter_stays_selected() {
        let html = render(ListQuery {
            category: Some("Rent".to_owned()),
            sort: None,
        })
        .await;

        assert_eq!(
            option_values(&html, "category-filter"),
            vec!["", "Rent", "Food", "Travel"]
        );
        assert_eq!(selected_value(&html, "category-filter"), "Rent");
        assert_eq!(
            select_all(&html, "select#category-filter option[selected]").len(),
            1
        );
    }

    #[tokio::test]
    async fn list_reloads_on_added_event() {
        let html = render(ListQuery::default()).await;

        let list = select_all(&html, "#expense-list");
        assert_eq!(list.len(), 1);
        assert_eq!(
            list[0].value().attr("hx-trigger"),
            Some("expense-added from:body")
        );
        assert_eq!(list[0].value().attr("hx-get"), Some("/expenses/table"));
    }
}
