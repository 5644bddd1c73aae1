//! Filtering, sorting and totalling of the expense collection for the list view.
//!
//! Every function here is a pure derivation from the collection and the view
//! options: the input slice is never mutated.

use serde::{Deserialize, Deserializer, Serialize};

use crate::expense::Expense;

/// The order in which expenses are listed by date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first.
    #[default]
    Desc,
}

impl SortOrder {
    /// The value used for this order in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Parse a query string value, ignoring case. Unknown values give `None`.
    pub fn from_query(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// The query parameters for the list view, e.g. `?category=food&sort=asc`.
///
/// An unrecognised `sort` value is treated as if it was missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_sort")]
    pub sort: Option<SortOrder>,
}

fn deserialize_sort<'de, D>(deserializer: D) -> Result<Option<SortOrder>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .as_deref()
        .and_then(SortOrder::from_query))
}

/// The view state of the list: which category to show and in what order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Only show expenses in this category. `None` shows all categories.
    pub category: Option<String>,
    pub sort: SortOrder,
}

impl From<ListQuery> for ListOptions {
    fn from(query: ListQuery) -> Self {
        Self {
            category: query.category.filter(|category| !category.is_empty()),
            sort: query.sort.unwrap_or_default(),
        }
    }
}

/// The sum of the amounts of one category in the filtered expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Everything the list view renders, derived from a snapshot of the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseListView {
    /// The filtered expenses in the requested order.
    pub expenses: Vec<Expense>,
    /// The sum of the amounts of `expenses`.
    pub total: f64,
    /// The totals of each category in `expenses`, in order of first appearance.
    pub totals_per_category: Vec<CategoryTotal>,
    /// The distinct categories of the whole collection, ignoring the filter.
    pub categories: Vec<String>,
    /// The options used to derive this view.
    pub options: ListOptions,
}

/// Keep the expenses whose category equals `category`, ignoring case.
///
/// `None` keeps every expense.
pub fn filter_expenses(expenses: &[Expense], category: Option<&str>) -> Vec<Expense> {
    match category {
        None => expenses.to_vec(),
        Some(category) => {
            let category = category.to_lowercase();

            expenses
                .iter()
                .filter(|expense| expense.category.to_lowercase() == category)
                .cloned()
                .collect()
        }
    }
}

/// Order `expenses` by date in place.
pub fn sort_expenses(expenses: &mut [Expense], order: SortOrder) {
    match order {
        SortOrder::Asc => expenses.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Desc => expenses.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}

/// The sum of the amounts of `expenses`.
pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// The sum of the amounts for each category label, in order of first appearance.
///
/// Labels are compared exactly, so "Food" and "food" get separate totals.
pub fn totals_per_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals
            .iter_mut()
            .find(|total| total.category == expense.category)
        {
            Some(total) => total.total += expense.amount,
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
            }),
        }
    }

    totals
}

/// The distinct category labels of `expenses`, in order of first appearance.
pub fn category_options(expenses: &[Expense]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();

    for expense in expenses {
        if !categories.contains(&expense.category) {
            categories.push(expense.category.clone());
        }
    }

    categories
}

/// Derive the filtered, sorted and totalled view of `expenses`.
pub fn build_list_view(expenses: &[Expense], options: ListOptions) -> ExpenseListView {
    let mut filtered = filter_expenses(expenses, options.category.as_deref());
    sort_expenses(&mut filtered, options.sort);

    ExpenseListView {
        total: total_amount(&filtered),
        totals_per_category: totals_per_category(&filtered),
        categories: category_options(expenses),
        expenses: filtered,
        options,
    }
}
