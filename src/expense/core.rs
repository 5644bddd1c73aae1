//! Defines the expense record as stored by the remote expense store.

use serde::{Deserialize, Deserializer, Serialize};
use time::Date;

/// The identifier the expense store assigns to an expense.
pub type ExpenseId = i64;

/// Money spent on something, e.g. groceries or a train ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID assigned by the expense store.
    pub id: ExpenseId,
    /// The amount of money spent, always greater than zero.
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    /// The label used to group expenses, e.g. "Food" or "Travel".
    pub category: String,
    /// Free text describing what the money was spent on.
    #[serde(default, deserialize_with = "deserialize_description")]
    pub description: String,
    /// When the money was spent.
    pub date: Date,
}

/// The body sent to the expense store to create an expense.
///
/// The category, description and date are sent exactly as entered in the
/// entry form. The amount has already been checked to be a positive number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    /// The amount of money spent, greater than zero.
    pub amount: f64,
    /// The category as entered.
    pub category: String,
    /// The description as entered, possibly empty.
    pub description: String,
    /// The date as entered, e.g. "2024-01-15".
    pub date: String,
}

/// Decimal amounts are serialized as strings by some stores (e.g. "12.50"),
/// so accept either a JSON number or a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum AmountValue {
    Number(f64),
    Text(String),
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match AmountValue::deserialize(deserializer)? {
        AmountValue::Number(amount) => Ok(amount),
        AmountValue::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|error| serde::de::Error::custom(format!("invalid amount {text:?}: {error}"))),
    }
}

fn deserialize_description<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
