//! The in-progress expense held by the entry form and the rules for validating it.

use serde::{Deserialize, Serialize};

use crate::expense::NewExpense;

pub const AMOUNT_ERROR: &str = "Amount must be greater than 0";
pub const CATEGORY_ERROR: &str = "Category is required";
pub const DATE_ERROR: &str = "Date is required";

/// The fields of the entry form exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
}

/// Names a single field of a [Draft].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Amount,
    Category,
    Description,
    Date,
}

impl DraftField {
    /// The name of the field in forms and query strings.
    pub fn name(self) -> &'static str {
        match self {
            DraftField::Amount => "amount",
            DraftField::Category => "category",
            DraftField::Description => "description",
            DraftField::Date => "date",
        }
    }
}

/// The error message for each field that failed validation.
///
/// `description` has no constraints so it never has an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub amount: Option<&'static str>,
    pub category: Option<&'static str>,
    pub date: Option<&'static str>,
}

impl FieldErrors {
    /// Whether every field passed validation.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.category.is_none() && self.date.is_none()
    }

    /// The error message for `field`, if any.
    pub fn get(&self, field: DraftField) -> Option<&'static str> {
        match field {
            DraftField::Amount => self.amount,
            DraftField::Category => self.category,
            DraftField::Description => None,
            DraftField::Date => self.date,
        }
    }
}

impl Draft {
    /// The text entered for `field`.
    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Amount => &self.amount,
            DraftField::Category => &self.category,
            DraftField::Description => &self.description,
            DraftField::Date => &self.date,
        }
    }

    /// Check every field of the draft.
    ///
    /// # Errors
    ///
    /// Returns the error message for each invalid field if any field is invalid.
    pub fn validate(&self) -> Result<NewExpense, FieldErrors> {
        let errors = FieldErrors {
            amount: validate_field(DraftField::Amount, &self.amount),
            category: validate_field(DraftField::Category, &self.category),
            date: validate_field(DraftField::Date, &self.date),
        };

        match parse_amount(&self.amount) {
            Some(amount) if errors.is_empty() => Ok(NewExpense {
                amount,
                category: self.category.clone(),
                description: self.description.clone(),
                date: self.date.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// Check a single field, returning the error message if `value` is invalid.
pub fn validate_field(field: DraftField, value: &str) -> Option<&'static str> {
    match field {
        DraftField::Amount => parse_amount(value).is_none().then_some(AMOUNT_ERROR),
        DraftField::Category => value.trim().is_empty().then_some(CATEGORY_ERROR),
        DraftField::Description => None,
        DraftField::Date => value.is_empty().then_some(DATE_ERROR),
    }
}

/// Parse `text` as an amount of money, returning `None` unless it is a finite
/// number strictly greater than zero.
pub fn parse_amount(text: &str) -> Option<f64> {
    let amount: f64 = text.trim().parse().ok()?;

    (amount.is_finite() && amount > 0.0).then_some(amount)
}

#[cfg(test)]
mod tests {
    use super::{
        AMOUNT_ERROR, CATEGORY_ERROR, DATE_ERROR, Draft, DraftField, FieldErrors, parse_amount,
        validate_field,
    };
    use crate::expense::NewExpense;

    fn valid_draft() -> Draft {
        Draft {
            amount: "12.50".to_owned(),
            category: "Food".to_owned(),
            description: "Lunch".to_owned(),
            date: "2024-01-01".to_owned(),
        }
    }

    #[test]
    fn valid_draft_becomes_new_expense() {
        let new_expense = valid_draft().validate().unwrap();

        assert_eq!(
            new_expense,
            NewExpense {
                amount: 12.5,
                category: "Food".to_owned(),
                description: "Lunch".to_owned(),
                date: "2024-01-01".to_owned(),
            }
        );
    }

    #[test]
    fn rejects_non_positive_or_non_numeric_amounts() {
        for amount in ["-5", "0", "0.00", "-0.01", "", "   ", "abc", "NaN", "inf", "12,50"] {
            let draft = Draft {
                amount: amount.to_owned(),
                ..valid_draft()
            };

            let errors = draft.validate().unwrap_err();

            assert_eq!(
                errors.amount,
                Some(AMOUNT_ERROR),
                "want amount error for {amount:?}"
            );
        }
    }

    #[test]
    fn accepts_positive_amounts() {
        for amount in ["0.01", "1", "05", "12.50", " 7 ", "1e3"] {
            assert_eq!(
                validate_field(DraftField::Amount, amount),
                None,
                "want no amount error for {amount:?}"
            );
        }
    }

    #[test]
    fn amount_with_leading_zero_is_compared_numerically() {
        assert_eq!(parse_amount("05"), Some(5.0));
        assert_eq!(parse_amount("00"), None);
    }

    #[test]
    fn rejects_blank_category() {
        for category in ["", " ", "\t\n"] {
            let draft = Draft {
                category: category.to_owned(),
                ..valid_draft()
            };

            let errors = draft.validate().unwrap_err();

            assert_eq!(errors.category, Some(CATEGORY_ERROR));
            assert_eq!(errors.amount, None);
            assert_eq!(errors.date, None);
        }
    }

    #[test]
    fn any_non_blank_category_passes() {
        for category in ["X", " Food ", "🍕"] {
            assert_eq!(validate_field(DraftField::Category, category), None);
        }
    }

    #[test]
    fn rejects_empty_date_but_accepts_any_other_value() {
        assert_eq!(validate_field(DraftField::Date, ""), Some(DATE_ERROR));
        assert_eq!(validate_field(DraftField::Date, "2024-01-01"), None);
        assert_eq!(validate_field(DraftField::Date, "not a date"), None);
    }

    #[test]
    fn description_never_blocks_submission() {
        for description in ["", " ", "a very long description ".repeat(50).as_str()] {
            let draft = Draft {
                description: description.to_owned(),
                ..valid_draft()
            };

            assert!(draft.validate().is_ok());
            assert_eq!(validate_field(DraftField::Description, description), None);
        }
    }

    #[test]
    fn negative_amount_only_flags_amount() {
        let draft = Draft {
            amount: "-5".to_owned(),
            category: "X".to_owned(),
            description: "".to_owned(),
            date: "2024-01-01".to_owned(),
        };

        let errors = draft.validate().unwrap_err();

        assert_eq!(
            errors,
            FieldErrors {
                amount: Some(AMOUNT_ERROR),
                category: None,
                date: None,
            }
        );
    }

    #[test]
    fn empty_draft_flags_every_required_field() {
        let errors = Draft::default().validate().unwrap_err();

        assert_eq!(errors.get(DraftField::Amount), Some(AMOUNT_ERROR));
        assert_eq!(errors.get(DraftField::Category), Some(CATEGORY_ERROR));
        assert_eq!(errors.get(DraftField::Date), Some(DATE_ERROR));
        assert_eq!(errors.get(DraftField::Description), None);
    }
}
