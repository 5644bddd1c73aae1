//! The expense entry form.

use maud::{Markup, html};
use url::form_urlencoded;

use crate::{
    endpoints,
    expense::{Draft, DraftField, FieldErrors, FormId},
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_ERROR_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, loading_spinner,
    },
};

/// The message shown after the store creates an expense.
pub const CREATED_MESSAGE: &str = "Expense created!";
/// The message shown when the store could not create an expense.
pub const CREATE_FAILED_MESSAGE: &str = "Error creating expense";

/// The outcome message shown under the form buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    Created,
    CreateFailed,
}

impl FormMessage {
    fn text(self) -> &'static str {
        match self {
            FormMessage::Created => CREATED_MESSAGE,
            FormMessage::CreateFailed => CREATE_FAILED_MESSAGE,
        }
    }

    fn style(self) -> &'static str {
        match self {
            FormMessage::Created => "text-green-600 dark:text-green-400",
            FormMessage::CreateFailed => "text-red-600 dark:text-red-400",
        }
    }
}

/// The element that holds the validation error for `field`.
pub fn field_error_view(field: DraftField, error: Option<&str>) -> Markup {
    html! {
        p id={(field.name()) "-error"} class=(FORM_ERROR_STYLE)
        {
            @if let Some(error) = error {
                (error)
            }
        }
    }
}

fn field_view(
    field: DraftField,
    label: &str,
    input_type: &str,
    draft: &Draft,
    errors: &FieldErrors,
) -> Markup {
    let name = field.name();
    let validate_endpoint = format!("{}?field={name}", endpoints::VALIDATE_EXPENSE_FIELD);
    let error_target = format!("#{name}-error");
    let step = (field == DraftField::Amount).then_some("0.01");

    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            input
                id=(name)
                name=(name)
                type=(input_type)
                step=[step]
                value=(draft.value(field))
                hx-post=(validate_endpoint)
                hx-trigger="change"
                hx-target=(error_target)
                hx-swap="outerHTML"
                class=(FORM_TEXT_INPUT_STYLE);

            (field_error_view(field, errors.get(field)))
        }
    }
}

/// `endpoint` with the `form_id` query parameter set to `form`.
pub fn form_endpoint(endpoint: &str, form: &FormId) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("form_id", form.as_str())
        .finish();

    format!("{endpoint}?{query}")
}

/// Render the entry form identified by `form` with the entered `draft`, its
/// validation `errors` and an optional outcome `message`.
pub fn expense_form_view(
    form: &FormId,
    draft: &Draft,
    errors: &FieldErrors,
    message: Option<FormMessage>,
) -> Markup {
    let spinner = loading_spinner();
    let submit_endpoint = form_endpoint(endpoints::EXPENSES_API, form);
    let reset_endpoint = form_endpoint(endpoints::RESET_EXPENSE_FORM, form);

    html! {
        form
            id="expense-form"
            hx-post=(submit_endpoint)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-disabled-elt="#submit-button"
            hx-indicator="#indicator"
            class="w-full space-y-4 md:space-y-6"
        {
            h2 class="text-xl font-bold" { "Add Expense" }

            (field_view(DraftField::Amount, "Amount", "number", draft, errors))
            (field_view(DraftField::Category, "Category", "text", draft, errors))
            (field_view(DraftField::Description, "Description", "text", draft, errors))
            (field_view(DraftField::Date, "Date", "date", draft, errors))

            div class="flex gap-4"
            {
                button type="submit" id="submit-button" class=(BUTTON_PRIMARY_STYLE)
                {
                    span id="indicator" class="inline htmx-indicator" { (spinner) }
                    "Add Expense"
                }

                button
                    type="button"
                    id="reset-button"
                    hx-post=(reset_endpoint)
                    hx-target="#expense-form"
                    hx-swap="outerHTML"
                    class=(BUTTON_SECONDARY_STYLE)
                {
                    "Refresh"
                }
            }

            p id="form-message" class=[message.map(FormMessage::style)]
            {
                @if let Some(message) = message {
                    (message.text())
                }
            }
        }
    }
}
