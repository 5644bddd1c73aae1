//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, server_error::ServerErrorPage};

/// The errors that may occur in the application.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request to the expense store could not be sent or did not complete,
    /// e.g., the store is unreachable or the connection dropped.
    ///
    /// Callers should pass in the original error as a string.
    #[error("could not reach the expense store: {0}")]
    StoreRequest(String),

    /// The expense store answered with a non-success HTTP status code.
    #[error("the expense store responded with status {0}")]
    StoreStatus(u16),

    /// The expense store answered with a body that could not be decoded as
    /// the expected JSON.
    #[error("could not decode the expense store response: {0}")]
    InvalidStoreResponse(String),

    /// The base URL of the expense store cannot be used to build request URLs.
    #[error("invalid expense store URL \"{0}\"")]
    InvalidStoreUrl(String),

    /// Could not acquire the lock on the snapshot of expenses.
    #[error("could not acquire the expense snapshot lock")]
    SnapshotLockError,

    /// Could not acquire the lock on the in-memory expense store.
    #[error("could not acquire the in-memory store lock")]
    StoreLockError,

    /// An expense was submitted from a form whose previous submission had not settled.
    #[error("an expense is already being submitted from this form")]
    SubmissionInProgress,
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Error::InvalidStoreResponse(value.to_string())
        } else if let Some(status) = value.status() {
            Error::StoreStatus(status.as_u16())
        } else {
            Error::StoreRequest(value.to_string())
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::StoreRequest(_) | Error::StoreStatus(_) | Error::InvalidStoreResponse(_) => {
                tracing::error!("Could not use the expense store: {self}");
                ServerErrorPage::store_unavailable().into_response()
            }
            Error::InvalidStoreUrl(url) => ServerErrorPage {
                description: "Invalid Expense Store Settings",
                fix: &format!(
                    "Could not build request URLs from the expense store URL \"{url}\". \
                    Check the server settings and ensure the store URL is a valid HTTP(S) URL."
                ),
                ..Default::default()
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ServerErrorPage::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::SubmissionInProgress => (
                StatusCode::CONFLICT,
                Alert::Error {
                    message: "Already adding an expense".to_owned(),
                    details: "Wait for the previous expense to finish saving before adding another."
                        .to_owned(),
                },
            ),
            Error::StoreRequest(_) | Error::StoreStatus(_) | Error::InvalidStoreResponse(_) => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: "Expense store unavailable".to_owned(),
                    details: "The expense store could not be reached. Try again in a moment."
                        .to_owned(),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
