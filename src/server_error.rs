//! The page shown when a page of the expense tracker cannot be rendered.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// An error page with the status code, what went wrong and how to fix it.
pub struct ServerErrorPage<'a> {
    pub status: StatusCode,
    pub description: &'a str,
    pub fix: &'a str,
}

impl Default for ServerErrorPage<'_> {
    fn default() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            description: "The expense tracker ran into a problem.",
            fix: "Reload the page. If it keeps happening, check the server logs.",
        }
    }
}

impl ServerErrorPage<'_> {
    /// The page for when the expense store could not be reached or sent a
    /// response that could not be used.
    pub fn store_unavailable() -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            description: "Could not load expenses from the expense store.",
            fix: "Check that the expense API given with --store-url is running, then reload the page.",
        }
    }

    pub fn into_html(self) -> Html<String> {
        let title = self.status.canonical_reason().unwrap_or("Server Error");

        Html(error_view(title, self.status.as_str(), self.description, self.fix).into_string())
    }
}

impl IntoResponse for ServerErrorPage<'_> {
    fn into_response(self) -> Response {
        (self.status, self.into_html()).into_response()
    }
}

pub async fn get_server_error_page() -> Response {
    ServerErrorPage::default().into_response()
}
