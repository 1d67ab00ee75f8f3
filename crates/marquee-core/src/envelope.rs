//! JSON response envelope: `{ data, pagination?, messages? }`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use marquee_domain::pagination::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Information,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub description: String,
}

impl Message {
    pub fn information(description: impl Into<String>) -> Self {
        Self {
            kind: MessageType::Information,
            description: description.into(),
        }
    }

    pub fn warning(description: impl Into<String>) -> Self {
        Self {
            kind: MessageType::Warning,
            description: description.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            kind: MessageType::Error,
            description: description.into(),
        }
    }
}

/// Page bookkeeping as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total_count: u64,
    pub page_size: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl<T> From<&Page<T>> for Pagination {
    fn from(page: &Page<T>) -> Self {
        Self {
            total_count: page.total_count,
            page_size: page.page_size,
            current_page: page.current_page,
            total_pages: page.total_pages,
            has_next_page: page.has_next_page,
            has_previous_page: page.has_previous_page,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
    #[serde(skip)]
    status: StatusCode,
}

impl<T> ApiResponse<T> {
    /// Wrap a single payload.
    pub fn new(data: T) -> Self {
        Self {
            data,
            pagination: None,
            messages: None,
            status: StatusCode::OK,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Wrap a page. An `information` message is attached when the page holds
    /// items, a `warning` otherwise.
    pub fn page(page: Page<T>, found: &str, empty: &str) -> Self {
        let pagination = Pagination::from(&page);
        let message = if page.is_empty() {
            Message::warning(empty)
        } else {
            Message::information(found)
        };
        Self {
            data: page.items,
            pagination: Some(pagination),
            messages: Some(vec![message]),
            status: StatusCode::OK,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
