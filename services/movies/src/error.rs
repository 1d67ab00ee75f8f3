use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use marquee_core::envelope::Message;

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Movies service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum MoviesServiceError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("path id does not match body id")]
    IdMismatch,
    #[error("invalid query parameter: {0}")]
    InvalidQuery(&'static str),
    #[error("genre is not one of Terror, Accion, Romantica, Suspenso, Musical")]
    InvalidGenre,
    #[error("grade must be between 1 and 10")]
    GradeOutOfRange,
    #[error("description contains forbidden words")]
    ForbiddenWords,
    #[error("a movie with this title already exists")]
    DuplicateTitle,
    #[error("email already registered")]
    EmailAlreadyExists,
    #[error("login already taken")]
    LoginAlreadyExists,
    #[error("movie not found")]
    MovieNotFound,
    #[error("actor not found")]
    ActorNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("review not found")]
    ReviewNotFound,
    #[error("comment not found")]
    CommentNotFound,
    #[error("no data for this report")]
    ReportNotFound,
    #[error("invalid login or password")]
    InvalidCredentials,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl MoviesServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::IdMismatch => "ID_MISMATCH",
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::InvalidGenre => "INVALID_GENRE",
            Self::GradeOutOfRange => "GRADE_OUT_OF_RANGE",
            Self::ForbiddenWords => "FORBIDDEN_WORDS",
            Self::DuplicateTitle => "DUPLICATE_TITLE",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::LoginAlreadyExists => "LOGIN_ALREADY_EXISTS",
            Self::MovieNotFound => "MOVIE_NOT_FOUND",
            Self::ActorNotFound => "ACTOR_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ReviewNotFound => "REVIEW_NOT_FOUND",
            Self::CommentNotFound => "COMMENT_NOT_FOUND",
            Self::ReportNotFound => "REPORT_NOT_FOUND",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::IdMismatch
            | Self::InvalidQuery(_)
            | Self::InvalidGenre
            | Self::GradeOutOfRange
            | Self::ForbiddenWords => StatusCode::BAD_REQUEST,
            Self::DuplicateTitle | Self::EmailAlreadyExists | Self::LoginAlreadyExists => {
                StatusCode::CONFLICT
            }
            Self::MovieNotFound
            | Self::ActorNotFound
            | Self::UserNotFound
            | Self::ReviewNotFound
            | Self::CommentNotFound
            | Self::ReportNotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sea_orm::DbErr> for MoviesServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Internal(e.into())
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    kind: &'static str,
    messages: [Message; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [FieldError]>,
}

impl IntoResponse for MoviesServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        // TraceLayer already records every status; only 500s need the cause.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let errors = match &self {
            Self::Validation(errors) => Some(errors.as_slice()),
            _ => None,
        };
        let body = ErrorBody {
            kind: self.kind(),
            messages: [Message::error(self.to_string())],
            errors,
        };
        (status, axum::Json(body)).into_response()
    }
}
