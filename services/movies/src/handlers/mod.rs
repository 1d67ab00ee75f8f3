pub mod actor;
pub mod comment;
pub mod movie;
pub mod report;
pub mod review;
pub mod security;
pub mod token;
pub mod user;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use chrono::NaiveDate;

use marquee_auth_types::identity::Identity;
use marquee_core::serde::parse_dmy;
use marquee_domain::pagination::PageRequest;
use marquee_domain::role::Role;

use crate::error::{FieldError, MoviesServiceError};

pub(crate) const ALL_ROLES: &[Role] = &[Role::Administrator, Role::Provider, Role::User];
pub(crate) const ADMIN_OR_PROVIDER: &[Role] = &[Role::Administrator, Role::Provider];
pub(crate) const ADMIN_OR_USER: &[Role] = &[Role::Administrator, Role::User];

/// 403 unless the caller holds one of `roles`.
pub(crate) fn require_role(identity: &Identity, roles: &[Role]) -> Result<(), MoviesServiceError> {
    if identity.has_any(roles) {
        Ok(())
    } else {
        tracing::debug!(login = %identity.login, role = %identity.role, "role not permitted");
        Err(MoviesServiceError::Forbidden)
    }
}

/// A body id, when present, must equal the path id.
pub(crate) fn ensure_same_id(path_id: i32, body_id: Option<i32>) -> Result<(), MoviesServiceError> {
    match body_id {
        Some(id) if id != path_id => Err(MoviesServiceError::IdMismatch),
        _ => Ok(()),
    }
}

pub(crate) fn path_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, MoviesServiceError> {
    path.map(|Path(id)| id)
        .map_err(|_| MoviesServiceError::InvalidQuery("id"))
}

pub(crate) fn query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, MoviesServiceError> {
    query
        .map(|Query(q)| q)
        .map_err(|_| MoviesServiceError::InvalidQuery("query string"))
}

/// Malformed JSON is reported like any other invalid input.
pub(crate) fn body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, MoviesServiceError> {
    body.map(|Json(b)| b).map_err(|rejection| {
        MoviesServiceError::Validation(vec![FieldError::new("body", rejection.body_text())])
    })
}

/// Parse an optional `dd-MM-yyyy` filter.
pub(crate) fn query_date(
    value: Option<&str>,
    name: &'static str,
) -> Result<Option<NaiveDate>, MoviesServiceError> {
    match value {
        None => Ok(None),
        Some(raw) => parse_dmy(raw)
            .map(Some)
            .ok_or(MoviesServiceError::InvalidQuery(name)),
    }
}

pub(crate) fn page_request(page_size: Option<u64>, page_number: Option<u64>) -> PageRequest {
    let defaults = PageRequest::default();
    PageRequest {
        page_size: page_size.unwrap_or(defaults.page_size),
        page_number: page_number.unwrap_or(defaults.page_number),
    }
    .clamped()
}
