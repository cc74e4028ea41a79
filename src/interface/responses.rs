//! Uniform JSON envelopes: `{message, data}` on success, `{error}` on failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
struct SuccessBody<'a, T> {
    message: &'a str,
    data: T,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct FieldError {
    field: &'static str,
    msg: &'static str,
}

impl FieldError {
    pub(crate) fn new(field: &'static str, msg: &'static str) -> Self {
        Self { field, msg }
    }
}

#[derive(Serialize)]
struct ValidationErrorBody {
    errors: Vec<FieldError>,
}

pub(crate) fn send_success<T: Serialize>(data: T, message: &str) -> Response {
    send_with_status(StatusCode::OK, data, message)
}

pub(crate) fn send_with_status<T: Serialize>(
    status: StatusCode,
    data: T,
    message: &str,
) -> Response {
    (status, Json(SuccessBody { message, data })).into_response()
}

pub(crate) fn send_error(error: &str, status: StatusCode) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

pub(crate) fn send_validation_errors(errors: Vec<FieldError>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ValidationErrorBody { errors })).into_response()
}
