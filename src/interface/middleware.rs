use crate::interface::payloads::CreateFeedback;
use crate::interface::responses::{send_error, send_validation_errors};
use axum::body::Body;
use axum::extract::Request;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use http_body_util::LengthLimitError;
use std::error::Error;

const BODY_LIMIT: usize = 100 * 1024;

/// Rejects create requests missing `title` or `text` before they reach the store.
///
/// Only `application/json` bodies are read; any other body counts as empty. The body is
/// forwarded unchanged and the validated [`NewFeedback`] is attached as a request extension.
///
/// [`NewFeedback`]: crate::domain::entities::NewFeedback
pub(crate) async fn validate_feedback(request: Request, next: Next) -> Response {
    let (mut parts, body) = request.into_parts();
    let bytes = match axum::body::to_bytes(body, BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(e) if is_length_limit(&e) => {
            tracing::warn!("Request body exceeds {} bytes", BODY_LIMIT);
            return send_error("Request body too large.", StatusCode::PAYLOAD_TOO_LARGE);
        }
        Err(e) => {
            tracing::warn!("Failed to read request body: {:?}", e);
            return send_error("Invalid request body.", StatusCode::BAD_REQUEST);
        }
    };

    let payload = if is_json(&parts.headers) {
        CreateFeedback::from_body(&bytes)
    } else {
        CreateFeedback::default()
    };

    match payload.validate() {
        Ok(feedback) => {
            parts.extensions.insert(feedback);
            next.run(Request::from_parts(parts, Body::from(bytes))).await
        }
        Err(errors) => {
            tracing::warn!("Feedback validation failed: {:?}", errors);
            send_validation_errors(errors)
        }
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

fn is_length_limit(e: &axum::Error) -> bool {
    let mut source: Option<&(dyn Error + 'static)> = Some(e);
    while let Some(err) = source {
        if err.is::<LengthLimitError>() {
            return true;
        }
        source = err.source();
    }
    false
}
