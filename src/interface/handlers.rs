use crate::application::services::{Deletion, FeedbackService};
use crate::domain::entities::NewFeedback;
use crate::domain::repositories::FeedbackRepository;
use crate::domain::value_objects::FeedbackId;
use crate::interface::responses::{send_error, send_success, send_with_status};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Extension;

pub(crate) async fn add_feedback_handler<R: FeedbackRepository>(
    State(state): State<FeedbackService<R>>,
    Extension(feedback): Extension<NewFeedback>,
) -> Response {
    tracing::info!("Called add feedback");
    match state.add_feedback(feedback).await {
        Ok(feedback) => send_with_status(
            StatusCode::CREATED,
            feedback,
            "Feedback added successfully",
        ),
        Err(e) => {
            tracing::error!("Failed to add feedback: {:?}", e);
            send_error(
                "An error occurred while adding feedback.",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

pub(crate) async fn list_feedback_handler<R: FeedbackRepository>(
    State(state): State<FeedbackService<R>>,
) -> Response {
    tracing::info!("Called list feedback");
    match state.list_feedback().await {
        Ok(feedback) => send_success(feedback, "Feedback retrieved successfully"),
        Err(e) => {
            tracing::error!("Failed to retrieve feedback: {:?}", e);
            send_error(
                "An error occurred while retrieving feedback.",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

pub(crate) async fn delete_feedback_handler<R: FeedbackRepository>(
    State(state): State<FeedbackService<R>>,
    Path(id): Path<String>,
) -> Response {
    tracing::info!("Called delete feedback");
    // A key that is not an id cannot match any row.
    let Ok(id) = id.parse::<FeedbackId>() else {
        tracing::warn!("Invalid feedback id: {}", id);
        return send_error("Feedback not found.", StatusCode::NOT_FOUND);
    };

    match state.delete_feedback(id).await {
        Ok(Deletion::Deleted) => send_success((), "Feedback deleted successfully"),
        Ok(Deletion::NotFound) => send_error("Feedback not found.", StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete feedback: {:?}", e);
            send_error(
                "An error occurred while deleting feedback.",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}
