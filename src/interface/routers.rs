use crate::application::services::FeedbackService;
use crate::domain::repositories::FeedbackRepository;
use crate::interface::handlers::{
    add_feedback_handler, delete_feedback_handler, list_feedback_handler,
};
use crate::interface::middleware::validate_feedback;
use axum::middleware;
use axum::routing::{delete, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_feedback_router<R: FeedbackRepository>(repo: R) -> Router {
    let state = FeedbackService::builder().repo(repo).build();

    Router::new()
        .route(
            "/feedback",
            post(add_feedback_handler::<R>)
                .route_layer(middleware::from_fn(validate_feedback))
                .get(list_feedback_handler::<R>),
        )
        .route("/feedback/{id}", delete(delete_feedback_handler::<R>))
        .with_state(state)
}

/// The full application: feedback routes plus permissive CORS and request tracing.
pub fn create_app<R: FeedbackRepository>(repo: R) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_feedback_router(repo)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
