use crate::domain::entities::{Feedback, NewFeedback};
use crate::domain::value_objects::FeedbackId;
use std::future::Future;
use thiserror::Error;

/// Failure raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("{operation} failed: {source}")]
    Query {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    pub(crate) fn query(operation: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Query { operation, source }
    }
}

pub trait FeedbackRepository: Clone + Send + Sync + 'static {
    fn add_feedback(
        &self,
        feedback: NewFeedback,
    ) -> impl Future<Output = Result<Feedback, StoreError>> + Send;

    fn list_feedback(&self) -> impl Future<Output = Result<Vec<Feedback>, StoreError>> + Send;

    /// Returns the number of rows removed; zero means no row had that id.
    fn delete_feedback_by_id(
        &self,
        id: FeedbackId,
    ) -> impl Future<Output = Result<u64, StoreError>> + Send;
}
