use crate::domain::entities::{Feedback, NewFeedback};
use crate::domain::repositories::{FeedbackRepository, StoreError};
use crate::domain::value_objects::FeedbackId;
use typed_builder::TypedBuilder;

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Deletion {
    Deleted,
    NotFound,
}

#[derive(Clone, TypedBuilder)]
pub(crate) struct FeedbackService<R> {
    repo: R,
}

impl<R: FeedbackRepository> FeedbackService<R> {
    pub(crate) async fn add_feedback(&self, feedback: NewFeedback) -> Result<Feedback, StoreError> {
        let feedback = self.repo.add_feedback(feedback).await?;
        tracing::info!(id = %feedback.id(), "feedback added");
        Ok(feedback)
    }

    pub(crate) async fn list_feedback(&self) -> Result<Vec<Feedback>, StoreError> {
        self.repo.list_feedback().await
    }

    pub(crate) async fn delete_feedback(&self, id: FeedbackId) -> Result<Deletion, StoreError> {
        match self.repo.delete_feedback_by_id(id).await? {
            0 => Ok(Deletion::NotFound),
            _ => {
                tracing::info!(%id, "feedback deleted");
                Ok(Deletion::Deleted)
            }
        }
    }
}
