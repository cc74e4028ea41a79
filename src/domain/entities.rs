use crate::domain::value_objects::FeedbackId;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// A persisted feedback row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct Feedback {
    id: FeedbackId,
    title: String,
    text: String,
}

impl Feedback {
    pub fn id(&self) -> FeedbackId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Feedback that passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct NewFeedback {
    title: String,
    text: String,
}

impl NewFeedback {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
