use crate::domain::entities::NewFeedback;
use crate::interface::responses::FieldError;
use crate::util::deserialize_string_or_none;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CreateFeedback {
    #[serde(default, deserialize_with = "deserialize_string_or_none")]
    title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_or_none")]
    text: Option<String>,
}

impl CreateFeedback {
    /// Reads a request body. Anything that is not a JSON object counts as an empty one.
    pub(crate) fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub(crate) fn validate(self) -> Result<NewFeedback, Vec<FieldError>> {
        let title = self.title.filter(|s| !s.is_empty());
        let text = self.text.filter(|s| !s.is_empty());

        match (title, text) {
            (Some(title), Some(text)) => Ok(NewFeedback::builder().title(title).text(text).build()),
            (title, text) => {
                let mut errors = vec![];
                if title.is_none() {
                    errors.push(FieldError::new("title", "Title is required"));
                }
                if text.is_none() {
                    errors.push(FieldError::new("text", "Text is required"));
                }
                Err(errors)
            }
        }
    }
}
