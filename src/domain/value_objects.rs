use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FeedbackId(i64);

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for FeedbackId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for FeedbackId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl FeedbackId {
    pub fn value(&self) -> i64 {
        self.0
    }
}
