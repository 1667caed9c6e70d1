use std::collections::BTreeMap;
use std::ops::Deref;

use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

use crate::model::mongodb::Id;

/// Core answer data: one respondent's responses to a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerCore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub user_id: Id,
    pub template_id: Id,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// Response text keyed by question ID or any other string key.
    pub responses: BTreeMap<String, String>,
}

/// An answer from the database, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "_id")]
    pub id: Id,
    #[serde(flatten)]
    pub answer: AnswerCore,
}

impl Answer {
    /// Assign a fresh ID to the given answer data.
    pub fn new(answer: AnswerCore) -> Self {
        Self {
            id: Id::new(),
            answer,
        }
    }
}

impl Deref for Answer {
    type Target = AnswerCore;

    fn deref(&self) -> &Self::Target {
        &self.answer
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    use crate::model::mongodb::now;

    impl Answer {
        pub fn example(user_id: Id, template_id: Id) -> Self {
            Self::new(AnswerCore {
                title: Some("Morning walk".to_string()),
                user_id,
                template_id,
                created_at: now(),
                responses: BTreeMap::from([
                    ("street".to_string(), "High Street".to_string()),
                    ("condition".to_string(), "good".to_string()),
                ]),
            })
        }
    }
}
