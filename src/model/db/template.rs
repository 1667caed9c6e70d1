use std::ops::Deref;

use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

use crate::model::mongodb::Id;

/// Core template data, as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateCore {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// Owning user. Not checked against the users collection.
    pub user_id: Id,
    /// Area the template applies to. Not checked against the areas collection.
    pub area_id: Id,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A template from the database, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    #[serde(rename = "_id")]
    pub id: Id,
    #[serde(flatten)]
    pub template: TemplateCore,
}

impl Template {
    /// Assign a fresh ID to the given template data.
    pub fn new(template: TemplateCore) -> Self {
        Self {
            id: Id::new(),
            template,
        }
    }
}

impl Deref for Template {
    type Target = TemplateCore;

    fn deref(&self) -> &Self::Target {
        &self.template
    }
}

/// A single question within a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique ID, usable as a response key in answers.
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// What sort of response a question expects. Only choice questions carry
/// options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    Text,
    Number,
    Boolean,
    Select { options: Vec<QuestionOption> },
    Radio { options: Vec<QuestionOption> },
    Image,
    Audio,
}

impl QuestionKind {
    /// The options of a choice question, or `None` for other kinds.
    pub fn options(&self) -> Option<&[QuestionOption]> {
        match self {
            Self::Select { options } | Self::Radio { options } => Some(options),
            _ => None,
        }
    }
}

/// One selectable option of a choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionOption {
    /// Text shown to the respondent.
    pub display: String,
    /// Value recorded in the answer.
    pub value: String,
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    use crate::model::mongodb::now;

    impl Template {
        pub fn example(user_id: Id, area_id: Id) -> Self {
            Self::new(TemplateCore {
                name: "Street survey".to_string(),
                description: Some("Condition of the pavement".to_string()),
                created_at: now(),
                user_id,
                area_id,
                questions: vec![
                    Question {
                        id: Id::new(),
                        name: "Street name".to_string(),
                        required: true,
                        kind: QuestionKind::Text,
                    },
                    Question {
                        id: Id::new(),
                        name: "Condition".to_string(),
                        required: false,
                        kind: QuestionKind::Radio {
                            options: vec![
                                QuestionOption {
                                    display: "Good".to_string(),
                                    value: "good".to_string(),
                                },
                                QuestionOption {
                                    display: "Poor".to_string(),
                                    value: "poor".to_string(),
                                },
                            ],
                        },
                    },
                ],
            })
        }
    }
}
