use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{
    db::template::{Question, QuestionKind, QuestionOption, Template, TemplateCore},
    mongodb::{hex_id, Id},
};

const KIND: &str = "template";

/// A template as submitted by a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TemplateSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "hex_id")]
    pub user_id: Id,
    #[serde(with = "hex_id")]
    pub area_id: Id,
    #[serde(default)]
    pub questions: Vec<QuestionSpec>,
}

impl TemplateSpec {
    /// Validate this spec and convert it into a template with fresh IDs.
    pub fn into_template(self, created_at: DateTime<Utc>) -> Result<Template> {
        require_text("name", &self.name)?;
        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(i, q)| q.into_question(i))
            .collect::<Result<Vec<_>>>()?;
        Ok(Template::new(TemplateCore {
            name: self.name,
            description: self.description,
            created_at,
            user_id: self.user_id,
            area_id: self.area_id,
            questions,
        }))
    }
}

/// A question specification, tagged by its `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionSpec {
    Text(PlainQuestionSpec),
    Number(PlainQuestionSpec),
    Boolean(PlainQuestionSpec),
    Select(ChoiceQuestionSpec),
    Radio(ChoiceQuestionSpec),
    Image(PlainQuestionSpec),
    Audio(PlainQuestionSpec),
}

/// Fields shared by every question type without options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlainQuestionSpec {
    pub name: String,
    #[serde(default)]
    pub required: bool,
}

/// A question whose answer is picked from a list of options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChoiceQuestionSpec {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    pub options: Vec<QuestionOption>,
}

impl QuestionSpec {
    /// Validate this spec and convert it into the question at position
    /// `index`, assigning it a fresh ID.
    pub fn into_question(self, index: usize) -> Result<Question> {
        let (name, required, kind) = match self {
            Self::Text(q) => (q.name, q.required, QuestionKind::Text),
            Self::Number(q) => (q.name, q.required, QuestionKind::Number),
            Self::Boolean(q) => (q.name, q.required, QuestionKind::Boolean),
            Self::Image(q) => (q.name, q.required, QuestionKind::Image),
            Self::Audio(q) => (q.name, q.required, QuestionKind::Audio),
            Self::Select(q) => {
                let options = checked_options(index, q.options)?;
                (q.name, q.required, QuestionKind::Select { options })
            }
            Self::Radio(q) => {
                let options = checked_options(index, q.options)?;
                (q.name, q.required, QuestionKind::Radio { options })
            }
        };
        require_text(&format!("questions.{index}.name"), &name)?;
        Ok(Question {
            id: Id::new(),
            name,
            required,
            kind,
        })
    }
}

/// Choice questions need at least one option, each fully filled in.
fn checked_options(index: usize, options: Vec<QuestionOption>) -> Result<Vec<QuestionOption>> {
    if options.is_empty() {
        return Err(Error::validation(
            KIND,
            format!("questions.{index}.options"),
            "Path `options` is required.",
        ));
    }
    for (i, option) in options.iter().enumerate() {
        require_text(&format!("questions.{index}.options.{i}.display"), &option.display)?;
        require_text(&format!("questions.{index}.options.{i}.value"), &option.value)?;
    }
    Ok(options)
}

fn require_text(path: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        let field = path.rsplit('.').next().unwrap_or(path);
        return Err(Error::validation(
            KIND,
            path,
            format!("Path `{field}` is required."),
        ));
    }
    Ok(())
}

/// A template as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescription {
    #[serde(with = "hex_id")]
    pub id: Id,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(with = "hex_id")]
    pub user_id: Id,
    #[serde(with = "hex_id")]
    pub area_id: Id,
    pub questions: Vec<QuestionDescription>,
}

impl From<Template> for TemplateDescription {
    fn from(template: Template) -> Self {
        let core = template.template;
        Self {
            id: template.id,
            name: core.name,
            description: core.description,
            created_at: core.created_at,
            user_id: core.user_id,
            area_id: core.area_id,
            questions: core.questions.into_iter().map(Into::into).collect(),
        }
    }
}

/// A question as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDescription {
    #[serde(with = "hex_id")]
    pub id: Id,
    pub name: String,
    pub required: bool,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl From<Question> for QuestionDescription {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            name: question.name,
            required: question.required,
            kind: question.kind,
        }
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl TemplateSpec {
        pub fn example(user_id: Id, area_id: Id) -> Self {
            Self {
                name: "Park survey".to_string(),
                description: Some("Facilities in the park".to_string()),
                user_id,
                area_id,
                questions: vec![
                    QuestionSpec::Text(PlainQuestionSpec {
                        name: "Park name".to_string(),
                        required: true,
                    }),
                    QuestionSpec::Boolean(PlainQuestionSpec {
                        name: "Has benches".to_string(),
                        required: false,
                    }),
                    QuestionSpec::Radio(ChoiceQuestionSpec {
                        name: "Cleanliness".to_string(),
                        required: true,
                        options: vec![
                            QuestionOption {
                                display: "Clean".to_string(),
                                value: "clean".to_string(),
                            },
                            QuestionOption {
                                display: "Littered".to_string(),
                                value: "littered".to_string(),
                            },
                        ],
                    }),
                ],
            }
        }
    }
}
