use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rocket::serde::json::serde_json::Number;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::model::{
    db::answer::{Answer, AnswerCore},
    mongodb::{hex_id, Id},
};

/// An answer as submitted by a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnswerSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(with = "hex_id")]
    pub user_id: Id,
    #[serde(with = "hex_id")]
    pub template_id: Id,
    /// Numbers and booleans are accepted and kept as their text.
    #[serde(deserialize_with = "responses_as_text")]
    pub responses: BTreeMap<String, String>,
}

/// A single response value as a client may send it.
#[derive(Deserialize)]
#[serde(untagged)]
enum ResponseValue {
    Text(String),
    Number(Number),
    Flag(bool),
}

impl From<ResponseValue> for String {
    fn from(value: ResponseValue) -> Self {
        match value {
            ResponseValue::Text(text) => text,
            ResponseValue::Number(number) => number.to_string(),
            ResponseValue::Flag(flag) => flag.to_string(),
        }
    }
}

fn responses_as_text<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let responses = BTreeMap::<String, ResponseValue>::deserialize(deserializer)?;
    Ok(responses
        .into_iter()
        .map(|(key, value)| (key, value.into()))
        .collect())
}

impl AnswerSpec {
    /// Validate this spec and convert it into an answer with a fresh ID.
    ///
    /// Response keys become document field names, so they may not be empty,
    /// start with `$` or contain `.`.
    pub fn into_answer(self, created_at: DateTime<Utc>) -> Result<Answer> {
        if let Some(key) = self
            .responses
            .keys()
            .find(|key| key.is_empty() || key.starts_with('$') || key.contains('.'))
        {
            return Err(Error::validation(
                "answer",
                format!("responses.{key}"),
                "Response keys may not be empty, start with `$` or contain `.`.",
            ));
        }
        Ok(Answer::new(AnswerCore {
            title: self.title,
            user_id: self.user_id,
            template_id: self.template_id,
            created_at,
            responses: self.responses,
        }))
    }
}

/// An answer as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDescription {
    #[serde(with = "hex_id")]
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(with = "hex_id")]
    pub user_id: Id,
    #[serde(with = "hex_id")]
    pub template_id: Id,
    pub created_at: DateTime<Utc>,
    pub responses: BTreeMap<String, String>,
}

impl From<Answer> for AnswerDescription {
    fn from(answer: Answer) -> Self {
        let core = answer.answer;
        Self {
            id: answer.id,
            title: core.title,
            user_id: core.user_id,
            template_id: core.template_id,
            created_at: core.created_at,
            responses: core.responses,
        }
    }
}
