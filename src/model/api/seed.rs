use serde::{Deserialize, Serialize};

use crate::model::{
    db::template::QuestionOption,
    mongodb::Id,
};

use super::{
    template::{ChoiceQuestionSpec, PlainQuestionSpec, QuestionSpec, TemplateDescription, TemplateSpec},
    user::{UserDescription, UserSpec},
};

/// One entry of the `/seed` response, which lists templates then users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedRecord {
    Template(TemplateDescription),
    User(UserDescription),
}

/// The fixture user.
pub fn seed_user() -> UserSpec {
    UserSpec {
        name: Some("John Doe".to_string()),
        email: Some("john@email.com".to_string()),
        password: Some("123456".to_string()),
    }
}

/// The fixture template, owned by `user_id`, with one question of each
/// scalar type and one select question.
pub fn seed_template(user_id: Id, area_id: Id) -> TemplateSpec {
    let plain = |name: &str| PlainQuestionSpec {
        name: name.to_string(),
        required: true,
    };
    let option = |n: u32| QuestionOption {
        display: format!("Option {n}"),
        value: format!("option{n}"),
    };
    TemplateSpec {
        name: "Template 1".to_string(),
        description: Some("This is a template".to_string()),
        user_id,
        area_id,
        questions: vec![
            QuestionSpec::Text(plain("Question 1")),
            QuestionSpec::Number(plain("Question 2")),
            QuestionSpec::Boolean(plain("Question 3")),
            QuestionSpec::Select(ChoiceQuestionSpec {
                name: "Question 4".to_string(),
                required: false,
                options: vec![option(1), option(2)],
            }),
        ],
    }
}
