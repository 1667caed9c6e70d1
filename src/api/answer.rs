use rocket::{serde::json::Json, Route};

use crate::error::{Error, Result};
use crate::model::{
    api::answer::{AnswerDescription, AnswerSpec},
    db::answer::Answer,
    mongodb::{now, Coll, Id},
};

use super::JsonBody;

pub fn routes() -> Vec<Route> {
    routes![create_answer, get_answers, get_answer, delete_answer]
}

#[post("/answers", data = "<spec>", format = "json")]
async fn create_answer(
    spec: JsonBody<'_, AnswerSpec>,
    answers: Coll<Answer>,
) -> Result<Json<AnswerDescription>> {
    let answer = spec?.into_inner().into_answer(now())?;
    let answer = answers.create(answer).await?;
    Ok(Json(answer.into()))
}

#[get("/answers")]
async fn get_answers(answers: Coll<Answer>) -> Result<Json<Vec<AnswerDescription>>> {
    let answers = answers.list_all().await?;
    Ok(Json(answers.into_iter().map(Into::into).collect()))
}

#[get("/answers/<answer_id>")]
async fn get_answer(answer_id: Id, answers: Coll<Answer>) -> Result<Json<AnswerDescription>> {
    let answer = answers
        .get_by_id(answer_id)
        .await?
        .ok_or_else(|| Error::not_found(format!("Answer with ID '{answer_id}'")))?;
    Ok(Json(answer.into()))
}

#[delete("/answers/<answer_id>")]
async fn delete_answer(answer_id: Id, answers: Coll<Answer>) -> Result<Json<AnswerDescription>> {
    let answer = answers
        .delete_by_id(answer_id)
        .await?
        .ok_or_else(|| Error::not_found(format!("Answer with ID '{answer_id}'")))?;
    Ok(Json(answer.into()))
}
