use mongodb::bson::doc;
use rocket::{serde::json::Json, Route};

use crate::error::{Error, Result};
use crate::model::{
    api::{
        answer::AnswerDescription,
        template::{TemplateDescription, TemplateSpec},
    },
    db::{answer::Answer, template::Template},
    mongodb::{now, Coll, Id},
};

use super::JsonBody;

pub fn routes() -> Vec<Route> {
    routes![
        create_template,
        get_templates,
        get_template,
        template_answers,
        delete_template,
    ]
}

#[post("/templates", data = "<spec>", format = "json")]
async fn create_template(
    spec: JsonBody<'_, TemplateSpec>,
    templates: Coll<Template>,
) -> Result<Json<TemplateDescription>> {
    let template = spec?.into_inner().into_template(now())?;
    let template = templates.create(template).await?;
    Ok(Json(template.into()))
}

#[get("/templates")]
async fn get_templates(templates: Coll<Template>) -> Result<Json<Vec<TemplateDescription>>> {
    let templates = templates.list_all().await?;
    Ok(Json(templates.into_iter().map(Into::into).collect()))
}

#[get("/templates/<template_id>")]
async fn get_template(
    template_id: Id,
    templates: Coll<Template>,
) -> Result<Json<TemplateDescription>> {
    let template = templates
        .get_by_id(template_id)
        .await?
        .ok_or_else(|| Error::not_found(format!("Template with ID '{template_id}'")))?;
    Ok(Json(template.into()))
}

/// Answers whose `templateId` is the given template. The template itself need
/// not exist.
#[get("/templates/<template_id>/answers")]
async fn template_answers(
    template_id: Id,
    answers: Coll<Answer>,
) -> Result<Json<Vec<AnswerDescription>>> {
    let answers = answers
        .list_matching(doc! { "templateId": template_id })
        .await?;
    Ok(Json(answers.into_iter().map(Into::into).collect()))
}

/// Delete a template. Answers referring to it are left in place.
#[delete("/templates/<template_id>")]
async fn delete_template(
    template_id: Id,
    templates: Coll<Template>,
) -> Result<Json<TemplateDescription>> {
    let template = templates
        .delete_by_id(template_id)
        .await?
        .ok_or_else(|| Error::not_found(format!("Template with ID '{template_id}'")))?;
    Ok(Json(template.into()))
}

#[cfg(test)]
mod tests {
    use mongodb::Database;
    use rocket::{
        http::{ContentType, Status},
        local::asynchronous::Client,
        serde::json::{json, serde_json, Value},
    };

    use crate::model::db::template::QuestionKind;

    use super::*;

    async fn post_template(client: &Client, body: String) -> (Status, String) {
        let response = client
            .post(uri!(create_template))
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
            .await;
        (response.status(), response.into_string().await.unwrap_or_default())
    }

    #[backend_test]
    async fn create_get_delete_template(client: Client, templates: Coll<Template>) {
        let user_id = Id::new();
        let area_id = Id::new();
        let spec = TemplateSpec::example(user_id, area_id);
        let (status, body) = post_template(&client, serde_json::to_string(&spec).unwrap()).await;
        assert_eq!(Status::Ok, status);

        let raw: Value = serde_json::from_str(&body).unwrap();
        assert!(raw.get("_id").is_none());
        assert!(raw.get("__v").is_none());
        let created: TemplateDescription = serde_json::from_value(raw).unwrap();
        assert_eq!(created.name, spec.name);
        assert_eq!(created.user_id, user_id);
        assert_eq!(created.area_id, area_id);
        assert_eq!(created.questions.len(), 3);
        assert!(matches!(created.questions[2].kind, QuestionKind::Radio { .. }));

        // Stored as returned.
        let stored = templates.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(TemplateDescription::from(stored), created);

        let response = client.get(uri!(get_template(created.id))).dispatch().await;
        assert_eq!(Status::Ok, response.status());
        assert_eq!(response.into_json::<TemplateDescription>().await.unwrap(), created);

        let response = client.get(uri!(get_templates)).dispatch().await;
        let listed: Vec<TemplateDescription> = response.into_json().await.unwrap();
        assert_eq!(listed, vec![created.clone()]);

        let response = client.delete(uri!(delete_template(created.id))).dispatch().await;
        assert_eq!(Status::Ok, response.status());
        assert_eq!(response.into_json::<TemplateDescription>().await.unwrap(), created);

        let response = client.delete(uri!(delete_template(created.id))).dispatch().await;
        assert_eq!(Status::NotFound, response.status());
    }

    #[backend_test]
    async fn choice_options_kept_verbatim(client: Client) {
        let body = json!({
            "name": "Transport",
            "userId": Id::new().to_hex(),
            "areaId": Id::new().to_hex(),
            "questions": [{
                "name": "Mode",
                "type": "select",
                "required": true,
                "options": [
                    { "display": "Bus", "value": "bus" },
                    { "display": "Bike", "value": "bike" },
                    { "display": "Walk", "value": "walk" },
                ],
            }],
        });
        let (status, body) = post_template(&client, body.to_string()).await;
        assert_eq!(Status::Ok, status);
        let raw: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            raw["questions"][0]["options"],
            json!([
                { "display": "Bus", "value": "bus" },
                { "display": "Bike", "value": "bike" },
                { "display": "Walk", "value": "walk" },
            ])
        );
    }

    #[backend_test]
    async fn bad_templates_rejected(client: Client, db: Database) {
        let user_id = Id::new().to_hex();
        let area_id = Id::new().to_hex();
        let bodies = [
            // Choice question without options.
            json!({
                "name": "T", "userId": user_id, "areaId": area_id,
                "questions": [{ "name": "Q", "type": "radio" }],
            }),
            // Choice question with no options.
            json!({
                "name": "T", "userId": user_id, "areaId": area_id,
                "questions": [{ "name": "Q", "type": "select", "options": [] }],
            }),
            // Unknown question type.
            json!({
                "name": "T", "userId": user_id, "areaId": area_id,
                "questions": [{ "name": "Q", "type": "video" }],
            }),
            // Missing name.
            json!({ "userId": user_id, "areaId": area_id }),
            // Missing area.
            json!({ "name": "T", "userId": user_id }),
            // Unparseable reference.
            json!({ "name": "T", "userId": "12", "areaId": area_id }),
        ];
        for body in bodies {
            let (status, message) = post_template(&client, body.to_string()).await;
            assert_eq!(Status::BadRequest, status, "accepted {body}");
            assert!(!message.is_empty());
        }

        let count = Coll::<Template>::from_db(&db)
            .count_documents(None, None)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[backend_test]
    async fn answers_for_template(client: Client, answers: Coll<Answer>) {
        let user_id = Id::new();
        let template_id = Id::new();
        let first = Answer::example(user_id, template_id);
        let other = Answer::example(user_id, Id::new());
        let second = Answer::example(user_id, template_id);
        for answer in [&first, &other, &second] {
            answers.create(answer.clone()).await.unwrap();
        }

        let response = client.get(uri!(template_answers(template_id))).dispatch().await;
        assert_eq!(Status::Ok, response.status());
        let listed: Vec<AnswerDescription> = response.into_json().await.unwrap();
        let ids: Vec<Id> = listed.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert!(listed.iter().all(|a| a.template_id == template_id));

        let response = client.get(uri!(template_answers(Id::new()))).dispatch().await;
        let listed: Vec<AnswerDescription> = response.into_json().await.unwrap();
        assert!(listed.is_empty());
    }
}
