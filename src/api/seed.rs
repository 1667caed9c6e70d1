use mongodb::bson::doc;
use rocket::{serde::json::Json, Route, State};

use crate::error::{Error, Result};
use crate::model::{
    api::seed::{seed_template, seed_user, SeedRecord},
    db::{template::Template, user::User},
    mongodb::{now, Coll, Id},
};
use crate::Config;

pub fn routes() -> Vec<Route> {
    routes![seed]
}

/// Development fixture: replace all users and templates with one known user
/// and one template owned by them. Answers and areas are not touched, and
/// the template's area is a fresh ID that refers to no stored area.
#[get("/seed")]
async fn seed(
    config: &State<Config>,
    users: Coll<User>,
    templates: Coll<Template>,
) -> Result<Json<Vec<SeedRecord>>> {
    if !config.seed_enabled() {
        return Err(Error::not_found("Seed endpoint is disabled"));
    }
    warn!("Reseeding: deleting all users and templates");

    users.delete_many(doc! {}, None).await?;
    templates.delete_many(doc! {}, None).await?;

    let created_at = now();
    let user = users.create(seed_user().into_user(created_at)).await?;
    let template = seed_template(user.id, Id::new()).into_template(created_at)?;
    templates.create(template).await?;

    let mut records: Vec<SeedRecord> = templates
        .list_all()
        .await?
        .into_iter()
        .map(|template| SeedRecord::Template(template.into()))
        .collect();
    records.extend(
        users
            .list_all()
            .await?
            .into_iter()
            .map(|user| SeedRecord::User(user.into())),
    );
    Ok(Json(records))
}
