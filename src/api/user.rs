use rocket::{serde::json::Json, Route};

use crate::error::{Error, Result};
use crate::model::{
    api::user::{UserDescription, UserSpec},
    db::user::User,
    mongodb::{now, Coll, Id},
};

use super::JsonBody;

pub fn routes() -> Vec<Route> {
    routes![create_user, get_users, get_user, delete_user]
}

#[post("/users", data = "<spec>", format = "json")]
async fn create_user(
    spec: JsonBody<'_, UserSpec>,
    users: Coll<User>,
) -> Result<Json<UserDescription>> {
    let user = spec?.into_inner().into_user(now());
    let user = users.create(user).await?;
    Ok(Json(user.into()))
}

#[get("/users")]
async fn get_users(users: Coll<User>) -> Result<Json<Vec<UserDescription>>> {
    let users = users.list_all().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[get("/users/<user_id>")]
async fn get_user(user_id: Id, users: Coll<User>) -> Result<Json<UserDescription>> {
    let user = users
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| Error::not_found(format!("User with ID '{user_id}'")))?;
    Ok(Json(user.into()))
}

/// Delete a user. Templates and answers referring to it are left in place.
#[delete("/users/<user_id>")]
async fn delete_user(user_id: Id, users: Coll<User>) -> Result<Json<UserDescription>> {
    let user = users
        .delete_by_id(user_id)
        .await?
        .ok_or_else(|| Error::not_found(format!("User with ID '{user_id}'")))?;
    Ok(Json(user.into()))
}
