use mongodb::bson::doc;
use rocket::{serde::json::Json, Route};

use crate::error::{Error, Result};
use crate::model::{
    api::{
        area::{AreaDescription, AreaSpec},
        template::TemplateDescription,
    },
    db::{area::Area, template::Template},
    mongodb::{Coll, Id},
};

use super::JsonBody;

pub fn routes() -> Vec<Route> {
    routes![create_area, get_areas, get_area, area_templates, delete_area]
}

#[post("/areas", data = "<spec>", format = "json")]
async fn create_area(spec: JsonBody<'_, AreaSpec>, areas: Coll<Area>) -> Result<Json<AreaDescription>> {
    let area: Area = spec?.into_inner().into();
    let area = areas.create(area).await?;
    Ok(Json(area.into()))
}

#[get("/areas")]
async fn get_areas(areas: Coll<Area>) -> Result<Json<Vec<AreaDescription>>> {
    let areas = areas.list_all().await?;
    Ok(Json(areas.into_iter().map(Into::into).collect()))
}

#[get("/areas/<area_id>")]
async fn get_area(area_id: Id, areas: Coll<Area>) -> Result<Json<AreaDescription>> {
    let area = areas
        .get_by_id(area_id)
        .await?
        .ok_or_else(|| Error::not_found(format!("Area with ID '{area_id}'")))?;
    Ok(Json(area.into()))
}

/// Templates whose `areaId` is the given area. The area itself need not exist.
#[get("/areas/<area_id>/templates")]
async fn area_templates(
    area_id: Id,
    templates: Coll<Template>,
) -> Result<Json<Vec<TemplateDescription>>> {
    let templates = templates.list_matching(doc! { "areaId": area_id }).await?;
    Ok(Json(templates.into_iter().map(Into::into).collect()))
}

/// Delete an area. Templates referring to it are left in place.
#[delete("/areas/<area_id>")]
async fn delete_area(area_id: Id, areas: Coll<Area>) -> Result<Json<AreaDescription>> {
    let area = areas
        .delete_by_id(area_id)
        .await?
        .ok_or_else(|| Error::not_found(format!("Area with ID '{area_id}'")))?;
    Ok(Json(area.into()))
}
