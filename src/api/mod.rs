use rocket::{serde::json, Route};

mod answer;
mod area;
mod seed;
mod template;
mod user;

/// A JSON request body, or the reason it could not be parsed.
///
/// Taking the body this way lets malformed input surface as a validation
/// error instead of Rocket's default 422.
pub(crate) type JsonBody<'r, T> = std::result::Result<json::Json<T>, json::Error<'r>>;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(seed::routes());
    routes.extend(template::routes());
    routes.extend(answer::routes());
    routes.extend(area::routes());
    routes.extend(user::routes());
    routes
}
