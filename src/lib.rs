#[macro_use]
extern crate rocket;

#[cfg(test)]
#[macro_use]
extern crate backend_test;

use rocket::{Build, Rocket};

use crate::config::{ConfigFairing, DatabaseFairing};
use crate::logging::LoggerFairing;

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;

pub use config::Config;

/// Assemble the server: configuration, logging, database connection and routes.
///
/// Nothing is connected until the returned rocket is ignited; ignition fails
/// if the database configuration is missing.
pub fn build() -> Rocket<Build> {
    rocket::custom(config::figment())
        .attach(LoggerFairing)
        .attach(ConfigFairing)
        .attach(DatabaseFairing)
        .mount("/", api::routes())
}

/// Build a rocket around an existing database connection, bypassing the
/// database fairing.
#[cfg(test)]
pub(crate) fn rocket_for_db(db_client: mongodb::Client, db_name: &str) -> Rocket<Build> {
    rocket::custom(config::figment())
        .attach(ConfigFairing)
        .mount("/", api::routes())
        .manage(db_client.database(db_name))
}

/// Connect to the test database server named by `MONGO_URI`.
#[cfg(test)]
pub(crate) async fn db_client() -> mongodb::Client {
    let db_uri = std::env::var("MONGO_URI").expect("`MONGO_URI` not set");
    mongodb::Client::with_uri_str(&db_uri)
        .await
        .unwrap_or_else(|_| panic!("Could not connect to database with `MONGO_URI` \"{db_uri}\""))
}

/// A fresh database name, so concurrently running tests never collide.
#[cfg(test)]
pub(crate) fn database() -> String {
    let random: u32 = rand::random();
    format!("test{random}")
}
