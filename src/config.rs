use mongodb::{Client as MongoClient, Database};
use rocket::{
    fairing::{Fairing, Info, Kind},
    figment::{
        providers::{Env, Format, Toml},
        Figment, Profile,
    },
    Build, Rocket,
};
use serde::Deserialize;

/// Port used when neither `PORT` nor Rocket's own configuration sets one.
pub const DEFAULT_PORT: u16 = 3000;

/// Database used when the connection string does not name one.
pub const DEFAULT_DATABASE: &str = "test";

/// Plain environment variables understood in addition to `ROCKET_*` ones.
const RAW_ENV_KEYS: [&str; 3] = ["port", "mongo_uri", "seed_enabled"];

/// The configuration figment for the server.
///
/// Rocket's usual sources apply (`Rocket.toml`, `ROCKET_*`), the default port
/// becomes [`DEFAULT_PORT`], and the bare `PORT`, `MONGO_URI` and
/// `SEED_ENABLED` variables override everything else.
pub fn figment() -> Figment {
    Figment::from(rocket::Config::default())
        .merge(("port", DEFAULT_PORT))
        .merge(Toml::file(Env::var_or("ROCKET_CONFIG", "Rocket.toml")).nested())
        .merge(Env::prefixed("ROCKET_").ignore(&["PROFILE"]).global())
        .merge(Env::raw().only(&RAW_ENV_KEYS).global())
        .select(Profile::from_env_or(
            "ROCKET_PROFILE",
            rocket::Config::DEFAULT_PROFILE,
        ))
}

/// Application configuration. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "seed_enabled_default")]
    seed_enabled: bool,
}

fn seed_enabled_default() -> bool {
    true
}

impl Config {
    /// Whether the destructive `/seed` development endpoint is served.
    /// Configured via `SEED_ENABLED`.
    pub fn seed_enabled(&self) -> bool {
        self.seed_enabled
    }
}

/// A fairing that loads the application config and puts it in managed state.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };
        if config.seed_enabled() {
            warn!("Seed endpoint enabled: GET /seed wipes users and templates");
        }

        Ok(rocket.manage(config))
    }
}

/// Configuration for the database.
#[derive(Deserialize)]
struct DbConfig {
    // secrets
    mongo_uri: String,
}

/// A fairing that loads the MongoDB config, connects to the database and
/// places the `Database` into managed state.
pub struct DatabaseFairing;

#[rocket::async_trait]
impl Fairing for DatabaseFairing {
    fn info(&self) -> Info {
        Info {
            name: "MongoDB",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        let config = match rocket.figment().extract::<DbConfig>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load database config: `MONGO_URI` must be set");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };
        info!("Loaded database config, connecting...");
        let client = match MongoClient::with_uri_str(config.mongo_uri).await {
            Ok(client) => client,
            Err(e) => {
                error!("Failed to connect to database: {e}");
                return Err(rocket);
            }
        };
        let db = database_for(&client);
        info!("...using database \"{}\"", db.name());

        Ok(rocket.manage(db))
    }
}

/// The database named in the connection string, or [`DEFAULT_DATABASE`].
fn database_for(client: &MongoClient) -> Database {
    client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE))
}

#[cfg(test)]
mod tests {
    use super::*;

    use figment::Jail;

    #[test]
    fn port_defaults_to_3000() {
        let config: rocket::Config = Figment::from(rocket::Config::default())
            .merge(("port", DEFAULT_PORT))
            .extract()
            .unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn raw_port_overrides_default() {
        Jail::expect_with(|jail| {
            jail.set_env("PORT", 8123);
            let config: rocket::Config = figment().extract()?;
            assert_eq!(config.port, 8123);
            Ok(())
        });
    }

    #[test]
    fn mongo_uri_is_required() {
        let figment = Figment::from(rocket::Config::default());
        assert!(figment.extract::<DbConfig>().is_err());

        let figment = figment.merge(("mongo_uri", "mongodb://localhost:27017/surveys"));
        let config: DbConfig = figment.extract().unwrap();
        assert_eq!(config.mongo_uri, "mongodb://localhost:27017/surveys");
    }

    #[test]
    fn seed_enabled_by_default() {
        let config: Config = Figment::new().extract().unwrap();
        assert!(config.seed_enabled());

        let config: Config = Figment::new().merge(("seed_enabled", false)).extract().unwrap();
        assert!(!config.seed_enabled());
    }
}
