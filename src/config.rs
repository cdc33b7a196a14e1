use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::info;

/// Runtime settings, read once at startup. Everything has a default so the
/// server runs out of the box; `.env` is honored via dotenv in main.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub uploads_dir: PathBuf,
    pub images_dir: PathBuf,
    pub session_hours: i64,
}

impl Config {
    pub fn load() -> Self {
        let data_dir: PathBuf = try_load("DATA_DIR", "data");
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| format!("sqlite://{}/tinder.db", data_dir.display()));

        Self {
            port: try_load("PORT", "3000"),
            database_url,
            uploads_dir: try_load("UPLOADS_DIR", "uploads"),
            images_dir: try_load("IMAGES_DIR", "images"),
            session_hours: try_load("SESSION_HOURS", "24"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let value = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_owned()
    });

    match value.parse() {
        Ok(parsed) => parsed,
        Err(e) => panic!("invalid {key} value {value:?}: {e}"),
    }
}
