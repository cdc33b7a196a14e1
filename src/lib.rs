pub mod auth;
pub mod config;
pub mod deck;
pub mod error;
pub mod matches;
pub mod mutual;
pub mod pages;
pub mod session;
pub mod store;
pub mod tinder;

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

pub use config::Config;
pub use deck::ImageDeck;
pub use error::{AppError, AppResult};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub deck: ImageDeck,
    pub config: Arc<Config>,
}

#[macro_export]
macro_rules! include_res {
    (bytes, $p:expr) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}
