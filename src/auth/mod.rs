mod login;
mod logout;
mod me;
mod register;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use serde::Serialize;

use crate::AppState;

/// Profile photo upload cap.
const MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;

/// Body of a successful register or login.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthOk {
    pub ok: bool,
    pub user_id: i64,
    pub name: String,
    pub photo_path: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register::register))
        .layer(DefaultBodyLimit::max(MAX_PHOTO_BYTES))
        .route("/login", post(login::login))
        .route("/logout", post(logout::logout))
        .route("/me", get(me::me))
}
