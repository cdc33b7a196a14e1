mod next;
mod rate;
mod reset;

use axum::{
    Json, Router, debug_handler,
    extract::State,
    routing::{get, post},
};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{AppResult, AppState, ImageDeck, session, store, store::Progress};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/images", get(images))
        .route("/next", get(next::next))
        .route("/rate", post(rate::rate))
        .route("/progress", get(progress))
        .route("/reset", post(reset::reset))
}

#[debug_handler(state = AppState)]
async fn images(State(deck): State<ImageDeck>, session: Session) -> AppResult<Json<Value>> {
    session::require_user(&session).await?;
    Ok(Json(json!({ "images": deck.names() })))
}

#[debug_handler(state = AppState)]
async fn progress(
    State(db_pool): State<SqlitePool>,
    State(deck): State<ImageDeck>,
    session: Session,
) -> AppResult<Json<Progress>> {
    let user = session::require_user(&session).await?;
    Ok(Json(store::progress(&db_pool, &deck, user.id).await?))
}
