use axum::{Json, debug_handler, extract::State};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{AppResult, AppState, session, store};

/// Wipes the user's rating history so they can swipe the deck again.
/// A no-op success when there is nothing to delete.
#[debug_handler(state = AppState)]
pub(crate) async fn reset(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Json<Value>> {
    let user = session::require_user(&session).await?;
    store::clear_ratings(&db_pool, user.id).await?;

    tracing::info!("{} reset their ratings", user.name);

    Ok(Json(json!({ "ok": true })))
}
