use axum::{Json, debug_handler};
use serde_json::{Value, json};
use tower_sessions::Session;

use crate::AppResult;

/// Always reports success, even for a session that was never established.
#[debug_handler]
pub(crate) async fn logout(session: Session) -> AppResult<Json<Value>> {
    session.flush().await?;
    Ok(Json(json!({ "ok": true })))
}
