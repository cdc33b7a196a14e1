use axum::{Json, debug_handler};
use tower_sessions::Session;

use crate::{AppResult, session, session::SessionUser};

#[debug_handler]
pub(crate) async fn me(session: Session) -> AppResult<Json<SessionUser>> {
    Ok(Json(session::require_user(&session).await?))
}
