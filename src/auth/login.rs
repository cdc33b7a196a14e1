use axum::{Json, debug_handler, extract::State};
use serde::Deserialize;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{AppError, AppResult, session, store};

use super::AuthOk;

#[derive(Deserialize)]
pub(crate) struct LoginRequest {
    name: Option<String>,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn login(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Json(LoginRequest { name }): Json<LoginRequest>,
) -> AppResult<Json<AuthOk>> {
    let name = name.unwrap_or_default().trim().to_owned();
    if name.is_empty() {
        return Err(AppError::BadRequest("Name is required".to_owned()));
    }

    let Some(user) = store::user_by_name(&db_pool, &name).await? else {
        return Err(AppError::Unauthorized(
            "No account found with that name".to_owned(),
        ));
    };

    tracing::info!("login {} (#{})", user.name, user.id);

    let user = session::establish(&session, user.into()).await?;

    Ok(Json(AuthOk {
        ok: true,
        user_id: user.id,
        name: user.name,
        photo_path: user.photo_path,
    }))
}
