use axum::{Json, debug_handler, extract::State};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{AppResult, AppState, ImageDeck, session, store};

/// Next card in canonical order, or the done signal once every image is
/// rated. Read-only, so asking twice without rating returns the same card.
#[debug_handler(state = AppState)]
pub(crate) async fn next(
    State(db_pool): State<SqlitePool>,
    State(deck): State<ImageDeck>,
    session: Session,
) -> AppResult<Json<Value>> {
    let user = session::require_user(&session).await?;

    let rated = store::rated_images(&db_pool, user.id).await?;
    let total = deck.len();

    let Some(image) = deck.first_unrated(&rated) else {
        return Ok(Json(json!({ "done": true, "rated": total, "total": total })));
    };

    Ok(Json(json!({
        "done": false,
        "image": image,
        "src": deck.src(image),
        "rated": rated.len(),
        "remaining": total - rated.len(),
        "total": total,
    })))
}
