use axum::{Json, debug_handler, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{AppError, AppResult, AppState, ImageDeck, session, store};

// `rating` stays a plain string so bad values get the 400 validation
// message rather than a serde rejection.
#[derive(Deserialize)]
pub(crate) struct RateRequest {
    image: Option<String>,
    rating: Option<String>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn rate(
    State(db_pool): State<SqlitePool>,
    State(deck): State<ImageDeck>,
    session: Session,
    Json(RateRequest { image, rating }): Json<RateRequest>,
) -> AppResult<Json<Value>> {
    let user = session::require_user(&session).await?;

    let image = image.unwrap_or_default();
    if image.is_empty() || !deck.contains(&image) {
        return Err(AppError::BadRequest("Invalid image name".to_owned()));
    }

    let verdict = rating
        .unwrap_or_default()
        .parse::<store::Verdict>()
        .map_err(|_| AppError::BadRequest("Rating must be \"like\" or \"dislike\"".to_owned()))?;

    store::upsert_rating(&db_pool, user.id, &image, verdict).await?;
    let progress = store::progress(&db_pool, &deck, user.id).await?;

    tracing::debug!("{} rated {image}: {verdict}", user.name);

    Ok(Json(json!({
        "ok": true,
        "rated": progress.rated,
        "remaining": progress.remaining,
        "done": progress.done,
        "total": progress.total,
    })))
}
