use axum::{Json, debug_handler, extract::State};
use serde::Serialize;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{AppResult, AppState, ImageDeck, session, store};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesResponse {
    pub my_rated_count: i64,
    pub total: usize,
    pub my_done: bool,
    pub matches: Vec<MatchEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntry {
    pub user_id: i64,
    pub name: String,
    pub photo_path: String,
    pub score: i64,
    pub their_rated_count: i64,
    pub their_done: bool,
}

/// Leaderboard of every other user by rating agreement, best first.
/// Ordering and scoring are done in the store query; this handler only
/// shapes the rows and attaches the requester's own completion state.
#[debug_handler(state = AppState)]
pub async fn list(
    State(db_pool): State<SqlitePool>,
    State(deck): State<ImageDeck>,
    session: Session,
) -> AppResult<Json<MatchesResponse>> {
    let user = session::require_user(&session).await?;

    let total = deck.len();
    let my_rated_count = store::rated_count(&db_pool, user.id).await?;
    let rows = store::ranked_matches(&db_pool, user.id).await?;

    Ok(Json(MatchesResponse {
        my_rated_count,
        total,
        my_done: my_rated_count >= total as i64,
        matches: rows
            .into_iter()
            .map(|row| MatchEntry {
                user_id: row.user_id,
                name: row.name,
                photo_path: row.photo_path,
                score: row.score,
                their_done: row.their_rated_count >= total as i64,
                their_rated_count: row.their_rated_count,
            })
            .collect(),
    }))
}
