use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{AppError, AppResult, store::User};

pub const SESSION_USER: &str = "user";

/// Copy of the logged-in identity held server-side per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
    pub photo_path: String,
}

impl From<User> for SessionUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            photo_path: user.photo_path,
        }
    }
}

pub async fn establish(session: &Session, user: SessionUser) -> AppResult<SessionUser> {
    session.insert(SESSION_USER, user.clone()).await?;
    Ok(user)
}

/// Session identity if logged in. Page handlers branch on `None` to
/// redirect; API handlers go through `require_user` instead.
pub async fn current_user(session: &Session) -> AppResult<Option<SessionUser>> {
    Ok(session.get::<SessionUser>(SESSION_USER).await?)
}

pub async fn require_user(session: &Session) -> AppResult<SessionUser> {
    current_user(session)
        .await?
        .ok_or_else(AppError::auth_required)
}
