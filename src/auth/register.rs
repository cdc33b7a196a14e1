use std::{path::Path, sync::Arc};

use axum::{
    Json,
    body::Bytes,
    debug_handler,
    extract::{Multipart, State},
};
use sqlx::SqlitePool;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{AppError, AppResult, Config, session, store};

use super::AuthOk;

const ALLOWED_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

#[debug_handler(state = crate::AppState)]
pub(crate) async fn register(
    State(db_pool): State<SqlitePool>,
    State(config): State<Arc<Config>>,
    session: Session,
    mut multipart: Multipart,
) -> AppResult<Json<AuthOk>> {
    let mut name: Option<String> = None;
    let mut photo: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("name") => name = Some(field.text().await?),
            Some("photo") => {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                photo = Some((file_name, field.bytes().await?));
            }
            _ => {}
        }
    }

    let name = name.unwrap_or_default().trim().to_owned();
    if name.is_empty() {
        return Err(AppError::BadRequest("Name is required".to_owned()));
    }

    let Some((file_name, data)) = photo else {
        return Err(AppError::BadRequest("Profile photo is required".to_owned()));
    };

    let ext = extension_of(&file_name);
    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(AppError::BadRequest("Only image files are allowed".to_owned()));
    }

    let stored_name = format!("{}{ext}", Uuid::now_v7().simple());
    tokio::fs::write(config.uploads_dir.join(&stored_name), &data).await?;
    let photo_path = format!("uploads/{stored_name}");

    let user_id = match store::create_user(&db_pool, &name, &photo_path).await {
        Ok(id) => id,
        Err(e) if is_unique_violation(&e) => {
            return Err(AppError::Conflict(
                "That name is already taken. Please choose another.".to_owned(),
            ));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("registered {name} (#{user_id})");

    let user = session::establish(
        &session,
        session::SessionUser {
            id: user_id,
            name,
            photo_path,
        },
    )
    .await?;

    Ok(Json(AuthOk {
        ok: true,
        user_id: user.id,
        name: user.name,
        photo_path: user.photo_path,
    }))
}

fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}
