use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Everything a handler can fail with, bucketed by the status code the
/// client should see. Store-level failures land in `Internal` unless a
/// handler translates them first (e.g. unique violations into `Conflict`).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn auth_required() -> Self {
        AppError::Unauthorized("Not authenticated".to_owned())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(err) => {
                tracing::error!("internal error: {err:#}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Raw causes stay in the log, never in the body.
        let message = match &self {
            AppError::Internal(_) => "Something went wrong".to_owned(),
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

macro_rules! apperr_impl {
    ($E:ty) => {
        impl From<$E> for AppError {
            fn from(err: $E) -> Self {
                Self::Internal(anyhow::Error::from(err))
            }
        }
    };
}

apperr_impl!(sqlx::Error);
apperr_impl!(tower_sessions::session::Error);
apperr_impl!(std::io::Error);
apperr_impl!(axum::extract::multipart::MultipartError);
