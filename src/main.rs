use std::{str::FromStr, sync::Arc};

use axum::{Router, routing::get};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tinderbox::{AppState, Config, ImageDeck, auth, matches, pages, store, tinder};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::SameSite};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::load());
    std::fs::create_dir_all(&config.uploads_dir)?;
    if let Some(db_file) = config.database_url.strip_prefix("sqlite://") {
        if let Some(parent) = std::path::Path::new(db_file).parent() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db_pool = SqlitePoolOptions::new()
        .max_connections(16)
        .connect_with(
            SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true),
        )
        .await?;
    store::init_schema(&db_pool).await?;

    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::hours(
            config.session_hours,
        )));

    let app_state = AppState {
        db_pool,
        deck: ImageDeck::standard(),
        config: config.clone(),
    };

    let app = Router::new()
        .route("/", get(pages::root))
        .merge(pages::router())
        .merge(auth::router())
        .nest("/tinder", tinder::router())
        .route("/matches", get(matches::list))
        .nest_service("/uploads", ServeDir::new(&config.uploads_dir))
        .nest_service("/images", ServeDir::new(&config.images_dir))
        .with_state(app_state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("tinderbox burning at http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
