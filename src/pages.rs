//! Static front-end, embedded at compile time from `res/`. Pages behind
//! the session get a redirect to the login page instead of a 401 so the
//! browser flow works without scripting.

use axum::{
    Router, debug_handler,
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use tower_sessions::Session;

use crate::{AppResult, AppState, include_res, session};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/index.html", get(index_page))
        .route("/login.html", get(login_page))
        .route("/register.html", get(register_page))
        .route("/rate.html", get(rate_page))
        .route("/matches.html", get(matches_page))
        .route("/js/auth.js", get(auth_js))
        .route("/js/rate.js", get(rate_js))
        .route("/js/matches.js", get(matches_js))
        .route("/css/style.css", get(style_css))
}

/// `/` — straight to the swipe deck when logged in, the landing page
/// otherwise.
#[debug_handler]
pub async fn root(session: Session) -> AppResult<Redirect> {
    Ok(if session::current_user(&session).await?.is_some() {
        Redirect::to("/rate.html")
    } else {
        Redirect::to("/index.html")
    })
}

async fn index_page() -> Html<&'static str> {
    Html(include_res!(str, "/pages/index.html"))
}

async fn login_page() -> Html<&'static str> {
    Html(include_res!(str, "/pages/login.html"))
}

async fn register_page() -> Html<&'static str> {
    Html(include_res!(str, "/pages/register.html"))
}

#[debug_handler]
async fn rate_page(session: Session) -> AppResult<Response> {
    gated(&session, include_res!(str, "/pages/rate.html")).await
}

#[debug_handler]
async fn matches_page(session: Session) -> AppResult<Response> {
    gated(&session, include_res!(str, "/pages/matches.html")).await
}

async fn gated(session: &Session, body: &'static str) -> AppResult<Response> {
    if session::current_user(session).await?.is_none() {
        return Ok(Redirect::to("/login.html").into_response());
    }
    Ok(Html(body).into_response())
}

async fn auth_js() -> impl IntoResponse {
    script(include_res!(str, "/js/auth.js"))
}

async fn rate_js() -> impl IntoResponse {
    script(include_res!(str, "/js/rate.js"))
}

async fn matches_js() -> impl IntoResponse {
    script(include_res!(str, "/js/matches.js"))
}

async fn style_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], include_res!(str, "/css/style.css"))
}

fn script(body: &'static str) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript")], body)
}
