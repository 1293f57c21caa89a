//! Route guards for session-based authentication
//!
//! Both guards only short-circuit control flow with a redirect; neither
//! mutates any store or session state.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use crate::{
    session::{self, current_user},
    state::AppState,
};

/// Require an authenticated session
///
/// Redirects to the login page when there is no session cookie, the token
/// is unknown, or the session points at a user that no longer resolves.
/// On success the resolved user is attached to the request extensions for
/// downstream handlers.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match current_user(&state, &jar).await {
        Some(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        None => Redirect::to("/login").into_response(),
    }
}

/// Require that no session is established
///
/// Sends already-authenticated visitors back to the home page instead of
/// showing them the signup/login forms again.
pub async fn require_guest(
    State(state): State<AppState>,
    jar: CookieJar,
    req: Request<Body>,
    next: Next,
) -> Response {
    let resolved = match session::session_token(&jar) {
        Some(token) => state.sessions.resolve(token).await,
        None => None,
    };

    match resolved {
        Some(user_id) => {
            info!("User {} is already authenticated, redirecting home", user_id);
            Redirect::to("/").into_response()
        }
        None => next.run(req).await,
    }
}
