//! Signup, login and logout handlers

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    models::{LoginForm, NewUser, SignupForm, User},
    session::{session_token, SESSION_COOKIE},
    state::AppState,
    validation::validate_signup,
    views,
};

/// Generic login failure message
///
/// Deliberately identical for an unknown email and a wrong password so
/// the form cannot be used to enumerate accounts.
const LOGIN_FAILED: &str = "Invalid email or password";

/// Build the session cookie carrying a freshly established token
fn session_cookie(token: Uuid) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .build()
}

/// Show the signup form
pub async fn signup_form() -> Html<String> {
    Html(views::signup_page(&[], "", ""))
}

/// Handle a signup submission
///
/// Every check runs so the form can show all problems at once; the
/// uniqueness checks against the user store come after the field rules,
/// appended to the same list.
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SignupForm>,
) -> Response {
    let mut errors = validate_signup(&form);

    let email = form.email.trim();
    let username = form.username.trim();

    if state.users.find_by_email(email).await.is_some() {
        errors.push("Email is already registered".to_string());
    }
    if state.users.find_by_username(username).await.is_some() {
        errors.push("Username is already taken".to_string());
    }

    if !errors.is_empty() {
        // Echo the original, untrimmed input back into the form.
        return Html(views::signup_page(&errors, &form.username, &form.email)).into_response();
    }

    let user = state
        .users
        .create(NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: form.password,
        })
        .await;

    info!("User {} signed up", user.username);
    let token = state.sessions.establish(user.id).await;
    (jar.add(session_cookie(token)), Redirect::to("/")).into_response()
}

/// Show the login form
pub async fn login_form() -> Html<String> {
    Html(views::login_page(None, ""))
}

/// Handle a login submission
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let user = state.users.find_by_email(form.email.trim()).await;

    match user {
        Some(user) if user.password == form.password => {
            info!("User {} logged in", user.username);
            let token = state.sessions.establish(user.id).await;
            (jar.add(session_cookie(token)), Redirect::to("/")).into_response()
        }
        _ => {
            info!("Failed login attempt");
            Html(views::login_page(Some(LOGIN_FAILED), &form.email)).into_response()
        }
    }
}

/// Handle a logout submission
///
/// A failure tearing down the session is logged and never surfaced; the
/// visitor is sent home either way.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    Extension(user): Extension<User>,
) -> Response {
    match session_token(&jar) {
        Some(token) => {
            if !state.sessions.clear(token).await {
                warn!("Session for user {} was already gone", user.id);
            } else {
                info!("User {} logged out", user.username);
            }
        }
        None => warn!("Logout for user {} without a session cookie", user.id),
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/").build());
    (jar, Redirect::to("/")).into_response()
}
