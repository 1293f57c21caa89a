//! Blog service routes

pub mod api;
pub mod auth;
pub mod posts;

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::{
    error::AppError,
    middleware::{require_auth, require_guest},
    state::AppState,
};

/// Create the router for the blog service
pub fn create_router(state: AppState) -> Router {
    let guest_routes = Router::new()
        .route("/signup", get(auth::signup_form).post(auth::signup))
        .route("/login", get(auth::login_form).post(auth::login))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_guest,
        ));

    let protected_routes = Router::new()
        .route("/logout", post(auth::logout))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/", get(posts::home))
        .route("/health", get(health_check))
        .route("/create", get(posts::create_form))
        .route("/posts", post(posts::create_post))
        .route(
            "/posts/:id",
            get(posts::show_post)
                .put(posts::update_post)
                .delete(posts::delete_post)
                // Plain HTML forms can only POST; `?_method=` dispatches.
                .post(posts::dispatch_override),
        )
        .route("/posts/:id/edit", get(posts::edit_form))
        .route("/api/posts", get(api::list_posts))
        .route("/api/posts/:id", get(api::get_post))
        .merge(guest_routes)
        .merge(protected_routes)
        .fallback(not_found)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "blog",
    }))
}

/// Fallback for unmatched routes
async fn not_found() -> AppError {
    AppError::PageNotFound
}
