//! JSON read surface for programmatic consumers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::ApiError, models::Post, state::AppState};

/// Get all posts, newest first
pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.posts.list().await)
}

/// Get a single post by id
pub async fn get_post(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let id: i64 = raw_id.parse().map_err(|_| ApiError::PostNotFound)?;
    state
        .posts
        .find_by_id(id)
        .await
        .map(Json)
        .ok_or(ApiError::PostNotFound)
}
