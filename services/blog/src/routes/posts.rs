//! Post CRUD handlers (server-rendered surface)

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tracing::info;

use crate::{
    error::{ApiError, AppError},
    models::{NewPost, PostForm, UpdatePost},
    session::current_user,
    state::AppState,
    validation::validate_post,
    views,
};

/// Parse a path segment as a post id
///
/// A malformed id is indistinguishable from a well-formed id with no
/// record behind it: both surface as "Post not found".
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Home page: every post, newest first
pub async fn home(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let viewer = current_user(&state, &jar).await;
    let posts = state.posts.list().await;
    Html(views::index_page(&posts, viewer.as_ref()))
}

/// Show the create form
pub async fn create_form(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let viewer = current_user(&state, &jar).await;
    Html(views::create_page(&[], "", "", "", viewer.as_ref()))
}

/// Create a new post
pub async fn create_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<PostForm>,
) -> Response {
    let errors = validate_post(&form);
    if !errors.is_empty() {
        // Re-present the form with every violation and the submitted values.
        let viewer = current_user(&state, &jar).await;
        return Html(views::create_page(
            &errors,
            form.title(),
            form.content(),
            form.author(),
            viewer.as_ref(),
        ))
        .into_response();
    }

    let post = state
        .posts
        .create(NewPost {
            title: form.title().to_string(),
            content: form.content().to_string(),
            author: form.author().to_string(),
        })
        .await;

    info!("Post {} created", post.id);
    Redirect::to("/").into_response()
}

/// Show a single post
pub async fn show_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&raw_id).ok_or(AppError::PostNotFound)?;
    let post = state
        .posts
        .find_by_id(id)
        .await
        .ok_or(AppError::PostNotFound)?;

    let viewer = current_user(&state, &jar).await;
    Ok(Html(views::post_page(&post, viewer.as_ref())))
}

/// Show the edit form for an existing post
pub async fn edit_form(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&raw_id).ok_or(AppError::PostNotFound)?;
    let post = state
        .posts
        .find_by_id(id)
        .await
        .ok_or(AppError::PostNotFound)?;

    let viewer = current_user(&state, &jar).await;
    Ok(Html(views::edit_page(
        post.id,
        &[],
        &post.title,
        &post.content,
        &post.author,
        viewer.as_ref(),
    )))
}

/// Update an existing post
pub async fn update_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(raw_id): Path<String>,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    let id = parse_id(&raw_id).ok_or(AppError::PostNotFound)?;
    let post = state
        .posts
        .find_by_id(id)
        .await
        .ok_or(AppError::PostNotFound)?;

    let errors = validate_post(&form);
    if !errors.is_empty() {
        // Merge the stored record with the submitted fields so the form
        // reflects the attempted edit, not the last saved state.
        let title = form.title.as_deref().unwrap_or(&post.title);
        let content = form.content.as_deref().unwrap_or(&post.content);
        let author = form.author.as_deref().unwrap_or(&post.author);

        let viewer = current_user(&state, &jar).await;
        return Ok(Html(views::edit_page(
            post.id,
            &errors,
            title,
            content,
            author,
            viewer.as_ref(),
        ))
        .into_response());
    }

    state
        .posts
        .update(
            id,
            UpdatePost {
                title: form.title().to_string(),
                content: form.content().to_string(),
                author: form.author().to_string(),
            },
        )
        .await
        .map_err(|_| AppError::PostNotFound)?;

    Ok(Redirect::to("/").into_response())
}

/// Delete a post
///
/// The missing-id case answers with a JSON 404 rather than an error page;
/// success redirects home like the other mutations.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Redirect, ApiError> {
    let id = parse_id(&raw_id).ok_or(ApiError::PostNotFound)?;
    state
        .posts
        .delete(id)
        .await
        .map_err(|_| ApiError::PostNotFound)?;

    Ok(Redirect::to("/"))
}

/// Query string accepted by the method-override dispatch
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MethodOverride {
    #[serde(rename = "_method")]
    pub method: Option<String>,
}

/// Dispatch `POST /posts/:id?_method=PUT|DELETE` to the real handler
pub async fn dispatch_override(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(raw_id): Path<String>,
    Query(query): Query<MethodOverride>,
    Form(form): Form<PostForm>,
) -> Response {
    let method = query.method.unwrap_or_default().to_ascii_uppercase();
    match method.as_str() {
        "PUT" => update_post(State(state), jar, Path(raw_id), Form(form))
            .await
            .into_response(),
        "DELETE" => delete_post(State(state), Path(raw_id))
            .await
            .into_response(),
        _ => AppError::PageNotFound.into_response(),
    }
}
