//! Application state shared across handlers

use crate::{
    repositories::{PostRepository, UserRepository},
    session::SessionManager,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: UserRepository,
    pub posts: PostRepository,
    pub sessions: SessionManager,
}

impl AppState {
    /// Create application state with empty stores
    pub fn new() -> Self {
        Self {
            users: UserRepository::new(),
            posts: PostRepository::new(),
            sessions: SessionManager::new(),
        }
    }

    /// Create application state with a pre-populated post store
    pub fn with_posts(posts: PostRepository) -> Self {
        Self {
            users: UserRepository::new(),
            posts,
            sessions: SessionManager::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
