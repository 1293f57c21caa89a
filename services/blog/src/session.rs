//! Session management backed by process memory
//!
//! A session maps an opaque token (carried in an HttpOnly cookie) to
//! exactly one user id. A missing cookie, an unknown token, or a token
//! whose user no longer resolves all mean "not authenticated".

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use axum_extra::extract::cookie::CookieJar;

use crate::{models::User, state::AppState};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "blog_session";

/// Session manager for handling user sessions
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<Uuid, i64>>>,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManager {
    /// Create a new session manager
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Establish a new session for a user, returning its opaque token
    pub async fn establish(&self, user_id: i64) -> Uuid {
        let token = Uuid::new_v4();
        let mut sessions = self.sessions.lock().await;
        sessions.insert(token, user_id);

        info!("Established session for user {}", user_id);
        token
    }

    /// Resolve a session token to the user id it was established for
    pub async fn resolve(&self, token: Uuid) -> Option<i64> {
        let sessions = self.sessions.lock().await;
        sessions.get(&token).copied()
    }

    /// Clear a session; returns whether the token was actually present
    pub async fn clear(&self, token: Uuid) -> bool {
        let mut sessions = self.sessions.lock().await;
        sessions.remove(&token).is_some()
    }
}

/// Resolve the session cookie in `jar` to a user, if any
pub async fn current_user(state: &AppState, jar: &CookieJar) -> Option<User> {
    let token = session_token(jar)?;
    let user_id = state.sessions.resolve(token).await?;
    state.users.find_by_id(user_id).await
}

/// Parse the session token out of the cookie jar
pub fn session_token(jar: &CookieJar) -> Option<Uuid> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_establish_and_resolve() {
        let sessions = SessionManager::new();
        let token = sessions.establish(7).await;
        assert_eq!(sessions.resolve(token).await, Some(7));
    }

    #[tokio::test]
    async fn test_unknown_token_does_not_resolve() {
        let sessions = SessionManager::new();
        assert_eq!(sessions.resolve(Uuid::new_v4()).await, None);
    }

    #[tokio::test]
    async fn test_clear_removes_the_session() {
        let sessions = SessionManager::new();
        let token = sessions.establish(7).await;

        assert!(sessions.clear(token).await);
        assert_eq!(sessions.resolve(token).await, None);

        // Clearing again reports the token as already gone.
        assert!(!sessions.clear(token).await);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let sessions = SessionManager::new();
        let first = sessions.establish(1).await;
        let second = sessions.establish(2).await;

        sessions.clear(first).await;
        assert_eq!(sessions.resolve(second).await, Some(2));
    }
}
