//! User repository backed by process memory

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::models::{NewUser, User};

/// User repository
///
/// Users are append-only: there is no update or delete, so ids assigned as
/// `count + 1` are never reused.
#[derive(Debug, Clone)]
pub struct UserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository {
    /// Create an empty user repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a new user
    ///
    /// Uniqueness of email and username is NOT checked here; the signup
    /// flow pre-checks both so it can report every violation at once.
    pub async fn create(&self, new_user: NewUser) -> User {
        let mut users = self.users.lock().await;

        let user = User {
            id: users.len() as i64 + 1,
            username: new_user.username,
            email: new_user.email,
            password: new_user.password,
            created_at: Utc::now(),
        };

        info!("Creating new user: {}", user.username);
        users.push(user.clone());
        user
    }

    /// Find a user by email (case-sensitive exact match)
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let users = self.users.lock().await;
        users.iter().find(|user| user.email == email).cloned()
    }

    /// Find a user by username (case-sensitive exact match)
    pub async fn find_by_username(&self, username: &str) -> Option<User> {
        let users = self.users.lock().await;
        users.iter().find(|user| user.username == username).cloned()
    }

    /// Find a user by id
    pub async fn find_by_id(&self, id: i64) -> Option<User> {
        let users = self.users.lock().await;
        users.iter().find(|user| user.id == id).cloned()
    }

    /// Get all users in insertion order
    pub async fn list(&self) -> Vec<User> {
        let users = self.users.lock().await;
        users.clone()
    }

    /// Number of stored users
    pub async fn count(&self) -> usize {
        let users = self.users.lock().await;
        users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: "secret123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_follow_user_count() {
        let repo = UserRepository::new();

        let before = repo.count().await;
        let alice = repo.create(new_user("alice", "alice@example.com")).await;
        assert_eq!(alice.id, before as i64 + 1);

        let bob = repo.create(new_user("bob", "bob@example.com")).await;
        assert_eq!(bob.id, 2);
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn test_created_user_is_retrievable_by_every_key() {
        let repo = UserRepository::new();
        let created = repo.create(new_user("alice", "alice@example.com")).await;

        let by_id = repo.find_by_id(created.id).await.expect("find_by_id");
        let by_email = repo
            .find_by_email("alice@example.com")
            .await
            .expect("find_by_email");
        let by_username = repo.find_by_username("alice").await.expect("find_by_username");

        assert_eq!(by_id.id, created.id);
        assert_eq!(by_email.id, created.id);
        assert_eq!(by_username.id, created.id);
        assert_eq!(by_id.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_lookups_are_case_sensitive() {
        let repo = UserRepository::new();
        repo.create(new_user("Alice", "Alice@Example.com")).await;

        assert!(repo.find_by_username("alice").await.is_none());
        assert!(repo.find_by_email("alice@example.com").await.is_none());
        assert!(repo.find_by_username("Alice").await.is_some());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = UserRepository::new();
        repo.create(new_user("alice", "alice@example.com")).await;
        repo.create(new_user("bob", "bob@example.com")).await;
        repo.create(new_user("carol", "carol@example.com")).await;

        let usernames: Vec<String> = repo
            .list()
            .await
            .into_iter()
            .map(|user| user.username)
            .collect();
        assert_eq!(usernames, vec!["alice", "bob", "carol"]);
    }
}
