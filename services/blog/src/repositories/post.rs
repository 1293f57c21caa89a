//! Post repository backed by process memory

use chrono::Utc;
use common::error::{StoreError, StoreResult};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::models::{NewPost, Post, UpdatePost};

/// Interior state: the records plus the id counter
#[derive(Debug)]
struct PostsInner {
    posts: Vec<Post>,
    next_id: i64,
}

/// Post repository
///
/// Ids come from a monotonic counter that never decrements, so deleting a
/// post never frees its id for reuse.
#[derive(Debug, Clone)]
pub struct PostRepository {
    inner: Arc<Mutex<PostsInner>>,
}

impl Default for PostRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PostRepository {
    /// Create an empty post repository
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(PostsInner {
                posts: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Create a repository pre-populated with existing records
    ///
    /// The id counter is seeded strictly above the highest preloaded id.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|post| post.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Mutex::new(PostsInner { posts, next_id })),
        }
    }

    /// Create a new post
    ///
    /// All three fields are stored trimmed and `created_at` is stamped to
    /// the current time. Callers validate non-emptiness beforehand.
    pub async fn create(&self, new_post: NewPost) -> Post {
        let mut inner = self.inner.lock().await;

        let post = Post {
            id: inner.next_id,
            title: new_post.title.trim().to_string(),
            content: new_post.content.trim().to_string(),
            author: new_post.author.trim().to_string(),
            created_at: Utc::now(),
            updated_at: None,
        };

        info!("Creating post {}: {}", post.id, post.title);
        inner.next_id += 1;
        inner.posts.push(post.clone());
        post
    }

    /// Find a post by id
    pub async fn find_by_id(&self, id: i64) -> Option<Post> {
        let inner = self.inner.lock().await;
        inner.posts.iter().find(|post| post.id == id).cloned()
    }

    /// Update a post in place
    ///
    /// Overwrites title, content and author (trimmed) and stamps
    /// `updated_at`. Fails with `StoreError::NotFound` if the id is absent.
    pub async fn update(&self, id: i64, update: UpdatePost) -> StoreResult<Post> {
        let mut inner = self.inner.lock().await;

        let post = inner
            .posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(StoreError::NotFound)?;

        post.title = update.title.trim().to_string();
        post.content = update.content.trim().to_string();
        post.author = update.author.trim().to_string();
        post.updated_at = Some(Utc::now());

        info!("Updated post {}", id);
        Ok(post.clone())
    }

    /// Delete a post by id
    ///
    /// Fails with `StoreError::NotFound` if the id is absent; the counter
    /// is left untouched either way.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.lock().await;

        let index = inner
            .posts
            .iter()
            .position(|post| post.id == id)
            .ok_or(StoreError::NotFound)?;

        inner.posts.remove(index);
        info!("Deleted post {}", id);
        Ok(())
    }

    /// Get all posts, newest first
    ///
    /// Sorted descending by `created_at`; the sort is stable, so posts
    /// sharing a timestamp keep their insertion order.
    pub async fn list(&self) -> Vec<Post> {
        let inner = self.inner.lock().await;
        let mut posts = inner.posts.clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    /// Number of stored posts
    pub async fn count(&self) -> usize {
        let inner = self.inner.lock().await;
        inner.posts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    fn new_post(title: &str, content: &str, author: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
        }
    }

    fn seeded_post(id: i64, title: &str, created_at: DateTime<Utc>) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: "content".to_string(),
            author: "author".to_string(),
            created_at,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_trims_fields() {
        let repo = PostRepository::new();
        let post = repo.create(new_post(" Hi ", " World ", " A ")).await;

        assert_eq!(post.title, "Hi");
        assert_eq!(post.content, "World");
        assert_eq!(post.author, "A");

        // Reading it back returns the trimmed values as well.
        let stored = repo.find_by_id(post.id).await.expect("post exists");
        assert_eq!(stored.title, "Hi");
        assert_eq!(stored.content, "World");
        assert_eq!(stored.author, "A");
    }

    #[tokio::test]
    async fn test_created_post_has_no_updated_at() {
        let repo = PostRepository::new();
        let post = repo.create(new_post("Title", "Content", "Author")).await;

        let stored = repo.find_by_id(post.id).await.expect("post exists");
        assert!(stored.updated_at.is_none());

        let updated = repo
            .update(
                post.id,
                UpdatePost {
                    title: "New title".to_string(),
                    content: "New content".to_string(),
                    author: "New author".to_string(),
                },
            )
            .await
            .expect("update succeeds");

        let updated_at = updated.updated_at.expect("updated_at is set");
        assert!(updated_at >= updated.created_at);
        assert_eq!(updated.title, "New title");
    }

    #[tokio::test]
    async fn test_update_missing_post_fails() {
        let repo = PostRepository::new();
        let result = repo
            .update(
                42,
                UpdatePost {
                    title: "t".to_string(),
                    content: "c".to_string(),
                    author: "a".to_string(),
                },
            )
            .await;
        assert_eq!(result.unwrap_err(), StoreError::NotFound);
    }

    #[tokio::test]
    async fn test_delete_missing_post_leaves_store_unchanged() {
        let now = Utc::now();
        let repo = PostRepository::with_posts(vec![
            seeded_post(1, "first", now - Duration::days(2)),
            seeded_post(2, "second", now - Duration::days(1)),
        ]);

        let result = repo.delete(42).await;
        assert_eq!(result.unwrap_err(), StoreError::NotFound);

        assert_eq!(repo.count().await, 2);
        assert!(repo.find_by_id(1).await.is_some());
        assert!(repo.find_by_id(2).await.is_some());
    }

    #[tokio::test]
    async fn test_delete_removes_record_but_not_counter() {
        let repo = PostRepository::new();
        let first = repo.create(new_post("first", "c", "a")).await;
        repo.delete(first.id).await.expect("delete succeeds");
        assert!(repo.find_by_id(first.id).await.is_none());

        // The freed id is never handed out again.
        let second = repo.create(new_post("second", "c", "a")).await;
        assert_eq!(second.id, first.id + 1);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let now = Utc::now();
        let repo = PostRepository::with_posts(vec![
            seeded_post(1, "oldest", now - Duration::days(3)),
            seeded_post(2, "middle", now - Duration::days(2)),
            seeded_post(3, "newest", now - Duration::days(1)),
        ]);

        let titles: Vec<String> = repo
            .list()
            .await
            .into_iter()
            .map(|post| post.title)
            .collect();
        assert_eq!(titles, vec!["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn test_list_ties_keep_insertion_order() {
        let shared = Utc::now();
        let repo = PostRepository::with_posts(vec![
            seeded_post(1, "first", shared),
            seeded_post(2, "second", shared),
        ]);

        let titles: Vec<String> = repo
            .list()
            .await
            .into_iter()
            .map(|post| post.title)
            .collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_counter_seeded_above_preloaded_ids() {
        let repo = PostRepository::with_posts(vec![seeded_post(3, "seed", Utc::now())]);
        let post = repo.create(new_post("fresh", "c", "a")).await;
        assert_eq!(post.id, 4);
    }
}
