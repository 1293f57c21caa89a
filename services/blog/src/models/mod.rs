//! Blog service models

pub mod post;
pub mod user;

// Re-export for convenience
pub use post::{NewPost, Post, PostForm, UpdatePost};
pub use user::{LoginForm, NewUser, SignupForm, User};
