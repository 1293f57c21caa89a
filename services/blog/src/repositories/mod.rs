//! In-memory repositories for blog data
//!
//! Both repositories are cheap-to-clone handles over shared state guarded
//! by a mutex, since the web framework runs handlers concurrently.
//! Everything resets on process restart.

pub mod post;
pub mod user;

pub use post::PostRepository;
pub use user::UserRepository;
