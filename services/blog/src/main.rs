use anyhow::Result;
use chrono::{Duration, Utc};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use blog::{models::Post, repositories::PostRepository, routes, state::AppState};
use common::config::ServerConfig;

/// Sample posts so the home page is non-empty on first boot
///
/// Ids start at 1; the repository seeds its counter above the highest one.
fn sample_posts() -> Vec<Post> {
    let base = Utc::now();
    let sample = |id: i64, title: &str, content: &str, author: &str, age_days: i64| Post {
        id,
        title: title.to_string(),
        content: content.to_string(),
        author: author.to_string(),
        created_at: base - Duration::days(age_days),
        updated_at: None,
    };

    vec![
        sample(
            1,
            "Welcome to Our Blog",
            "This is your first blog post! You can create, edit, and delete posts using this application.",
            "Admin",
            3,
        ),
        sample(
            2,
            "Getting Started",
            "Explore your ideas with this blog and share what you are thinking about.",
            "Developer",
            2,
        ),
        sample(
            3,
            "Writing Your Own Posts",
            "Use the New Post link above to write something of your own. Posts can be edited or deleted later.",
            "Editor",
            1,
        ),
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting blog service");

    let config = ServerConfig::from_env()?;

    // All state is process-memory-resident and lost on restart.
    let state = AppState::with_posts(PostRepository::with_posts(sample_posts()));
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Blog service listening on {}", config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
