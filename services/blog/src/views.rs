//! Server-rendered HTML pages
//!
//! Presentation is deliberately plain: a shared layout, escaped
//! interpolation, and no client-side machinery. Handlers pass in whatever
//! the page needs; nothing here touches the stores.

use chrono::{DateTime, Utc};

use crate::models::{Post, User};

/// Escape text for safe interpolation into HTML
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Format a timestamp the way the pages show it, e.g. "August 9, 2025"
fn format_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Shared page chrome: nav reflects whether a viewer is signed in
fn layout(title: &str, viewer: Option<&User>, body: &str) -> String {
    let nav = match viewer {
        Some(user) => format!(
            concat!(
                r#"<span class="nav-user">Hello, {}</span>"#,
                r#"<form class="nav-form" action="/logout" method="POST">"#,
                r#"<button type="submit">Log out</button></form>"#
            ),
            escape(&user.username)
        ),
        None => concat!(
            r#"<a href="/login">Log in</a> "#,
            r#"<a href="/signup">Sign up</a>"#
        )
        .to_string(),
    };

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            "<title>{title}</title></head>\n",
            "<body>\n",
            r#"<nav><a href="/">Home</a> <a href="/create">New Post</a> {nav}</nav>"#,
            "\n<main>\n{body}\n</main>\n</body></html>\n"
        ),
        title = escape(title),
        nav = nav,
        body = body
    )
}

/// Bullet list of validation messages, or nothing when the list is empty
fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let items: String = errors
        .iter()
        .map(|error| format!("<li>{}</li>", escape(error)))
        .collect();
    format!(r#"<ul class="errors">{}</ul>"#, items)
}

/// Home page: every post, newest first
pub fn index_page(posts: &[Post], viewer: Option<&User>) -> String {
    let body = if posts.is_empty() {
        "<p>No posts yet. Why not write the first one?</p>".to_string()
    } else {
        posts
            .iter()
            .map(|post| {
                format!(
                    concat!(
                        r#"<article class="blog-card">"#,
                        r#"<h2 class="card-title"><a href="/posts/{id}">{title}</a></h2>"#,
                        "<p>{content}</p>",
                        "<footer>By {author} on {date}</footer>",
                        "</article>"
                    ),
                    id = post.id,
                    title = escape(&post.title),
                    content = escape(&post.content),
                    author = escape(&post.author),
                    date = format_date(post.created_at),
                )
            })
            .collect()
    };

    layout("Home - My Blog", viewer, &body)
}

/// Single post page
pub fn post_page(post: &Post, viewer: Option<&User>) -> String {
    let updated = match post.updated_at {
        Some(at) => format!("<p><em>Updated {}</em></p>", format_date(at)),
        None => String::new(),
    };

    let body = format!(
        concat!(
            "<article>",
            "<h1>{title}</h1>",
            "<p>{content}</p>",
            "<footer>By {author} on {date}</footer>",
            "{updated}",
            "</article>",
            r#"<a href="/posts/{id}/edit">Edit</a>"#,
            r#"<form action="/posts/{id}?_method=DELETE" method="POST">"#,
            r#"<button type="submit">Delete</button></form>"#
        ),
        id = post.id,
        title = escape(&post.title),
        content = escape(&post.content),
        author = escape(&post.author),
        date = format_date(post.created_at),
        updated = updated,
    );

    layout(&format!("{} - My Blog", post.title), viewer, &body)
}

/// Post form fields shared by the create and edit pages
fn post_fields(title: &str, content: &str, author: &str) -> String {
    format!(
        concat!(
            r#"<label>Title <input type="text" name="title" value="{title}" required></label>"#,
            r#"<label>Content <textarea name="content" required>{content}</textarea></label>"#,
            r#"<label>Author <input type="text" name="author" value="{author}" required></label>"#
        ),
        title = escape(title),
        content = escape(content),
        author = escape(author),
    )
}

/// Create form, echoing the submitted values next to any errors
pub fn create_page(
    errors: &[String],
    title: &str,
    content: &str,
    author: &str,
    viewer: Option<&User>,
) -> String {
    let body = format!(
        concat!(
            "<h1>Create New Post</h1>{errors}",
            r#"<form action="/posts" method="POST">{fields}"#,
            r#"<button type="submit">Create Post</button></form>"#
        ),
        errors = error_list(errors),
        fields = post_fields(title, content, author),
    );

    layout("Create New Post - My Blog", viewer, &body)
}

/// Edit form for an existing post id, showing the given field values
pub fn edit_page(
    id: i64,
    errors: &[String],
    title: &str,
    content: &str,
    author: &str,
    viewer: Option<&User>,
) -> String {
    let body = format!(
        concat!(
            "<h1>Edit Post</h1>{errors}",
            r#"<form action="/posts/{id}?_method=PUT" method="POST">{fields}"#,
            r#"<button type="submit">Update Post</button></form>"#
        ),
        id = id,
        errors = error_list(errors),
        fields = post_fields(title, content, author),
    );

    layout(&format!("Edit {} - My Blog", title), viewer, &body)
}

/// Signup form, echoing the submitted username and email (never passwords)
pub fn signup_page(errors: &[String], username: &str, email: &str) -> String {
    let body = format!(
        concat!(
            "<h1>Sign Up</h1>{errors}",
            r#"<form action="/signup" method="POST">"#,
            r#"<label>Username <input type="text" name="username" value="{username}" required></label>"#,
            r#"<label>Email <input type="email" name="email" value="{email}" required></label>"#,
            r#"<label>Password <input type="password" name="password" required></label>"#,
            r#"<label>Confirm password <input type="password" name="confirm_password" required></label>"#,
            r#"<button type="submit">Sign Up</button></form>"#,
            r#"<p>Already have an account? <a href="/login">Log in</a></p>"#
        ),
        errors = error_list(errors),
        username = escape(username),
        email = escape(email),
    );

    layout("Sign Up - My Blog", None, &body)
}

/// Login form with an optional (always generic) error message
pub fn login_page(error: Option<&str>, email: &str) -> String {
    let error_html = match error {
        Some(message) => format!(r#"<p class="errors">{}</p>"#, escape(message)),
        None => String::new(),
    };

    let body = format!(
        concat!(
            "<h1>Log In</h1>{error}",
            r#"<form action="/login" method="POST">"#,
            r#"<label>Email <input type="email" name="email" value="{email}" required></label>"#,
            r#"<label>Password <input type="password" name="password" required></label>"#,
            r#"<button type="submit">Log In</button></form>"#,
            r#"<p>New here? <a href="/signup">Sign up</a></p>"#
        ),
        error = error_html,
        email = escape(email),
    );

    layout("Log In - My Blog", None, &body)
}

/// Generic error page used for 404s and 500s
pub fn error_page(message: &str) -> String {
    let body = format!(
        concat!(
            "<h1>Error</h1><p>{}</p>",
            r#"<a href="/">Back to home</a>"#
        ),
        escape(message)
    );

    layout("Error - My Blog", None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_format_date_matches_page_style() {
        let date = Utc.with_ymd_and_hms(2025, 8, 9, 12, 0, 0).unwrap();
        assert_eq!(format_date(date), "August 9, 2025");
    }

    #[test]
    fn test_index_page_escapes_post_content() {
        let post = Post {
            id: 1,
            title: "<b>bold</b>".to_string(),
            content: "content".to_string(),
            author: "author".to_string(),
            created_at: Utc::now(),
            updated_at: None,
        };

        let html = index_page(&[post], None);
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn test_error_list_renders_every_message() {
        let errors = vec!["Title is required".to_string(), "Author is required".to_string()];
        let html = create_page(&errors, "", "c", "", None);
        assert!(html.contains("Title is required"));
        assert!(html.contains("Author is required"));
    }
}
