//! Input validation utilities
//!
//! Every validator runs all of its checks and accumulates the messages,
//! so a form can show the user everything that is wrong at once instead
//! of one problem per round trip.

use crate::models::{PostForm, SignupForm};

/// Validate the create/edit post form fields
///
/// A field is missing when it is empty after trimming; each missing field
/// contributes its own message.
pub fn validate_post(form: &PostForm) -> Vec<String> {
    let mut errors = Vec::new();

    if form.title().trim().is_empty() {
        errors.push("Title is required".to_string());
    }
    if form.content().trim().is_empty() {
        errors.push("Content is required".to_string());
    }
    if form.author().trim().is_empty() {
        errors.push("Author is required".to_string());
    }

    errors
}

/// Validate the field-level rules of a signup form
///
/// Uniqueness of email and username is checked by the signup handler
/// against the user store; those messages are appended to the same list.
pub fn validate_signup(form: &SignupForm) -> Vec<String> {
    let mut errors = Vec::new();

    if form.username.trim().chars().count() < 3 {
        errors.push("Username must be at least 3 characters long".to_string());
    }
    if !form.email.contains('@') {
        errors.push("Please enter a valid email address".to_string());
    }
    if form.password.chars().count() < 6 {
        errors.push("Password must be at least 6 characters long".to_string());
    }
    if form.password != form.confirm_password {
        errors.push("Passwords do not match".to_string());
    }

    errors
}
