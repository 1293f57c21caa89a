//! Common library for the blog application
//!
//! This crate provides shared functionality used across the blog
//! workspace, including server configuration and the error types used by
//! the in-memory stores.

pub mod config;
pub mod error;
