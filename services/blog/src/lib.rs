//! Blog service library
//!
//! A server-rendered blog with in-memory storage: post CRUD, a JSON read
//! surface under `/api`, and a cookie-session signup/login layer. All
//! state lives in process memory and resets on restart.

pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod session;
pub mod state;
pub mod validation;
pub mod views;
