//! web_service - HTTP API and embedded chat page
//!
//! Exposes the receptionist over a small JSON API and serves a single-page
//! chat UI from the same binary, so `frontdesk serve` is the whole web app.

pub mod controllers;
pub mod error;
pub mod models;
pub mod server;

pub use error::ApiError;
pub use server::{run, AppState, ServerSettings};
