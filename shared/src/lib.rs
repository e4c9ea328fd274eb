//! Shared types for the fruit shop
//!
//! Common types used by the server and its clients: domain models,
//! error types, response structures and id helpers.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
