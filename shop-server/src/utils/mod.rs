//! Utilities: shared helpers and types
//!
//! # Contents
//!
//! - [`AppError`] - application error (from shared::error)
//! - [`ApiResponse`] - API response body (from shared::error)
//! - logging, input validation

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
