//! Authentication
//!
//! - [`JwtService`] - JWT token service
//! - [`CurrentUser`] / [`AdminUser`] - user context of a request
//! - [`OtpVerifier`] - one-time code check
//! - [`SessionId`] - cart session

pub mod extractor;
pub mod jwt;
pub mod otp;

pub use extractor::{AdminUser, SESSION_HEADER, SessionId};
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use otp::{FixedCodeVerifier, OtpVerifier};
