//! Auth API
//!
//! | Path | Method | Description | Auth |
//! |------|------|------|------|
//! | /api/auth/otp | POST | request a code | none |
//! | /api/auth/verify | POST | verify the code and log in | none |
//! | /api/auth/me | GET | current user | token |
//! | /api/auth/logout | POST | log out | none |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", auth_routes())
}

fn auth_routes() -> Router<ServerState> {
    Router::new()
        .route("/otp", post(handler::request_otp))
        .route("/verify", post(handler::verify))
        .route("/me", get(handler::me))
        .route("/logout", post(handler::logout))
}
