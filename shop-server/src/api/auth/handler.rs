//! Auth API Handlers

use axum::{Json, extract::State};
use shared::models::{LoginResponse, OtpRequest, OtpRequested, User, VerifyOtpRequest};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult};

/// POST /api/auth/otp - request a code (simulated, no SMS is sent)
pub async fn request_otp(
    State(state): State<ServerState>,
    Json(payload): Json<OtpRequest>,
) -> AppResult<Json<OtpRequested>> {
    let requested = state.identity.request_otp(&payload.phone)?;
    Ok(Json(requested))
}

/// POST /api/auth/verify - check the code, return the user and a token
pub async fn verify(
    State(state): State<ServerState>,
    Json(payload): Json<VerifyOtpRequest>,
) -> AppResult<Json<LoginResponse>> {
    let login = state.identity.verify(&payload.phone, &payload.otp)?;
    Ok(Json(login))
}

/// GET /api/auth/me - user behind the presented token
pub async fn me(user: CurrentUser) -> Json<User> {
    Json(User {
        name: user.name,
        phone: user.phone,
        role: user.role,
    })
}

/// POST /api/auth/logout - forget the saved user
pub async fn logout(State(state): State<ServerState>) -> AppResult<ApiResponse<()>> {
    state.identity.logout()?;
    Ok(ApiResponse::ok())
}
