use axum::{Json, extract::State};
use shared::models::{Inquiry, InquiryCreate};

use crate::auth::AdminUser;
use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/inquiries - submit an inquiry
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<InquiryCreate>,
) -> AppResult<Json<Inquiry>> {
    let inquiry = state.inquiries.submit(payload)?;
    Ok(Json(inquiry))
}

/// GET /api/inquiries - inquiry list (admin)
pub async fn list(State(state): State<ServerState>, _admin: AdminUser) -> Json<Vec<Inquiry>> {
    Json(state.inquiries.list())
}
