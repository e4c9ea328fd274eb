//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::Order;

use crate::auth::AdminUser;
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/orders - all orders, most recent first
pub async fn list(State(state): State<ServerState>, _admin: AdminUser) -> Json<Vec<Order>> {
    Json(state.orders.list())
}

/// GET /api/orders/:id - one order
pub async fn get_by_id(
    State(state): State<ServerState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.orders.get(&id)?;
    Ok(Json(order))
}
