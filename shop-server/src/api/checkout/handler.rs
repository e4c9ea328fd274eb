use axum::{Json, extract::State};
use shared::models::{DeliveryDetails, Order};

use crate::auth::SessionId;
use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/checkout - place the order and empty the session's cart
///
/// Building, persisting and clearing happen under the session's cart lock,
/// so an add racing the checkout either lands in the order or stays in the cart.
pub async fn checkout(
    State(state): State<ServerState>,
    SessionId(session): SessionId,
    Json(delivery): Json<DeliveryDetails>,
) -> AppResult<Json<Order>> {
    let order = state.carts.with_cart(&session, |cart| -> AppResult<Order> {
        let order = state.orders.place(cart, delivery)?;
        cart.clear();
        Ok(order)
    })?;
    Ok(Json(order))
}
