//! Cart API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{AddToCartRequest, CartView, PricingUnit};

use crate::auth::SessionId;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/cart - cart of the calling session
pub async fn view(State(state): State<ServerState>, SessionId(session): SessionId) -> Json<CartView> {
    Json(state.carts.snapshot(&session).view())
}

/// POST /api/cart/items - add a product variant (quantity defaults to its minimum)
pub async fn add_item(
    State(state): State<ServerState>,
    SessionId(session): SessionId,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<CartView>> {
    let product = state.catalog.get(&payload.product_id)?;
    let variant_index = payload.variant_index.unwrap_or(0);

    let view = state
        .carts
        .with_cart(&session, |cart| -> AppResult<CartView> {
            cart.add_product(&product, variant_index, payload.quantity)?;
            Ok(cart.view())
        })?;

    tracing::debug!(
        session = %session,
        product_id = %product.id,
        lines = view.count,
        "Cart item added"
    );
    Ok(Json(view))
}

/// DELETE /api/cart/items/:product_id/:unit - drop one line (no-op when absent)
pub async fn remove_item(
    State(state): State<ServerState>,
    SessionId(session): SessionId,
    Path((product_id, unit)): Path<(String, String)>,
) -> AppResult<Json<CartView>> {
    let unit: PricingUnit = unit.parse().map_err(AppError::validation)?;

    let cart = state.carts.remove_line(&session, &product_id, unit);
    Ok(Json(cart.view()))
}

/// DELETE /api/cart - empty the cart
pub async fn clear(State(state): State<ServerState>, SessionId(session): SessionId) -> Json<CartView> {
    state.carts.clear(&session);
    Json(state.carts.snapshot(&session).view())
}
