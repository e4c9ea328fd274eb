//! Cart API
//!
//! Every route requires the `X-Session-Id` header.

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cart", cart_routes())
}

fn cart_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::view).delete(handler::clear))
        .route("/items", post(handler::add_item))
        .route("/items/{product_id}/{unit}", delete(handler::remove_item))
}
