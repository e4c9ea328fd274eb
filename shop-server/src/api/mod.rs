//! API routes
//!
//! - [`health`] - health check
//! - [`auth`] - simulated login
//! - [`products`] - catalog (writes need admin)
//! - [`prices`] - today's price list
//! - [`cart`] - session cart
//! - [`checkout`] - order placement
//! - [`orders`] - orders (admin)
//! - [`inquiries`] - contact inquiries

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod health;
pub mod inquiries;
pub mod orders;
pub mod prices;
pub mod products;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(products::router())
        .merge(prices::router())
        .merge(cart::router())
        .merge(checkout::router())
        .merge(orders::router())
        .merge(inquiries::router())
}

/// Build the application with middleware; call `.with_state` to serve it
pub fn build_app() -> Router<ServerState> {
    build_router()
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
}
