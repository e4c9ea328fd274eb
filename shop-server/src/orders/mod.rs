//! Cart and order placement
//!
//! - [`Cart`] - per-session cart reducer
//! - [`CartSessions`] - carts keyed by session id
//! - [`builder::place`] - cart + delivery form → order

pub mod builder;
pub mod cart;
pub mod sessions;

pub use cart::Cart;
pub use sessions::CartSessions;
