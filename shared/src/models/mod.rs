//! Data models
//!
//! Shared between shop-server and the storefront UI (via API).
//! Field names are camelCase on the wire and in storage.

pub mod cart;
pub mod inquiry;
pub mod order;
pub mod price_list;
pub mod product;
pub mod user;

// Re-exports
pub use cart::*;
pub use inquiry::*;
pub use order::*;
pub use price_list::*;
pub use product::*;
pub use user::*;
