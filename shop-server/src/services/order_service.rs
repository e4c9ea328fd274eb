//! Order persistence
//!
//! Orders are prepended to [`keys::ORDERS`] (most recent first) and never
//! changed afterwards.

use shared::models::{DeliveryDetails, Order};

use crate::db::{Storage, keys};
use crate::orders::{Cart, builder};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Clone)]
pub struct OrderService {
    storage: Storage,
}

impl OrderService {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Build the order from `cart` and persist it. The cart is left as is.
    pub fn place(&self, cart: &Cart, delivery: DeliveryDetails) -> AppResult<Order> {
        let order = builder::place(cart, delivery)?;
        self.storage.prepend(keys::ORDERS, order.clone())?;

        tracing::info!(
            order_id = %order.id,
            lines = order.items.len(),
            total = order.total_amount,
            "Order placed"
        );
        Ok(order)
    }

    /// All orders, most recent first
    pub fn list(&self) -> Vec<Order> {
        self.storage.read_list(keys::ORDERS)
    }

    pub fn get(&self, id: &str) -> AppResult<Order> {
        self.list().into_iter().find(|o| o.id == id).ok_or_else(|| {
            AppError::with_message(ErrorCode::OrderNotFound, format!("Order {id} not found"))
        })
    }
}
