//! Order builder
//!
//! Turns a cart and the checkout form into an [`Order`]. The order carries
//! its own copy of the cart lines and a frozen total, so clearing or
//! editing the cart afterwards leaves it untouched.

use chrono::Utc;
use shared::models::{DeliveryDetails, Order, OrderStatus};
use shared::util::new_id;

use super::cart::Cart;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Validate the checkout and build the order. Does not touch the cart.
pub fn place(cart: &Cart, delivery: DeliveryDetails) -> AppResult<Order> {
    if cart.is_empty() {
        return Err(AppError::empty_cart());
    }

    validate_required_text(&delivery.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&delivery.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&delivery.address, "address", MAX_ADDRESS_LEN)?;

    Ok(Order {
        id: new_id(),
        customer_name: delivery.name.trim().to_string(),
        phone: delivery.phone.trim().to_string(),
        address: delivery.address.trim().to_string(),
        items: cart.items().to_vec(),
        total_amount: cart.total(),
        status: OrderStatus::Pending,
        date: Utc::now(),
        delivery_slot: delivery.delivery_slot,
        payment_method: delivery.payment_method,
    })
}
