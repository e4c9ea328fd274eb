//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cart::CartItem;

/// Order status
///
/// Orders start as `Pending`; nothing in the shop moves them further yet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Delivered,
    Cancelled,
}

/// Delivery window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DeliverySlot {
    #[default]
    #[serde(rename = "Morning (8AM - 11AM)")]
    Morning,
    #[serde(rename = "Evening (4PM - 8PM)")]
    Evening,
}

/// Payment method chosen at checkout (no payment is processed)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "COD")]
    Cod,
    #[serde(rename = "UPI")]
    Upi,
    Online,
}

/// Checkout form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub delivery_slot: DeliverySlot,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

/// Placed order
///
/// `items` is a copy of the cart lines at placement time and `total_amount`
/// is frozen at that moment; neither is recomputed from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub items: Vec<CartItem>,
    pub total_amount: i64,
    pub status: OrderStatus,
    pub date: DateTime<Utc>,
    pub delivery_slot: DeliverySlot,
    pub payment_method: PaymentMethod,
}
