//! Cart Model

use serde::{Deserialize, Serialize};

use super::product::PricingUnit;

/// A line in the active shopping cart
///
/// `name`, `image` and `price` are snapshots copied from the product when the
/// line was first added. They are plain owned values, never a reference back
/// into the catalog, so later catalog edits do not reach existing lines or the
/// orders built from them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    /// Snapshot
    pub name: String,
    /// Snapshot
    pub image: String,
    pub unit: PricingUnit,
    /// Snapshot of the variant price
    pub price: i64,
    pub quantity: u32,
}

impl CartItem {
    /// Merge key: `(productId, unit)`
    pub fn key(&self) -> (&str, PricingUnit) {
        (self.product_id.as_str(), self.unit)
    }

    /// `price × quantity`, saturating at `i64::MAX`
    pub fn line_total(&self) -> i64 {
        self.price.saturating_mul(i64::from(self.quantity))
    }
}

/// Add-to-cart payload
///
/// `variantIndex` defaults to 0. `quantity` defaults to the variant's
/// `minQty` and may not be lower than it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: String,
    pub variant_index: Option<usize>,
    pub quantity: Option<u32>,
}

/// Cart view returned by the cart endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItem>,
    /// Number of lines
    pub count: usize,
    /// Σ price × quantity
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = CartItem {
            product_id: "p1".into(),
            name: "Alphonso Mango (Ratnagiri)".into(),
            image: "img".into(),
            unit: PricingUnit::Dozen,
            price: 1200,
            quantity: 3,
        };
        assert_eq!(item.line_total(), 3600);
        assert_eq!(item.key(), ("p1", PricingUnit::Dozen));
    }

    #[test]
    fn test_line_total_saturates() {
        let item = CartItem {
            product_id: "p8".into(),
            name: "Dragon Fruit".into(),
            image: "img".into(),
            unit: PricingUnit::Box,
            price: i64::MAX / 2,
            quantity: u32::MAX,
        };
        assert_eq!(item.line_total(), i64::MAX);
    }

    #[test]
    fn test_wire_layout() {
        let json = r#"{"productId":"p2","name":"Kashmir Apple","image":"i","unit":"Crate","price":4000,"quantity":1}"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.unit, PricingUnit::Crate);
        assert_eq!(item.product_id, "p2");
    }
}
