//! Cart reducer
//!
//! Lines are keyed by `(productId, unit)`. A line's name, image and price
//! are captured when it is first added and are never refreshed from the
//! catalog; later adds of the same key only grow the quantity.

use serde::{Deserialize, Serialize};
use shared::models::{CartItem, CartView, PricingUnit, Product};

use crate::utils::validation::{MAX_PRICE, MAX_QUANTITY};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `item` into the cart.
    ///
    /// An existing line with the same key keeps its snapshot and gains
    /// `item.quantity`; otherwise the item is appended. A line may never
    /// hold more than [`MAX_QUANTITY`]; the cart is unchanged on rejection.
    pub fn add(&mut self, item: CartItem) -> AppResult<()> {
        match self.items.iter_mut().find(|line| line.key() == item.key()) {
            Some(line) => {
                let merged = line
                    .quantity
                    .checked_add(item.quantity)
                    .filter(|q| *q <= MAX_QUANTITY)
                    .ok_or_else(|| quantity_limit(&line.name))?;
                line.quantity = merged;
            }
            None => {
                if item.quantity > MAX_QUANTITY {
                    return Err(quantity_limit(&item.name));
                }
                self.items.push(item);
            }
        }
        Ok(())
    }

    /// Add a catalog product using the variant at `variant_index`.
    ///
    /// `quantity` defaults to the variant's minimum order quantity. A new
    /// line must reach that minimum.
    pub fn add_product(
        &mut self,
        product: &Product,
        variant_index: usize,
        quantity: Option<u32>,
    ) -> AppResult<()> {
        if !product.in_stock {
            return Err(AppError::with_message(
                ErrorCode::ProductOutOfStock,
                format!("{} is out of stock", product.name),
            )
            .with_detail("productId", product.id.as_str()));
        }

        let variant = product.variants.get(variant_index).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::VariantNotFound,
                format!("{} has no variant #{}", product.name, variant_index),
            )
            .with_detail("productId", product.id.as_str())
        })?;

        if !(0..=MAX_PRICE).contains(&variant.price) {
            return Err(AppError::with_message(
                ErrorCode::ProductInvalidPrice,
                format!("{} has an invalid price", product.name),
            )
            .with_detail("productId", product.id.as_str()));
        }

        let quantity = quantity.unwrap_or(variant.min_qty);
        if quantity == 0 {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                "quantity must be at least 1",
            ));
        }

        let is_new_line = !self
            .items
            .iter()
            .any(|line| line.key() == (product.id.as_str(), variant.unit));
        if is_new_line && quantity < variant.min_qty {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!(
                    "minimum order for {} is {} {}",
                    product.name, variant.min_qty, variant.unit
                ),
            ));
        }

        self.add(CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            unit: variant.unit,
            price: variant.price,
            quantity,
        })
    }

    /// Drop the line for `(product_id, unit)`. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &str, unit: PricingUnit) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.key() != (product_id, unit));
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Σ price × quantity over the current lines
    pub fn total(&self) -> i64 {
        self.items
            .iter()
            .map(CartItem::line_total)
            .fold(0, i64::saturating_add)
    }

    pub fn view(&self) -> CartView {
        CartView {
            items: self.items.clone(),
            count: self.items.len(),
            total: self.total(),
        }
    }
}

fn quantity_limit(name: &str) -> AppError {
    AppError::with_message(
        ErrorCode::ValueOutOfRange,
        format!("quantity for {name} may not exceed {MAX_QUANTITY}"),
    )
    .with_detail("max", MAX_QUANTITY)
}
