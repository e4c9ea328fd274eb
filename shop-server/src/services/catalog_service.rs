//! Catalog store
//!
//! Products with their pricing variants, persisted as one list under
//! [`keys::PRODUCTS`]. Every write replaces the whole list.

use shared::models::{
    Availability, Category, PricePoint, PriceListRow, Product, ProductQuery, ProductUpsert,
    ProductVariant,
};
use shared::util::new_id;
use std::collections::HashSet;
use std::str::FromStr;

use crate::db::{Storage, keys};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_PRICE, MAX_QUANTITY, MAX_URL_LEN, validate_required_text,
    validate_text_len,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Number of products featured when none is flagged popular
const FEATURED_FALLBACK: usize = 4;

/// Category filter value meaning "every category"
const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone)]
pub struct CatalogService {
    storage: Storage,
}

impl CatalogService {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Every product, in stored order
    pub fn list_all(&self) -> Vec<Product> {
        self.storage.read_list(keys::PRODUCTS)
    }

    pub fn find(&self, id: &str) -> Option<Product> {
        self.list_all().into_iter().find(|p| p.id == id)
    }

    pub fn get(&self, id: &str) -> AppResult<Product> {
        self.find(id).ok_or_else(|| {
            AppError::with_message(ErrorCode::ProductNotFound, format!("Product {id} not found"))
        })
    }

    /// Filter by category (`All` or absent for every category) and by a
    /// case-insensitive name fragment.
    pub fn list_filtered(&self, query: &ProductQuery) -> AppResult<Vec<Product>> {
        let category = match query.category.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(c) if c.eq_ignore_ascii_case(ALL_CATEGORIES) => None,
            Some(c) => Some(Category::from_str(c).map_err(AppError::validation)?),
        };
        let needle = query
            .q
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());

        Ok(self
            .list_all()
            .into_iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .filter(|p| {
                needle
                    .as_deref()
                    .is_none_or(|n| p.name.to_lowercase().contains(n))
            })
            .collect())
    }

    /// Products flagged popular, or the first few when none is flagged
    pub fn popular(&self) -> Vec<Product> {
        let all = self.list_all();
        let flagged: Vec<Product> = all.iter().filter(|p| p.is_popular).cloned().collect();
        if flagged.is_empty() {
            all.into_iter().take(FEATURED_FALLBACK).collect()
        } else {
            flagged
        }
    }

    /// Replace the product with the same id, or append a new one.
    ///
    /// Without an id a time-derived one is generated. Missing `inStock` /
    /// `isPopular` keep the stored values on update and default to
    /// `true` / `false` on create.
    pub fn upsert(&self, input: ProductUpsert) -> AppResult<Product> {
        validate_required_text(&input.name, "name", MAX_NAME_LEN)?;
        validate_text_len(&input.image, "image", MAX_URL_LEN)?;
        validate_text_len(&input.description, "description", MAX_NOTE_LEN)?;
        validate_variants(&input.name, &input.variants)?;

        let mut products = self.list_all();
        let id = input
            .id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(new_id);
        let existing = products.iter().position(|p| p.id == id);

        let (default_in_stock, default_popular) = match existing {
            Some(idx) => (products[idx].in_stock, products[idx].is_popular),
            None => (true, false),
        };

        let product = Product {
            id,
            name: input.name.trim().to_string(),
            category: input.category,
            image: input.image,
            description: input.description,
            in_stock: input.in_stock.unwrap_or(default_in_stock),
            is_popular: input.is_popular.unwrap_or(default_popular),
            variants: input.variants,
        };

        match existing {
            Some(idx) => products[idx] = product.clone(),
            None => products.push(product.clone()),
        }
        self.storage.write(keys::PRODUCTS, &products)?;

        tracing::info!(
            product_id = %product.id,
            name = %product.name,
            created = existing.is_none(),
            "Product saved"
        );
        Ok(product)
    }

    /// Delete by id. Returns whether a product was removed; absent ids are a no-op.
    pub fn remove(&self, id: &str) -> AppResult<bool> {
        let mut products = self.list_all();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Ok(false);
        }

        self.storage.write(keys::PRODUCTS, &products)?;
        tracing::info!(product_id = %id, "Product deleted");
        Ok(true)
    }

    /// One row per product for today's price list
    pub fn price_rows(&self) -> Vec<PriceListRow> {
        self.list_all().iter().filter_map(price_row).collect()
    }
}

fn price_row(product: &Product) -> Option<PriceListRow> {
    let point = |v: &ProductVariant| PricePoint {
        price: v.price,
        unit: v.unit,
    };

    Some(PriceListRow {
        product_id: product.id.clone(),
        name: product.name.clone(),
        image: product.image.clone(),
        retail: point(product.retail_variant()?),
        wholesale: product.wholesale_variant().map(point),
        status: if product.in_stock {
            Availability::Available
        } else {
            Availability::SoldOut
        },
    })
}

fn validate_variants(name: &str, variants: &[ProductVariant]) -> AppResult<()> {
    if variants.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::ProductNoVariants,
            format!("{name} needs at least one pricing variant"),
        ));
    }

    for (idx, v) in variants.iter().enumerate() {
        if !(0..=MAX_PRICE).contains(&v.price) {
            return Err(AppError::with_message(
                ErrorCode::ProductInvalidPrice,
                format!("variant #{idx} price must be between 0 and {MAX_PRICE}"),
            )
            .with_detail("variantIndex", idx));
        }
        if !(1..=MAX_QUANTITY).contains(&v.min_qty) {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!("variant #{idx} minimum quantity must be between 1 and {MAX_QUANTITY}"),
            )
            .with_detail("variantIndex", idx));
        }
    }

    // Duplicate units are allowed; flag them since the cart merges by unit
    let mut seen = HashSet::new();
    for v in variants {
        if !seen.insert(v.unit) {
            tracing::warn!(product = %name, unit = %v.unit, "Product has duplicate variant units");
        }
    }

    Ok(())
}
