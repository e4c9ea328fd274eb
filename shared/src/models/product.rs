//! Product Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pricing unit of a variant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PricingUnit {
    Kg,
    Box,
    Crate,
    Dozen,
    Piece,
}

impl PricingUnit {
    pub const ALL: [PricingUnit; 5] = [
        PricingUnit::Kg,
        PricingUnit::Box,
        PricingUnit::Crate,
        PricingUnit::Dozen,
        PricingUnit::Piece,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "Kg",
            Self::Box => "Box",
            Self::Crate => "Crate",
            Self::Dozen => "Dozen",
            Self::Piece => "Piece",
        }
    }
}

impl fmt::Display for PricingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingUnit {
    type Err = String;

    /// Case-insensitive, so URL segments like `dozen` resolve
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|u| u.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown pricing unit: {}", s))
    }
}

/// Catalog category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Seasonal,
    Exotic,
    #[default]
    Regular,
    #[serde(rename = "Dry Fruits")]
    DryFruits,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Seasonal,
        Category::Regular,
        Category::Exotic,
        Category::DryFruits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seasonal => "Seasonal",
            Self::Exotic => "Exotic",
            Self::Regular => "Regular",
            Self::DryFruits => "Dry Fruits",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// One purchasable unit/price combination of a product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub unit: PricingUnit,
    /// Whole currency amount (rupees)
    pub price: i64,
    /// Minimum quantity purchasable at this price
    pub min_qty: u32,
    pub is_wholesale: bool,
}

/// Product entity
///
/// `variants` is never empty; the first entry is the default ("starting
/// price") variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub image: String,
    pub description: String,
    pub in_stock: bool,
    #[serde(default)]
    pub is_popular: bool,
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Default variant (index 0)
    pub fn default_variant(&self) -> Option<&ProductVariant> {
        self.variants.first()
    }

    /// Lowest-index retail variant, falling back to the default variant
    pub fn retail_variant(&self) -> Option<&ProductVariant> {
        self.variants
            .iter()
            .find(|v| !v.is_wholesale)
            .or_else(|| self.variants.first())
    }

    pub fn wholesale_variant(&self) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| v.is_wholesale)
    }
}

/// Upsert product payload (admin editor)
///
/// Without `id` a new product is created; `inStock` defaults to true and
/// `isPopular` to false.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpsert {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub in_stock: Option<bool>,
    pub is_popular: Option<bool>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

/// Product list query (`?category=Seasonal&q=mango`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Category label, or "All"
    pub category: Option<String>,
    /// Case-insensitive name search
    pub q: Option<String>,
}

/// Generated-description request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescribeRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescribeResponse {
    pub description: String,
}
