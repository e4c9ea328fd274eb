//! Today's price list view

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::product::PricingUnit;

/// A price point shown in the list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricePoint {
    pub price: i64,
    pub unit: PricingUnit,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Availability {
    Available,
    #[serde(rename = "Sold Out")]
    SoldOut,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriceListRow {
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub retail: PricePoint,
    /// `None` when the product has no wholesale variant
    pub wholesale: Option<PricePoint>,
    pub status: Availability,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceList {
    pub date: NaiveDate,
    pub rows: Vec<PriceListRow>,
    /// Best-effort generated market update
    pub market_update: String,
}
