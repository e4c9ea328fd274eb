//! Inquiry Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored contact-form submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Inquiry {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub message: String,
    pub date: DateTime<Utc>,
}

/// Create inquiry payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryCreate {
    pub name: String,
    pub phone: String,
    pub message: String,
}
