//! Business services
//!
//! - [`CatalogService`] - product catalog
//! - [`OrderService`] - order placement and listing
//! - [`InquiryService`] - contact inquiries
//! - [`IdentityService`] - simulated phone login
//! - [`Enrichment`] - text generation with fallback copy

pub mod catalog_service;
pub mod identity;
pub mod inquiry_service;
pub mod order_service;
pub mod text_gen;

pub use catalog_service::CatalogService;
pub use identity::IdentityService;
pub use inquiry_service::InquiryService;
pub use order_service::OrderService;
pub use text_gen::{DisabledGenerator, Enrichment, GeminiClient, GenerationError, TextGenerator};
