//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{DescribeRequest, DescribeResponse, Product, ProductQuery, ProductUpsert};

use crate::auth::AdminUser;
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// GET /api/products - product list (?category=&q=)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.catalog.list_filtered(&query)?;
    Ok(Json(products))
}

/// GET /api/products/popular - featured products
pub async fn popular(State(state): State<ServerState>) -> Json<Vec<Product>> {
    Json(state.catalog.popular())
}

/// GET /api/products/:id - one product
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.get(&id)?;
    Ok(Json(product))
}

/// POST /api/products - create or replace a product (admin)
pub async fn create(
    State(state): State<ServerState>,
    _admin: AdminUser,
    Json(payload): Json<ProductUpsert>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.upsert(payload)?;
    Ok(Json(product))
}

/// PUT /api/products/:id - update a product (admin)
pub async fn update(
    State(state): State<ServerState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(mut payload): Json<ProductUpsert>,
) -> AppResult<Json<Product>> {
    payload.id = Some(id);
    let product = state.catalog.upsert(payload)?;
    Ok(Json(product))
}

/// DELETE /api/products/:id - delete a product (admin, no-op when absent)
pub async fn delete(
    State(state): State<ServerState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let removed = state.catalog.remove(&id)?;
    Ok(Json(removed))
}

/// POST /api/products/describe - generate a product description (admin)
pub async fn describe(
    State(state): State<ServerState>,
    _admin: AdminUser,
    Json(payload): Json<DescribeRequest>,
) -> AppResult<Json<DescribeResponse>> {
    let name = payload.name.trim();
    validate_required_text(name, "name", MAX_NAME_LEN)?;

    let description = state.enrichment.describe_product(name).await;
    Ok(Json(DescribeResponse { description }))
}
