use axum::{Json, extract::State};
use shared::models::PriceList;

use crate::core::ServerState;

/// GET /api/prices - today's price list plus market update
pub async fn today(State(state): State<ServerState>) -> Json<PriceList> {
    let products = state.catalog.list_all();
    let market_update = state.enrichment.market_update(&products).await;

    Json(PriceList {
        date: chrono::Local::now().date_naive(),
        rows: state.catalog.price_rows(),
        market_update,
    })
}
