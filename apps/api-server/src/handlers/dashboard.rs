//! Dashboard handler.
//!
//! Read-only aggregation endpoint. Fetches all bills and transactions
//! and runs the pure reductions from [`dukaan_core::dashboard`]. Nothing
//! is cached; every request recomputes from scratch.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use dukaan_core::dashboard::{
    count_by_quality, price_by_quantity, summarize, DashboardSummary, QualityBucket,
    QuantityBucket,
};

use crate::error::ApiResult;
use crate::AppState;

/// Full dashboard payload: headline cards plus the two chart groupings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub summary: DashboardSummary,
    /// Bar chart: sum of line-item unit price grouped by quantity.
    pub price_by_quantity: Vec<QuantityBucket>,
    /// Pie chart: line-item count grouped by quality grade.
    pub quality_distribution: Vec<QualityBucket>,
}

/// `GET /api/dashboard`
pub async fn get(State(state): State<AppState>) -> ApiResult<Json<DashboardResponse>> {
    let bills = state.db.bills().list().await?;
    let transactions = state.db.transactions().list().await?;

    Ok(Json(DashboardResponse {
        summary: summarize(&bills, transactions.len()),
        price_by_quantity: price_by_quantity(&bills),
        quality_distribution: count_by_quality(&bills),
    }))
}
