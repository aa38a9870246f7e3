//! Transaction handlers.
//!
//! A transaction records a single customer/item sale with three
//! client-computed totals (subtotal, GST at 18%, grand total) stored
//! verbatim. List, get and update responses resolve the customer and
//! item references; dangling ids resolve to null.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use dukaan_core::validation::validate_uuid;
use dukaan_core::{Customer, Item, Transaction, TransactionType, ValidationError};
use dukaan_db::generate_id;

use crate::error::{ApiError, ApiResult};
use crate::extract::Json;
use crate::AppState;

/// Create payload. `transactionType` is required; an unknown enum value
/// is rejected at deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransaction {
    pub transaction_type: Option<TransactionType>,
    pub total_amount_without_tax: Option<i64>,
    pub tax_amount: Option<i64>,
    pub total_amount: Option<i64>,
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "customer")]
    pub customer_id: Option<String>,
    #[serde(rename = "item")]
    pub item_id: Option<String>,
}

/// Partial update payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransaction {
    pub transaction_type: Option<TransactionType>,
    pub total_amount_without_tax: Option<i64>,
    pub tax_amount: Option<i64>,
    pub total_amount: Option<i64>,
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "customer")]
    pub customer_id: Option<String>,
    #[serde(rename = "item")]
    pub item_id: Option<String>,
}

/// Transaction with its customer and item references resolved.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    pub id: String,
    pub transaction_type: TransactionType,
    pub total_amount_without_tax: Option<i64>,
    pub tax_amount: Option<i64>,
    pub total_amount: Option<i64>,
    pub date: DateTime<Utc>,
    pub customer: Option<Customer>,
    pub item: Option<Item>,
}

/// Resolves customer and item references, tolerating dangling ids.
async fn resolve(state: &AppState, tx: Transaction) -> ApiResult<TransactionView> {
    let customer = match &tx.customer_id {
        Some(customer_id) => state.db.customers().get_by_id(customer_id).await?,
        None => None,
    };
    let item = match &tx.item_id {
        Some(item_id) => state.db.items().get_by_id(item_id).await?,
        None => None,
    };

    Ok(TransactionView {
        id: tx.id,
        transaction_type: tx.transaction_type,
        total_amount_without_tax: tx.total_amount_without_tax,
        tax_amount: tx.tax_amount,
        total_amount: tx.total_amount,
        date: tx.date,
        customer,
        item,
    })
}

/// `GET /api/transactions`
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<TransactionView>>> {
    let transactions = state.db.transactions().list().await?;

    let mut views = Vec::with_capacity(transactions.len());
    for tx in transactions {
        views.push(resolve(&state, tx).await?);
    }

    Ok(Json(views))
}

/// `POST /api/transactions`
///
/// Totals persist verbatim; the store does not recompute them.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateTransaction>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    let transaction_type = body.transaction_type.ok_or_else(|| ValidationError::Required {
        field: "transactionType".to_string(),
    })?;

    let tx = Transaction {
        id: generate_id(),
        transaction_type,
        total_amount_without_tax: body.total_amount_without_tax,
        tax_amount: body.tax_amount,
        total_amount: body.total_amount,
        date: body.date.unwrap_or_else(Utc::now),
        customer_id: body.customer_id,
        item_id: body.item_id,
    };
    state.db.transactions().insert(&tx).await?;
    info!(id = %tx.id, "Transaction created");

    Ok((StatusCode::CREATED, Json(tx)))
}

/// `GET /api/transactions/{id}`
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TransactionView>> {
    validate_uuid(&id)?;

    let tx = state
        .db
        .transactions()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Transaction"))?;

    Ok(Json(resolve(&state, tx).await?))
}

/// `PUT /api/transactions/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTransaction>,
) -> ApiResult<Json<TransactionView>> {
    validate_uuid(&id)?;

    let mut tx = state
        .db
        .transactions()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Transaction"))?;

    if let Some(transaction_type) = body.transaction_type {
        tx.transaction_type = transaction_type;
    }
    if let Some(subtotal) = body.total_amount_without_tax {
        tx.total_amount_without_tax = Some(subtotal);
    }
    if let Some(tax) = body.tax_amount {
        tx.tax_amount = Some(tax);
    }
    if let Some(total) = body.total_amount {
        tx.total_amount = Some(total);
    }
    if let Some(date) = body.date {
        tx.date = date;
    }
    if let Some(customer_id) = body.customer_id {
        tx.customer_id = Some(customer_id);
    }
    if let Some(item_id) = body.item_id {
        tx.item_id = Some(item_id);
    }

    state.db.transactions().update(&tx).await?;
    Ok(Json(resolve(&state, tx).await?))
}

/// `DELETE /api/transactions/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    validate_uuid(&id)?;

    state.db.transactions().delete(&id).await?;
    info!(id = %id, "Transaction deleted");

    Ok(Json(json!({ "message": "Transaction deleted" })))
}
