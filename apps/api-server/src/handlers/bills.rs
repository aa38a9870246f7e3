//! Bill (invoice) handlers.
//!
//! Bills embed their line items as documents and carry three
//! client-computed totals that persist verbatim, even when inconsistent
//! with the line items. Get and list responses resolve the customer
//! reference; a dangling id resolves to null.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use dukaan_core::validation::{validate_price, validate_quantity, validate_serial_no, validate_uuid};
use dukaan_core::{Bill, Customer, LineItem, TransactionType};
use dukaan_db::generate_id;

use crate::error::{ApiError, ApiResult};
use crate::extract::Json;
use crate::AppState;

/// Create payload. `serialNo` is required; line items default to empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBill {
    pub serial_no: Option<String>,
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "customer")]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub total_amount: Option<i64>,
    pub total_amount_without_tax: Option<i64>,
    pub tax_amount: Option<i64>,
    pub transaction_type: Option<TransactionType>,
    pub signature: Option<String>,
}

/// Partial update payload. A supplied `items` array replaces the embedded
/// line items wholesale.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBill {
    pub serial_no: Option<String>,
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "customer")]
    pub customer_id: Option<String>,
    pub items: Option<Vec<LineItem>>,
    pub total_amount: Option<i64>,
    pub total_amount_without_tax: Option<i64>,
    pub tax_amount: Option<i64>,
    pub transaction_type: Option<TransactionType>,
    pub signature: Option<String>,
}

/// Bill with its customer reference resolved.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillView {
    pub id: String,
    pub serial_no: String,
    pub date: DateTime<Utc>,
    pub customer: Option<Customer>,
    pub items: Vec<LineItem>,
    pub total_amount: Option<i64>,
    pub total_amount_without_tax: Option<i64>,
    pub tax_amount: Option<i64>,
    pub transaction_type: Option<TransactionType>,
    pub signature: Option<String>,
}

/// Each line item must carry non-negative quantity and price.
fn validate_line_items(items: &[LineItem]) -> ApiResult<()> {
    for item in items {
        validate_quantity(item.quantity)?;
        validate_price(item.price)?;
    }
    Ok(())
}

/// Resolves the customer reference, tolerating dangling ids.
async fn resolve(state: &AppState, bill: Bill) -> ApiResult<BillView> {
    let customer = match &bill.customer_id {
        Some(customer_id) => state.db.customers().get_by_id(customer_id).await?,
        None => None,
    };

    Ok(BillView {
        id: bill.id,
        serial_no: bill.serial_no,
        date: bill.date,
        customer,
        items: bill.items,
        total_amount: bill.total_amount,
        total_amount_without_tax: bill.total_amount_without_tax,
        tax_amount: bill.tax_amount,
        transaction_type: bill.transaction_type,
        signature: bill.signature,
    })
}

/// `GET /api/bills`
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<BillView>>> {
    let bills = state.db.bills().list().await?;

    let mut views = Vec::with_capacity(bills.len());
    for bill in bills {
        views.push(resolve(&state, bill).await?);
    }

    Ok(Json(views))
}

/// `POST /api/bills`
///
/// Totals persist verbatim; the store does not recompute or cross-check
/// them against the line items.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateBill>,
) -> ApiResult<(StatusCode, Json<Bill>)> {
    let serial_no = body.serial_no.unwrap_or_default();
    validate_serial_no(&serial_no)?;
    validate_line_items(&body.items)?;

    let bill = Bill {
        id: generate_id(),
        serial_no,
        date: body.date.unwrap_or_else(Utc::now),
        customer_id: body.customer_id,
        items: body.items,
        total_amount: body.total_amount,
        total_amount_without_tax: body.total_amount_without_tax,
        tax_amount: body.tax_amount,
        transaction_type: body.transaction_type,
        signature: body.signature,
    };
    state.db.bills().insert(&bill).await?;
    info!(id = %bill.id, serial_no = %bill.serial_no, "Bill created");

    Ok((StatusCode::CREATED, Json(bill)))
}

/// `GET /api/bills/{id}`
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BillView>> {
    validate_uuid(&id)?;

    let bill = state
        .db
        .bills()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Bill"))?;

    Ok(Json(resolve(&state, bill).await?))
}

/// `PUT /api/bills/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateBill>,
) -> ApiResult<Json<BillView>> {
    validate_uuid(&id)?;

    let mut bill = state
        .db
        .bills()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Bill"))?;

    if let Some(serial_no) = body.serial_no {
        validate_serial_no(&serial_no)?;
        bill.serial_no = serial_no;
    }
    if let Some(date) = body.date {
        bill.date = date;
    }
    if let Some(customer_id) = body.customer_id {
        bill.customer_id = Some(customer_id);
    }
    if let Some(items) = body.items {
        validate_line_items(&items)?;
        bill.items = items;
    }
    if let Some(total) = body.total_amount {
        bill.total_amount = Some(total);
    }
    if let Some(subtotal) = body.total_amount_without_tax {
        bill.total_amount_without_tax = Some(subtotal);
    }
    if let Some(tax) = body.tax_amount {
        bill.tax_amount = Some(tax);
    }
    if let Some(transaction_type) = body.transaction_type {
        bill.transaction_type = Some(transaction_type);
    }
    if let Some(signature) = body.signature {
        bill.signature = Some(signature);
    }

    state.db.bills().update(&bill).await?;
    Ok(Json(resolve(&state, bill).await?))
}

/// `DELETE /api/bills/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    validate_uuid(&id)?;

    state.db.bills().delete(&id).await?;
    info!(id = %id, "Bill deleted");

    Ok(Json(json!({ "message": "Bill deleted" })))
}
