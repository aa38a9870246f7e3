//! Customer handlers.
//!
//! Customers carry an optional reference to a shop. List, get and update
//! responses resolve it to the full shop record; a dangling or absent
//! reference resolves to null. The create response returns the reference
//! as the stored id string, unresolved.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use dukaan_core::validation::{validate_name, validate_uuid};
use dukaan_core::{Customer, Shop};
use dukaan_db::generate_id;

use crate::error::{ApiError, ApiResult};
use crate::extract::Json;
use crate::AppState;

/// Create payload. `name` is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomer {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "shop")]
    pub shop_id: Option<String>,
}

/// Partial update payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "shop")]
    pub shop_id: Option<String>,
}

/// Customer with its shop reference resolved.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub shop: Option<Shop>,
}

/// Resolves the shop reference, tolerating dangling ids.
async fn resolve(state: &AppState, customer: Customer) -> ApiResult<CustomerView> {
    let shop = match &customer.shop_id {
        Some(shop_id) => state.db.shops().get_by_id(shop_id).await?,
        None => None,
    };

    Ok(CustomerView {
        id: customer.id,
        name: customer.name,
        phone: customer.phone,
        address: customer.address,
        shop,
    })
}

/// `GET /api/customers`
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<CustomerView>>> {
    let customers = state.db.customers().list().await?;

    let mut views = Vec::with_capacity(customers.len());
    for customer in customers {
        views.push(resolve(&state, customer).await?);
    }

    Ok(Json(views))
}

/// `POST /api/customers`
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateCustomer>,
) -> ApiResult<(StatusCode, Json<Customer>)> {
    let name = body.name.unwrap_or_default();
    validate_name("name", &name)?;

    let customer = Customer {
        id: generate_id(),
        name,
        phone: body.phone,
        address: body.address,
        shop_id: body.shop_id,
    };
    state.db.customers().insert(&customer).await?;
    info!(id = %customer.id, "Customer created");

    Ok((StatusCode::CREATED, Json(customer)))
}

/// `GET /api/customers/{id}`
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CustomerView>> {
    validate_uuid(&id)?;

    let customer = state
        .db
        .customers()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Customer"))?;

    Ok(Json(resolve(&state, customer).await?))
}

/// `PUT /api/customers/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateCustomer>,
) -> ApiResult<Json<CustomerView>> {
    validate_uuid(&id)?;

    let mut customer = state
        .db
        .customers()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Customer"))?;

    if let Some(name) = body.name {
        validate_name("name", &name)?;
        customer.name = name;
    }
    if let Some(phone) = body.phone {
        customer.phone = Some(phone);
    }
    if let Some(address) = body.address {
        customer.address = Some(address);
    }
    if let Some(shop_id) = body.shop_id {
        customer.shop_id = Some(shop_id);
    }

    state.db.customers().update(&customer).await?;
    Ok(Json(resolve(&state, customer).await?))
}

/// `DELETE /api/customers/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    validate_uuid(&id)?;

    state.db.customers().delete(&id).await?;
    info!(id = %id, "Customer deleted");

    Ok(Json(json!({ "message": "Customer deleted" })))
}
