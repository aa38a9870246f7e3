//! Shop handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use dukaan_core::validation::{validate_name, validate_uuid};
use dukaan_core::Shop;
use dukaan_db::generate_id;

use crate::error::{ApiError, ApiResult};
use crate::extract::Json;
use crate::AppState;

/// Create payload. `name` is required; a missing or empty name is a 400.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShop {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Partial update payload. Absent fields keep their stored value.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShop {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// `GET /api/shops`
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Shop>>> {
    Ok(Json(state.db.shops().list().await?))
}

/// `POST /api/shops`
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateShop>,
) -> ApiResult<(StatusCode, Json<Shop>)> {
    let name = body.name.unwrap_or_default();
    validate_name("name", &name)?;

    let shop = Shop {
        id: generate_id(),
        name,
        phone: body.phone,
        address: body.address,
    };
    state.db.shops().insert(&shop).await?;
    info!(id = %shop.id, "Shop created");

    Ok((StatusCode::CREATED, Json(shop)))
}

/// `GET /api/shops/{id}`
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Shop>> {
    validate_uuid(&id)?;

    let shop = state
        .db
        .shops()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Shop"))?;

    Ok(Json(shop))
}

/// `PUT /api/shops/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateShop>,
) -> ApiResult<Json<Shop>> {
    validate_uuid(&id)?;

    let mut shop = state
        .db
        .shops()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Shop"))?;

    if let Some(name) = body.name {
        validate_name("name", &name)?;
        shop.name = name;
    }
    if let Some(phone) = body.phone {
        shop.phone = Some(phone);
    }
    if let Some(address) = body.address {
        shop.address = Some(address);
    }

    state.db.shops().update(&shop).await?;
    Ok(Json(shop))
}

/// `DELETE /api/shops/{id}`
///
/// Customers referencing this shop are untouched; their `shop` reference
/// resolves to null afterwards.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    validate_uuid(&id)?;

    state.db.shops().delete(&id).await?;
    info!(id = %id, "Shop deleted");

    Ok(Json(json!({ "message": "Shop deleted" })))
}
