//! Inventory item handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use dukaan_core::validation::{validate_name, validate_price, validate_quantity, validate_uuid};
use dukaan_core::Item;
use dukaan_db::generate_id;

use crate::error::{ApiError, ApiResult};
use crate::extract::Json;
use crate::AppState;

/// Create payload. `name` is required; quantity and price default to zero
/// and must be non-negative.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub price: i64,
    pub quality: Option<String>,
}

/// Partial update payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<i64>,
    pub quality: Option<String>,
}

/// `GET /api/items`
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Item>>> {
    Ok(Json(state.db.items().list().await?))
}

/// `POST /api/items`
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateItem>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    let name = body.name.unwrap_or_default();
    validate_name("name", &name)?;
    validate_quantity(body.quantity)?;
    validate_price(body.price)?;

    let item = Item {
        id: generate_id(),
        name,
        description: body.description,
        quantity: body.quantity,
        price: body.price,
        quality: body.quality,
    };
    state.db.items().insert(&item).await?;
    info!(id = %item.id, "Item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// `GET /api/items/{id}`
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Item>> {
    validate_uuid(&id)?;

    let item = state
        .db
        .items()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Item"))?;

    Ok(Json(item))
}

/// `PUT /api/items/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateItem>,
) -> ApiResult<Json<Item>> {
    validate_uuid(&id)?;

    let mut item = state
        .db
        .items()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Item"))?;

    if let Some(name) = body.name {
        validate_name("name", &name)?;
        item.name = name;
    }
    if let Some(description) = body.description {
        item.description = Some(description);
    }
    if let Some(quantity) = body.quantity {
        validate_quantity(quantity)?;
        item.quantity = quantity;
    }
    if let Some(price) = body.price {
        validate_price(price)?;
        item.price = price;
    }
    if let Some(quality) = body.quality {
        item.quality = Some(quality);
    }

    state.db.items().update(&item).await?;
    Ok(Json(item))
}

/// `DELETE /api/items/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    validate_uuid(&id)?;

    state.db.items().delete(&id).await?;
    info!(id = %id, "Item deleted");

    Ok(Json(json!({ "message": "Item deleted" })))
}
