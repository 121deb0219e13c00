use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use service_core::error::AppError;

use crate::dtos::{
    CreateItemRequest, DeleteItemResponse, ListItemsQuery, ListItemsResponse, UpdateItemRequest,
};
use crate::models::Item;
use crate::startup::AppState;

const ITEM: &str = "Item";

#[tracing::instrument(skip(state))]
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<ListItemsResponse>, AppError> {
    let (limit, offset) = query
        .limit()
        .and_then(|limit| query.offset().map(|offset| (limit, offset)))
        .map_err(|e| {
            tracing::error!("Error fetching items: {}", e);
            AppError::operation_failed("fetch items", e)
        })?;

    tracing::info!("Fetching items (limit={}, offset={})", limit, offset);

    let (items, total) = state.store.list(offset, limit).await;

    Ok(Json(ListItemsResponse {
        items,
        total,
        limit,
        offset,
    }))
}

#[tracing::instrument(skip(state))]
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<Item>, AppError> {
    tracing::info!("Fetching item with ID: {}", item_id);

    match state.store.get(&item_id).await {
        Some(item) => Ok(Json(item)),
        None => {
            tracing::warn!("Item not found: {}", item_id);
            Err(AppError::not_found(ITEM, item_id))
        }
    }
}

/// `name` must be present as a key; its value is stored as sent, so an empty
/// string, a number or `null` are all accepted.
#[tracing::instrument(skip(state, body))]
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), AppError> {
    let data: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    if data.get("name").is_none() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }

    let request: CreateItemRequest = serde_json::from_value(data).map_err(|e| {
        tracing::error!("Error creating item: {}", e);
        AppError::operation_failed("create item", e)
    })?;

    let item = state
        .store
        .create(request.name, request.description)
        .await;

    metrics::counter!("items_created_total").increment(1);
    tracing::info!("Created new item: {}", item.id);

    Ok((StatusCode::CREATED, Json(item)))
}

#[tracing::instrument(skip(state, body))]
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    body: Bytes,
) -> Result<Json<Item>, AppError> {
    if !state.store.contains(&item_id).await {
        return Err(AppError::not_found(ITEM, item_id));
    }

    let request = serde_json::from_slice::<Value>(&body)
        .map_err(|e| e.to_string())
        .and_then(UpdateItemRequest::try_from)
        .map_err(|e| {
            tracing::error!("Error updating item: {}", e);
            AppError::operation_failed("update item", e)
        })?;

    // The item can disappear between the existence check and the write.
    let item = state
        .store
        .update(&item_id, request.into())
        .await
        .ok_or_else(|| AppError::not_found(ITEM, item_id.clone()))?;

    metrics::counter!("items_updated_total").increment(1);
    tracing::info!("Updated item: {}", item_id);

    Ok(Json(item))
}

#[tracing::instrument(skip(state))]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<DeleteItemResponse>, AppError> {
    if !state.store.delete(&item_id).await {
        return Err(AppError::not_found(ITEM, item_id));
    }

    metrics::counter!("items_deleted_total").increment(1);
    tracing::info!("Deleted item: {}", item_id);

    Ok(Json(DeleteItemResponse {
        message: "Item deleted successfully".to_string(),
        id: item_id,
    }))
}
