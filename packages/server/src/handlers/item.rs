use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::item;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::extractors::query::AppQuery;
use crate::models::item::*;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/items/",
    tag = "Items",
    operation_id = "createItems",
    summary = "Create a batch of items",
    description = "Creates one item per entry, in order, as a single unit of work: either every entry is stored or none is. Returns the stored items with their assigned `id` and `created_at`.",
    request_body = Vec<ItemRequest>,
    responses(
        (status = 201, description = "Items created", body = Vec<ItemResponse>),
        (status = 409, description = "An item name is already taken (CONFLICT)", body = ErrorBody),
        (status = 422, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 503, description = "Storage unavailable (UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(count = payload.len()))]
pub async fn create_items(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Vec<ItemRequest>>,
) -> Result<impl IntoResponse, AppError> {
    validate_batch(&payload)?;

    let session = state.sessions.acquire().await?;

    let mut created = Vec::with_capacity(payload.len());
    for req in payload {
        let new_item = item::ActiveModel {
            name: Set(req.name.trim().to_string()),
            description: Set(req.description),
            price: Set(req.price),
            is_available: Set(req.is_available),
            stock_quantity: Set(req.stock_quantity),
            ..Default::default()
        };
        let model = new_item.insert(session.conn()).await?;
        created.push(ItemResponse::from(model));
    }

    session.commit().await?;
    info!("Created {} item(s)", created.len());

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/items/",
    tag = "Items",
    operation_id = "listItems",
    summary = "List items",
    description = "Returns at most `limit` items after skipping `skip`, in ascending `id` order.",
    params(ItemListQuery),
    responses(
        (status = 200, description = "List of items", body = Vec<ItemResponse>),
        (status = 422, description = "Invalid skip/limit (VALIDATION_ERROR)", body = ErrorBody),
        (status = 503, description = "Storage unavailable (UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_items(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ItemListQuery>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let (skip, limit) = resolve_list_query(&query)?;

    let session = state.sessions.acquire().await?;
    let items = item::Entity::find()
        .order_by_asc(item::Column::Id)
        .offset(Some(skip))
        .limit(Some(limit))
        .all(session.conn())
        .await?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "Items",
    operation_id = "getItem",
    summary = "Get an item by ID",
    params(("id" = i32, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item details", body = ItemResponse),
        (status = 404, description = "Item not found (NOT_FOUND)", body = ErrorBody),
        (status = 503, description = "Storage unavailable (UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ItemResponse>, AppError> {
    let session = state.sessions.acquire().await?;
    let model = find_item(session.conn(), id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "Items",
    operation_id = "updateItem",
    summary = "Replace an item",
    description = "Full replacement, not a patch: `name`, `description`, `price`, `is_available` and `stock_quantity` are all overwritten. Omitted optional fields reset to their defaults (`description` null, `is_available` true, `stock_quantity` 0). `updated_at` is stamped on every call.",
    params(("id" = i32, Path, description = "Item ID")),
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 404, description = "Item not found (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "Name taken by another item (CONFLICT)", body = ErrorBody),
        (status = 422, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 503, description = "Storage unavailable (UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn update_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<ItemRequest>,
) -> Result<Json<ItemResponse>, AppError> {
    validate_item(&payload)?;

    let session = state.sessions.acquire().await?;

    let existing = find_item(session.conn(), id).await?;
    let mut active: item::ActiveModel = existing.into();

    active.name = Set(payload.name.trim().to_string());
    active.description = Set(payload.description);
    active.price = Set(payload.price);
    active.is_available = Set(payload.is_available);
    active.stock_quantity = Set(payload.stock_quantity);

    let model = active.update(session.conn()).await?;
    session.commit().await?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "Items",
    operation_id = "deleteItem",
    summary = "Delete an item by ID",
    description = "Permanently removes the item and returns it as it was immediately before removal.",
    params(("id" = i32, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item deleted", body = ItemResponse),
        (status = 404, description = "Item not found (NOT_FOUND)", body = ErrorBody),
        (status = 503, description = "Storage unavailable (UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ItemResponse>, AppError> {
    let session = state.sessions.acquire().await?;

    let existing = find_item(session.conn(), id).await?;
    item::Entity::delete_by_id(id).exec(session.conn()).await?;

    session.commit().await?;
    info!(id, "Item deleted");

    Ok(Json(existing.into()))
}

async fn find_item<C: ConnectionTrait>(db: &C, id: i32) -> Result<item::Model, AppError> {
    item::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Item not found".into()))
}
