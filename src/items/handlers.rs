use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::instrument;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::data::FridgeItem;

use super::dto::{CreateItemRequest, UpdateItemRequest, UpdatedItemResponse};
use super::repo;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items))
        .route("/items/expiring", get(expiring_items))
        .route("/items/:id", get(get_item))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/items", post(create_item))
        .route("/items/:id", put(update_item))
        .route("/items/:id", delete(delete_item))
}

#[instrument(skip(state))]
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<FridgeItem>> {
    let store = state.store.read().await;
    Json(repo::list(store.data()))
}

#[instrument(skip(state))]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FridgeItem>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(repo::get(store.data(), id)?))
}

#[instrument(skip(state))]
pub async fn expiring_items(State(state): State<AppState>) -> Json<Vec<FridgeItem>> {
    let store = state.store.read().await;
    let window = store.data().settings.expiration_warning_days;
    let today = OffsetDateTime::now_utc().date();
    Json(repo::expiring(store.data(), today, window))
}

#[instrument(skip(state, body))]
pub async fn create_item(
    State(state): State<AppState>,
    Json(body): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<FridgeItem>), ApiError> {
    let mut store = state.store.write().await;
    let item = repo::create(store.data_mut(), body)?;
    store.persist().await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[instrument(skip(state, body))]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateItemRequest>,
) -> Result<Json<UpdatedItemResponse>, ApiError> {
    let mut store = state.store.write().await;
    let (item, removed) = repo::update(store.data_mut(), id, body)?;
    store.persist().await?;
    Ok(Json(UpdatedItemResponse { item, removed }))
}

#[instrument(skip(state))]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    repo::delete(store.data_mut(), id)?;
    store.persist().await?;
    Ok(StatusCode::NO_CONTENT)
}
