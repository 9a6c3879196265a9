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
use crate::store::data::ShoppingEvent;

use super::dto::{CreateEventRequest, ReplaceEventRequest};
use super::repo;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/shopping", get(list_events))
        .route("/shopping/:id", get(get_event))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/shopping", post(create_event))
        .route("/shopping/:id", put(replace_event))
        .route("/shopping/:id", delete(delete_event))
}

#[instrument(skip(state))]
pub async fn list_events(State(state): State<AppState>) -> Json<Vec<ShoppingEvent>> {
    let store = state.store.read().await;
    Json(repo::list(store.data()))
}

#[instrument(skip(state))]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ShoppingEvent>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(repo::get(store.data(), id)?))
}

#[instrument(skip(state, body))]
pub async fn create_event(
    State(state): State<AppState>,
    Json(body): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<ShoppingEvent>), ApiError> {
    let today = OffsetDateTime::now_utc().date();
    let mut store = state.store.write().await;
    let event = repo::create(store.data_mut(), body, today)?;
    store.persist().await?;
    Ok((StatusCode::CREATED, Json(event)))
}

#[instrument(skip(state, body))]
pub async fn replace_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ReplaceEventRequest>,
) -> Result<Json<ShoppingEvent>, ApiError> {
    let mut store = state.store.write().await;
    let event = repo::replace(store.data_mut(), id, body)?;
    store.persist().await?;
    Ok(Json(event))
}

#[instrument(skip(state))]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    repo::delete(store.data_mut(), id)?;
    store.persist().await?;
    Ok(StatusCode::NO_CONTENT)
}
