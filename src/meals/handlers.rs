use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::instrument;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::data::Meal;

use super::dto::{CreateMealRequest, MealFilter, RateMealRequest, RecookMealRequest};
use super::repo;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals))
        .route("/meals/:id", get(get_meal))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", post(create_meal))
        .route("/meals/from/:id", post(recook_meal))
        .route("/meals/:id/cooked", post(mark_cooked))
        .route("/meals/:id/portions", post(consume_portion))
        .route("/meals/:id/rating", put(rate_meal))
        .route("/meals/:id", delete(delete_meal))
}

#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    Query(filter): Query<MealFilter>,
) -> Json<Vec<Meal>> {
    let store = state.store.read().await;
    Json(repo::list(store.data(), filter.active))
}

#[instrument(skip(state))]
pub async fn get_meal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Meal>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(repo::get(store.data(), id)?))
}

#[instrument(skip(state, body))]
pub async fn create_meal(
    State(state): State<AppState>,
    Json(body): Json<CreateMealRequest>,
) -> Result<(StatusCode, Json<Meal>), ApiError> {
    let today = OffsetDateTime::now_utc().date();
    let mut store = state.store.write().await;
    let meal = repo::create(store.data_mut(), body, today)?;
    store.persist().await?;
    Ok((StatusCode::CREATED, Json(meal)))
}

#[instrument(skip(state, body))]
pub async fn recook_meal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<RecookMealRequest>,
) -> Result<(StatusCode, Json<Meal>), ApiError> {
    let today = OffsetDateTime::now_utc().date();
    let mut store = state.store.write().await;
    let meal = repo::recook(store.data_mut(), id, body, today)?;
    store.persist().await?;
    Ok((StatusCode::CREATED, Json(meal)))
}

#[instrument(skip(state))]
pub async fn mark_cooked(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Meal>, ApiError> {
    let mut store = state.store.write().await;
    let meal = repo::mark_cooked(store.data_mut(), id)?;
    store.persist().await?;
    Ok(Json(meal))
}

#[instrument(skip(state))]
pub async fn consume_portion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Meal>, ApiError> {
    let mut store = state.store.write().await;
    let meal = repo::consume_portion(store.data_mut(), id)?;
    store.persist().await?;
    Ok(Json(meal))
}

#[instrument(skip(state, body))]
pub async fn rate_meal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<RateMealRequest>,
) -> Result<Json<Meal>, ApiError> {
    let mut store = state.store.write().await;
    let meal = repo::set_rating(store.data_mut(), id, body.rating)?;
    store.persist().await?;
    Ok(Json(meal))
}

#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    repo::delete(store.data_mut(), id)?;
    store.persist().await?;
    Ok(StatusCode::NO_CONTENT)
}
