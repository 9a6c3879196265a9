use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::data::Dataset;

use super::repo;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/export", get(export_dataset))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/import", post(import_dataset))
}

#[instrument(skip(state))]
pub async fn export_dataset(State(state): State<AppState>) -> Json<Dataset> {
    let store = state.store.read().await;
    Json(store.data().clone())
}

#[instrument(skip(state, body))]
pub async fn import_dataset(
    State(state): State<AppState>,
    Json(body): Json<Dataset>,
) -> Result<Json<Dataset>, ApiError> {
    repo::validate(&body)?;
    let mut store = state.store.write().await;
    store.replace(body);
    store.persist().await?;
    info!(
        items = store.data().items.len(),
        meals = store.data().meals.len(),
        events = store.data().shopping_events.len(),
        "dataset imported"
    );
    Ok(Json(store.data().clone()))
}
