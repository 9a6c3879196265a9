use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::data::Settings;

use super::dto::ReplaceSettingsRequest;
use super::repo;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/settings", get(get_settings))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/settings", put(replace_settings))
}

#[instrument(skip(state))]
pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    let store = state.store.read().await;
    Json(repo::get(store.data()))
}

#[instrument(skip(state, body))]
pub async fn replace_settings(
    State(state): State<AppState>,
    Json(body): Json<ReplaceSettingsRequest>,
) -> Result<Json<Settings>, ApiError> {
    let mut store = state.store.write().await;
    let settings = repo::replace(store.data_mut(), body)?;
    store.persist().await?;
    Ok(Json(settings))
}
