use axum::{extract::State, routing::get, Json, Router};
use time::OffsetDateTime;
use tracing::instrument;

use crate::state::AppState;

use super::dto::StatsSummary;
use super::repo;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}

#[instrument(skip(state))]
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsSummary> {
    let store = state.store.read().await;
    let today = OffsetDateTime::now_utc().date();
    Json(repo::summary(store.data(), today))
}
