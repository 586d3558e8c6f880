//! City listing handler

use crate::AppState;
use axum::{extract::State, Json};

pub async fn list(State(state): State<AppState>) -> Json<Vec<String>> {
    let cities = state.weather.cities();
    tracing::debug!("Listing {} cities", cities.len());
    Json(cities)
}
