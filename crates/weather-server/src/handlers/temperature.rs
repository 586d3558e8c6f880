//! Temperature query handler

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use weather_core::{CityKey, Unit};

#[derive(Debug, Deserialize)]
pub struct TemperatureQuery {
    unit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TemperatureResponse {
    city: String,
    temperature: f64,
    unit: Unit,
    timestamp: i64,
}

pub async fn show(
    State(state): State<AppState>,
    Path(city): Path<String>,
    Query(query): Query<TemperatureQuery>,
) -> Result<Json<TemperatureResponse>, ApiError> {
    let unit = match query.unit.as_deref() {
        Some(raw) => raw.parse::<Unit>()?,
        None => Unit::default(),
    };

    let observation = state.weather.temperature_in(&city, unit)?;

    Ok(Json(TemperatureResponse {
        city: CityKey::normalize(&city).into_string(),
        temperature: observation.temperature,
        unit,
        timestamp: observation.timestamp,
    }))
}
