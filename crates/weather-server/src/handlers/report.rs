//! Report submission handler

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use weather_core::{CityKey, Unit};

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    city: String,
    temperature: f64,
    unit: String,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    city: String,
    timestamp: i64,
    /// Path at which the stored reading can be queried
    location: String,
}

pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Json<ReportResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let unit: Unit = req.unit.parse()?;

    let key = CityKey::normalize(&req.city);
    if key.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "City name '{}' contains no letters",
            req.city
        )));
    }

    let timestamp = state.weather.report(&req.city, req.temperature, unit)?;
    tracing::info!(
        "Recorded {} {} for '{}' at {}",
        req.temperature,
        unit,
        key,
        timestamp
    );

    Ok(Json(ReportResponse {
        location: format!("/city/{}", key),
        city: key.into_string(),
        timestamp,
    }))
}
