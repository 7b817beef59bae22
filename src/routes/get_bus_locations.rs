use crate::{
    services::tago_service::tago_service::BusLocationsInput,
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::Deserialize;
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetBusLocationsPayload {
    #[serde(rename = "cityCode")]
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub city_code: String,

    #[serde(rename = "routeId")]
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub route_id: String,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_bus_locations(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetBusLocationsPayload>,
) -> Result<Response, AppError> {
    let locations = state
        .tago_service
        .get_bus_locations(BusLocationsInput {
            city_code: payload.city_code,
            route_id: payload.route_id,
        })
        .await
        .map_err(|e| {
            error!("Failed to fetch bus locations: {}", e);
            AppError::from(e)
        })?;

    Ok((StatusCode::OK, Json(locations)).into_response())
}
