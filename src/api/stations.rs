//! Station endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::station::{CreateStation, Station, UpdateStation},
};

use super::AuthenticatedUser;

/// Query parameters for the slot listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct SlotsQuery {
    /// Date to check (YYYY-MM-DD)
    pub date: String,
}

/// Free slots for a station on a date
#[derive(Serialize, ToSchema)]
pub struct SlotsResponse {
    pub station_id: i32,
    /// Date checked (YYYY-MM-DD)
    pub date: String,
    /// Free start times (HH:MM), in catalog order
    pub slots: Vec<String>,
}

/// List all stations
#[utoipa::path(
    get,
    path = "/stations",
    tag = "stations",
    responses(
        (status = 200, description = "Station list", body = Vec<Station>)
    )
)]
pub async fn list_stations(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Station>>> {
    let stations = state.services.stations.list().await?;
    Ok(Json(stations))
}

/// Get station by ID
#[utoipa::path(
    get,
    path = "/stations/{id}",
    tag = "stations",
    params(("id" = i32, Path, description = "Station ID")),
    responses(
        (status = 200, description = "Station details", body = Station),
        (status = 404, description = "Station not found")
    )
)]
pub async fn get_station(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Station>> {
    let station = state.services.stations.get_by_id(id).await?;
    Ok(Json(station))
}

/// Free slots for a station on a date
#[utoipa::path(
    get,
    path = "/stations/{id}/slots",
    tag = "stations",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Station ID"),
        SlotsQuery
    ),
    responses(
        (status = 200, description = "Free slots in catalog order", body = SlotsResponse),
        (status = 400, description = "Invalid date"),
        (status = 404, description = "Station not found")
    )
)]
pub async fn list_slots(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Query(query): Query<SlotsQuery>,
) -> AppResult<Json<SlotsResponse>> {
    let slots = state.services.bookings.available_slots(id, &query.date).await?;

    Ok(Json(SlotsResponse {
        station_id: id,
        date: query.date,
        slots: slots.iter().map(|slot| slot.format("%H:%M").to_string()).collect(),
    }))
}

/// Create a station
#[utoipa::path(
    post,
    path = "/stations",
    tag = "stations",
    security(("bearer_auth" = [])),
    request_body = CreateStation,
    responses(
        (status = 201, description = "Station created", body = Station),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_station(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateStation>,
) -> AppResult<(StatusCode, Json<Station>)> {
    claims.require_admin()?;
    let station = state.services.stations.create(&data).await?;
    Ok((StatusCode::CREATED, Json(station)))
}

/// Update a station
#[utoipa::path(
    put,
    path = "/stations/{id}",
    tag = "stations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Station ID")),
    request_body = UpdateStation,
    responses(
        (status = 200, description = "Station updated", body = Station),
        (status = 404, description = "Station not found")
    )
)]
pub async fn update_station(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateStation>,
) -> AppResult<Json<Station>> {
    claims.require_admin()?;
    let station = state.services.stations.update(id, &data).await?;
    Ok(Json(station))
}

/// Delete a station
#[utoipa::path(
    delete,
    path = "/stations/{id}",
    tag = "stations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Station ID")),
    responses(
        (status = 204, description = "Station deleted"),
        (status = 404, description = "Station not found")
    )
)]
pub async fn delete_station(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;
    state.services.stations.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
