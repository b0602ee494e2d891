//! Booking endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::booking::{Booking, BookingDetails, BookingStatus, CreateBooking},
    scheduling::countdown::TimeRemaining,
};

use super::AuthenticatedUser;

/// Status transition request
#[derive(Deserialize, ToSchema)]
pub struct TransitionRequest {
    /// Target status
    pub status: BookingStatus,
}

/// Countdown snapshot for a booking
#[derive(Serialize, ToSchema)]
pub struct RemainingResponse {
    pub booking_id: i32,
    pub status: BookingStatus,
    pub remaining: TimeRemaining,
    /// True once the session span has fully elapsed
    pub finished: bool,
    /// "HH:MM:SS", or "finished"
    pub display: String,
}

/// Create a new booking for the authenticated user
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Station not found"),
        (status = 409, description = "Requested span is not free")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let booking = state.services.bookings.create(claims.user_id, &data).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// List all bookings with station and user details
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All bookings, newest first", body = Vec<BookingDetails>)
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<BookingDetails>>> {
    claims.require_admin()?;
    let bookings = state.services.bookings.list_all().await?;
    Ok(Json(bookings))
}

/// Get booking by ID
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = Booking),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.get_by_id(id).await?;
    claims.require_self_or_admin(booking.user_id)?;
    Ok(Json(booking))
}

/// Advance a booking's status
#[utoipa::path(
    put,
    path = "/bookings/{id}/status",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = TransitionRequest,
    responses(
        (status = 200, description = "Status changed", body = Booking),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Illegal transition")
    )
)]
pub async fn transition_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<TransitionRequest>,
) -> AppResult<Json<Booking>> {
    claims.require_admin()?;
    let booking = state.services.bookings.transition(id, request.status).await?;
    Ok(Json(booking))
}

/// Remaining session time for a booking
#[utoipa::path(
    get,
    path = "/bookings/{id}/remaining",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Countdown snapshot", body = RemainingResponse),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn booking_remaining(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<RemainingResponse>> {
    let now = Utc::now().naive_utc();
    let (booking, remaining) = state.services.bookings.remaining(id, now).await?;
    claims.require_self_or_admin(booking.user_id)?;

    Ok(Json(RemainingResponse {
        booking_id: booking.id,
        status: booking.status,
        finished: remaining.is_finished(),
        display: remaining.to_string(),
        remaining,
    }))
}

/// Delete a booking
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn delete_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;
    state.services.bookings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
