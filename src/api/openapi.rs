//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, bookings, health, stations, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GameDock API",
        version = "1.0.0",
        description = "Gaming Station Booking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::me,
        // Stations
        stations::list_stations,
        stations::get_station,
        stations::list_slots,
        stations::create_station,
        stations::update_station,
        stations::delete_station,
        // Bookings
        bookings::create_booking,
        bookings::list_bookings,
        bookings::get_booking,
        bookings::transition_booking,
        bookings::booking_remaining,
        bookings::delete_booking,
        // Users
        users::list_users,
        users::get_user,
        users::get_user_bookings,
        users::delete_user,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            // Stations
            crate::models::station::Station,
            crate::models::station::StationShort,
            crate::models::station::StationType,
            crate::models::station::StationStatus,
            crate::models::station::StationSpecs,
            crate::models::station::CreateStation,
            crate::models::station::UpdateStation,
            stations::SlotsResponse,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::BookingDetails,
            crate::models::booking::BookingStatus,
            crate::models::booking::CreateBooking,
            bookings::TransitionRequest,
            bookings::RemainingResponse,
            crate::scheduling::countdown::TimeRemaining,
            // Users
            crate::models::user::UserShort,
            crate::models::user::Role,
            crate::models::user::CreateUser,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "stations", description = "Station management and availability"),
        (name = "bookings", description = "Booking lifecycle"),
        (name = "users", description = "User management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
