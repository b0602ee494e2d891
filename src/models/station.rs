//! Station model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Kind of physical gaming station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "station_type")]
pub enum StationType {
    #[serde(rename = "PS5")]
    #[sqlx(rename = "PS5")]
    Ps5,
    #[serde(rename = "PS4")]
    #[sqlx(rename = "PS4")]
    Ps4,
    #[serde(rename = "PC Gaming")]
    #[sqlx(rename = "PC Gaming")]
    PcGaming,
    #[serde(rename = "VR")]
    #[sqlx(rename = "VR")]
    Vr,
}

impl std::fmt::Display for StationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StationType::Ps5 => "PS5",
            StationType::Ps4 => "PS4",
            StationType::PcGaming => "PC Gaming",
            StationType::Vr => "VR",
        };
        write!(f, "{}", label)
    }
}

/// Operational status of a station, set by staff. Independent of any
/// single booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "station_status")]
pub enum StationStatus {
    #[serde(rename = "Available")]
    #[sqlx(rename = "Available")]
    Available,
    #[serde(rename = "In Use")]
    #[sqlx(rename = "In Use")]
    InUse,
    #[serde(rename = "Maintenance")]
    #[sqlx(rename = "Maintenance")]
    Maintenance,
}

/// Type-specific hardware details. Only PC Gaming stations carry specs;
/// every other type carries none.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StationSpecs {
    PcGaming {
        cpu: String,
        gpu: String,
        ram: String,
        storage: String,
    },
}

/// Station record from database
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Station {
    pub id: i32,
    pub name: String,
    pub station_type: StationType,
    /// Hourly price in the smallest currency unit
    pub price: i64,
    pub status: StationStatus,
    pub description: Option<String>,
    /// Image URL shown on the booking page
    pub image: Option<String>,
    #[schema(value_type = Option<StationSpecs>)]
    pub specs: Option<sqlx::types::Json<StationSpecs>>,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

/// Station summary embedded in booking listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StationShort {
    pub id: i32,
    pub name: String,
    pub station_type: StationType,
}

/// Create station request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStation {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub station_type: StationType,
    /// Hourly price in the smallest currency unit
    #[validate(range(min = 1, message = "Price must be positive"))]
    pub price: i64,
    pub status: Option<StationStatus>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub specs: Option<StationSpecs>,
}

/// Update station request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStation {
    pub name: Option<String>,
    pub station_type: Option<StationType>,
    #[validate(range(min = 1, message = "Price must be positive"))]
    pub price: Option<i64>,
    pub status: Option<StationStatus>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub specs: Option<StationSpecs>,
}
