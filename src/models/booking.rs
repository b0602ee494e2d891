//! Booking model and status state machine

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::station::StationShort;
use super::user::UserShort;

/// Booking lifecycle status.
///
/// Legal transitions: `confirmed -> in-progress -> completed`, and
/// `confirmed | in-progress -> cancelled`. `completed` and `cancelled`
/// are terminal. Transitions are triggered by staff, never by timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "booking_status", rename_all = "kebab-case")]
pub enum BookingStatus {
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Whether moving from `self` to `target` is a legal transition
    pub fn can_transition_to(self, target: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, target),
            (Confirmed, InProgress)
                | (InProgress, Completed)
                | (Confirmed, Cancelled)
                | (InProgress, Cancelled)
        )
    }

    /// Terminal statuses accept no further transitions
    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::InProgress => "in-progress",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Booking record from database
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: i32,
    pub station_id: i32,
    pub user_id: i32,
    /// Calendar day of the session, no time component
    pub date: NaiveDate,
    /// One of the catalog slots
    pub start_time: NaiveTime,
    /// Whole hours, 1 to 4
    pub duration_hours: i16,
    /// Station hourly price times duration, frozen at creation
    pub total_price: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Booking with joined station and user summaries for staff listings
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookingDetails {
    pub id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_hours: i16,
    pub total_price: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub station: StationShort,
    pub user: UserShort,
}

/// Create booking request. The booking user comes from the authenticated
/// session, not from the payload.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBooking {
    pub station_id: i32,
    /// Booking date (YYYY-MM-DD)
    pub date: String,
    /// Start time (HH:MM), one of the catalog slots
    pub start_time: String,
    /// Duration in whole hours
    #[validate(range(min = 1, max = 4, message = "Duration must be between 1 and 4 hours"))]
    pub duration_hours: i16,
}

/// Validated booking parameters handed to the storage layer
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub station_id: i32,
    pub user_id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_hours: i16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use BookingStatus::*;

    #[test]
    fn test_lifecycle_chain() {
        assert!(Confirmed.can_transition_to(InProgress));
        assert!(InProgress.can_transition_to(Completed));
    }

    #[test]
    fn test_cancellation() {
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(InProgress.can_transition_to(Cancelled));
    }

    #[test]
    fn test_terminal_states_accept_nothing() {
        for target in [Confirmed, InProgress, Completed, Cancelled] {
            assert!(!Completed.can_transition_to(target));
            assert!(!Cancelled.can_transition_to(target));
        }
        assert!(Completed.is_terminal());
        assert!(Cancelled.is_terminal());
    }

    #[test]
    fn test_no_skipping_or_rewinding() {
        assert!(!Confirmed.can_transition_to(Completed));
        assert!(!Confirmed.can_transition_to(Confirmed));
        assert!(!InProgress.can_transition_to(Confirmed));
        assert!(!InProgress.can_transition_to(InProgress));
    }
}
