//! Booking service: slot listing, creation, status transitions, countdown

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use validator::Validate;

use crate::{
    config::BookingConfig,
    error::{AppError, AppResult},
    models::booking::{Booking, BookingDetails, BookingStatus, CreateBooking, NewBooking},
    repository::Repository,
    scheduling::{
        availability,
        catalog::SlotCatalog,
        countdown::{self, TimeRemaining},
    },
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    catalog: SlotCatalog,
}

impl BookingsService {
    pub fn new(repository: Repository, config: &BookingConfig) -> Self {
        Self {
            repository,
            catalog: SlotCatalog::from(config),
        }
    }

    /// Free slots for a station on a date, in catalog order. Advisory
    /// only; creation re-checks inside its own transaction.
    pub async fn available_slots(&self, station_id: i32, date: &str) -> AppResult<Vec<NaiveTime>> {
        let date = parse_date(date)?;

        // Verify station exists
        self.repository.stations.get_by_id(station_id).await?;

        let bookings = self
            .repository
            .bookings
            .list_for_station_date(station_id, date)
            .await?;

        Ok(availability::available_slots(&self.catalog, &bookings))
    }

    /// Create a booking for the authenticated user
    pub async fn create(&self, user_id: i32, data: &CreateBooking) -> AppResult<Booking> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let date = parse_date(&data.date)?;
        let start_time = parse_time(&data.start_time)?;

        if !self.catalog.contains(start_time) {
            return Err(AppError::Validation(format!(
                "Start time {} is not a bookable slot",
                data.start_time
            )));
        }

        // Verify user exists
        self.repository.users.get_by_id(user_id).await?;

        let new_booking = NewBooking {
            station_id: data.station_id,
            user_id,
            date,
            start_time,
            duration_hours: data.duration_hours,
        };

        let booking = self
            .repository
            .bookings
            .create(&new_booking, &self.catalog)
            .await?;

        tracing::info!(
            booking_id = booking.id,
            station_id = booking.station_id,
            user_id = booking.user_id,
            "Booking created"
        );

        Ok(booking)
    }

    /// Get a booking by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Booking> {
        self.repository.bookings.get_by_id(id).await
    }

    /// List all bookings with station and user details
    pub async fn list_all(&self) -> AppResult<Vec<BookingDetails>> {
        self.repository.bookings.list_all().await
    }

    /// List bookings made by one user
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<BookingDetails>> {
        // Verify user exists
        self.repository.users.get_by_id(user_id).await?;
        self.repository.bookings.list_for_user(user_id).await
    }

    /// Advance a booking to `target`, rejecting illegal transitions. The
    /// stored row is updated only if its status still matches the one the
    /// transition was validated against.
    pub async fn transition(&self, id: i32, target: BookingStatus) -> AppResult<Booking> {
        let booking = self.repository.bookings.get_by_id(id).await?;

        if !booking.status.can_transition_to(target) {
            return Err(AppError::InvalidTransition {
                from: booking.status,
                to: target,
            });
        }

        match self
            .repository
            .bookings
            .update_status(id, booking.status, target)
            .await?
        {
            Some(updated) => {
                tracing::info!(
                    booking_id = updated.id,
                    from = %booking.status,
                    to = %updated.status,
                    "Booking status changed"
                );
                Ok(updated)
            }
            None => {
                // A concurrent writer moved the booking first
                let current = self.repository.bookings.get_by_id(id).await?;
                Err(AppError::InvalidTransition {
                    from: current.status,
                    to: target,
                })
            }
        }
    }

    /// Remaining session time for a booking at `now`
    pub async fn remaining(&self, id: i32, now: NaiveDateTime) -> AppResult<(Booking, TimeRemaining)> {
        let booking = self.repository.bookings.get_by_id(id).await?;
        let remaining = countdown::remaining(
            booking.date,
            booking.start_time,
            booking.duration_hours,
            now,
        );
        Ok((booking, remaining))
    }

    /// Administrative delete
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.bookings.delete(id).await
    }
}

fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date (use YYYY-MM-DD)".to_string()))
}

fn parse_time(value: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| AppError::Validation("Invalid start time (use HH:MM)".to_string()))
}
