//! Bookings repository for database operations
//!
//! Creation is the critical path: the availability check and the insert run
//! inside one transaction that locks the station row, so two concurrent
//! requests for overlapping spans cannot both commit. The exclusion
//! constraint in the schema backs the same invariant at the store level.

use chrono::NaiveDate;
use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{Booking, BookingDetails, BookingStatus, NewBooking},
        station::StationShort,
        user::UserShort,
    },
    scheduling::{availability, catalog::SlotCatalog},
};

const OVERLAP_CONSTRAINT: &str = "bookings_no_overlap";

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get booking by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking with id {} not found", id)))
    }

    /// All bookings for a station on a date, cancelled included
    pub async fn list_for_station_date(
        &self,
        station_id: i32,
        date: NaiveDate,
    ) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE station_id = $1 AND date = $2 ORDER BY start_time",
        )
        .bind(station_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// All bookings with station and user summaries, newest first
    pub async fn list_all(&self) -> AppResult<Vec<BookingDetails>> {
        let rows = sqlx::query(
            r#"
            SELECT b.id, b.date, b.start_time, b.duration_hours, b.total_price,
                   b.status, b.created_at,
                   s.id as station_id, s.name as station_name, s.station_type,
                   u.id as user_id, u.username, u.role, u.created_at as user_created_at
            FROM bookings b
            JOIN stations s ON b.station_id = s.id
            JOIN users u ON b.user_id = u.id
            ORDER BY b.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::row_to_details).collect())
    }

    /// Bookings made by one user, newest first
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<BookingDetails>> {
        let rows = sqlx::query(
            r#"
            SELECT b.id, b.date, b.start_time, b.duration_hours, b.total_price,
                   b.status, b.created_at,
                   s.id as station_id, s.name as station_name, s.station_type,
                   u.id as user_id, u.username, u.role, u.created_at as user_created_at
            FROM bookings b
            JOIN stations s ON b.station_id = s.id
            JOIN users u ON b.user_id = u.id
            WHERE b.user_id = $1
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::row_to_details).collect())
    }

    fn row_to_details(row: &sqlx::postgres::PgRow) -> BookingDetails {
        BookingDetails {
            id: row.get("id"),
            date: row.get("date"),
            start_time: row.get("start_time"),
            duration_hours: row.get("duration_hours"),
            total_price: row.get("total_price"),
            status: row.get("status"),
            created_at: row.get("created_at"),
            station: StationShort {
                id: row.get("station_id"),
                name: row.get("station_name"),
                station_type: row.get("station_type"),
            },
            user: UserShort {
                id: row.get("user_id"),
                username: row.get("username"),
                role: row.get("role"),
                created_at: row.get("user_created_at"),
            },
        }
    }

    /// Atomic check-and-reserve: availability is re-checked inside the
    /// transaction, then the insert freezes the price from the locked
    /// station row.
    pub async fn create(&self, data: &NewBooking, catalog: &SlotCatalog) -> AppResult<Booking> {
        let mut tx = self.pool.begin().await?;

        // Locking the station row serializes concurrent creates per station
        let station_row = sqlx::query("SELECT price FROM stations WHERE id = $1 FOR UPDATE")
            .bind(data.station_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Station with id {} not found", data.station_id))
            })?;
        let price: i64 = station_row.get("price");

        let existing = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE station_id = $1 AND date = $2 AND status <> 'cancelled'",
        )
        .bind(data.station_id)
        .bind(data.date)
        .fetch_all(&mut *tx)
        .await?;

        let free = availability::available_slots(catalog, &existing);
        for slot in required_slots(catalog, data) {
            if !free.contains(&slot) {
                return Err(AppError::SlotUnavailable {
                    station_id: data.station_id,
                    date: data.date,
                    slot,
                });
            }
        }

        let total_price = price * data.duration_hours as i64;

        let inserted = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (station_id, user_id, date, start_time, duration_hours, total_price, status)
            VALUES ($1, $2, $3, $4, $5, $6, 'confirmed')
            RETURNING *
            "#,
        )
        .bind(data.station_id)
        .bind(data.user_id)
        .bind(data.date)
        .bind(data.start_time)
        .bind(data.duration_hours)
        .bind(total_price)
        .fetch_one(&mut *tx)
        .await;

        let booking = match inserted {
            Ok(booking) => booking,
            Err(sqlx::Error::Database(e)) if e.constraint() == Some(OVERLAP_CONSTRAINT) => {
                return Err(AppError::SlotUnavailable {
                    station_id: data.station_id,
                    date: data.date,
                    slot: data.start_time,
                });
            }
            Err(e) => return Err(e.into()),
        };

        tx.commit().await?;
        Ok(booking)
    }

    /// Compare-and-swap status update. Returns `None` when the stored
    /// status no longer matches `expected`, leaving the row untouched.
    pub async fn update_status(
        &self,
        id: i32,
        expected: BookingStatus,
        target: BookingStatus,
    ) -> AppResult<Option<Booking>> {
        let row = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $1 WHERE id = $2 AND status = $3 RETURNING *",
        )
        .bind(target)
        .bind(id)
        .bind(expected)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Administrative delete; cancellation is a status, not a removal
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Booking with id {} not found", id)));
        }
        Ok(())
    }
}

/// Catalog slots the requested span must hold
fn required_slots(catalog: &SlotCatalog, data: &NewBooking) -> Vec<chrono::NaiveTime> {
    use chrono::Timelike;
    let first = data.start_time.hour();
    (first..first.saturating_add(data.duration_hours.max(0) as u32))
        .filter_map(|hour| chrono::NaiveTime::from_hms_opt(hour, 0, 0))
        .filter(|slot| catalog.contains(*slot))
        .collect()
}
