//! Free-slot resolution for a station on a given date
//!
//! Pure functions over a set of existing bookings. The caller scopes the
//! booking slice to one station and one date; these functions only decide
//! which catalog slots the spans cover. Identical inputs give identical
//! results.

use std::collections::HashSet;

use chrono::{NaiveTime, Timelike};

use crate::models::booking::{Booking, BookingStatus};

use super::catalog::SlotCatalog;

/// Catalog slots covered by the `[start, start + duration)` spans of the
/// given bookings. A multi-hour booking blocks every hourly slot it spans,
/// not just its start slot. Cancelled bookings block nothing, and a span
/// running past the last catalog slot blocks only real slots.
pub fn occupied_slots(catalog: &SlotCatalog, bookings: &[Booking]) -> HashSet<NaiveTime> {
    let mut occupied = HashSet::new();
    for booking in bookings {
        if booking.status == BookingStatus::Cancelled {
            continue;
        }
        let first = booking.start_time.hour();
        let span = booking.duration_hours.max(0) as u32;
        for hour in first..first.saturating_add(span) {
            if let Some(slot) = NaiveTime::from_hms_opt(hour, 0, 0) {
                if catalog.contains(slot) {
                    occupied.insert(slot);
                }
            }
        }
    }
    occupied
}

/// Free slots for the station and date the bookings were scoped to, in
/// catalog order. A date with no bookings returns the full catalog.
pub fn available_slots(catalog: &SlotCatalog, bookings: &[Booking]) -> Vec<NaiveTime> {
    let occupied = occupied_slots(catalog, bookings);
    catalog
        .slots()
        .into_iter()
        .filter(|slot| !occupied.contains(slot))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn time(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn booking(start_hour: u32, duration_hours: i16, status: BookingStatus) -> Booking {
        Booking {
            id: 1,
            station_id: 1,
            user_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            start_time: time(start_hour),
            duration_hours,
            total_price: 50_000 * duration_hours as i64,
            status,
            created_at: Utc.with_ymd_and_hms(2025, 5, 30, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_no_bookings_returns_full_catalog() {
        let catalog = SlotCatalog::default();
        assert_eq!(available_slots(&catalog, &[]), catalog.slots());
    }

    #[test]
    fn test_multi_hour_booking_blocks_every_spanned_slot() {
        let catalog = SlotCatalog::default();
        let bookings = [booking(14, 2, BookingStatus::Confirmed)];
        let free = available_slots(&catalog, &bookings);
        assert!(!free.contains(&time(14)));
        assert!(!free.contains(&time(15)));
        assert!(free.contains(&time(13)));
        assert!(free.contains(&time(16)));
    }

    #[test]
    fn test_cancelled_bookings_block_nothing() {
        let catalog = SlotCatalog::default();
        let bookings = [booking(14, 2, BookingStatus::Cancelled)];
        assert_eq!(available_slots(&catalog, &bookings), catalog.slots());
    }

    #[test]
    fn test_span_past_closing_blocks_only_real_slots() {
        let catalog = SlotCatalog::default();
        // 20:00 for 4 hours reaches 24:00; only 20:00 and 21:00 exist
        let bookings = [booking(20, 4, BookingStatus::InProgress)];
        let occupied = occupied_slots(&catalog, &bookings);
        assert_eq!(occupied.len(), 2);
        assert!(occupied.contains(&time(20)));
        assert!(occupied.contains(&time(21)));
    }

    #[test]
    fn test_free_and_occupied_partition_the_catalog() {
        let catalog = SlotCatalog::default();
        let bookings = [
            booking(9, 1, BookingStatus::Confirmed),
            booking(12, 3, BookingStatus::InProgress),
            booking(18, 2, BookingStatus::Completed),
            booking(10, 4, BookingStatus::Cancelled),
        ];
        let occupied = occupied_slots(&catalog, &bookings);
        let free = available_slots(&catalog, &bookings);
        assert_eq!(free.len() + occupied.len(), catalog.slots().len());
        assert!(free.iter().all(|slot| !occupied.contains(slot)));
        // in catalog order
        assert!(free.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
