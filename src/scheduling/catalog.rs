//! Daily slot catalog
//!
//! The bookable day is a fixed one-hour grid. Slot times run from the
//! opening hour to the closing hour inclusive, so the default 9..21
//! bounds yield thirteen start times (09:00 through 21:00).

use chrono::{NaiveTime, Timelike};

use crate::config::BookingConfig;

/// Shortest bookable session, in whole hours
pub const MIN_DURATION_HOURS: i16 = 1;
/// Longest bookable session, in whole hours
pub const MAX_DURATION_HOURS: i16 = 4;

/// The ordered set of bookable start times for any day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCatalog {
    open_hour: u32,
    close_hour: u32,
}

impl SlotCatalog {
    /// Build a catalog from opening bounds. Hours past 23 are clamped to
    /// the end of the day; an inverted range yields an empty catalog.
    pub fn new(open_hour: u32, close_hour: u32) -> Self {
        Self {
            open_hour: open_hour.min(23),
            close_hour: close_hour.min(23),
        }
    }

    /// All slot start times for one day, in chronological order
    pub fn slots(&self) -> Vec<NaiveTime> {
        (self.open_hour..=self.close_hour)
            .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
            .collect()
    }

    /// Whether `time` is exactly one of the catalog slots
    pub fn contains(&self, time: NaiveTime) -> bool {
        time.minute() == 0
            && time.second() == 0
            && (self.open_hour..=self.close_hour).contains(&time.hour())
    }
}

impl Default for SlotCatalog {
    fn default() -> Self {
        let config = BookingConfig::default();
        Self::new(config.open_hour, config.close_hour)
    }
}

impl From<&BookingConfig> for SlotCatalog {
    fn from(config: &BookingConfig) -> Self {
        Self::new(config.open_hour, config.close_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_default_grid() {
        let slots = SlotCatalog::default().slots();
        assert_eq!(slots.len(), 13);
        assert_eq!(slots[0], time(9, 0));
        assert_eq!(slots[12], time(21, 0));
        assert!(slots.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_contains_rejects_off_grid_times() {
        let catalog = SlotCatalog::default();
        assert!(catalog.contains(time(9, 0)));
        assert!(catalog.contains(time(21, 0)));
        assert!(!catalog.contains(time(8, 0)));
        assert!(!catalog.contains(time(22, 0)));
        assert!(!catalog.contains(time(9, 30)));
    }

    #[test]
    fn test_inverted_bounds_yield_empty_catalog() {
        let catalog = SlotCatalog::new(21, 9);
        assert!(catalog.slots().is_empty());
        assert!(!catalog.contains(time(12, 0)));
    }
}
