//! In-memory Tempo calendar cache
//!
//! The poll worker is the only writer; presentation adapters read snapshots
//! from arbitrary tasks. The stored calendar is replaced wholesale on each
//! successful poll and never mutated in place.

use std::sync::{Arc, PoisonError, RwLock};

use crate::rte::types::{TempoColor, TempoDay};

/// Ordered sequence of Tempo days from the most recent successful fetch.
/// Ordering is the API response order; it is not independently sorted.
#[derive(Debug, Default)]
pub struct TempoCalendar {
    days: Vec<TempoDay>,
}

impl TempoCalendar {
    /// Build a calendar from freshly parsed days
    pub fn new(days: Vec<TempoDay>) -> Self {
        Self { days }
    }

    /// All days, in response order
    pub fn days(&self) -> &[TempoDay] {
        &self.days
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Count of days carrying the given color
    pub fn count_color(&self, color: TempoColor) -> usize {
        self.days.iter().filter(|d| d.color == color).count()
    }
}

/// Atomically replaceable calendar reference.
///
/// Readers may observe the old or the new calendar, never a partially
/// constructed one. The lock is held only for the duration of the pointer
/// swap or clone.
#[derive(Debug, Default)]
pub struct TempoCache {
    calendar: RwLock<Arc<TempoCalendar>>,
}

impl TempoCache {
    /// Create an empty cache (state before the first successful fetch)
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored calendar wholesale
    pub fn replace(&self, days: Vec<TempoDay>) {
        let fresh = Arc::new(TempoCalendar::new(days));
        let mut guard = self
            .calendar
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = fresh;
    }

    /// Current calendar reference, without copying the data
    pub fn snapshot(&self) -> Arc<TempoCalendar> {
        self.calendar
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
