//! Calendar-event projection over calendar snapshots

use chrono::{DateTime, FixedOffset, Utc};

use crate::cache::TempoCalendar;

/// Generic calendar event shape handed to the host display layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub label: &'static str,
}

/// Every day whose `[start, end]` interval is fully contained in
/// `[range_start, range_end]`, boundaries inclusive.
pub fn events_between(
    calendar: &TempoCalendar,
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> Vec<CalendarEvent> {
    calendar
        .days()
        .iter()
        .filter(|d| {
            d.start.with_timezone(&Utc) >= range_start && d.end.with_timezone(&Utc) <= range_end
        })
        .map(|d| CalendarEvent {
            start: d.start,
            end: d.end,
            label: d.color.as_str(),
        })
        .collect()
}
