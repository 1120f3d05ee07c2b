//! Sensor-style projections over calendar snapshots
//!
//! Pure read-only functions; the host display layer decides how to render
//! them. An empty calendar yields absent values, never errors.

use crate::cache::TempoCalendar;
use crate::rte::types::TempoColor;

/// Color of the chronologically-first day, or `None` on an empty calendar
pub fn color_of_day(calendar: &TempoCalendar) -> Option<TempoColor> {
    calendar.days().first().map(|d| d.color)
}

/// Number of days in the calendar carrying the given color
pub fn days_remaining(calendar: &TempoCalendar, color: TempoColor) -> usize {
    calendar.count_color(color)
}

/// Current values of all registered sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorStates {
    pub color_of_day: Option<TempoColor>,
    pub blue_days_remaining: usize,
    pub white_days_remaining: usize,
    pub red_days_remaining: usize,
}

/// Compute every sensor value from a single snapshot
pub fn sensor_states(calendar: &TempoCalendar) -> SensorStates {
    SensorStates {
        color_of_day: color_of_day(calendar),
        blue_days_remaining: days_remaining(calendar, TempoColor::Blue),
        white_days_remaining: days_remaining(calendar, TempoColor::White),
        red_days_remaining: days_remaining(calendar, TempoColor::Red),
    }
}
