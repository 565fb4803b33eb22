// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time grid construction.
//!
//! Availability is declared as day-level windows per field. The grid cuts
//! every window into fixed units of `match_duration + break_time` minutes,
//! each of which can host exactly one match.
//!
//! ## Invariants
//!
//! - Only match-day records produce slots
//! - A slot's match always ends inside its window
//! - Output order follows input order (records, then windows, then time)

use pitchplan_domain::{DailyAvailability, TimeSlot};
use std::collections::BTreeSet;
use time::{Date, Duration, Time};
use tracing::debug;

/// One bookable match slot on a specific field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSlot {
    /// The calendar date.
    pub date: Date,
    /// Kick-off to final whistle; the break follows `time_slot.end`.
    pub time_slot: TimeSlot,
    /// The venue hosting the slot.
    pub venue_id: String,
    /// The field within the venue.
    pub field_id: String,
}

impl ScheduleSlot {
    /// Returns the kick-off time.
    #[must_use]
    pub const fn start(&self) -> Time {
        self.time_slot.start
    }

    /// Returns whether this slot is on the given venue field.
    #[must_use]
    pub fn is_on_field(&self, venue_id: &str, field_id: &str) -> bool {
        self.venue_id == venue_id && self.field_id == field_id
    }
}

/// Builds the bookable slot grid from availability records.
///
/// # Arguments
///
/// * `availability` - Day-level availability per field
/// * `match_duration` - Playing time of one match in minutes
/// * `break_time` - Minutes reserved after each match
///
/// # Returns
///
/// A flat slot list in input order. Empty availability, windows shorter
/// than one unit, or a unit too long to count produce an empty list;
/// callers treat that as terminal.
///
/// # Example
///
/// ```text
/// window 09:00-17:00, match 60, break 10 => unit 70, floor(480 / 70) = 6
///
/// 09:00-10:00, 10:10-11:10, 11:20-12:20, 12:30-13:30, 13:40-14:40, 14:50-15:50
/// ```
#[must_use]
pub fn build_time_grid(
    availability: &[DailyAvailability],
    match_duration: u32,
    break_time: u32,
) -> Vec<ScheduleSlot> {
    if match_duration == 0 {
        return Vec::new();
    }
    let Some(unit) = match_duration.checked_add(break_time) else {
        return Vec::new();
    };

    let mut slots: Vec<ScheduleSlot> = Vec::new();

    for entry in availability {
        if !entry.is_match_day {
            debug!(date = %entry.date, field = %entry.field_id, "Skipping non-match day");
            continue;
        }

        for window in &entry.time_slots {
            let window_minutes: u32 = window.minutes();
            let units: u32 = window_minutes / unit;

            debug!(
                date = %entry.date,
                field = %entry.field_id,
                window_minutes,
                units,
                "Cutting availability window"
            );

            for index in 0..units {
                let offset: u32 = index * unit;
                // Rule: the match must end inside the window
                if offset + match_duration > window_minutes {
                    break;
                }

                let start: Time = window.start + Duration::minutes(i64::from(offset));
                let end: Time = start + Duration::minutes(i64::from(match_duration));

                slots.push(ScheduleSlot {
                    date: entry.date,
                    time_slot: TimeSlot { start, end },
                    venue_id: entry.venue_id.clone(),
                    field_id: entry.field_id.clone(),
                });
            }
        }
    }

    let days: BTreeSet<Date> = slots.iter().map(|slot| slot.date).collect();
    debug!(
        total_slots = slots.len(),
        days_with_slots = days.len(),
        unit_minutes = unit,
        "Built time grid"
    );

    slots
}

/// Returns minutes elapsed since midnight.
pub(crate) fn minute_of_day(time: Time) -> u32 {
    u32::from(time.hour()) * 60 + u32::from(time.minute())
}

/// Sorts slots chronologically by date, then kick-off.
///
/// The sort is stable, so slots at the same moment keep their input order.
pub fn sort_chronologically(slots: &mut [ScheduleSlot]) {
    slots.sort_by_key(|slot| (slot.date, slot.start()));
}
