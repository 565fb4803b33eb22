// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::tournament::Tournament;
use crate::types::{DailyAvailability, Team, Venue};
use std::collections::HashSet;
use time::Date;

/// Longest break allowed after a match.
pub const MAX_BREAK_MINUTES: u32 = 24 * 60;

/// Validates the time windows of a single availability record.
///
/// # Arguments
///
/// * `entry` - The availability record to check
///
/// # Errors
///
/// Returns an error if:
/// - A window does not end after it starts
/// - Windows overlap or are not in chronological order
pub fn validate_time_slots(entry: &DailyAvailability) -> Result<(), DomainError> {
    for slot in &entry.time_slots {
        // Rule: every window must have positive length
        if slot.end <= slot.start {
            return Err(DomainError::InvalidTimeSlot {
                start: slot.start,
                end: slot.end,
            });
        }
    }

    // Rule: windows are ordered and non-overlapping
    for pair in entry.time_slots.windows(2) {
        if pair[1].start < pair[0].end {
            return Err(DomainError::OverlappingTimeSlots {
                date: entry.date,
                field_id: entry.field_id.clone(),
            });
        }
    }

    Ok(())
}

/// Validates that every availability record points at a known venue field.
///
/// # Arguments
///
/// * `venues` - The configured venues
/// * `availability` - The availability records
///
/// # Errors
///
/// Returns an error if:
/// - A record references an unknown venue
/// - A record references a field its venue does not own
/// - A record's windows are invalid (see [`validate_time_slots`])
/// - Two records share a date, venue and field
pub fn validate_availability(
    venues: &[Venue],
    availability: &[DailyAvailability],
) -> Result<(), DomainError> {
    let mut seen: HashSet<(Date, &str, &str)> = HashSet::new();
    for entry in availability {
        let venue: &Venue = venues
            .iter()
            .find(|v| v.id == entry.venue_id)
            .ok_or_else(|| DomainError::VenueNotFound {
                venue_id: entry.venue_id.clone(),
            })?;

        if venue.field(&entry.field_id).is_none() {
            return Err(DomainError::FieldNotFound {
                venue_id: entry.venue_id.clone(),
                field_id: entry.field_id.clone(),
            });
        }

        validate_time_slots(entry)?;

        // Rule: one record per date and field
        if !seen.insert((
            entry.date,
            entry.venue_id.as_str(),
            entry.field_id.as_str(),
        )) {
            return Err(DomainError::DuplicateAvailability {
                date: entry.date,
                venue_id: entry.venue_id.clone(),
                field_id: entry.field_id.clone(),
            });
        }
    }

    Ok(())
}

/// Validates that the match duration is usable for slot sizing.
///
/// # Errors
///
/// Returns an error if the duration is zero.
pub const fn validate_match_duration(minutes: u32) -> Result<(), DomainError> {
    if minutes == 0 {
        return Err(DomainError::InvalidMatchDuration { minutes });
    }
    Ok(())
}

/// Validates that the break after each match fits in one day.
///
/// # Errors
///
/// Returns an error if the break exceeds [`MAX_BREAK_MINUTES`].
pub const fn validate_break_time(minutes: u32) -> Result<(), DomainError> {
    if minutes > MAX_BREAK_MINUTES {
        return Err(DomainError::InvalidBreakTime { minutes });
    }
    Ok(())
}

/// Validates that team identifiers are unique.
///
/// # Errors
///
/// Returns an error naming the first repeated identifier.
pub fn validate_teams_unique(teams: &[Team]) -> Result<(), DomainError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for team in teams {
        if !seen.insert(team.id.as_str()) {
            return Err(DomainError::DuplicateTeamId(team.id.clone()));
        }
    }
    Ok(())
}

/// Validates the shape of a tournament before it reaches the engine.
///
/// This checks structure only. Capacity problems are reported by the
/// feasibility checker instead.
///
/// # Errors
///
/// Returns the first violation found by the individual validators.
pub fn validate_tournament(tournament: &Tournament) -> Result<(), DomainError> {
    validate_match_duration(tournament.match_duration())?;
    validate_break_time(tournament.break_time())?;
    validate_teams_unique(&tournament.teams)?;
    validate_availability(
        &tournament.constraints.venues,
        &tournament.constraints.availability,
    )?;
    Ok(())
}
