// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule generation.
//!
//! Orchestrates grid construction, fixture pairing, slot assignment and
//! calendar validation. Structural problems abort with a `CoreError` before
//! anything is placed; everything found after that is reported as data.

use crate::assigner::{Assignment, assign_fixtures};
use crate::capacity::total_available_minutes;
use crate::conflicts::{ConflictReport, validate_calendar};
use crate::error::CoreError;
use crate::pairing::{Fixture, generate_fixtures};
use crate::stats::{ScheduleStats, compute_stats, utilization};
use crate::timegrid::{ScheduleSlot, build_time_grid};
use pitchplan_domain::{DailyAvailability, Match, Tournament, validate_tournament};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;
use tracing::info;

/// The output of a generation run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOutcome {
    /// Placed matches grouped by date.
    pub matches: BTreeMap<Date, Vec<Match>>,
    /// Unplaced fixtures followed by validation findings.
    pub conflicts: Vec<ConflictReport>,
    /// Overall utilization percentage, one decimal.
    pub utilization: f64,
    /// Distribution and resource figures of the calendar.
    pub stats: ScheduleStats,
}

impl ScheduleOutcome {
    /// Returns all matches in date order.
    pub fn all_matches(&self) -> impl Iterator<Item = &Match> {
        self.matches.values().flatten()
    }
}

/// Generates a full calendar for a tournament.
///
/// # Arguments
///
/// * `tournament` - The tournament to schedule; not modified
///
/// # Errors
///
/// Returns an error, checked in this order, if:
/// - Fewer than two teams are registered
/// - No venue has been configured
/// - The tournament fails boundary validation
/// - The availability yields no bookable slot
/// - The format has no fixture generator
pub fn generate_schedule(tournament: &Tournament) -> Result<ScheduleOutcome, CoreError> {
    if tournament.teams.len() < 2 {
        return Err(CoreError::NotEnoughTeams {
            count: tournament.teams.len(),
        });
    }
    if tournament.constraints.venues.is_empty() {
        return Err(CoreError::NoVenues);
    }
    validate_tournament(tournament)?;

    let match_duration: u32 = tournament.match_duration();
    let break_time: u32 = tournament.break_time();
    let availability: &[DailyAvailability] = &tournament.constraints.availability;

    let slots: Vec<ScheduleSlot> = build_time_grid(availability, match_duration, break_time);
    if slots.is_empty() {
        return Err(CoreError::NoAvailableSlots);
    }
    let slot_count: usize = slots.len();

    let fixtures: Vec<Fixture> =
        generate_fixtures(&tournament.teams, tournament.format, &tournament.settings)?;

    let Assignment {
        matches,
        conflicts: mut placement_conflicts,
    } = assign_fixtures(&fixtures, slots, match_duration);

    let validation_conflicts: Vec<ConflictReport> = validate_calendar(&matches, match_duration);
    placement_conflicts.extend(validation_conflicts);

    let unit_minutes: u32 = match_duration.saturating_add(break_time);
    let stats: ScheduleStats = compute_stats(
        &matches,
        &tournament.constraints.venues,
        availability,
        unit_minutes,
    );
    let overall: f64 = utilization(
        stats.total_matches,
        unit_minutes,
        total_available_minutes(availability),
    );

    info!(
        tournament = %tournament.id,
        format = %tournament.format,
        fixtures = fixtures.len(),
        slots = slot_count,
        placed = stats.total_matches,
        conflicts = placement_conflicts.len(),
        utilization = overall,
        "Generated schedule"
    );

    Ok(ScheduleOutcome {
        matches,
        conflicts: placement_conflicts,
        utilization: overall,
        stats,
    })
}
