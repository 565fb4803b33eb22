// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Tournament scheduling and feasibility engine.
//!
//! Every operation takes a `&Tournament` and returns a fresh value:
//!
//! - [`generate_schedule`] builds a conflict-checked calendar
//! - [`check_feasibility`] explains whether the tournament fits its venues
//! - [`generate_scenarios`] proposes adjusted parameters
//! - [`apply_scenario`] derives a new tournament from a proposal

mod applier;
mod assigner;
mod capacity;
mod conflicts;
mod error;
mod feasibility;
mod pairing;
mod scenario;
mod schedule;
mod stats;
mod timegrid;

#[cfg(test)]
mod tests;

pub use applier::apply_scenario;
pub use assigner::{Assignment, assign_fixtures};
pub use capacity::{
    FormatShape, available_minutes_by_date, entry_minutes, estimate_match_count, field_count,
    matches_per_team, required_minutes, total_available_minutes,
};
pub use conflicts::{ConflictKind, ConflictReport, validate_calendar};
pub use error::CoreError;
pub use feasibility::{FeasibilityIssue, FeasibilityReport, IssueSeverity, check_feasibility};
pub use pairing::{Fixture, generate_fixtures};
pub use scenario::{
    BASE_MATCH_DURATION, STANDARD_DURATIONS, ScenarioChanges, ScenarioImpact, ScenarioRejection,
    ScenarioSet, TournamentScenario, generate_scenarios, nearest_standard_duration,
    placeholder_team_names, simulate_rest_time, simulate_venue_utilization, validate_scenario,
};
pub use schedule::{ScheduleOutcome, generate_schedule};
pub use stats::{ScheduleStats, compute_stats, field_key, round1, utilization};
pub use timegrid::{ScheduleSlot, build_time_grid, sort_chronologically};
