// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scenario generation.
//!
//! A scenario is a proposed set of parameter changes (team count, match
//! duration, format, total duration) together with its simulated impact.
//! The set of proposals depends on the feasibility verdict:
//!
//! - Infeasible tournaments get three constrained scenarios that trade
//!   teams against match duration.
//! - Feasible tournaments get a recommended scenario shaped by the
//!   organiser's priorities plus up to five alternatives.
//!
//! Every proposal is simulated against the tournament's real capacity and
//! passed through the same gate. Only the recommended scenario survives a
//! failed gate; it carries the rejection as its `reason`.
//!
//! ## Gate
//!
//! Checked in this order; the first failure is reported.
//!
//! | Check          | Accepted range                |
//! |----------------|-------------------------------|
//! | Match duration | at least 15 minutes           |
//! | Team count     | 4 to 32                       |
//! | Fields         | ceil(teams / 2) <= fields x 6 |
//! | Rest time      | at least 5 minutes            |
//! | Utilization    | 20% to 100%                   |

use crate::capacity::{
    FormatShape, estimate_match_count, field_count, matches_per_team, required_minutes,
    total_available_minutes,
};
use crate::feasibility::{FeasibilityReport, check_feasibility};
use num_traits::ToPrimitive;
use pitchplan_domain::{DEFAULT_TEAM_COUNT, Priorities, Tournament, TournamentFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Match duration assumed when a scenario does not set one.
pub const BASE_MATCH_DURATION: u32 = 75;

/// Durations a scenario may propose, shortest first.
pub const STANDARD_DURATIONS: [u32; 10] = [15, 20, 25, 30, 35, 40, 45, 60, 75, 90];

const MIN_REST_MINUTES: i64 = 5;
const MIN_MATCH_DURATION: u32 = 15;
const MAX_MATCH_DURATION: u32 = 90;
const MIN_TEAMS: u32 = 4;
const MAX_TEAMS: u32 = 32;
const MIN_UTILIZATION: u32 = 20;
const MAX_UTILIZATION: u32 = 100;
const MATCHES_PER_FIELD: u32 = 6;

/// Three days of play, in minutes.
const BASE_TOTAL_DURATION: f64 = 4320.0;

/// Match slot assumed when estimating how many teams fit: shortest match
/// plus minimum rest.
const MIN_SLOT_MINUTES: u32 = MIN_MATCH_DURATION + 5;

/// Parameter changes proposed by a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<TournamentFormat>,
    /// Tournament length in minutes from the start date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<u32>,
    /// Placeholder team names.
    #[serde(default)]
    pub teams: Vec<String>,
}

/// Simulated effect of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioImpact {
    /// Required minutes as a whole percentage of available minutes.
    pub venue_utilization: u32,
    /// Average rest per team between matches, in minutes. Negative when the
    /// matches alone exceed the available time.
    pub average_rest_time: i64,
    pub feasible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A proposed alternative configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentScenario {
    pub id: String,
    pub label: String,
    pub is_recommended: bool,
    pub changes: ScenarioChanges,
    pub impact: ScenarioImpact,
}

impl TournamentScenario {
    fn proposal(id: &str, label: &str, is_recommended: bool, changes: ScenarioChanges) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            is_recommended,
            changes,
            impact: ScenarioImpact::default(),
        }
    }
}

/// Scenarios offered for a tournament, with the verdict that shaped them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSet {
    pub scenarios: Vec<TournamentScenario>,
    pub feasibility: FeasibilityReport,
}

impl ScenarioSet {
    /// Looks up a scenario by id.
    #[must_use]
    pub fn find(&self, scenario_id: &str) -> Option<&TournamentScenario> {
        self.scenarios.iter().find(|s| s.id == scenario_id)
    }
}

/// Why a scenario failed the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioRejection {
    /// Average rest is below the hard minimum.
    RestTooShort { minutes: i64 },
    /// More minutes are needed than available.
    UtilizationTooHigh { percent: u32 },
    /// The venues would stand mostly idle.
    UtilizationTooLow { percent: u32 },
    /// Matches are shorter than allowed.
    MatchTooShort { minutes: u32 },
    TooFewTeams { count: u32 },
    TooManyTeams { count: u32 },
    /// More concurrent pairings than the fields can host.
    NotEnoughFields { needed: u32, available: u32 },
}

impl std::fmt::Display for ScenarioRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RestTooShort { minutes } => write!(
                f,
                "Rest time of {minutes} minutes is below the absolute minimum of {MIN_REST_MINUTES}"
            ),
            Self::UtilizationTooHigh { percent } => {
                write!(f, "Venue usage of {percent}% exceeds capacity")
            }
            Self::UtilizationTooLow { percent } => {
                write!(
                    f,
                    "Venue usage of {percent}% is below the minimum of {MIN_UTILIZATION}%"
                )
            }
            Self::MatchTooShort { minutes } => write!(
                f,
                "Match duration of {minutes} minutes is shorter than {MIN_MATCH_DURATION}"
            ),
            Self::TooFewTeams { count } => {
                write!(f, "{count} teams is below the minimum of {MIN_TEAMS}")
            }
            Self::TooManyTeams { count } => {
                write!(f, "{count} teams is above the maximum of {MAX_TEAMS}")
            }
            Self::NotEnoughFields { needed, available } => write!(
                f,
                "Not enough fields: {needed} concurrent matches need more than {available} fields"
            ),
        }
    }
}

impl std::error::Error for ScenarioRejection {}

/// Returns placeholder team names `Team 1` to `Team n`.
#[must_use]
pub fn placeholder_team_names(count: u32) -> Vec<String> {
    (1..=count).map(|i| format!("Team {i}")).collect()
}

/// Returns the standard duration closest to `target`.
///
/// On an exact tie the shorter duration wins.
#[must_use]
pub fn nearest_standard_duration(target: f64) -> u32 {
    let mut best: u32 = STANDARD_DURATIONS[0];
    for candidate in STANDARD_DURATIONS {
        if (f64::from(candidate) - target).abs() < (f64::from(best) - target).abs() {
            best = candidate;
        }
    }
    best.min(MAX_MATCH_DURATION)
}

/// The shape a tournament would have after applying `changes`.
fn shape_after(tournament: &Tournament, changes: &ScenarioChanges) -> FormatShape {
    changes
        .format
        .map_or_else(|| FormatShape::of(tournament), FormatShape::fresh)
}

fn scenario_team_count(changes: &ScenarioChanges) -> u32 {
    changes.team_count.unwrap_or(DEFAULT_TEAM_COUNT)
}

fn scenario_match_duration(changes: &ScenarioChanges) -> u32 {
    changes.match_duration.unwrap_or(BASE_MATCH_DURATION)
}

/// Simulates the venue utilization of a scenario.
///
/// # Returns
///
/// Required minutes as a rounded percentage of available minutes, or 0
/// when the tournament has no available minutes.
#[must_use]
pub fn simulate_venue_utilization(tournament: &Tournament, changes: &ScenarioChanges) -> u32 {
    let available: u32 = total_available_minutes(&tournament.constraints.availability);
    if available == 0 {
        return 0;
    }
    let required: u32 = required_minutes(
        shape_after(tournament, changes),
        scenario_team_count(changes),
        scenario_match_duration(changes),
    );
    (f64::from(required) * 100.0 / f64::from(available))
        .round()
        .to_u32()
        .unwrap_or(u32::MAX)
}

/// Simulates the average rest per team of a scenario.
///
/// Matches run `min(fields, teams / 2)` at a time. The time left after
/// all rounds are played is shared out over every team's matches.
///
/// # Returns
///
/// The floored average in minutes, or 0 when no match can run concurrently
/// or no team plays.
#[must_use]
pub fn simulate_rest_time(tournament: &Tournament, changes: &ScenarioChanges) -> i64 {
    let shape: FormatShape = shape_after(tournament, changes);
    let teams: u32 = scenario_team_count(changes);
    let duration: u32 = scenario_match_duration(changes);
    let available: u32 = total_available_minutes(&tournament.constraints.availability);
    let fields: u32 = field_count(&tournament.constraints.venues);

    let concurrent: u32 = fields.min(teams / 2);
    let per_team: u32 = matches_per_team(shape.format, teams);
    let divisor: i64 = i64::from(teams) * i64::from(per_team);
    if concurrent == 0 || divisor == 0 {
        return 0;
    }

    let matches: u32 = estimate_match_count(shape, teams);
    let actual_time: i64 =
        i64::from(matches.div_ceil(concurrent)).saturating_mul(i64::from(duration));
    let spare: i64 = i64::from(available) - actual_time;

    spare
        .saturating_mul(i64::from(concurrent))
        .div_euclid(divisor)
}

/// Runs a scenario through the gate.
///
/// Rest time and utilization are re-simulated from the tournament rather
/// than read from `scenario.impact`.
///
/// # Errors
///
/// Returns the first failed check, in the order listed in the module docs.
pub fn validate_scenario(
    tournament: &Tournament,
    scenario: &TournamentScenario,
) -> Result<(), ScenarioRejection> {
    let changes: &ScenarioChanges = &scenario.changes;
    let duration: u32 = scenario_match_duration(changes);
    let teams: u32 = scenario_team_count(changes);
    let fields: u32 = field_count(&tournament.constraints.venues);

    if duration < MIN_MATCH_DURATION {
        return Err(ScenarioRejection::MatchTooShort { minutes: duration });
    }
    if teams < MIN_TEAMS {
        return Err(ScenarioRejection::TooFewTeams { count: teams });
    }
    if teams > MAX_TEAMS {
        return Err(ScenarioRejection::TooManyTeams { count: teams });
    }
    // Rule: every concurrent pairing needs a field within six rounds
    let needed: u32 = teams.div_ceil(2);
    if needed > fields.saturating_mul(MATCHES_PER_FIELD) {
        return Err(ScenarioRejection::NotEnoughFields {
            needed,
            available: fields,
        });
    }

    let rest: i64 = simulate_rest_time(tournament, changes);
    // Rule: teams need a minimum rest between matches
    if rest < MIN_REST_MINUTES {
        return Err(ScenarioRejection::RestTooShort { minutes: rest });
    }
    let utilization: u32 = simulate_venue_utilization(tournament, changes);
    if utilization > MAX_UTILIZATION {
        return Err(ScenarioRejection::UtilizationTooHigh {
            percent: utilization,
        });
    }
    if utilization < MIN_UTILIZATION {
        return Err(ScenarioRejection::UtilizationTooLow {
            percent: utilization,
        });
    }

    Ok(())
}

/// Fills in a scenario's impact and returns the gate result.
fn simulate(
    tournament: &Tournament,
    scenario: &mut TournamentScenario,
) -> Result<(), ScenarioRejection> {
    let verdict: Result<(), ScenarioRejection> = validate_scenario(tournament, scenario);
    scenario.impact = ScenarioImpact {
        venue_utilization: simulate_venue_utilization(tournament, &scenario.changes),
        average_rest_time: simulate_rest_time(tournament, &scenario.changes),
        feasible: verdict.is_ok(),
        reason: verdict.err().as_ref().map(ToString::to_string),
    };
    verdict
}

/// Simulates proposals and keeps only those that pass the gate.
fn keep_valid(
    tournament: &Tournament,
    proposals: Vec<TournamentScenario>,
) -> Vec<TournamentScenario> {
    let mut kept: Vec<TournamentScenario> = Vec::new();
    for mut scenario in proposals {
        match simulate(tournament, &mut scenario) {
            Ok(()) => kept.push(scenario),
            Err(rejection) => {
                debug!(
                    scenario = %scenario.id,
                    label = %scenario.label,
                    reason = %rejection,
                    "Discarding scenario"
                );
            }
        }
    }
    kept
}

/// Placeholder names for a proposed roster.
///
/// Counts above the gate's maximum are rejected anyway, so they get no names.
fn proposed_team_names(team_count: u32) -> Vec<String> {
    if team_count > MAX_TEAMS {
        return Vec::new();
    }
    placeholder_team_names(team_count)
}

fn changes_for(team_count: u32, match_duration: u32) -> ScenarioChanges {
    ScenarioChanges {
        team_count: Some(team_count),
        match_duration: Some(match_duration),
        format: None,
        total_duration: None,
        teams: proposed_team_names(team_count),
    }
}

/// Largest team count the available time could plausibly host.
fn max_possible_teams(available: u32, fields: u32) -> u32 {
    let slots: u32 = available / MIN_SLOT_MINUTES;
    let per_field: u32 = slots.saturating_mul(2).isqrt();
    per_field.saturating_mul(fields).min(MAX_TEAMS).max(MIN_TEAMS)
}

/// Longest match duration that fits `matches` matches with minimum rest.
fn max_possible_duration(available: u32, matches: u32) -> u32 {
    if matches == 0 {
        return MAX_MATCH_DURATION;
    }
    let rest: i64 = i64::from(matches) * MIN_REST_MINUTES;
    let duration: i64 = (i64::from(available) - rest).div_euclid(i64::from(matches));
    let clamped: i64 = duration.clamp(i64::from(MIN_MATCH_DURATION), i64::from(MAX_MATCH_DURATION));
    clamped.to_u32().unwrap_or(MIN_MATCH_DURATION)
}

fn constrained_scenarios(tournament: &Tournament) -> Vec<TournamentScenario> {
    let available: u32 = total_available_minutes(&tournament.constraints.availability);
    let fields: u32 = field_count(&tournament.constraints.venues).max(1);
    let current_teams: u32 = tournament.planned_team_count();
    let current_duration: u32 = match tournament.match_duration() {
        0 => BASE_MATCH_DURATION,
        minutes => minutes,
    };

    let max_teams: u32 = max_possible_teams(available, fields);
    let current_matches: u32 = estimate_match_count(FormatShape::of(tournament), current_teams);
    let max_duration: u32 = max_possible_duration(available, current_matches);

    debug!(max_teams, max_duration, "Derived constrained scenario bounds");

    let balanced_teams: u32 = current_teams.midpoint(max_teams);
    let balanced_duration: u32 = current_duration.midpoint(max_duration);

    let proposals: Vec<TournamentScenario> = vec![
        TournamentScenario::proposal(
            "constrained-1",
            "Reduced Teams",
            true,
            changes_for(max_teams, current_duration),
        ),
        TournamentScenario::proposal(
            "constrained-2",
            "Shorter Matches",
            false,
            changes_for(current_teams, max_duration),
        ),
        TournamentScenario::proposal(
            "constrained-3",
            "Balanced Adjustment",
            false,
            changes_for(balanced_teams, balanced_duration),
        ),
    ];

    keep_valid(tournament, proposals)
}

const fn priority_weight(flagged: bool) -> f64 {
    if flagged { 1.4 } else { 0.8 }
}

fn recommended_scenario(tournament: &Tournament) -> TournamentScenario {
    let priorities: Priorities = tournament.vision.priorities;
    let rest_weight: f64 = priority_weight(priorities.rest_time);
    let venue_weight: f64 = priority_weight(priorities.venue_efficiency);
    let team_count: u32 = tournament.planned_team_count();

    let weighted: f64 = (f64::from(BASE_MATCH_DURATION) * rest_weight).round();
    let rounded: f64 = (weighted / 5.0).round() * 5.0;
    let match_duration: u32 = rounded
        .to_u32()
        .unwrap_or(MAX_MATCH_DURATION)
        .min(MAX_MATCH_DURATION);
    let total_duration: u32 = (BASE_TOTAL_DURATION * venue_weight)
        .round()
        .to_u32()
        .unwrap_or(0);

    let mut scenario: TournamentScenario = TournamentScenario::proposal(
        "recommended",
        "Recommended Scenario",
        true,
        ScenarioChanges {
            team_count: Some(team_count),
            match_duration: Some(match_duration),
            format: Some(tournament.format),
            total_duration: Some(total_duration),
            teams: proposed_team_names(team_count),
        },
    );

    if let Err(rejection) = simulate(tournament, &mut scenario) {
        debug!(reason = %rejection, "Recommended scenario failed validation");
    }

    scenario
}

/// Builds the alternatives offered next to the recommended scenario.
///
/// Only the recommended scenario is flagged `is_recommended`, so the
/// "Balanced Schedule" alternative is not, even though it keeps the
/// tournament's current shape.
fn alternative_scenarios(tournament: &Tournament) -> Vec<TournamentScenario> {
    let priorities: Priorities = tournament.vision.priorities;
    let current_teams: u32 = tournament.planned_team_count();
    let available: u32 = total_available_minutes(&tournament.constraints.availability);
    let min_teams: u32 = current_teams.div_ceil(2).max(MIN_TEAMS);
    let reduced_teams: u32 = current_teams.saturating_sub(4).max(min_teams);
    let base: f64 = f64::from(BASE_MATCH_DURATION);

    let with_total = |mut changes: ScenarioChanges, total: u32| {
        changes.total_duration = Some(total);
        changes
    };

    let mut proposals: Vec<TournamentScenario> = vec![TournamentScenario::proposal(
        "alternative-1",
        "Balanced Schedule",
        false,
        with_total(changes_for(current_teams, BASE_MATCH_DURATION), available),
    )];

    if priorities.venue_efficiency {
        proposals.push(TournamentScenario::proposal(
            "alternative-2",
            "Maximum Venue Efficiency",
            false,
            with_total(
                changes_for(current_teams, nearest_standard_duration(base * 0.7)),
                available.saturating_mul(95) / 100,
            ),
        ));
        proposals.push(TournamentScenario::proposal(
            "alternative-3",
            "Compact Schedule",
            false,
            with_total(
                changes_for(reduced_teams, nearest_standard_duration(base * 0.8)),
                available.saturating_mul(4) / 5,
            ),
        ));
    }

    if priorities.rest_time {
        proposals.push(TournamentScenario::proposal(
            "alternative-4",
            "Maximum Rest Periods",
            false,
            with_total(
                changes_for(reduced_teams, nearest_standard_duration(base * 0.9)),
                available,
            ),
        ));
    }

    proposals.push(TournamentScenario::proposal(
        "alternative-5",
        "Minimal Schedule",
        false,
        with_total(
            changes_for((current_teams / 2).max(MIN_TEAMS), MIN_MATCH_DURATION),
            available / 2,
        ),
    ));

    keep_valid(tournament, proposals)
}

/// Proposes scenarios for a tournament.
///
/// # Arguments
///
/// * `tournament` - The tournament to propose changes for
///
/// # Returns
///
/// The proposals and the feasibility verdict they were derived from.
/// Proposals that fail the gate are dropped, except the recommended
/// scenario of a feasible tournament.
#[must_use]
pub fn generate_scenarios(tournament: &Tournament) -> ScenarioSet {
    let feasibility: FeasibilityReport = check_feasibility(tournament);

    let scenarios: Vec<TournamentScenario> = if feasibility.feasible {
        let mut scenarios: Vec<TournamentScenario> = vec![recommended_scenario(tournament)];
        scenarios.extend(alternative_scenarios(tournament));
        scenarios
    } else {
        constrained_scenarios(tournament)
    };

    info!(
        tournament = %tournament.id,
        feasible = feasibility.feasible,
        scenarios = scenarios.len(),
        "Generated scenarios"
    );

    ScenarioSet {
        scenarios,
        feasibility,
    }
}
