// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Feasibility checking.
//!
//! Compares the playing time a tournament needs with the time its venues
//! offer and explains every shortfall. The checker always produces a
//! verdict; a tournament is feasible when no issue is an error.

use crate::capacity::{FormatShape, estimate_match_count, field_count, total_available_minutes};
use pitchplan_domain::{Tournament, TournamentDuration};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Teams served by one field before field availability is flagged.
const TEAMS_PER_FIELD_LIMIT: u32 = 6;

/// Teams per field in the recommended venue setup.
const TEAMS_PER_FIELD_IDEAL: u32 = 4;

/// Shortest match duration ever suggested, in minutes.
const MIN_SUGGESTED_DURATION: u32 = 15;

/// How serious a feasibility issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueSeverity {
    /// Blocks the tournament from being feasible.
    Error,
    /// Advisory only.
    Warning,
}

impl IssueSeverity {
    /// Converts this severity to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
        }
    }
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single finding with a suggested remedy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeasibilityIssue {
    /// Whether the finding blocks the tournament.
    #[serde(rename = "type")]
    pub severity: IssueSeverity,
    /// What is wrong, in plain words.
    pub message: String,
    /// Remedies the organiser can apply.
    pub suggestion: String,
}

impl FeasibilityIssue {
    fn error(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    fn warning(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// The verdict and the quantities it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityReport {
    /// `true` when no issue is an error.
    pub feasible: bool,
    pub issues: Vec<FeasibilityIssue>,
    pub total_available_minutes: u32,
    pub team_count: u32,
    pub total_matches: u32,
    /// Playing minutes without any rest allowance.
    pub required_minutes: u32,
    /// Playing minutes plus a 20% rest allowance, rounded up.
    pub required_minutes_with_rest: u32,
    pub available_fields: u32,
}

impl FeasibilityReport {
    /// Returns the error issues.
    pub fn errors(&self) -> impl Iterator<Item = &FeasibilityIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
    }

    /// Returns the warning issues.
    pub fn warnings(&self) -> impl Iterator<Item = &FeasibilityIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
    }
}

/// Checks whether a tournament fits its time and venue capacity.
///
/// # Arguments
///
/// * `tournament` - The tournament to check
///
/// # Returns
///
/// A report listing every issue found, in a fixed order: dates, venues,
/// time slots, total time, rest time, fields.
#[must_use]
pub fn check_feasibility(tournament: &Tournament) -> FeasibilityReport {
    let total_available: u32 = total_available_minutes(&tournament.constraints.availability);
    let team_count: u32 = tournament.planned_team_count();
    let match_duration: u32 = tournament.match_duration();
    let total_matches: u32 = estimate_match_count(FormatShape::of(tournament), team_count);
    let required: u32 = total_matches.saturating_mul(match_duration);
    // Rule: rest adds a fifth on top of playing time
    let required_with_rest: u32 =
        u32::try_from((u64::from(required) * 6).div_ceil(5)).unwrap_or(u32::MAX);
    let available_fields: u32 = field_count(&tournament.constraints.venues);

    let mut issues: Vec<FeasibilityIssue> = Vec::new();

    let duration: &TournamentDuration = &tournament.constraints.duration;
    if duration.start_date.is_none() || duration.end_date.is_none() {
        issues.push(FeasibilityIssue::error(
            "Tournament dates have not been set.",
            "Please set the start and end dates for your tournament.",
        ));
    }

    if tournament.constraints.venues.is_empty() {
        issues.push(FeasibilityIssue::error(
            "No venues have been added.",
            "Add at least one venue with fields to host matches.",
        ));
    }

    if total_available == 0 {
        issues.push(FeasibilityIssue::error(
            "No venue time slots have been added.",
            "Add available time slots for your venues. Consider typical match times like 9 AM to 5 PM.",
        ));
    }

    if required > total_available {
        let hours_needed: u32 = required.div_ceil(60);
        let hours_available: u32 = total_available / 60;
        let scaled: u64 =
            u64::from(match_duration) * u64::from(total_available) / u64::from(required);
        let suggested_duration: u32 = u32::try_from(scaled)
            .unwrap_or(u32::MAX)
            .max(MIN_SUGGESTED_DURATION);

        issues.push(FeasibilityIssue::error(
            format!(
                "Not enough time available. Need {hours_needed} hours but only have {hours_available} hours."
            ),
            format!(
                "Consider one or more of these options:\n\
                 1. Add more time slots or days\n\
                 2. Reduce match duration (suggested: {suggested_duration} minutes)\n\
                 3. Reduce number of teams (current: {team_count})\n\
                 4. Add more venues/fields (current: {available_fields})"
            ),
        ));
    }

    if required_with_rest > total_available {
        let suggested_teams: u32 = team_count.saturating_mul(4) / 5;
        issues.push(FeasibilityIssue::warning(
            "Teams might not get enough rest between matches.",
            format!(
                "Consider:\n\
                 1. Adding more time slots\n\
                 2. Reducing to {suggested_teams} teams\n\
                 3. Adding more venues to allow concurrent matches"
            ),
        ));
    }

    let ideal_fields: u32 = team_count.div_ceil(TEAMS_PER_FIELD_IDEAL);
    if available_fields == 0 {
        issues.push(FeasibilityIssue::error(
            "No fields available.",
            format!(
                "Add at least one venue with fields. For {team_count} teams, we recommend at least {ideal_fields} fields."
            ),
        ));
    } else if available_fields < team_count.div_ceil(TEAMS_PER_FIELD_LIMIT) {
        issues.push(FeasibilityIssue::warning(
            "Limited field availability might cause scheduling constraints.",
            format!(
                "Consider adding more fields. For {team_count} teams, {ideal_fields} fields would be ideal. Currently have {available_fields}."
            ),
        ));
    }

    let feasible: bool = !issues
        .iter()
        .any(|issue| issue.severity == IssueSeverity::Error);

    for issue in &issues {
        debug!(severity = %issue.severity, message = %issue.message, "Feasibility issue");
    }
    info!(
        tournament = %tournament.id,
        feasible,
        issues = issues.len(),
        required_minutes = required,
        available_minutes = total_available,
        "Checked feasibility"
    );

    FeasibilityReport {
        feasible,
        issues,
        total_available_minutes: total_available,
        team_count,
        total_matches,
        required_minutes: required,
        required_minutes_with_rest: required_with_rest,
        available_fields,
    }
}
