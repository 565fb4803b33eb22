// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conflict reports and the post-assignment calendar validator.
//!
//! The slot assigner already refuses to double-book a field or a team. The
//! validator re-checks the finished calendar independently, so a defect in
//! assignment shows up as a reported conflict instead of a silent overlap.
//! Conflicts are reported, never repaired.

use crate::timegrid::minute_of_day;
use pitchplan_domain::Match;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::{Date, Time};
use tracing::warn;

/// The kind of scheduling conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictKind {
    /// Matches overlap on the same venue field.
    VenueOverlap,
    /// A team plays in two overlapping matches.
    TeamOverlap,
    /// A team plays more than once on the same date.
    RestTime,
    /// A fixture could not be placed in any slot.
    PreferredTime,
}

impl ConflictKind {
    /// Converts this kind to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VenueOverlap => "VENUE_OVERLAP",
            Self::TeamOverlap => "TEAM_OVERLAP",
            Self::RestTime => "REST_TIME",
            Self::PreferredTime => "PREFERRED_TIME",
        }
    }
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A conflict found while building or validating a calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// The conflict kind.
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    /// Human-readable description.
    pub description: String,
    /// The implicated matches; empty for unplaced fixtures.
    pub matches: Vec<Match>,
}

impl ConflictReport {
    /// Creates a new `ConflictReport`.
    #[must_use]
    pub const fn new(kind: ConflictKind, description: String, matches: Vec<Match>) -> Self {
        Self {
            kind,
            description,
            matches,
        }
    }
}

/// Formats a clock time as `HH:MM`.
pub(crate) fn hhmm(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Minutes since midnight of the match kick-off and final whistle.
fn window(m: &Match, match_duration: u32) -> (u32, u32) {
    let start: u32 = minute_of_day(m.start_time);
    (start, start.saturating_add(match_duration))
}

fn windows_overlap(a: &Match, b: &Match, match_duration: u32) -> bool {
    let (a_start, a_end) = window(a, match_duration);
    let (b_start, b_end) = window(b, match_duration);
    a_start < b_end && b_start < a_end
}

/// Re-scans a calendar for overlaps and same-day repeats.
///
/// # Arguments
///
/// * `calendar` - Matches grouped by date
/// * `match_duration` - Playing time used for each match window
///
/// # Returns
///
/// Conflicts in date order:
/// - one `VENUE_OVERLAP` per group of mutually overlapping matches on a field
/// - one `TEAM_OVERLAP` per pair of overlapping matches sharing a team
/// - one `REST_TIME` per team and date where the team plays again after a
///   finished match
#[must_use]
pub fn validate_calendar(
    calendar: &BTreeMap<Date, Vec<Match>>,
    match_duration: u32,
) -> Vec<ConflictReport> {
    let mut conflicts: Vec<ConflictReport> = Vec::new();

    for (date, matches) in calendar {
        conflicts.extend(venue_overlaps(*date, matches, match_duration));
        conflicts.extend(team_overlaps(*date, matches, match_duration));
        conflicts.extend(rest_violations(*date, matches, match_duration));
    }

    if !conflicts.is_empty() {
        warn!(conflicts = conflicts.len(), "Calendar validation found conflicts");
    }

    conflicts
}

fn venue_overlaps(date: Date, matches: &[Match], match_duration: u32) -> Vec<ConflictReport> {
    let mut by_field: BTreeMap<(&str, &str), Vec<&Match>> = BTreeMap::new();
    for m in matches {
        by_field
            .entry((m.venue_id.as_str(), m.field_id.as_str()))
            .or_default()
            .push(m);
    }

    let mut conflicts: Vec<ConflictReport> = Vec::new();

    for ((venue_id, field_id), mut on_field) in by_field {
        on_field.sort_by_key(|m| m.start_time);

        // Sweep: a group grows while the next kick-off is before the group's
        // latest final whistle.
        let mut group: Vec<&Match> = Vec::new();
        let mut group_end: u32 = 0;

        for m in on_field {
            let (start, end) = window(m, match_duration);
            if !group.is_empty() && start >= group_end {
                if group.len() > 1 {
                    conflicts.push(venue_conflict(date, venue_id, field_id, &group));
                }
                group.clear();
            }
            if group.is_empty() {
                group_end = end;
            } else {
                group_end = group_end.max(end);
            }
            group.push(m);
        }

        if group.len() > 1 {
            conflicts.push(venue_conflict(date, venue_id, field_id, &group));
        }
    }

    conflicts
}

fn venue_conflict(date: Date, venue_id: &str, field_id: &str, group: &[&Match]) -> ConflictReport {
    let first: Time = group.first().map_or(Time::MIDNIGHT, |m| m.start_time);
    ConflictReport::new(
        ConflictKind::VenueOverlap,
        format!(
            "{} matches overlap on field '{field_id}' at venue '{venue_id}' on {date} from {}",
            group.len(),
            hhmm(first)
        ),
        group.iter().copied().cloned().collect(),
    )
}

fn team_overlaps(date: Date, matches: &[Match], match_duration: u32) -> Vec<ConflictReport> {
    let mut conflicts: Vec<ConflictReport> = Vec::new();

    for (i, a) in matches.iter().enumerate() {
        for b in &matches[i + 1..] {
            if !a.shares_team_with(b) || !windows_overlap(a, b, match_duration) {
                continue;
            }
            let team: &str = if b.involves(&a.home_team.id) {
                &a.home_team.name
            } else {
                &a.away_team.name
            };
            conflicts.push(ConflictReport::new(
                ConflictKind::TeamOverlap,
                format!(
                    "{team} is scheduled in overlapping matches at {} and {} on {date}",
                    hhmm(a.start_time),
                    hhmm(b.start_time)
                ),
                vec![a.clone(), b.clone()],
            ));
        }
    }

    conflicts
}

fn rest_violations(date: Date, matches: &[Match], match_duration: u32) -> Vec<ConflictReport> {
    let mut by_team: BTreeMap<&str, (&str, Vec<&Match>)> = BTreeMap::new();
    for m in matches {
        for team in [&m.home_team, &m.away_team] {
            by_team
                .entry(team.id.as_str())
                .or_insert_with(|| (team.name.as_str(), Vec::new()))
                .1
                .push(m);
        }
    }

    let mut conflicts: Vec<ConflictReport> = Vec::new();

    for (name, mut team_matches) in by_team.into_values() {
        if team_matches.len() < 2 {
            continue;
        }
        team_matches.sort_by_key(|m| m.start_time);

        // Overlapping pairs are TEAM_OVERLAP; this only covers playing again
        // after a finished match.
        let plays_again: bool = team_matches
            .windows(2)
            .any(|pair| !windows_overlap(pair[0], pair[1], match_duration));
        if !plays_again {
            continue;
        }

        conflicts.push(ConflictReport::new(
            ConflictKind::RestTime,
            format!(
                "{name} plays {} matches on {date}; at most one match per day is allowed",
                team_matches.len()
            ),
            team_matches.into_iter().cloned().collect(),
        ));
    }

    conflicts
}
