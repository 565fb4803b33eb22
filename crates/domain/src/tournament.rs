// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::settings::{DEFAULT_BREAK_MINUTES, FormatSettings, Vision};
use crate::types::{DailyAvailability, Match, Team, TournamentDuration, TournamentFormat, Venue};
use serde::{Deserialize, Serialize};

/// Team count assumed when neither a target nor a usable roster exists.
pub const DEFAULT_TEAM_COUNT: u32 = 16;

/// Time, venue and availability limits of a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    #[serde(default)]
    pub duration: TournamentDuration,
    #[serde(default)]
    pub venues: Vec<Venue>,
    /// One record per date and field.
    #[serde(default)]
    pub availability: Vec<DailyAvailability>,
}

/// The root aggregate describing a tournament.
///
/// Engine operations take a `&Tournament` and never mutate it; operations
/// that change configuration return a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub format: TournamentFormat,
    #[serde(default)]
    pub settings: FormatSettings,
    #[serde(default)]
    pub vision: Vision,
    #[serde(default)]
    pub constraints: Constraints,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub matches: Vec<Match>,
}

impl Tournament {
    /// Returns the regular match duration in minutes.
    #[must_use]
    pub const fn match_duration(&self) -> u32 {
        self.settings.match_duration.regular_time
    }

    /// Returns the break between matches, falling back to the default.
    #[must_use]
    pub fn break_time(&self) -> u32 {
        self.vision
            .preferences
            .break_time
            .unwrap_or(DEFAULT_BREAK_MINUTES)
    }

    /// Returns the team count used for capacity planning.
    ///
    /// The organiser's target wins; otherwise the registered roster is used
    /// when it can produce at least one pairing.
    #[must_use]
    pub fn planned_team_count(&self) -> u32 {
        if self.vision.target_team_count > 0 {
            return self.vision.target_team_count;
        }
        match u32::try_from(self.teams.len()) {
            Ok(count) if count >= 2 => count,
            _ => DEFAULT_TEAM_COUNT,
        }
    }

    /// Returns the total number of fields across all venues.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.constraints
            .venues
            .iter()
            .map(|venue| venue.fields.len())
            .sum()
    }

    /// Looks up a venue by id.
    #[must_use]
    pub fn venue(&self, venue_id: &str) -> Option<&Venue> {
        self.constraints.venues.iter().find(|v| v.id == venue_id)
    }
}
