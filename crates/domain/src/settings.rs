// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Format-specific settings and organiser preferences.
//!
//! Every settings block has a `Default` that represents the "fresh" values
//! a tournament receives when its format is switched.

use crate::types::TimeSlot;
use serde::{Deserialize, Serialize};

/// Break between consecutive matches on a field when no preference is set.
pub const DEFAULT_BREAK_MINUTES: u32 = 10;

/// How many times each pair of league teams meets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundRobinType {
    #[default]
    Single,
    Double,
}

/// Whether a knockout tie is one match or home-and-away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Legs {
    #[default]
    Single,
    Double,
}

/// League scoring and pairing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSettings {
    pub points_for_win: u8,
    pub points_for_draw: u8,
    pub points_for_loss: u8,
    pub use_head_to_head: bool,
    pub use_goal_difference: bool,
    pub round_robin_type: RoundRobinType,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self {
            points_for_win: 3,
            points_for_draw: 1,
            points_for_loss: 0,
            use_head_to_head: true,
            use_goal_difference: true,
            round_robin_type: RoundRobinType::Double,
        }
    }
}

/// Knockout bracket settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnockoutSettings {
    pub third_place: bool,
    pub away_goals: bool,
    pub replays: bool,
    pub legs: Legs,
}

impl Default for KnockoutSettings {
    fn default() -> Self {
        Self {
            third_place: true,
            away_goals: false,
            replays: false,
            legs: Legs::Single,
        }
    }
}

/// Group stage settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSettings {
    pub number_of_groups: u32,
    pub teams_per_group: u32,
    pub qualifiers_per_group: u32,
}

impl Default for GroupSettings {
    fn default() -> Self {
        Self {
            number_of_groups: 4,
            teams_per_group: 4,
            qualifiers_per_group: 2,
        }
    }
}

/// Playing time of a single match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDuration {
    /// Regular playing time in minutes.
    pub regular_time: u32,
    /// Extra time in minutes, if played.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_time: Option<u32>,
    /// Whether ties are settled by penalties.
    #[serde(default)]
    pub penalties: bool,
}

impl Default for MatchDuration {
    fn default() -> Self {
        Self {
            regular_time: 90,
            extra_time: None,
            penalties: false,
        }
    }
}

/// All format settings of a tournament.
///
/// Only the block matching the tournament format is expected to be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormatSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league: Option<LeagueSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knockout: Option<KnockoutSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupSettings>,
    #[serde(default)]
    pub match_duration: MatchDuration,
}

impl FormatSettings {
    /// Returns whether the league is configured as a double round robin.
    #[must_use]
    pub fn is_double_round_robin(&self) -> bool {
        self.league
            .as_ref()
            .is_some_and(|l| l.round_robin_type == RoundRobinType::Double)
    }

    /// Returns whether knockout ties are played over two legs.
    #[must_use]
    pub fn is_two_legged(&self) -> bool {
        self.knockout
            .as_ref()
            .is_some_and(|k| k.legs == Legs::Double)
    }
}

/// What the organiser wants to optimise for.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Priorities {
    #[serde(default)]
    pub venue_efficiency: bool,
    #[serde(default)]
    pub match_balance: bool,
    #[serde(default)]
    pub travel_distance: bool,
    #[serde(default)]
    pub rest_time: bool,
}

/// Scheduling preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub preferred_match_days: Vec<String>,
    #[serde(default)]
    pub preferred_match_times: Vec<TimeSlot>,
    #[serde(default)]
    pub avoid_back_to_back: bool,
    /// Minutes between consecutive matches on a field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_time: Option<u32>,
}

/// The organiser's goals for the tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Vision {
    /// Number of teams the organiser is planning for.
    #[serde(default)]
    pub target_team_count: u32,
    #[serde(default)]
    pub priorities: Priorities,
    #[serde(default)]
    pub preferences: Preferences,
}
