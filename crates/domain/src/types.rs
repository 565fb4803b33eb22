// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, PrimitiveDateTime, Time};

time::serde::format_description!(calendar_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(clock_time, Time, "[hour]:[minute]");
time::serde::format_description!(
    date_time,
    PrimitiveDateTime,
    "[year]-[month]-[day]T[hour]:[minute]"
);

/// The competition format of a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentFormat {
    /// Every team plays every other team.
    #[default]
    League,
    /// Single elimination bracket.
    Knockout,
    /// Group stage followed by a knockout bracket.
    GroupKnockout,
}

impl TournamentFormat {
    /// Converts this format to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::League => "LEAGUE",
            Self::Knockout => "KNOCKOUT",
            Self::GroupKnockout => "GROUP_KNOCKOUT",
        }
    }
}

impl FromStr for TournamentFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LEAGUE" => Ok(Self::League),
            "KNOCKOUT" => Ok(Self::Knockout),
            "GROUP_KNOCKOUT" => Ok(Self::GroupKnockout),
            _ => Err(DomainError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registration status of a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamStatus {
    #[default]
    Confirmed,
    Pending,
    Withdrawn,
}

/// Lifecycle status of a scheduled match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

/// A clock window within a single day.
///
/// Windows are half-open: a match ending exactly at `end` fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Window start (`HH:MM`).
    #[serde(with = "clock_time")]
    pub start: Time,
    /// Window end (`HH:MM`).
    #[serde(with = "clock_time")]
    pub end: Time,
}

impl TimeSlot {
    /// Creates a new `TimeSlot`.
    ///
    /// # Arguments
    ///
    /// * `start` - The window start
    /// * `end` - The window end
    ///
    /// # Errors
    ///
    /// Returns an error if `end` is not strictly after `start`.
    pub fn new(start: Time, end: Time) -> Result<Self, DomainError> {
        if end <= start {
            return Err(DomainError::InvalidTimeSlot { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the length of the window in whole minutes.
    ///
    /// A window whose end is not after its start has length zero.
    #[must_use]
    pub fn minutes(&self) -> u32 {
        let minutes: i64 = (self.end - self.start).whole_minutes();
        u32::try_from(minutes).unwrap_or(0)
    }

    /// Returns whether this window overlaps `other`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A playing surface within a venue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    /// Field identifier, unique within its venue.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Field {
    /// Creates a new `Field`.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// A venue and the fields it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Venue identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Venue {
    /// Creates a new `Venue`.
    #[must_use]
    pub fn new(id: &str, name: &str, fields: Vec<Field>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            fields,
        }
    }

    /// Looks up one of this venue's fields by id.
    #[must_use]
    pub fn field(&self, field_id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == field_id)
    }
}

/// Time availability of one field on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAvailability {
    /// The calendar date (`YYYY-MM-DD`).
    #[serde(with = "calendar_date")]
    pub date: Date,
    /// The venue this record belongs to.
    pub venue_id: String,
    /// The field this record belongs to.
    pub field_id: String,
    /// Ordered, non-overlapping windows.
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
    /// Whether matches may be played on this date.
    pub is_match_day: bool,
}

/// A participating team.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Team identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Primary kit colour (hex).
    pub primary_color: String,
    /// Secondary kit colour (hex).
    pub secondary_color: String,
    /// Registration status.
    #[serde(default)]
    pub status: TeamStatus,
}

impl Team {
    /// Creates a confirmed team with default black/white colours.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            primary_color: String::from("#000000"),
            secondary_color: String::from("#FFFFFF"),
            status: TeamStatus::Confirmed,
        }
    }
}

/// A match placed on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Match identifier.
    pub id: String,
    /// The home team.
    pub home_team: Team,
    /// The away team.
    pub away_team: Team,
    /// The match date.
    #[serde(with = "calendar_date")]
    pub date: Date,
    /// Kick-off time.
    #[serde(with = "clock_time")]
    pub start_time: Time,
    /// The hosting venue.
    pub venue_id: String,
    /// The field within the venue.
    pub field_id: String,
    /// Competition round (1-based).
    pub round: u32,
    /// Leg number (1 or 2) for two-legged knockout ties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leg: Option<u8>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: MatchStatus,
}

impl Match {
    /// Returns whether `team_id` plays in this match.
    #[must_use]
    pub fn involves(&self, team_id: &str) -> bool {
        self.home_team.id == team_id || self.away_team.id == team_id
    }

    /// Returns whether this match shares a team with `other`.
    #[must_use]
    pub fn shares_team_with(&self, other: &Self) -> bool {
        other.involves(&self.home_team.id) || other.involves(&self.away_team.id)
    }

    /// Returns whether both matches are on the same date and venue field.
    #[must_use]
    pub fn shares_field_with(&self, other: &Self) -> bool {
        self.date == other.date
            && self.venue_id == other.venue_id
            && self.field_id == other.field_id
    }
}

/// The overall date window of a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDuration {
    /// First moment of the tournament (`YYYY-MM-DDTHH:MM`).
    #[serde(default, with = "date_time::option")]
    pub start_date: Option<PrimitiveDateTime>,
    /// Last moment of the tournament (`YYYY-MM-DDTHH:MM`).
    #[serde(default, with = "date_time::option")]
    pub end_date: Option<PrimitiveDateTime>,
    /// Whether the whole tournament is played on one day.
    #[serde(default)]
    pub is_single_day: bool,
}
