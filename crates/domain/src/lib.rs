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

mod error;
mod settings;
mod tournament;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use settings::{
    DEFAULT_BREAK_MINUTES, FormatSettings, GroupSettings, KnockoutSettings, LeagueSettings, Legs,
    MatchDuration, Preferences, Priorities, RoundRobinType, Vision,
};
pub use tournament::{Constraints, DEFAULT_TEAM_COUNT, Tournament};
pub use types::{
    DailyAvailability, Field, Match, MatchStatus, Team, TeamStatus, TimeSlot, TournamentDuration,
    TournamentFormat, Venue,
};
pub use validation::{
    MAX_BREAK_MINUTES, validate_availability, validate_break_time, validate_match_duration,
    validate_teams_unique, validate_time_slots, validate_tournament,
};
