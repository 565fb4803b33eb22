// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capacity model shared by feasibility checking, scenario simulation and
//! schedule statistics.
//!
//! Every function here is pure. The feasibility checker and the scenario
//! simulator must agree on how many minutes are available and how many
//! matches a format needs, so both read these functions instead of keeping
//! their own copies.
//!
//! ## Match count estimates
//!
//! | Format           | Matches                                     |
//! |------------------|---------------------------------------------|
//! | `LEAGUE`         | n(n-1)/2, doubled for a double round robin  |
//! | `KNOCKOUT`       | n-1, doubled for two-legged ties            |
//! | `GROUP_KNOCKOUT` | ceil(n/4) x 6 + min(n/2, 8) - 1             |

use pitchplan_domain::{
    DailyAvailability, FormatSettings, LeagueSettings, TimeSlot, Tournament, TournamentFormat,
    Venue,
};
use std::collections::BTreeMap;
use time::Date;

/// Matches played inside one group of four.
const MATCHES_PER_GROUP: u32 = 6;

/// Teams per group assumed by the group stage estimate.
const GROUP_SIZE: u32 = 4;

/// Upper bound on teams entering the knockout stage after groups.
const MAX_KNOCKOUT_TEAMS: u32 = 8;

/// The parts of a format that change how many matches are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatShape {
    /// The competition format.
    pub format: TournamentFormat,
    /// League pairs meet twice.
    pub double_round_robin: bool,
    /// Knockout ties are played home and away.
    pub two_legged: bool,
}

impl FormatShape {
    /// Builds the shape of `format` as configured by `settings`.
    #[must_use]
    pub fn new(format: TournamentFormat, settings: &FormatSettings) -> Self {
        Self {
            format,
            double_round_robin: settings.is_double_round_robin(),
            two_legged: settings.is_two_legged(),
        }
    }

    /// Builds the shape a tournament is currently configured with.
    #[must_use]
    pub fn of(tournament: &Tournament) -> Self {
        Self::new(tournament.format, &tournament.settings)
    }

    /// Builds the shape a tournament gets when switched to `format`.
    ///
    /// Switching format resets settings to fresh defaults, so this mirrors
    /// what the scenario applier produces.
    #[must_use]
    pub fn fresh(format: TournamentFormat) -> Self {
        let settings: FormatSettings = match format {
            TournamentFormat::League => FormatSettings {
                league: Some(LeagueSettings::default()),
                ..FormatSettings::default()
            },
            TournamentFormat::Knockout | TournamentFormat::GroupKnockout => {
                FormatSettings::default()
            }
        };
        Self::new(format, &settings)
    }
}

/// Returns the match-day minutes of one availability record.
#[must_use]
pub fn entry_minutes(entry: &DailyAvailability) -> u32 {
    if !entry.is_match_day {
        return 0;
    }
    entry
        .time_slots
        .iter()
        .map(TimeSlot::minutes)
        .fold(0, u32::saturating_add)
}

/// Returns the total match-day minutes across all records.
///
/// Non-match-day records contribute nothing.
#[must_use]
pub fn total_available_minutes(availability: &[DailyAvailability]) -> u32 {
    availability
        .iter()
        .map(entry_minutes)
        .fold(0, u32::saturating_add)
}

/// Returns match-day minutes grouped by date, summed over every field.
#[must_use]
pub fn available_minutes_by_date(availability: &[DailyAvailability]) -> BTreeMap<Date, u32> {
    let mut by_date: BTreeMap<Date, u32> = BTreeMap::new();
    for entry in availability.iter().filter(|e| e.is_match_day) {
        let minutes: &mut u32 = by_date.entry(entry.date).or_insert(0);
        *minutes = minutes.saturating_add(entry_minutes(entry));
    }
    by_date
}

/// Returns the number of fields across all venues.
#[must_use]
pub fn field_count(venues: &[Venue]) -> u32 {
    let fields: usize = venues.iter().map(|venue| venue.fields.len()).sum();
    u32::try_from(fields).unwrap_or(u32::MAX)
}

/// Estimates how many matches a tournament of `teams` teams plays.
///
/// Saturates at `u32::MAX` for team counts too large to count.
#[must_use]
pub fn estimate_match_count(shape: FormatShape, teams: u32) -> u32 {
    match shape.format {
        TournamentFormat::League => {
            let single: u32 = teams.saturating_mul(teams.saturating_sub(1)) / 2;
            if shape.double_round_robin {
                single.saturating_mul(2)
            } else {
                single
            }
        }
        TournamentFormat::Knockout => {
            let ties: u32 = teams.saturating_sub(1);
            if shape.two_legged {
                ties.saturating_mul(2)
            } else {
                ties
            }
        }
        TournamentFormat::GroupKnockout => {
            let group_count: u32 = teams.div_ceil(GROUP_SIZE);
            let knockout_teams: u32 = (teams / 2).min(MAX_KNOCKOUT_TEAMS);
            group_count
                .saturating_mul(MATCHES_PER_GROUP)
                .saturating_add(knockout_teams.saturating_sub(1))
        }
    }
}

/// Returns how many matches a single team plays in `format`.
#[must_use]
pub fn matches_per_team(format: TournamentFormat, teams: u32) -> u32 {
    match format {
        TournamentFormat::League => teams.saturating_sub(1),
        TournamentFormat::Knockout => ceil_log2(teams),
        // Group of four, then a knockout among roughly half the field
        TournamentFormat::GroupKnockout => GROUP_SIZE - 1 + ceil_log2(teams.div_ceil(2)),
    }
}

/// Returns the playing minutes a tournament of `teams` teams needs.
#[must_use]
pub fn required_minutes(shape: FormatShape, teams: u32, match_duration: u32) -> u32 {
    estimate_match_count(shape, teams).saturating_mul(match_duration)
}

/// Smallest `k` with `2^k >= n`; zero for `n <= 1`.
const fn ceil_log2(n: u32) -> u32 {
    if n <= 1 {
        0
    } else {
        u32::BITS - (n - 1).leading_zeros()
    }
}
