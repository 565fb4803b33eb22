// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scenario application.
//!
//! Derives a new tournament from a chosen scenario. Only
//! `scenario.changes` is read; the simulated impact never influences the
//! result. Existing matches are carried over untouched; regenerating the
//! calendar is the caller's decision.

use crate::scenario::{ScenarioChanges, TournamentScenario, placeholder_team_names};
use pitchplan_domain::{
    FormatSettings, GroupSettings, KnockoutSettings, LeagueSettings, MatchDuration, Team,
    Tournament, TournamentFormat,
};
use time::{Duration, PrimitiveDateTime};
use tracing::info;

/// Applies a scenario to a tournament.
///
/// Changes are applied in this order:
///
/// 1. Team count: the roster is replaced by placeholder teams and the
///    target team count is updated
/// 2. Match duration: the regular time is overwritten
/// 3. Format: the format is switched, its settings block reset to fresh
///    defaults and every other block cleared
/// 4. Total duration: the end date becomes start date plus the duration,
///    when a start date is set
///
/// # Arguments
///
/// * `tournament` - The current tournament; not modified
/// * `scenario` - The chosen scenario
///
/// # Returns
///
/// The updated tournament.
#[must_use]
pub fn apply_scenario(tournament: &Tournament, scenario: &TournamentScenario) -> Tournament {
    let changes: &ScenarioChanges = &scenario.changes;
    let mut updated: Tournament = tournament.clone();

    if let Some(count) = changes.team_count.filter(|count| *count > 0) {
        // Destructive: previous team ids and names are lost
        updated.teams = placeholder_team_names(count)
            .iter()
            .enumerate()
            .map(|(index, name)| Team::new(&format!("team-{}", index + 1), name))
            .collect();
        updated.vision.target_team_count = count;
    }

    if let Some(minutes) = changes.match_duration {
        updated.settings.match_duration.regular_time = minutes;
    }

    if let Some(format) = changes.format {
        updated.format = format;
        let match_duration: MatchDuration = updated.settings.match_duration.clone();
        updated.settings = fresh_settings(format, match_duration);
    }

    if let (Some(total), Some(start)) = (
        changes.total_duration,
        updated.constraints.duration.start_date,
    ) {
        let end: PrimitiveDateTime = start.saturating_add(Duration::minutes(i64::from(total)));
        updated.constraints.duration.end_date = Some(end);
    }

    info!(
        tournament = %updated.id,
        scenario = %scenario.id,
        teams = updated.teams.len(),
        format = %updated.format,
        match_duration = updated.match_duration(),
        "Applied scenario"
    );

    updated
}

/// Resets the settings block for `format` and clears the others.
fn fresh_settings(format: TournamentFormat, match_duration: MatchDuration) -> FormatSettings {
    let mut settings: FormatSettings = FormatSettings {
        league: None,
        knockout: None,
        group: None,
        match_duration,
    };
    match format {
        TournamentFormat::League => settings.league = Some(LeagueSettings::default()),
        TournamentFormat::Knockout => settings.knockout = Some(KnockoutSettings::default()),
        TournamentFormat::GroupKnockout => settings.group = Some(GroupSettings::default()),
    }
    settings
}
