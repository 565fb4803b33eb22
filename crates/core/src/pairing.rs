// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixture generation.
//!
//! The order of the returned fixtures is significant: the slot assigner
//! places fixtures in exactly this order.
//!
//! Knockout generation stops after the first round. Later rounds depend on
//! results and are not derived here. Group stages have no generator at all.

use crate::error::CoreError;
use pitchplan_domain::{FormatSettings, Team, TournamentFormat};
use tracing::debug;

/// An unscheduled pairing waiting for a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// The home team.
    pub home: Team,
    /// The away team.
    pub away: Team,
    /// Leg number (1 or 2) for two-legged knockout ties.
    pub leg: Option<u8>,
}

impl Fixture {
    const fn new(home: Team, away: Team, leg: Option<u8>) -> Self {
        Self { home, away, leg }
    }

    /// Returns the fixture label, e.g. `Rovers vs United`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} vs {}", self.home.name, self.away.name)
    }
}

/// Generates the ordered fixture list for a roster.
///
/// # Arguments
///
/// * `teams` - The roster, in seeding order
/// * `format` - The competition format
/// * `settings` - Format settings (round robin type, knockout legs)
///
/// # Errors
///
/// Returns an error if:
/// - Fewer than two teams are given
/// - The format is `GROUP_KNOCKOUT`, which has no fixture generator
pub fn generate_fixtures(
    teams: &[Team],
    format: TournamentFormat,
    settings: &FormatSettings,
) -> Result<Vec<Fixture>, CoreError> {
    if teams.len() < 2 {
        return Err(CoreError::NotEnoughTeams { count: teams.len() });
    }

    let fixtures: Vec<Fixture> = match format {
        TournamentFormat::League => league_fixtures(teams, settings.is_double_round_robin()),
        TournamentFormat::Knockout => knockout_fixtures(teams, settings.is_two_legged()),
        TournamentFormat::GroupKnockout => {
            return Err(CoreError::UnsupportedFormat(format));
        }
    };

    debug!(
        format = %format,
        teams = teams.len(),
        fixtures = fixtures.len(),
        "Generated fixtures"
    );

    Ok(fixtures)
}

/// Round robin by index: (i, j) for every i < j, then every pair reversed.
fn league_fixtures(teams: &[Team], double_round_robin: bool) -> Vec<Fixture> {
    let mut fixtures: Vec<Fixture> = Vec::new();
    for (i, home) in teams.iter().enumerate() {
        for away in &teams[i + 1..] {
            fixtures.push(Fixture::new(home.clone(), away.clone(), None));
        }
    }

    if double_round_robin {
        let reverse: Vec<Fixture> = fixtures
            .iter()
            .map(|f| Fixture::new(f.away.clone(), f.home.clone(), None))
            .collect();
        fixtures.extend(reverse);
    }

    fixtures
}

/// First round only: 0v1, 2v3, ... An odd last team receives a bye.
fn knockout_fixtures(teams: &[Team], two_legged: bool) -> Vec<Fixture> {
    let first_leg: Option<u8> = two_legged.then_some(1);
    let mut fixtures: Vec<Fixture> = teams
        .chunks_exact(2)
        .map(|pair| Fixture::new(pair[0].clone(), pair[1].clone(), first_leg))
        .collect();

    if two_legged {
        let second_legs: Vec<Fixture> = fixtures
            .iter()
            .map(|f| Fixture::new(f.away.clone(), f.home.clone(), Some(2)))
            .collect();
        fixtures.extend(second_legs);
    }

    fixtures
}
