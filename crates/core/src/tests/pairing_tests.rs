// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_settings, create_test_teams};
use crate::{CoreError, Fixture, generate_fixtures};
use pitchplan_domain::{
    FormatSettings, KnockoutSettings, Legs, RoundRobinType, Team, TournamentFormat,
};

fn ids(fixture: &Fixture) -> (&str, &str) {
    (fixture.home.id.as_str(), fixture.away.id.as_str())
}

fn knockout_settings(legs: Legs) -> FormatSettings {
    FormatSettings {
        league: None,
        knockout: Some(KnockoutSettings {
            legs,
            ..KnockoutSettings::default()
        }),
        ..create_test_settings(60)
    }
}

#[test]
fn test_single_round_robin_fixture_count() {
    let teams: Vec<Team> = create_test_teams(8);

    let fixtures: Vec<Fixture> =
        generate_fixtures(&teams, TournamentFormat::League, &create_test_settings(60)).unwrap();

    assert_eq!(fixtures.len(), 28);
    assert_eq!(ids(&fixtures[0]), ("t1", "t2"));
    assert_eq!(ids(&fixtures[1]), ("t1", "t3"));
    assert_eq!(ids(&fixtures[7]), ("t2", "t3"));
    assert_eq!(ids(&fixtures[27]), ("t7", "t8"));
    assert!(fixtures.iter().all(|f| f.leg.is_none()));
}

#[test]
fn test_double_round_robin_appends_reversed_pairs() {
    let teams: Vec<Team> = create_test_teams(4);
    let mut settings: FormatSettings = create_test_settings(60);
    if let Some(league) = settings.league.as_mut() {
        league.round_robin_type = RoundRobinType::Double;
    }

    let fixtures: Vec<Fixture> =
        generate_fixtures(&teams, TournamentFormat::League, &settings).unwrap();

    assert_eq!(fixtures.len(), 12);
    for (first, second) in fixtures[..6].iter().zip(&fixtures[6..]) {
        let (home, away) = ids(first);
        assert_eq!(ids(second), (away, home));
    }
}

#[test]
fn test_every_league_pair_meets_exactly_once() {
    let teams: Vec<Team> = create_test_teams(6);

    let fixtures: Vec<Fixture> =
        generate_fixtures(&teams, TournamentFormat::League, &create_test_settings(60)).unwrap();

    for (i, a) in teams.iter().enumerate() {
        for b in &teams[i + 1..] {
            let meetings: usize = fixtures
                .iter()
                .filter(|f| {
                    (f.home.id == a.id && f.away.id == b.id)
                        || (f.home.id == b.id && f.away.id == a.id)
                })
                .count();
            assert_eq!(meetings, 1, "{} vs {}", a.name, b.name);
        }
    }
}

#[test]
fn test_knockout_pairs_consecutive_teams() {
    let teams: Vec<Team> = create_test_teams(4);

    let fixtures: Vec<Fixture> = generate_fixtures(
        &teams,
        TournamentFormat::Knockout,
        &knockout_settings(Legs::Single),
    )
    .unwrap();

    assert_eq!(fixtures.len(), 2);
    assert_eq!(ids(&fixtures[0]), ("t1", "t2"));
    assert_eq!(ids(&fixtures[1]), ("t3", "t4"));
    assert!(fixtures.iter().all(|f| f.leg.is_none()));
}

#[test]
fn test_knockout_odd_team_gets_a_bye() {
    let teams: Vec<Team> = create_test_teams(5);

    let fixtures: Vec<Fixture> = generate_fixtures(
        &teams,
        TournamentFormat::Knockout,
        &knockout_settings(Legs::Single),
    )
    .unwrap();

    assert_eq!(fixtures.len(), 2);
    assert!(fixtures.iter().all(|f| f.home.id != "t5" && f.away.id != "t5"));
}

#[test]
fn test_two_legged_knockout_appends_second_legs() {
    let teams: Vec<Team> = create_test_teams(4);

    let fixtures: Vec<Fixture> = generate_fixtures(
        &teams,
        TournamentFormat::Knockout,
        &knockout_settings(Legs::Double),
    )
    .unwrap();

    assert_eq!(fixtures.len(), 4);
    assert_eq!(fixtures[0].leg, Some(1));
    assert_eq!(fixtures[1].leg, Some(1));
    assert_eq!(ids(&fixtures[2]), ("t2", "t1"));
    assert_eq!(fixtures[2].leg, Some(2));
    assert_eq!(ids(&fixtures[3]), ("t4", "t3"));
    assert_eq!(fixtures[3].leg, Some(2));
}

#[test]
fn test_fewer_than_two_teams_is_rejected() {
    let teams: Vec<Team> = create_test_teams(1);

    let result: Result<Vec<Fixture>, CoreError> =
        generate_fixtures(&teams, TournamentFormat::League, &create_test_settings(60));

    assert_eq!(result, Err(CoreError::NotEnoughTeams { count: 1 }));
}

#[test]
fn test_group_knockout_is_unsupported() {
    let teams: Vec<Team> = create_test_teams(8);

    let result: Result<Vec<Fixture>, CoreError> = generate_fixtures(
        &teams,
        TournamentFormat::GroupKnockout,
        &create_test_settings(60),
    );

    assert_eq!(
        result,
        Err(CoreError::UnsupportedFormat(TournamentFormat::GroupKnockout))
    );
}

#[test]
fn test_fixture_label() {
    let teams: Vec<Team> = create_test_teams(2);

    let fixtures: Vec<Fixture> =
        generate_fixtures(&teams, TournamentFormat::League, &create_test_settings(60)).unwrap();

    assert_eq!(fixtures[0].label(), "Team 1 vs Team 2");
}
