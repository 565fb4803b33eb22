// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use pitchplan_domain::{
    Constraints, DailyAvailability, Field, FormatSettings, KnockoutSettings, LeagueSettings,
    Match, MatchDuration, MatchStatus, Preferences, RoundRobinType, Team, TimeSlot, Tournament,
    TournamentDuration, TournamentFormat, Venue, Vision,
};
use time::macros::{date, datetime, time};
use time::{Date, Time};

pub fn create_test_teams(count: usize) -> Vec<Team> {
    (1..=count)
        .map(|i| Team::new(&format!("t{i}"), &format!("Team {i}")))
        .collect()
}

pub fn create_test_venue() -> Venue {
    Venue::new("v1", "Main Ground", vec![Field::new("f1", "Pitch 1")])
}

pub fn create_test_availability(
    date: Date,
    field_id: &str,
    start: Time,
    end: Time,
) -> DailyAvailability {
    DailyAvailability {
        date,
        venue_id: String::from("v1"),
        field_id: String::from(field_id),
        time_slots: vec![TimeSlot::new(start, end).unwrap()],
        is_match_day: true,
    }
}

pub fn create_test_settings(match_duration: u32) -> FormatSettings {
    FormatSettings {
        league: Some(LeagueSettings {
            round_robin_type: RoundRobinType::Single,
            ..LeagueSettings::default()
        }),
        knockout: None,
        group: None,
        match_duration: MatchDuration {
            regular_time: match_duration,
            ..MatchDuration::default()
        },
    }
}

/// 8 teams, single round robin, one field open 09:00-17:00 on one day,
/// 60 minute matches with a 10 minute break.
pub fn create_test_tournament() -> Tournament {
    Tournament {
        id: String::from("cup-2026"),
        name: String::from("Spring Cup"),
        description: String::new(),
        format: TournamentFormat::League,
        settings: create_test_settings(60),
        vision: Vision {
            target_team_count: 0,
            preferences: Preferences {
                break_time: Some(10),
                ..Preferences::default()
            },
            ..Vision::default()
        },
        constraints: Constraints {
            duration: TournamentDuration {
                start_date: Some(datetime!(2026-05-02 9:00)),
                end_date: Some(datetime!(2026-05-02 17:00)),
                is_single_day: true,
            },
            venues: vec![create_test_venue()],
            availability: vec![create_test_availability(
                date!(2026 - 05 - 02),
                "f1",
                time!(9:00),
                time!(17:00),
            )],
        },
        teams: create_test_teams(8),
        matches: Vec::new(),
    }
}

/// A tournament with `days` consecutive match days starting 2026-05-02,
/// each with one field open 09:00-17:00.
pub fn create_test_multi_day_tournament(teams: usize, days: u8) -> Tournament {
    let mut tournament: Tournament = create_test_tournament();
    tournament.teams = create_test_teams(teams);
    tournament.constraints.availability = (0..days)
        .map(|offset| {
            let day: Date = date!(2026 - 05 - 02)
                .checked_add(time::Duration::days(i64::from(offset)))
                .unwrap();
            create_test_availability(day, "f1", time!(9:00), time!(17:00))
        })
        .collect();
    tournament
}

pub fn create_test_knockout_tournament(teams: usize) -> Tournament {
    let mut tournament: Tournament = create_test_tournament();
    tournament.format = TournamentFormat::Knockout;
    tournament.settings.league = None;
    tournament.settings.knockout = Some(KnockoutSettings::default());
    tournament.teams = create_test_teams(teams);
    tournament
}

pub fn create_test_match(id: &str, home: &Team, away: &Team, start: Time, field_id: &str) -> Match {
    Match {
        id: String::from(id),
        home_team: home.clone(),
        away_team: away.clone(),
        date: date!(2026 - 05 - 02),
        start_time: start,
        venue_id: String::from("v1"),
        field_id: String::from(field_id),
        round: 1,
        leg: None,
        status: MatchStatus::Scheduled,
    }
}

/// The default test tournament with a second field open 09:00-17:00.
pub fn create_test_two_field_tournament(teams: usize) -> Tournament {
    let mut tournament: Tournament = create_test_tournament();
    tournament.teams = create_test_teams(teams);
    tournament.constraints.venues = vec![Venue::new(
        "v1",
        "Main Ground",
        vec![Field::new("f1", "Pitch 1"), Field::new("f2", "Pitch 2")],
    )];
    tournament.constraints.availability.push(create_test_availability(
        date!(2026 - 05 - 02),
        "f2",
        time!(9:00),
        time!(17:00),
    ));
    tournament
}
