// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DailyAvailability, DomainError, Field, MAX_BREAK_MINUTES, Team, TimeSlot, Tournament, Venue,
    validate_availability, validate_break_time, validate_match_duration, validate_teams_unique,
    validate_time_slots, validate_tournament,
};
use time::Time;
use time::macros::{date, time};

fn create_test_venues() -> Vec<Venue> {
    vec![Venue::new(
        "v1",
        "Riverside",
        vec![Field::new("f1", "Pitch 1"), Field::new("f2", "Pitch 2")],
    )]
}

fn create_test_entry(field_id: &str, windows: &[(Time, Time)]) -> DailyAvailability {
    DailyAvailability {
        date: date!(2026 - 05 - 02),
        venue_id: String::from("v1"),
        field_id: field_id.to_string(),
        time_slots: windows
            .iter()
            .map(|(start, end)| TimeSlot {
                start: *start,
                end: *end,
            })
            .collect(),
        is_match_day: true,
    }
}

#[test]
fn test_validate_time_slots_accepts_ordered_windows() {
    let entry: DailyAvailability = create_test_entry(
        "f1",
        &[(time!(9:00), time!(12:00)), (time!(12:00), time!(17:00))],
    );

    assert!(validate_time_slots(&entry).is_ok());
}

#[test]
fn test_validate_time_slots_rejects_inverted_window() {
    let entry: DailyAvailability = create_test_entry("f1", &[(time!(17:00), time!(9:00))]);

    assert!(matches!(
        validate_time_slots(&entry),
        Err(DomainError::InvalidTimeSlot { .. })
    ));
}

#[test]
fn test_validate_time_slots_rejects_overlap() {
    let entry: DailyAvailability = create_test_entry(
        "f1",
        &[(time!(9:00), time!(13:00)), (time!(12:00), time!(17:00))],
    );

    let err: DomainError = validate_time_slots(&entry).unwrap_err();
    assert!(matches!(err, DomainError::OverlappingTimeSlots { .. }));
    if let DomainError::OverlappingTimeSlots { field_id, .. } = err {
        assert_eq!(field_id, "f1");
    }
}

#[test]
fn test_validate_time_slots_rejects_out_of_order() {
    let entry: DailyAvailability = create_test_entry(
        "f1",
        &[(time!(14:00), time!(17:00)), (time!(9:00), time!(12:00))],
    );

    assert!(validate_time_slots(&entry).is_err());
}

#[test]
fn test_validate_availability_succeeds() {
    let venues: Vec<Venue> = create_test_venues();
    let availability: Vec<DailyAvailability> = vec![
        create_test_entry("f1", &[(time!(9:00), time!(17:00))]),
        create_test_entry("f2", &[(time!(9:00), time!(17:00))]),
    ];

    assert!(validate_availability(&venues, &availability).is_ok());
}

#[test]
fn test_validate_availability_unknown_venue() {
    let venues: Vec<Venue> = create_test_venues();
    let mut entry: DailyAvailability = create_test_entry("f1", &[(time!(9:00), time!(17:00))]);
    entry.venue_id = String::from("v2");

    let result: Result<(), DomainError> = validate_availability(&venues, &[entry]);

    assert_eq!(
        result,
        Err(DomainError::VenueNotFound {
            venue_id: String::from("v2")
        })
    );
}

#[test]
fn test_validate_availability_unknown_field() {
    let venues: Vec<Venue> = create_test_venues();
    let entry: DailyAvailability = create_test_entry("f7", &[(time!(9:00), time!(17:00))]);

    let result: Result<(), DomainError> = validate_availability(&venues, &[entry]);

    assert!(matches!(result, Err(DomainError::FieldNotFound { .. })));
}

#[test]
fn test_validate_availability_rejects_repeated_field_day() {
    let venues: Vec<Venue> = create_test_venues();
    let morning: DailyAvailability = create_test_entry("f1", &[(time!(9:00), time!(12:00))]);
    let afternoon: DailyAvailability = create_test_entry("f1", &[(time!(13:00), time!(17:00))]);
    let other_field: DailyAvailability = create_test_entry("f2", &[(time!(9:00), time!(17:00))]);

    assert!(validate_availability(&venues, &[morning.clone(), other_field]).is_ok());

    let mut next_day: DailyAvailability = afternoon.clone();
    next_day.date = date!(2026 - 05 - 03);
    assert!(validate_availability(&venues, &[morning.clone(), next_day]).is_ok());

    assert_eq!(
        validate_availability(&venues, &[morning, afternoon]),
        Err(DomainError::DuplicateAvailability {
            date: date!(2026 - 05 - 02),
            venue_id: String::from("v1"),
            field_id: String::from("f1"),
        })
    );
}

#[test]
fn test_validate_break_time() {
    assert!(validate_break_time(0).is_ok());
    assert!(validate_break_time(MAX_BREAK_MINUTES).is_ok());
    assert_eq!(
        validate_break_time(u32::MAX),
        Err(DomainError::InvalidBreakTime { minutes: u32::MAX })
    );
}

#[test]
fn test_validate_match_duration() {
    assert!(validate_match_duration(60).is_ok());
    assert_eq!(
        validate_match_duration(0),
        Err(DomainError::InvalidMatchDuration { minutes: 0 })
    );
}

#[test]
fn test_validate_teams_unique() {
    let teams: Vec<Team> = vec![Team::new("t1", "A"), Team::new("t2", "B")];
    assert!(validate_teams_unique(&teams).is_ok());

    let teams: Vec<Team> = vec![
        Team::new("t1", "A"),
        Team::new("t2", "B"),
        Team::new("t1", "C"),
    ];
    assert_eq!(
        validate_teams_unique(&teams),
        Err(DomainError::DuplicateTeamId(String::from("t1")))
    );
}

#[test]
fn test_validate_tournament_checks_every_rule() {
    let mut tournament: Tournament = Tournament::default();
    tournament.settings.match_duration.regular_time = 60;
    tournament.constraints.venues = create_test_venues();
    tournament.constraints.availability =
        vec![create_test_entry("f1", &[(time!(9:00), time!(17:00))])];
    tournament.teams = vec![Team::new("t1", "A"), Team::new("t2", "B")];
    assert!(validate_tournament(&tournament).is_ok());

    let mut zero_duration: Tournament = tournament.clone();
    zero_duration.settings.match_duration.regular_time = 0;
    assert!(validate_tournament(&zero_duration).is_err());

    let mut endless_break: Tournament = tournament.clone();
    endless_break.vision.preferences.break_time = Some(u32::MAX);
    assert_eq!(
        validate_tournament(&endless_break),
        Err(DomainError::InvalidBreakTime { minutes: u32::MAX })
    );

    let mut bad_field: Tournament = tournament;
    bad_field.constraints.availability[0].field_id = String::from("missing");
    assert!(matches!(
        validate_tournament(&bad_field),
        Err(DomainError::FieldNotFound { .. })
    ));
}
