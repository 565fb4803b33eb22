// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule statistics.
//!
//! Utilization counts a match as occupying its playing time plus the break
//! that follows it, measured against every available field-minute.

use crate::capacity::available_minutes_by_date;
use num_traits::ToPrimitive;
use pitchplan_domain::{DailyAvailability, Match, Venue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

/// Resource and distribution figures for a generated calendar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStats {
    /// Number of placed matches.
    pub total_matches: u32,
    /// Number of dates with at least one match.
    pub match_days: u32,
    /// Utilization percentage for every date with availability.
    pub daily_utilization: BTreeMap<Date, f64>,
    /// Matches per venue id; every configured venue is present.
    pub venue_usage: BTreeMap<String, u32>,
    /// Matches per field, keyed `venue/field` since field ids are only
    /// unique within a venue; every configured field is present.
    pub field_usage: BTreeMap<String, u32>,
    /// Matches per date.
    pub matches_per_day: BTreeMap<Date, u32>,
    pub max_matches_per_day: u32,
    pub average_matches_per_day: f64,
}

/// Rounds a percentage or ratio to one decimal place.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Returns occupied minutes as a percentage of available minutes.
///
/// # Arguments
///
/// * `matches` - Number of matches played
/// * `unit_minutes` - Match duration plus break
/// * `available_minutes` - Field-minutes on offer
///
/// # Returns
///
/// The percentage rounded to one decimal, or 0 when nothing is available.
#[must_use]
pub fn utilization(matches: u32, unit_minutes: u32, available_minutes: u32) -> f64 {
    if available_minutes == 0 {
        return 0.0;
    }
    let occupied: f64 = f64::from(matches) * f64::from(unit_minutes);
    round1(occupied / f64::from(available_minutes) * 100.0)
}

/// Returns the `field_usage` key of a venue field.
#[must_use]
pub fn field_key(venue_id: &str, field_id: &str) -> String {
    format!("{venue_id}/{field_id}")
}

fn count(len: usize) -> u32 {
    len.to_u32().unwrap_or(u32::MAX)
}

/// Computes statistics for a calendar.
#[must_use]
pub fn compute_stats(
    calendar: &BTreeMap<Date, Vec<Match>>,
    venues: &[Venue],
    availability: &[DailyAvailability],
    unit_minutes: u32,
) -> ScheduleStats {
    let matches_per_day: BTreeMap<Date, u32> = calendar
        .iter()
        .filter(|(_, day)| !day.is_empty())
        .map(|(date, day)| (*date, count(day.len())))
        .collect();

    let total_matches: u32 = matches_per_day.values().sum();
    let match_days: u32 = count(matches_per_day.len());

    let daily_utilization: BTreeMap<Date, f64> = available_minutes_by_date(availability)
        .into_iter()
        .map(|(date, minutes)| {
            let played: u32 = matches_per_day.get(&date).copied().unwrap_or(0);
            (date, utilization(played, unit_minutes, minutes))
        })
        .collect();

    let mut venue_usage: BTreeMap<String, u32> = BTreeMap::new();
    let mut field_usage: BTreeMap<String, u32> = BTreeMap::new();
    for venue in venues {
        venue_usage.insert(venue.id.clone(), 0);
        for field in &venue.fields {
            field_usage.insert(field_key(&venue.id, &field.id), 0);
        }
    }
    for m in calendar.values().flatten() {
        *venue_usage.entry(m.venue_id.clone()).or_insert(0) += 1;
        *field_usage
            .entry(field_key(&m.venue_id, &m.field_id))
            .or_insert(0) += 1;
    }

    let max_matches_per_day: u32 = matches_per_day.values().copied().max().unwrap_or(0);
    let average_matches_per_day: f64 = if match_days == 0 {
        0.0
    } else {
        round1(f64::from(total_matches) / f64::from(match_days))
    };

    ScheduleStats {
        total_matches,
        match_days,
        daily_utilization,
        venue_usage,
        field_usage,
        matches_per_day,
        max_matches_per_day,
        average_matches_per_day,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use pitchplan_domain::{Field, MatchStatus, Team};
    use time::macros::{date, time};

    #[test]
    fn test_utilization_rounds_to_one_decimal() {
        // 6 x 70 / 480 = 87.5
        assert_eq!(utilization(6, 70, 480), 87.5);
        // 1 x 70 / 480 = 14.583...
        assert_eq!(utilization(1, 70, 480), 14.6);
    }

    #[test]
    fn test_utilization_without_availability_is_zero() {
        assert_eq!(utilization(5, 70, 0), 0.0);
    }

    #[test]
    fn test_empty_calendar_stats() {
        let venues: Vec<Venue> = vec![Venue::new("v1", "Main", vec![Field::new("f1", "Pitch 1")])];
        let stats: ScheduleStats = compute_stats(&BTreeMap::new(), &venues, &[], 70);

        assert_eq!(stats.total_matches, 0);
        assert_eq!(stats.match_days, 0);
        assert_eq!(stats.max_matches_per_day, 0);
        assert_eq!(stats.average_matches_per_day, 0.0);
        assert_eq!(stats.venue_usage.get("v1"), Some(&0));
        assert_eq!(stats.field_usage.get("v1/f1"), Some(&0));
    }

    #[test]
    fn test_field_usage_keeps_venues_apart() {
        let venues: Vec<Venue> = vec![
            Venue::new("v1", "North", vec![Field::new("f1", "Pitch 1")]),
            Venue::new(
                "v2",
                "South",
                vec![Field::new("f1", "Pitch 1"), Field::new("f2", "Pitch 2")],
            ),
        ];
        let played = |id: &str, venue_id: &str| Match {
            id: String::from(id),
            home_team: Team::new("t1", "Team 1"),
            away_team: Team::new("t2", "Team 2"),
            date: date!(2026 - 05 - 02),
            start_time: time!(9:00),
            venue_id: String::from(venue_id),
            field_id: String::from("f1"),
            round: 1,
            leg: None,
            status: MatchStatus::Scheduled,
        };
        let calendar: BTreeMap<Date, Vec<Match>> = BTreeMap::from([(
            date!(2026 - 05 - 02),
            vec![played("match-1", "v1"), played("match-2", "v2")],
        )]);

        let stats: ScheduleStats = compute_stats(&calendar, &venues, &[], 70);

        assert_eq!(
            stats.field_usage,
            BTreeMap::from([
                (String::from("v1/f1"), 1),
                (String::from("v2/f1"), 1),
                (String::from("v2/f2"), 0),
            ])
        );
        assert_eq!(stats.venue_usage.get("v1"), Some(&1));
        assert_eq!(stats.venue_usage.get("v2"), Some(&1));
    }
}
