// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Greedy slot assignment.
//!
//! Fixtures are placed one at a time, in generator order, into the earliest
//! slot that keeps the calendar valid. There is no backtracking: a fixture
//! that finds no slot is reported and dropped.
//!
//! ## Placement rules
//!
//! - A team plays at most one match per date
//! - A field never hosts two overlapping matches
//! - Each slot is consumed at most once

use crate::conflicts::{ConflictKind, ConflictReport};
use crate::pairing::Fixture;
use crate::timegrid::{ScheduleSlot, minute_of_day, sort_chronologically};
use pitchplan_domain::{Match, MatchStatus};
use std::collections::BTreeMap;
use time::Date;
use tracing::{debug, warn};

/// The only round produced by fixture generation.
const FIRST_ROUND: u32 = 1;

/// The result of a placement pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    /// Placed matches grouped by date, each bucket in placement order.
    pub matches: BTreeMap<Date, Vec<Match>>,
    /// One `PREFERRED_TIME` conflict per fixture that found no slot.
    pub conflicts: Vec<ConflictReport>,
}

impl Assignment {
    /// Returns the number of placed matches.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matches.values().map(Vec::len).sum()
    }
}

/// Places fixtures into slots.
///
/// # Arguments
///
/// * `fixtures` - Fixtures in placement priority order
/// * `slots` - The bookable slot pool
/// * `match_duration` - Playing time used for field overlap checks
///
/// # Returns
///
/// The placed matches and a conflict for every unplaced fixture. Match ids
/// are `match-1`, `match-2`, ... in placement order.
#[must_use]
pub fn assign_fixtures(
    fixtures: &[Fixture],
    slots: Vec<ScheduleSlot>,
    match_duration: u32,
) -> Assignment {
    let mut pool: Vec<ScheduleSlot> = slots;
    sort_chronologically(&mut pool);

    let mut assignment: Assignment = Assignment::default();
    let mut next_id: usize = 1;

    for fixture in fixtures {
        let chosen: Option<usize> = pool.iter().position(|slot| {
            let day: &[Match] = assignment
                .matches
                .get(&slot.date)
                .map_or(&[][..], Vec::as_slice);
            is_placeable(fixture, slot, day, match_duration)
        });

        let Some(index) = chosen else {
            warn!(fixture = %fixture.label(), "Could not find a slot for fixture");
            assignment.conflicts.push(ConflictReport::new(
                ConflictKind::PreferredTime,
                format!("Could not find suitable slot for {}", fixture.label()),
                Vec::new(),
            ));
            continue;
        };

        let slot: ScheduleSlot = pool.remove(index);
        let placed: Match = Match {
            id: format!("match-{next_id}"),
            home_team: fixture.home.clone(),
            away_team: fixture.away.clone(),
            date: slot.date,
            start_time: slot.start(),
            venue_id: slot.venue_id,
            field_id: slot.field_id,
            round: FIRST_ROUND,
            leg: fixture.leg,
            status: MatchStatus::Scheduled,
        };
        next_id += 1;

        debug!(
            id = %placed.id,
            fixture = %fixture.label(),
            date = %placed.date,
            field = %placed.field_id,
            "Placed fixture"
        );

        assignment.matches.entry(slot.date).or_default().push(placed);
    }

    debug!(
        placed = assignment.match_count(),
        unplaced = assignment.conflicts.len(),
        remaining_slots = pool.len(),
        "Slot assignment finished"
    );

    assignment
}

fn is_placeable(
    fixture: &Fixture,
    slot: &ScheduleSlot,
    day: &[Match],
    match_duration: u32,
) -> bool {
    // Rule: one match per team per date
    let team_busy: bool = day
        .iter()
        .any(|m| m.involves(&fixture.home.id) || m.involves(&fixture.away.id));
    if team_busy {
        return false;
    }

    // Rule: no overlapping match on the same field
    let slot_start: u32 = minute_of_day(slot.start());
    let slot_end: u32 = minute_of_day(slot.time_slot.end);
    !day.iter().any(|m| {
        let start: u32 = minute_of_day(m.start_time);
        slot.is_on_field(&m.venue_id, &m.field_id)
            && start < slot_end
            && slot_start < start.saturating_add(match_duration)
    })
}
