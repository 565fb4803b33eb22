// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, Time};

/// Errors raised when a tournament description is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Unknown tournament format string.
    InvalidFormat(String),
    /// A time window does not end after it starts.
    InvalidTimeSlot {
        /// The window start.
        start: Time,
        /// The window end.
        end: Time,
    },
    /// Two windows of one availability record overlap or are out of order.
    OverlappingTimeSlots {
        /// The availability date.
        date: Date,
        /// The field the record belongs to.
        field_id: String,
    },
    /// An availability record references a venue that does not exist.
    VenueNotFound {
        /// The missing venue identifier.
        venue_id: String,
    },
    /// An availability record references a field the venue does not own.
    FieldNotFound {
        /// The venue identifier.
        venue_id: String,
        /// The missing field identifier.
        field_id: String,
    },
    /// Match duration must be positive.
    InvalidMatchDuration {
        /// The invalid duration in minutes.
        minutes: u32,
    },
    /// Break time does not fit in one day.
    InvalidBreakTime {
        /// The invalid break in minutes.
        minutes: u32,
    },
    /// Two availability records cover the same field on the same date.
    DuplicateAvailability {
        /// The repeated date.
        date: Date,
        /// The venue identifier.
        venue_id: String,
        /// The field identifier.
        field_id: String,
    },
    /// Two teams share an identifier.
    DuplicateTeamId(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(value) => write!(f, "Invalid tournament format: {value}"),
            Self::InvalidTimeSlot { start, end } => {
                write!(
                    f,
                    "Invalid time slot: end {end} must be after start {start}"
                )
            }
            Self::OverlappingTimeSlots { date, field_id } => {
                write!(
                    f,
                    "Time slots for field '{field_id}' on {date} overlap or are out of order"
                )
            }
            Self::VenueNotFound { venue_id } => write!(f, "Venue '{venue_id}' not found"),
            Self::FieldNotFound { venue_id, field_id } => {
                write!(f, "Field '{field_id}' not found in venue '{venue_id}'")
            }
            Self::InvalidMatchDuration { minutes } => {
                write!(
                    f,
                    "Invalid match duration: {minutes}. Must be greater than 0"
                )
            }
            Self::InvalidBreakTime { minutes } => {
                write!(
                    f,
                    "Invalid break time: {minutes}. Must be at most 1440 minutes"
                )
            }
            Self::DuplicateAvailability {
                date,
                venue_id,
                field_id,
            } => {
                write!(
                    f,
                    "Availability for field '{field_id}' at venue '{venue_id}' on {date} is declared more than once"
                )
            }
            Self::DuplicateTeamId(id) => write!(f, "Team id '{id}' is used more than once"),
        }
    }
}

impl std::error::Error for DomainError {}
