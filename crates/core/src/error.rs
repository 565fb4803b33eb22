// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use pitchplan_domain::{DomainError, TournamentFormat};

/// Structural problems that stop schedule generation before any match is placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The tournament description is malformed.
    InvalidInput(DomainError),
    /// Fewer than two teams are registered.
    NotEnoughTeams {
        /// The number of registered teams.
        count: usize,
    },
    /// No venue has been configured.
    NoVenues,
    /// The availability yields no bookable slot.
    NoAvailableSlots,
    /// The format has no fixture generator.
    UnsupportedFormat(TournamentFormat),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "Invalid tournament: {err}"),
            Self::NotEnoughTeams { count } => {
                write!(
                    f,
                    "At least 2 teams are required to generate fixtures, found {count}"
                )
            }
            Self::NoVenues => write!(f, "No venues have been added"),
            Self::NoAvailableSlots => {
                write!(f, "Availability does not contain a single bookable match slot")
            }
            Self::UnsupportedFormat(format) => {
                write!(f, "Fixture generation is not supported for format {format}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::InvalidInput(err)
    }
}
