// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # pitchplan
//!
//! Reads a tournament as JSON and runs one engine operation on it. Results
//! are written to stdout as JSON; logs go to stderr.
//!
//! ```text
//! pitchplan schedule cup.json
//! pitchplan feasibility - < cup.json
//! pitchplan scenarios cup.json
//! pitchplan apply cup.json --scenario constrained-2 --then-schedule
//! ```
//!
//! Log output follows `RUST_LOG` when set, otherwise the `-v`/`-q` flags.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use pitchplan::{
    CoreError, FeasibilityReport, ScenarioSet, ScheduleOutcome, apply_scenario,
    check_feasibility, generate_scenarios, generate_schedule,
};
use pitchplan_domain::Tournament;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// Reads tournaments from `-` instead of a file.
const STDIN_PATH: &str = "-";

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(output) => println!("{output}"),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Pitchplan - tournament scheduling and feasibility analysis
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print single-line JSON instead of pretty output
    #[arg(long, global = true)]
    compact: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(&self) -> Result<String, CliError> {
        let tournament: Tournament = read_tournament(self.command.input())?;
        let output: serde_json::Value = self.command.execute(&tournament)?;
        render(&output, self.compact)
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Generate a conflict-checked match calendar
    #[command(visible_alias = "s")]
    Schedule {
        /// Tournament JSON file, or `-` for stdin
        file: PathBuf,
    },

    /// Check whether the tournament fits its venues and dates
    #[command(visible_alias = "f")]
    Feasibility {
        /// Tournament JSON file, or `-` for stdin
        file: PathBuf,
    },

    /// Propose adjusted tournament parameters
    #[command(visible_alias = "sc")]
    Scenarios {
        /// Tournament JSON file, or `-` for stdin
        file: PathBuf,
    },

    /// Apply a generated scenario and print the updated tournament
    #[command(visible_alias = "a")]
    Apply {
        /// Tournament JSON file, or `-` for stdin
        file: PathBuf,

        /// Id of the scenario to apply, e.g. `recommended`
        #[arg(short, long)]
        scenario: String,

        /// Fill the updated tournament's matches with a fresh schedule
        #[arg(long)]
        then_schedule: bool,
    },
}

impl Command {
    fn input(&self) -> &Path {
        match self {
            Self::Schedule { file }
            | Self::Feasibility { file }
            | Self::Scenarios { file }
            | Self::Apply { file, .. } => file.as_path(),
        }
    }

    /// Runs the engine operation for this command.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the tournament, the scenario
    /// id is unknown, or the result cannot be serialized.
    fn execute(&self, tournament: &Tournament) -> Result<serde_json::Value, CliError> {
        match self {
            Self::Schedule { .. } => {
                let outcome: ScheduleOutcome = generate_schedule(tournament)?;
                Ok(serde_json::to_value(&outcome)?)
            }
            Self::Feasibility { .. } => {
                let report: FeasibilityReport = check_feasibility(tournament);
                Ok(serde_json::to_value(&report)?)
            }
            Self::Scenarios { .. } => {
                let set: ScenarioSet = generate_scenarios(tournament);
                Ok(serde_json::to_value(&set)?)
            }
            Self::Apply {
                scenario,
                then_schedule,
                ..
            } => {
                let updated: Tournament =
                    apply_named_scenario(tournament, scenario, *then_schedule)?;
                Ok(serde_json::to_value(&updated)?)
            }
        }
    }
}

/// Errors surfaced by the command line front end.
#[derive(Debug, Error)]
enum CliError {
    /// The tournament file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Input or output JSON was malformed.
    #[error("Invalid tournament JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The engine rejected the tournament.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// No generated scenario carries the requested id.
    #[error("Scenario '{id}' not found; available: {available}")]
    ScenarioNotFound { id: String, available: String },
}

fn read_tournament(path: &Path) -> Result<Tournament, CliError> {
    let io_error = |source: std::io::Error| CliError::Io {
        path: path.display().to_string(),
        source,
    };

    let raw: String = if path.as_os_str() == STDIN_PATH {
        let mut buffer: String = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(io_error)?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(io_error)?
    };

    let tournament: Tournament = serde_json::from_str(&raw)?;
    debug!(
        id = %tournament.id,
        format = %tournament.format,
        teams = tournament.teams.len(),
        "Loaded tournament"
    );
    Ok(tournament)
}

/// Regenerates scenarios, applies the one named `scenario_id`, and
/// optionally schedules the result.
fn apply_named_scenario(
    tournament: &Tournament,
    scenario_id: &str,
    then_schedule: bool,
) -> Result<Tournament, CliError> {
    let set: ScenarioSet = generate_scenarios(tournament);
    let Some(scenario) = set.find(scenario_id) else {
        let available: Vec<&str> = set.scenarios.iter().map(|s| s.id.as_str()).collect();
        return Err(CliError::ScenarioNotFound {
            id: scenario_id.to_string(),
            available: if available.is_empty() {
                String::from("none")
            } else {
                available.join(", ")
            },
        });
    };

    let mut updated: Tournament = apply_scenario(tournament, scenario);
    if then_schedule {
        let outcome: ScheduleOutcome = generate_schedule(&updated)?;
        info!(
            matches = outcome.all_matches().count(),
            conflicts = outcome.conflicts.len(),
            "Scheduled updated tournament"
        );
        updated.matches = outcome.all_matches().cloned().collect();
    }
    Ok(updated)
}

fn render(output: &serde_json::Value, compact: bool) -> Result<String, CliError> {
    let rendered: String = if compact {
        serde_json::to_string(output)?
    } else {
        serde_json::to_string_pretty(output)?
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use clap::CommandFactory;

    /// Two fields open 09:00-17:00 on one day, 60 minute matches.
    const TOURNAMENT_JSON: &str = r##"{
        "id": "cup-2026",
        "name": "Spring Cup",
        "format": "LEAGUE",
        "settings": {
            "league": {
                "pointsForWin": 3, "pointsForDraw": 1, "pointsForLoss": 0,
                "useHeadToHead": true, "useGoalDifference": true,
                "roundRobinType": "SINGLE"
            },
            "matchDuration": { "regularTime": 60 }
        },
        "vision": { "preferences": { "breakTime": 10 } },
        "constraints": {
            "duration": { "startDate": "2026-05-02T09:00", "endDate": "2026-05-02T17:00" },
            "venues": [
                { "id": "v1", "name": "Main Ground",
                  "fields": [{ "id": "f1", "name": "Pitch 1" }, { "id": "f2", "name": "Pitch 2" }] }
            ],
            "availability": [
                { "date": "2026-05-02", "venueId": "v1", "fieldId": "f1",
                  "timeSlots": [{ "start": "09:00", "end": "17:00" }], "isMatchDay": true },
                { "date": "2026-05-02", "venueId": "v1", "fieldId": "f2",
                  "timeSlots": [{ "start": "09:00", "end": "17:00" }], "isMatchDay": true }
            ]
        },
        "teams": [
            { "id": "t1", "name": "Rovers", "primaryColor": "#FF0000", "secondaryColor": "#FFFFFF" },
            { "id": "t2", "name": "United", "primaryColor": "#0000FF", "secondaryColor": "#FFFFFF" },
            { "id": "t3", "name": "Athletic", "primaryColor": "#00FF00", "secondaryColor": "#000000" },
            { "id": "t4", "name": "Wanderers", "primaryColor": "#FFFF00", "secondaryColor": "#000000" }
        ]
    }"##;

    fn tournament() -> Tournament {
        serde_json::from_str(TOURNAMENT_JSON).unwrap()
    }

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv.iter().copied()).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_apply_arguments() {
        let args: Args = parse(&[
            "pitchplan",
            "apply",
            "cup.json",
            "--scenario",
            "recommended",
            "--then-schedule",
            "--compact",
        ]);

        assert!(args.compact);
        assert_eq!(args.command.input(), Path::new("cup.json"));
        match args.command {
            Command::Apply {
                scenario,
                then_schedule,
                ..
            } => {
                assert_eq!(scenario, "recommended");
                assert!(then_schedule);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_apply_requires_scenario() {
        assert!(Args::try_parse_from(["pitchplan", "apply", "cup.json"]).is_err());
    }

    #[test]
    fn test_schedule_command_output() {
        let output: serde_json::Value = parse(&["pitchplan", "schedule", "-"])
            .command
            .execute(&tournament())
            .unwrap();

        // Single round robin of four teams, at most one match per team per day
        assert_eq!(output["stats"]["totalMatches"], 2);
        assert_eq!(output["matches"]["2026-05-02"][0]["homeTeam"]["name"], "Rovers");
        assert_eq!(output["conflicts"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_feasibility_command_output() {
        let output: serde_json::Value = parse(&["pitchplan", "feasibility", "-"])
            .command
            .execute(&tournament())
            .unwrap();

        assert_eq!(output["feasible"], true);
        assert_eq!(output["teamCount"], 4);
        assert_eq!(output["availableFields"], 2);
    }

    #[test]
    fn test_unknown_scenario_lists_available_ids() {
        let err: CliError = apply_named_scenario(&tournament(), "nope", false).unwrap_err();

        assert!(matches!(err, CliError::ScenarioNotFound { .. }));
        assert!(err.to_string().starts_with("Scenario 'nope' not found; available: "));
        assert!(err.to_string().contains("recommended"));
    }

    #[test]
    fn test_apply_then_schedule_fills_matches() {
        let updated: Tournament = apply_named_scenario(&tournament(), "recommended", true).unwrap();

        assert_eq!(updated.teams.len(), 4);
        assert_eq!(updated.teams[0].name, "Team 1");
        assert!(!updated.matches.is_empty());
        assert!(updated.matches.iter().all(|m| m.id.starts_with("match-")));
    }

    #[test]
    fn test_engine_errors_surface_unchanged() {
        let mut lonely: Tournament = tournament();
        lonely.teams.truncate(1);

        let err: CliError = parse(&["pitchplan", "schedule", "-"])
            .command
            .execute(&lonely)
            .unwrap_err();

        assert_eq!(err.to_string(), CoreError::NotEnoughTeams { count: 1 }.to_string());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err: CliError = read_tournament(Path::new("/nonexistent/cup.json")).unwrap_err();

        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().starts_with("Failed to read /nonexistent/cup.json"));
    }

    #[test]
    fn test_render_compact_and_pretty() {
        let value: serde_json::Value = serde_json::json!({ "feasible": true });

        assert_eq!(render(&value, true).unwrap(), r#"{"feasible":true}"#);
        assert!(render(&value, false).unwrap().contains('\n'));
    }
}
