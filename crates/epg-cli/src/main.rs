//! EPG schedule checker CLI.
//!
//! Provides the `epg` binary for working with program lists stored as JSON
//! arrays of programs:
//! - `check` prints the diagnostics map for a schedule.
//! - `fix` rewrites start times so the schedule has no gaps or overlaps.
//!
//! Reads `EPG_FAR_HORIZON_DAYS` to override the far-future horizon.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use epg_check::{adjust_date_times, EpgConfig, ScheduleValidator};
use epg_core::Schedule;

const HORIZON_ENV: &str = "EPG_FAR_HORIZON_DAYS";

/// EPG schedule checker.
#[derive(Parser)]
#[command(name = "epg", about = "Check and normalize EPG program schedules")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Report data-quality defects in a schedule.
    Check {
        /// Path to the schedule JSON file.
        #[arg(short, long)]
        input: PathBuf,

        /// Optional TOML configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Validate as of this RFC 3339 instant instead of now.
        #[arg(long)]
        now: Option<String>,
    },

    /// Make the schedule contiguous by moving start times.
    Fix {
        /// Path to the schedule JSON file.
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the adjusted schedule (default: stdout).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check { input, config, now } => {
            run_check(&input, config.as_deref(), now.as_deref())
        }
        Commands::Fix { input, output } => run_fix(&input, output.as_deref()),
    };
    process::exit(exit_code);
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 = no ERROR diagnostics, 1 = bad argument,
/// 2 = ERROR diagnostics present, 3 = I/O or parse error.
fn run_check(input: &Path, config_path: Option<&Path>, now: Option<&str>) -> i32 {
    let now = match parse_now(now) {
        Ok(instant) => instant,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 1;
        }
    };

    let mut config = match config_path {
        Some(path) => match load_config(path) {
            Ok(c) => c,
            Err(msg) => {
                eprintln!("Error: {}", msg);
                return 3;
            }
        },
        None => EpgConfig::default(),
    };

    if let Ok(raw) = std::env::var(HORIZON_ENV) {
        match raw.trim().parse::<i64>() {
            Ok(days) if days >= 0 => config.validator.far_future_horizon_days = days,
            _ => {
                eprintln!(
                    "Error: {} must be a non-negative integer, got '{}'",
                    HORIZON_ENV, raw
                );
                return 1;
            }
        }
    }

    let schedule = match load_schedule(input) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 3;
        }
    };

    tracing::info!(
        programs = schedule.len(),
        horizon_days = config.validator.far_future_horizon_days,
        "checking schedule {}",
        input.display()
    );

    let validator = ScheduleValidator::new(config.validator);
    let messages = validator.validate_at(&schedule.to_vec(), now);

    match serde_json::to_string_pretty(&messages) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: failed to serialize diagnostics: {}", e);
            return 3;
        }
    }

    if messages.has_errors() {
        2
    } else {
        0
    }
}

/// Execute the fix subcommand.
///
/// Returns exit code: 0 = success, 3 = I/O or parse error.
fn run_fix(input: &Path, output: Option<&Path>) -> i32 {
    let schedule = match load_schedule(input) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 3;
        }
    };

    let adjusted = adjust_date_times(&schedule.to_vec());
    tracing::info!(programs = adjusted.len(), "adjusted schedule {}", input.display());

    let json = match serde_json::to_string_pretty(&adjusted) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: failed to serialize schedule: {}", e);
            return 3;
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, json) {
                eprintln!("Error: failed to write '{}': {}", path.display(), e);
                return 3;
            }
        }
        None => println!("{}", json),
    }
    0
}

fn load_schedule(path: &Path) -> Result<Schedule, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    serde_json::from_str(&raw)
        .map_err(|e| format!("failed to parse schedule '{}': {}", path.display(), e))
}

fn load_config(path: &Path) -> Result<EpgConfig, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config '{}': {}", path.display(), e))?;
    EpgConfig::from_toml_str(&raw).map_err(|e| format!("{} ({})", e, path.display()))
}

/// Parse the `--now` override, defaulting to the current instant.
fn parse_now(raw: Option<&str>) -> Result<DateTime<Utc>, String> {
    match raw {
        None => Ok(Utc::now()),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| format!("invalid --now '{}': {}", s, e)),
    }
}
