//! CLI argument definitions for the `datecalc` and `flightsearch` binaries.
//!
//! # `datecalc` commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `now` | Current date and time in the configured zone |
//! | `day` | Weekday of a date |
//! | `diff` | Days between two dates |
//! | `range` | Every date in an inclusive range |
//! | `until` | Days from today to a date |
//!
//! # `flightsearch` options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--config` | none | Search a built-in preset |
//! | `--passengers` | `1` | Adult passengers for a manual search |
//! | `--no-api` | `false` | Skip price lookups |
//! | `--timeout-ms` | `10000` | Price API request timeout |
//!
//! # Examples
//!
//! ```bash
//! datecalc day 2026-01-24
//! datecalc --timezone Europe/London now
//! flightsearch -o PHL -d DEN --depart 2026-01-24 --return 2026-01-26 -p 2
//! flightsearch --config colorado_trip --json --save results.json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tripdesk_calendar::DEFAULT_TIMEZONE;

/// Date calculator anchored to a single timezone.
#[derive(Debug, Parser)]
#[command(
    name = "datecalc",
    version,
    about = "Date calculator anchored to a single timezone",
    arg_required_else_help = true
)]
pub struct DatecalcCli {
    /// IANA timezone used for "now" and "today".
    #[arg(long, global = true, default_value = DEFAULT_TIMEZONE)]
    pub timezone: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: DateCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum DateCommand {
    /// Show the current date and time.
    Now,
    /// Show the day of the week for a date.
    Day(SingleDateArgs),
    /// Count the days between two dates.
    Diff(DatePairArgs),
    /// List every date from DATE1 through DATE2.
    Range(DatePairArgs),
    /// Count the days from today until a date.
    Until(SingleDateArgs),
}

// Dates stay raw strings; the calendar crate reports missing or malformed
// values with the same wording for every command.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct SingleDateArgs {
    /// Date as YYYY-MM-DD.
    #[arg(value_name = "DATE")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct DatePairArgs {
    /// First date as YYYY-MM-DD.
    #[arg(value_name = "DATE1")]
    pub first: Option<String>,

    /// Second date as YYYY-MM-DD.
    #[arg(value_name = "DATE2")]
    pub second: Option<String>,
}

/// Round-trip flight links, points portals and optional Amadeus prices.
///
/// Set AMADEUS_API_KEY and AMADEUS_API_SECRET to enable price lookups.
#[derive(Debug, Parser)]
#[command(name = "flightsearch", version, about = "Search for flight prices")]
pub struct FlightsearchCli {
    /// Use a preset configuration.
    #[arg(short = 'c', long = "config", value_name = "PRESET")]
    pub preset: Option<String>,

    /// Origin airport code (e.g., PHL).
    #[arg(short, long)]
    pub origin: Option<String>,

    /// Destination airport code (e.g., DEN).
    #[arg(short, long)]
    pub dest: Option<String>,

    /// Departure date (YYYY-MM-DD).
    #[arg(long)]
    pub depart: Option<String>,

    /// Return date (YYYY-MM-DD).
    #[arg(long = "return", value_name = "RETURN")]
    pub return_date: Option<String>,

    /// Number of passengers.
    #[arg(short, long, default_value_t = 1)]
    pub passengers: u32,

    /// Output as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Skip API lookup.
    #[arg(long, default_value_t = false)]
    pub no_api: bool,

    /// Save results to file (always JSON).
    #[arg(short, long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// List available presets.
    #[arg(long, default_value_t = false)]
    pub list_presets: bool,

    /// Price API request timeout in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn clap_definitions_are_consistent() {
        DatecalcCli::command().debug_assert();
        FlightsearchCli::command().debug_assert();
    }

    #[test]
    fn datecalc_defaults_to_new_york() {
        let cli = DatecalcCli::try_parse_from(["datecalc", "day", "2026-01-24"]).expect("parses");
        assert_eq!(cli.timezone, "America/New_York");
        assert_eq!(
            cli.command,
            DateCommand::Day(SingleDateArgs {
                date: Some(String::from("2026-01-24"))
            })
        );
    }

    #[test]
    fn datecalc_accepts_global_options_after_subcommand() {
        let cli =
            DatecalcCli::try_parse_from(["datecalc", "now", "--timezone", "Asia/Tokyo", "-vv"])
                .expect("parses");
        assert_eq!(cli.timezone, "Asia/Tokyo");
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn datecalc_missing_dates_are_left_to_the_calendar() {
        let cli = DatecalcCli::try_parse_from(["datecalc", "range", "2026-01-24"]).expect("parses");
        assert_eq!(
            cli.command,
            DateCommand::Range(DatePairArgs {
                first: Some(String::from("2026-01-24")),
                second: None,
            })
        );
    }

    #[test]
    fn datecalc_help_forms_request_help() {
        for args in [vec!["datecalc", "help"], vec!["datecalc", "--help"], vec!["datecalc", "-h"]] {
            let error = DatecalcCli::try_parse_from(args).expect_err("help exits early");
            assert_eq!(error.kind(), ErrorKind::DisplayHelp);
        }
    }

    #[test]
    fn datecalc_unknown_or_absent_command_is_an_error() {
        let unknown = DatecalcCli::try_parse_from(["datecalc", "yesterday"]).expect_err("unknown");
        assert!(unknown.use_stderr());

        let absent = DatecalcCli::try_parse_from(["datecalc"]).expect_err("absent");
        assert!(absent.use_stderr());
    }

    #[test]
    fn flightsearch_parses_manual_search() {
        let cli = FlightsearchCli::try_parse_from([
            "flightsearch",
            "-o",
            "PHL",
            "-d",
            "DEN",
            "--depart",
            "2026-01-24",
            "--return",
            "2026-01-26",
            "-p",
            "2",
            "--json",
            "--no-api",
            "-s",
            "out.json",
        ])
        .expect("parses");

        assert_eq!(cli.origin.as_deref(), Some("PHL"));
        assert_eq!(cli.dest.as_deref(), Some("DEN"));
        assert_eq!(cli.return_date.as_deref(), Some("2026-01-26"));
        assert_eq!(cli.passengers, 2);
        assert!(cli.json && cli.no_api);
        assert_eq!(cli.save, Some(PathBuf::from("out.json")));
        assert_eq!(cli.timeout_ms, 10_000);
    }

    #[test]
    fn flightsearch_accepts_preset_short_flag() {
        let cli = FlightsearchCli::try_parse_from(["flightsearch", "-c", "colorado_trip"])
            .expect("parses");
        assert_eq!(cli.preset.as_deref(), Some("colorado_trip"));
        assert_eq!(cli.passengers, 1);
    }
}
