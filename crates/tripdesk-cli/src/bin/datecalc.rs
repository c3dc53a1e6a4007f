use std::process::ExitCode;

use clap::Parser;
use tripdesk_calendar::{CalendarConfig, DateCalculator};
use tripdesk_cli::cli::DatecalcCli;
use tripdesk_cli::commands;
use tripdesk_cli::error::CliError;
use tripdesk_cli::logging;

fn main() -> ExitCode {
    let cli = match DatecalcCli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            // Explicit help or version is a success; anything else is a usage error.
            let _ = error.print();
            return if error.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run(cli: &DatecalcCli) -> Result<String, CliError> {
    let config = CalendarConfig::from_timezone_name(&cli.timezone)?;
    commands::datecalc::run(&cli.command, &DateCalculator::new(config))
}
