use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tripdesk_cli::cli::FlightsearchCli;
use tripdesk_cli::commands::flightsearch;
use tripdesk_cli::error::CliError;
use tripdesk_cli::logging;
use tripdesk_flights::FlightSearch;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = FlightsearchCli::parse();
    logging::init(cli.verbose);

    match run(&cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(CliError::MissingSearchArguments) => {
            let _ = FlightsearchCli::command().print_help();
            println!("\nError: {}", CliError::MissingSearchArguments);
            ExitCode::from(CliError::MissingSearchArguments.exit_code())
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(cli: &FlightsearchCli) -> Result<String, CliError> {
    let plan = flightsearch::plan(cli)?;
    let search = FlightSearch::from_env(cli.timeout_ms);
    flightsearch::run(cli, plan, &search).await
}
