use tracing::debug;
use tripdesk_calendar::{CalendarDate, DateCalculator};

use crate::cli::{DateCommand, DatePairArgs, SingleDateArgs};
use crate::error::CliError;

/// Run one calendar command and return the text to print.
///
/// Every argument is validated before anything is rendered, so a failing
/// `range` never prints a partial listing.
pub fn run(command: &DateCommand, calculator: &DateCalculator) -> Result<String, CliError> {
    debug!(?command, timezone = %calculator.config().timezone(), "running date command");

    let output = match command {
        DateCommand::Now => calculator.now().to_string(),
        DateCommand::Day(args) => calculator.day_of_week(single(args)?).to_string(),
        DateCommand::Diff(args) => {
            let (from, to) = pair(args)?;
            calculator.day_difference(from, to).to_string()
        }
        DateCommand::Range(args) => {
            let (start, end) = pair(args)?;
            calculator.list_range(start, end).to_string()
        }
        DateCommand::Until(args) => calculator.days_until(single(args)?).to_string(),
    };

    Ok(output)
}

fn single(args: &SingleDateArgs) -> Result<CalendarDate, CliError> {
    Ok(CalendarDate::from_arg("DATE", args.date.as_deref())?)
}

fn pair(args: &DatePairArgs) -> Result<(CalendarDate, CalendarDate), CliError> {
    let first = CalendarDate::from_arg("DATE1", args.first.as_deref())?;
    let second = CalendarDate::from_arg("DATE2", args.second.as_deref())?;
    Ok((first, second))
}
