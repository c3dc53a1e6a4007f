use thiserror::Error;
use tripdesk_flights::FlightError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Calendar(#[from] tripdesk_calendar::CalendarError),

    #[error(transparent)]
    Validation(#[from] tripdesk_flights::ValidationError),

    #[error("Either --config or all of --origin, --dest, --depart, --return are required")]
    MissingSearchArguments,

    #[error(transparent)]
    Flight(#[from] FlightError),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Calendar(_) => 1,
            Self::Validation(_) => 1,
            Self::MissingSearchArguments => 1,
            Self::Flight(FlightError::Validation(_)) => 1,
            Self::Flight(FlightError::Api(_)) => 3,
            Self::Flight(FlightError::Serialization(_)) => 4,
            Self::Flight(FlightError::Io(_)) => 10,
        }
    }
}
