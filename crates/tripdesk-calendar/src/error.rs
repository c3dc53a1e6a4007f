use thiserror::Error;

/// Errors raised while parsing calendar arguments or configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("missing required argument {name}")]
    MissingArgument { name: &'static str },

    #[error("invalid date format '{value}', expected YYYY-MM-DD")]
    InvalidFormat { value: String },

    #[error("'{value}' is not a valid calendar date")]
    InvalidDate { value: String },

    #[error("unknown timezone '{name}'")]
    UnknownTimezone { name: String },
}
