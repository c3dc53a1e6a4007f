use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::ValidationError;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const COMPACT_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[year repr:last_two][month][day]");

/// Travel date in `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TripDate(Date);

impl TripDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidTripDate {
            value: input.to_owned(),
        };

        if input.len() != 10 || !input.is_ascii() {
            return Err(invalid());
        }

        Date::parse(input, ISO_DATE).map(Self).map_err(|_| invalid())
    }

    pub fn iso(self) -> String {
        // Four-digit years always fit the format.
        self.0
            .format(ISO_DATE)
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }

    /// `YYMMDD`, as used in Skyscanner paths.
    pub fn compact(self) -> String {
        self.0
            .format(COMPACT_DATE)
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }
}

impl Display for TripDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.iso())
    }
}

impl TryFrom<String> for TripDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TripDate> for String {
    fn from(value: TripDate) -> Self {
        value.iso()
    }
}
