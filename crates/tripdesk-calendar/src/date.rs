use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};

use crate::CalendarError;

const ISO_DATE_LEN: usize = 10;

/// Civil calendar day serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parse a strict `YYYY-MM-DD` string.
    ///
    /// Shape errors (wrong length, separators, non-ASCII digits) are reported
    /// as [`CalendarError::InvalidFormat`]; well-shaped strings that do not
    /// name a real day (`2026-02-30`) as [`CalendarError::InvalidDate`].
    pub fn parse(input: &str) -> Result<Self, CalendarError> {
        if !has_iso_shape(input) {
            return Err(CalendarError::InvalidFormat {
                value: input.to_owned(),
            });
        }

        let invalid = || CalendarError::InvalidDate {
            value: input.to_owned(),
        };

        // Shape is ASCII-only, so these slices sit on char boundaries.
        let year = input[0..4].parse::<i32>().map_err(|_| invalid())?;
        let month = input[5..7].parse::<u32>().map_err(|_| invalid())?;
        let day = input[8..10].parse::<u32>().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Parse a positional argument that may be absent.
    pub fn from_arg(name: &'static str, value: Option<&str>) -> Result<Self, CalendarError> {
        match value {
            Some(raw) => Self::parse(raw),
            None => Err(CalendarError::MissingArgument { name }),
        }
    }

    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub const fn into_naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Full English weekday name, e.g. `Saturday`.
    pub fn weekday_name(self) -> String {
        self.0.format("%A").to_string()
    }

    /// `Saturday, January 24, 2026`.
    pub fn long_form(self) -> String {
        self.0.format("%A, %B %d, %Y").to_string()
    }

    /// The following civil day, or `None` past the end of the supported range.
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl TryFrom<&str> for CalendarDate {
    type Error = CalendarError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

fn has_iso_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == ISO_DATE_LEN
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}
