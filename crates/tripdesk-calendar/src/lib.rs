//! # tripdesk calendar
//!
//! Day-of-week lookups, day counts and date listings over civil dates,
//! with "now" and "today" resolved in one configurable IANA timezone.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`calculator`] | [`DateCalculator`] and its rendered results |
//! | [`clock`] | Injectable current-time source |
//! | [`config`] | Timezone configuration |
//! | [`date`] | Strict `YYYY-MM-DD` civil date |
//! | [`error`] | Argument and configuration errors |
//!
//! ## Quick Start
//!
//! ```rust
//! use tripdesk_calendar::{CalendarDate, DateCalculator};
//!
//! let calc = DateCalculator::default();
//! let date = CalendarDate::parse("2026-01-24").unwrap();
//! assert_eq!(
//!     calc.day_of_week(date).to_string(),
//!     "2026-01-24 is Saturday, January 24, 2026"
//! );
//! ```

pub mod calculator;
pub mod clock;
pub mod config;
pub mod date;
pub mod error;

pub use calculator::{
    Countdown, DateCalculator, DayDifference, DayOfWeek, RangeListing, Timestamp, RANGE_SEPARATOR,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CalendarConfig, DEFAULT_TIMEZONE};
pub use date::CalendarDate;
pub use error::CalendarError;
