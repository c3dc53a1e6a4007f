//! Day-of-week and day-count operations anchored to one timezone.
//!
//! Every operation returns a small result value whose [`Display`] impl is the
//! exact text printed by the `datecalc` binary.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use chrono::{DateTime, NaiveTime, Offset, TimeZone};
use chrono_tz::Tz;
use tracing::debug;

use crate::{CalendarConfig, CalendarDate, Clock, SystemClock};

/// Separator printed under the `range` header.
pub const RANGE_SEPARATOR: &str = "------------------------------";

const SECONDS_PER_DAY: i64 = 86_400;

/// Stateless calculator over civil dates.
///
/// Day counts are measured between local midnights in the configured zone and
/// truncated toward zero, so a span containing a spring-forward transition is
/// one hour short of whole days and counts one day less.
#[derive(Clone)]
pub struct DateCalculator {
    config: CalendarConfig,
    clock: Arc<dyn Clock>,
}

impl Default for DateCalculator {
    fn default() -> Self {
        Self::new(CalendarConfig::default())
    }
}

impl DateCalculator {
    pub fn new(config: CalendarConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: CalendarConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Current instant in the configured zone.
    pub fn now(&self) -> Timestamp {
        let local = self.clock.now().with_timezone(&self.config.timezone());
        debug!(timezone = %self.config.timezone(), %local, "resolved current instant");
        Timestamp { local }
    }

    /// Current civil date in the configured zone.
    pub fn today(&self) -> CalendarDate {
        self.now().date()
    }

    pub fn day_of_week(&self, date: CalendarDate) -> DayOfWeek {
        DayOfWeek { date }
    }

    pub fn day_difference(&self, from: CalendarDate, to: CalendarDate) -> DayDifference {
        DayDifference {
            from,
            to,
            days: self.elapsed_days(from, to),
        }
    }

    /// Every day from `start` to `end` inclusive; empty when `start > end`.
    pub fn list_range(&self, start: CalendarDate, end: CalendarDate) -> RangeListing {
        let days = std::iter::successors(Some(start), |date| date.succ())
            .take_while(|date| *date <= end)
            .collect::<Vec<_>>();
        debug!(%start, %end, count = days.len(), "listed date range");

        RangeListing { start, end, days }
    }

    pub fn days_until(&self, target: CalendarDate) -> Countdown {
        let today = self.today();
        Countdown {
            target,
            days: self.elapsed_days(today, target),
        }
    }

    fn elapsed_days(&self, from: CalendarDate, to: CalendarDate) -> i64 {
        (self.midnight_epoch(to) - self.midnight_epoch(from)) / SECONDS_PER_DAY
    }

    /// Unix seconds of local midnight starting `date`.
    ///
    /// An ambiguous midnight resolves to its earlier instant. A midnight
    /// skipped by a transition is read with the offset in force at that wall
    /// time taken as UTC.
    fn midnight_epoch(&self, date: CalendarDate) -> i64 {
        let tz = self.config.timezone();
        let midnight = date.into_naive().and_time(NaiveTime::MIN);
        match tz.from_local_datetime(&midnight).earliest() {
            Some(instant) => instant.timestamp(),
            None => {
                let offset = tz.offset_from_utc_datetime(&midnight).fix();
                midnight.and_utc().timestamp() - i64::from(offset.local_minus_utc())
            }
        }
    }
}

/// The current instant resolved in a named zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    local: DateTime<Tz>,
}

impl Timestamp {
    pub fn date(&self) -> CalendarDate {
        CalendarDate::from_naive(self.local.date_naive())
    }

    pub const fn local(&self) -> DateTime<Tz> {
        self.local
    }

    /// `Saturday, January 24, 2026 09:05 AM EST`.
    pub fn headline(&self) -> String {
        self.local.format("%A, %B %d, %Y %I:%M %p %Z").to_string()
    }

    /// Zone abbreviation in effect at this instant (`EST` or `EDT`, ...).
    pub fn zone_abbreviation(&self) -> String {
        self.local.format("%Z").to_string()
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.headline(), self.date())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOfWeek {
    pub date: CalendarDate,
}

impl Display for DayOfWeek {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is {}", self.date, self.date.long_form())
    }
}

/// Signed day count between two dates, always phrased earlier → later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayDifference {
    pub from: CalendarDate,
    pub to: CalendarDate,
    pub days: i64,
}

impl DayDifference {
    pub fn magnitude(&self) -> u64 {
        self.days.unsigned_abs()
    }

    pub fn earlier(&self) -> CalendarDate {
        if self.days >= 0 {
            self.from
        } else {
            self.to
        }
    }

    pub fn later(&self) -> CalendarDate {
        if self.days >= 0 {
            self.to
        } else {
            self.from
        }
    }
}

impl Display for DayDifference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} days from {} to {}",
            self.magnitude(),
            self.earlier(),
            self.later()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeListing {
    pub start: CalendarDate,
    pub end: CalendarDate,
    pub days: Vec<CalendarDate>,
}

impl RangeListing {
    pub fn header(&self) -> String {
        format!("Dates from {} to {}:", self.start, self.end)
    }

    /// One `YYYY-MM-DD (Weekday)` line per listed day.
    pub fn day_lines(&self) -> Vec<String> {
        self.days
            .iter()
            .map(|date| format!("{date} ({})", date.weekday_name()))
            .collect()
    }
}

impl Display for RangeListing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{RANGE_SEPARATOR}", self.header())?;
        for line in self.day_lines() {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

/// Days from today to a target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub target: CalendarDate,
    pub days: i64,
}

impl Display for Countdown {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let weekday = self.target.weekday_name();
        match self.days {
            0 => write!(f, "{} is today! ({weekday})", self.target),
            days if days > 0 => write!(f, "{days} days until {} ({weekday})", self.target),
            days => write!(
                f,
                "{} was {} days ago ({weekday})",
                self.target,
                days.unsigned_abs()
            ),
        }
    }
}
