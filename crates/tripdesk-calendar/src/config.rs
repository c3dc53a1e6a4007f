use chrono_tz::Tz;

use crate::CalendarError;

/// Zone used when no override is given.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Calculator configuration resolved once per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarConfig {
    timezone: Tz,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::America::New_York,
        }
    }
}

impl CalendarConfig {
    pub const fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Build a config from an IANA zone name such as `Europe/Berlin`.
    pub fn from_timezone_name(name: &str) -> Result<Self, CalendarError> {
        name.trim()
            .parse::<Tz>()
            .map(Self::new)
            .map_err(|_| CalendarError::UnknownTimezone {
                name: name.to_owned(),
            })
    }

    pub const fn timezone(&self) -> Tz {
        self.timezone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_zone_is_new_york() {
        assert_eq!(CalendarConfig::default().timezone().name(), DEFAULT_TIMEZONE);
    }

    #[test]
    fn parses_named_zone() {
        let config = CalendarConfig::from_timezone_name("Asia/Tokyo").expect("valid zone");
        assert_eq!(config.timezone(), chrono_tz::Asia::Tokyo);
    }

    #[test]
    fn rejects_unknown_zone() {
        let err = CalendarConfig::from_timezone_name("Mars/Olympus_Mons").expect_err("must fail");
        assert!(matches!(err, CalendarError::UnknownTimezone { .. }));
    }
}
