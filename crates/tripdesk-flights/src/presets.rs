//! Named trips searched over every outbound/return date combination.

use std::fmt::{Display, Formatter};

use crate::{AirportCode, SearchParams, TripDate, ValidationError};

/// A saved trip with candidate departure and return dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub origin: &'static str,
    pub destination: &'static str,
    pub outbound_dates: &'static [&'static str],
    pub return_dates: &'static [&'static str],
    pub passengers: u32,
}

pub const COLORADO_TRIP: TripPreset = TripPreset {
    name: "colorado_trip",
    description: "Colorado snowboarding trip - Jan 2026",
    origin: "PHL",
    destination: "DEN",
    // Fri or Sat out, Mon through Thu back.
    outbound_dates: &["2026-01-23", "2026-01-24"],
    return_dates: &["2026-01-26", "2026-01-27", "2026-01-28", "2026-01-29"],
    passengers: 2,
};

pub const PRESETS: &[TripPreset] = &[COLORADO_TRIP];

pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|preset| preset.name).collect()
}

pub fn find_preset(name: &str) -> Result<&'static TripPreset, ValidationError> {
    PRESETS
        .iter()
        .find(|preset| preset.name == name)
        .ok_or_else(|| ValidationError::UnknownPreset {
            name: name.to_owned(),
            available: preset_names().join(", "),
        })
}

impl TripPreset {
    /// Every outbound × return pairing, outbound-major.
    pub fn combinations(&self) -> Result<Vec<SearchParams>, ValidationError> {
        let origin = AirportCode::parse(self.origin)?;
        let destination = AirportCode::parse(self.destination)?;

        let mut combos = Vec::with_capacity(self.outbound_dates.len() * self.return_dates.len());
        for depart in self.outbound_dates {
            let depart = TripDate::parse(depart)?;
            for return_date in self.return_dates {
                combos.push(SearchParams::new(
                    origin.clone(),
                    destination.clone(),
                    depart,
                    TripDate::parse(return_date)?,
                    self.passengers,
                )?);
            }
        }

        Ok(combos)
    }
}

/// Multi-line summary used by `--list-presets`.
impl Display for TripPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  {}: {}", self.name, self.description)?;
        writeln!(f, "    Route: {} → {}", self.origin, self.destination)?;
        writeln!(f, "    Outbound: {}", self.outbound_dates.join(", "))?;
        write!(f, "    Return: {}", self.return_dates.join(", "))
    }
}
