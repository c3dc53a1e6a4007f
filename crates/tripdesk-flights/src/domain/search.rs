use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{AirportCode, TripDate, ValidationError};

/// Validated round-trip search parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub depart_date: TripDate,
    pub return_date: TripDate,
    pub passengers: u32,
}

impl SearchParams {
    pub fn new(
        origin: AirportCode,
        destination: AirportCode,
        depart_date: TripDate,
        return_date: TripDate,
        passengers: u32,
    ) -> Result<Self, ValidationError> {
        if passengers == 0 {
            return Err(ValidationError::NoPassengers);
        }

        Ok(Self {
            origin,
            destination,
            depart_date,
            return_date,
            passengers,
        })
    }

    /// Parse raw command-line strings into validated parameters.
    pub fn parse(
        origin: &str,
        destination: &str,
        depart_date: &str,
        return_date: &str,
        passengers: u32,
    ) -> Result<Self, ValidationError> {
        Self::new(
            AirportCode::parse(origin)?,
            AirportCode::parse(destination)?,
            TripDate::parse(depart_date)?,
            TripDate::parse(return_date)?,
            passengers,
        )
    }
}

/// One flight leg inside an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSegment {
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub carrier: Option<String>,
    pub flight_number: Option<String>,
    pub duration: Option<String>,
}

/// Priced itinerary returned by a price source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub price: f64,
    pub currency: String,
    pub segments: Vec<FlightSegment>,
    pub airlines: Vec<String>,
}

impl FlightOffer {
    /// Build an offer, deriving the distinct sorted carrier list from segments.
    pub fn new(price: f64, currency: impl Into<String>, segments: Vec<FlightSegment>) -> Self {
        let airlines = segments
            .iter()
            .filter_map(|segment| segment.carrier.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            price,
            currency: currency.into(),
            segments,
            airlines,
        }
    }
}

/// Everything produced for one departure/return combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub search_params: SearchParams,
    pub api_results: Option<Vec<FlightOffer>>,
    pub urls: BTreeMap<String, String>,
    pub points_urls: BTreeMap<String, String>,
    /// When the result was built, serialized as RFC3339 UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_name: Option<String>,
}
