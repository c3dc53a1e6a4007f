//! # Domain Models
//!
//! Validated value types shared by link builders, presets and price sources.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AirportCode`] | Three-letter IATA code |
//! | [`TripDate`] | `YYYY-MM-DD` travel date |
//! | [`SearchParams`] | Round-trip search request |
//! | [`FlightOffer`] | Priced itinerary |
//! | [`SearchResult`] | Links and offers for one date combination |

mod airport;
mod search;
mod trip_date;

pub use airport::AirportCode;
pub use search::{FlightOffer, FlightSegment, SearchParams, SearchResult};
pub use trip_date::TripDate;
