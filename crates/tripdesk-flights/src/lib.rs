//! # tripdesk flights
//!
//! Round-trip flight research helpers: comparison-site links, credit-card
//! points portals, saved trip presets and optional Amadeus price lookups.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Amadeus flight-offers client |
//! | [`domain`] | Airport codes, trip dates, offers, results |
//! | [`error`] | Validation and top-level errors |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`links`] | Google Flights, Kayak, Skyscanner, Southwest and portal URLs |
//! | [`presets`] | Built-in trips |
//! | [`price_source`] | Price source trait and API errors |
//! | [`report`] | Text/JSON output and saving |
//! | [`search`] | Search orchestration |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tripdesk_flights::{report, FlightSearch, SearchParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let params = SearchParams::parse("PHL", "DEN", "2026-01-24", "2026-01-26", 2)?;
//!     let result = FlightSearch::from_env(10_000).search(params, true).await;
//!     println!("{}", report::format_text(&[result]));
//!     Ok(())
//! }
//! ```
//!
//! ## Security
//!
//! Amadeus credentials are read from the environment only and are redacted
//! from `Debug` output and logs.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod links;
pub mod presets;
pub mod price_source;
pub mod report;
pub mod search;

pub use adapters::{AmadeusClient, AmadeusConfig};
pub use domain::{AirportCode, FlightOffer, FlightSegment, SearchParams, SearchResult, TripDate};
pub use error::{FlightError, ValidationError};
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use presets::{find_preset, TripPreset, PRESETS};
pub use price_source::{ApiError, ApiErrorKind, PriceSource};
pub use search::FlightSearch;
