use std::fmt::{Debug, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use crate::http_client::{HttpAuth, HttpClient, HttpError, HttpRequest, ReqwestHttpClient};
use crate::links::encode_query;
use crate::price_source::{ApiError, PriceSource};
use crate::{FlightOffer, FlightSegment, SearchParams};

pub const DEFAULT_AMADEUS_BASE_URL: &str = "https://test.api.amadeus.com";
pub const AMADEUS_API_KEY_ENV: &str = "AMADEUS_API_KEY";
pub const AMADEUS_API_SECRET_ENV: &str = "AMADEUS_API_SECRET";
pub const AMADEUS_BASE_URL_ENV: &str = "AMADEUS_BASE_URL";

const MAX_OFFERS: u32 = 10;

/// Credentials and endpoint for the Amadeus self-service API.
#[derive(Clone, PartialEq, Eq)]
pub struct AmadeusConfig {
    api_key: String,
    api_secret: String,
    base_url: String,
    timeout_ms: u64,
}

impl AmadeusConfig {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: String::from(DEFAULT_AMADEUS_BASE_URL),
            timeout_ms: 10_000,
        }
    }

    /// Read credentials from `AMADEUS_API_KEY` / `AMADEUS_API_SECRET`.
    ///
    /// Returns `None` unless both are set and non-empty.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let config = Self::new(present(AMADEUS_API_KEY_ENV)?, present(AMADEUS_API_SECRET_ENV)?);
        Some(match present(AMADEUS_BASE_URL_ENV) {
            Some(base_url) => config.with_base_url(base_url),
            None => config,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Debug for AmadeusConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmadeusConfig")
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Amadeus flight-offers client with a cached OAuth bearer token.
pub struct AmadeusClient {
    config: AmadeusConfig,
    http_client: Arc<dyn HttpClient>,
    token: Mutex<Option<String>>,
}

impl AmadeusClient {
    pub fn new(config: AmadeusConfig) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(config: AmadeusConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
            token: Mutex::new(None),
        }
    }

    pub const fn config(&self) -> &AmadeusConfig {
        &self.config
    }

    /// Drop the cached token so the next call re-authenticates.
    pub fn invalidate_token(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn cached_token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn access_token(&self) -> Result<String, ApiError> {
        if let Some(token) = self.cached_token() {
            return Ok(token);
        }

        let token = self.authenticate().await?;
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.clone());
        Ok(token)
    }

    async fn authenticate(&self) -> Result<String, ApiError> {
        let url = format!("{}/v1/security/oauth2/token", self.config.base_url);
        let request = HttpRequest::post_form(
            url,
            &[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.api_key.as_str()),
                ("client_secret", self.config.api_secret.as_str()),
            ],
        )
        .with_timeout(self.config.timeout());

        debug!("requesting amadeus access token");
        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|error| transport_error("amadeus auth", &error))?;
        if !response.is_success() {
            return Err(ApiError::from_status("amadeus auth", response.status));
        }

        let payload: AmadeusTokenResponse = serde_json::from_str(&response.body).map_err(|e| {
            ApiError::invalid_response(format!("failed to parse amadeus token response: {e}"))
        })?;
        payload
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::unauthorized("amadeus auth response carried no access_token"))
    }

    fn offers_request(&self, params: &SearchParams, token: String) -> HttpRequest {
        let adults = params.passengers.to_string();
        let depart = params.depart_date.iso();
        let return_date = params.return_date.iso();
        let max = MAX_OFFERS.to_string();
        let query = encode_query(&[
            ("originLocationCode", params.origin.as_str()),
            ("destinationLocationCode", params.destination.as_str()),
            ("departureDate", depart.as_str()),
            ("returnDate", return_date.as_str()),
            ("adults", adults.as_str()),
            ("nonStop", "false"),
            ("currencyCode", "USD"),
            ("max", max.as_str()),
        ]);

        HttpRequest::get(format!(
            "{}/v2/shopping/flight-offers?{query}",
            self.config.base_url
        ))
        .with_auth(HttpAuth::BearerToken(token))
        .with_timeout(self.config.timeout())
    }

    async fn fetch_offers(&self, params: &SearchParams) -> Result<Vec<FlightOffer>, ApiError> {
        let token = self.access_token().await?;
        let mut response = self
            .http_client
            .execute(self.offers_request(params, token))
            .await
            .map_err(|error| transport_error("amadeus search", &error))?;

        // Tokens expire after ~30 minutes; refresh once on 401.
        if response.status == 401 {
            debug!("amadeus token rejected, re-authenticating");
            self.invalidate_token();
            let token = self.access_token().await?;
            response = self
                .http_client
                .execute(self.offers_request(params, token))
                .await
                .map_err(|error| transport_error("amadeus search", &error))?;
        }

        if !response.is_success() {
            return Err(ApiError::from_status("amadeus search", response.status));
        }

        let offers = parse_offers(&response.body)?;
        info!(
            origin = %params.origin,
            destination = %params.destination,
            count = offers.len(),
            "amadeus returned offers"
        );
        Ok(offers)
    }
}

impl PriceSource for AmadeusClient {
    fn name(&self) -> &'static str {
        "Amadeus"
    }

    fn offers<'a>(
        &'a self,
        params: &'a SearchParams,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<FlightOffer>, ApiError>> + Send + 'a>> {
        Box::pin(self.fetch_offers(params))
    }
}

fn transport_error(context: &str, error: &HttpError) -> ApiError {
    let message = format!("{context} transport error: {error}");
    if error.retryable() {
        ApiError::unavailable(message)
    } else {
        ApiError::invalid_response(message)
    }
}

/// Flatten an Amadeus flight-offers payload.
pub fn parse_offers(body: &str) -> Result<Vec<FlightOffer>, ApiError> {
    let payload: AmadeusOffersResponse = serde_json::from_str(body).map_err(|e| {
        ApiError::invalid_response(format!("failed to parse amadeus offers response: {e}"))
    })?;

    payload
        .data
        .into_iter()
        .map(|offer| {
            let price = offer.price.unwrap_or_default();
            let total = match price.total.as_deref() {
                Some(raw) => raw.parse::<f64>().map_err(|_| {
                    ApiError::invalid_response(format!("amadeus price total '{raw}' is not a number"))
                })?,
                None => 0.0,
            };

            let segments = offer
                .itineraries
                .into_iter()
                .flat_map(|itinerary| itinerary.segments)
                .map(AmadeusSegment::into_segment)
                .collect();

            Ok(FlightOffer::new(
                total,
                price.currency.unwrap_or_else(|| String::from("USD")),
                segments,
            ))
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct AmadeusTokenResponse {
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AmadeusOffersResponse {
    #[serde(default)]
    data: Vec<AmadeusOffer>,
}

#[derive(Debug, Deserialize)]
struct AmadeusOffer {
    #[serde(default)]
    price: Option<AmadeusPrice>,
    #[serde(default)]
    itineraries: Vec<AmadeusItinerary>,
}

#[derive(Debug, Default, Deserialize)]
struct AmadeusPrice {
    total: Option<String>,
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AmadeusItinerary {
    #[serde(default)]
    segments: Vec<AmadeusSegment>,
}

#[derive(Debug, Deserialize)]
struct AmadeusSegment {
    departure: Option<AmadeusEndpoint>,
    arrival: Option<AmadeusEndpoint>,
    #[serde(rename = "carrierCode")]
    carrier_code: Option<String>,
    number: Option<String>,
    duration: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct AmadeusEndpoint {
    #[serde(rename = "iataCode")]
    iata_code: Option<String>,
    at: Option<String>,
}

impl AmadeusSegment {
    fn into_segment(self) -> FlightSegment {
        let departure = self.departure.unwrap_or_default();
        let arrival = self.arrival.unwrap_or_default();
        FlightSegment {
            departure: departure.iata_code,
            arrival: arrival.iata_code,
            departure_time: departure.at,
            arrival_time: arrival.at,
            carrier: self.carrier_code,
            flight_number: self.number,
            duration: self.duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn config_requires_both_credentials() {
        let env = HashMap::from([(AMADEUS_API_KEY_ENV, "key")]);
        assert!(AmadeusConfig::from_lookup(|name| env.get(name).map(|v| v.to_string())).is_none());

        let env = HashMap::from([(AMADEUS_API_KEY_ENV, "key"), (AMADEUS_API_SECRET_ENV, "  ")]);
        assert!(AmadeusConfig::from_lookup(|name| env.get(name).map(|v| v.to_string())).is_none());
    }

    #[test]
    fn config_honors_base_url_override() {
        let env = HashMap::from([
            (AMADEUS_API_KEY_ENV, "key"),
            (AMADEUS_API_SECRET_ENV, "secret"),
            (AMADEUS_BASE_URL_ENV, "https://api.amadeus.com/"),
        ]);
        let config = AmadeusConfig::from_lookup(|name| env.get(name).map(|v| v.to_string()))
            .expect("configured");
        assert_eq!(config.base_url(), "https://api.amadeus.com");
    }

    #[test]
    fn debug_output_redacts_credentials() {
        let rendered = format!("{:?}", AmadeusConfig::new("my-key", "my-secret"));
        assert!(!rendered.contains("my-key"));
        assert!(!rendered.contains("my-secret"));
    }

    #[test]
    fn parses_offer_payload() {
        let body = r#"{
            "data": [{
                "price": {"total": "412.30", "currency": "USD"},
                "itineraries": [
                    {"segments": [{
                        "departure": {"iataCode": "PHL", "at": "2026-01-24T07:00:00"},
                        "arrival": {"iataCode": "DEN", "at": "2026-01-24T09:35:00"},
                        "carrierCode": "UA", "number": "1234", "duration": "PT4H35M"
                    }]},
                    {"segments": [{
                        "departure": {"iataCode": "DEN"},
                        "arrival": {"iataCode": "PHL"},
                        "carrierCode": "F9", "number": "88"
                    }]}
                ]
            }]
        }"#;

        let offers = parse_offers(body).expect("valid payload");
        assert_eq!(offers.len(), 1);
        let offer = &offers[0];
        assert!((offer.price - 412.30).abs() < f64::EPSILON);
        assert_eq!(offer.currency, "USD");
        assert_eq!(offer.segments.len(), 2);
        assert_eq!(offer.segments[0].departure_time.as_deref(), Some("2026-01-24T07:00:00"));
        assert_eq!(offer.airlines, vec!["F9", "UA"]);
    }

    #[test]
    fn empty_payload_yields_no_offers() {
        assert!(parse_offers("{}").expect("valid").is_empty());
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let err = parse_offers(r#"{"data":[{"price":{"total":"n/a"}}]}"#).expect_err("must fail");
        assert_eq!(err.code(), "api.invalid_response");
    }
}
