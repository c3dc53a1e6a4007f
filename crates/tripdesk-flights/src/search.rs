//! Search orchestration: links for every trip, prices when a source is set.

use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{info, warn};

use crate::links::{points_urls, search_urls};
use crate::presets::TripPreset;
use crate::price_source::PriceSource;
use crate::{
    AmadeusClient, AmadeusConfig, FlightOffer, SearchParams, SearchResult, ValidationError,
};

/// Builds [`SearchResult`]s, optionally pricing them through a [`PriceSource`].
#[derive(Clone, Default)]
pub struct FlightSearch {
    price_source: Option<Arc<dyn PriceSource>>,
}

impl FlightSearch {
    /// Links only; price lookups report "not configured".
    pub fn links_only() -> Self {
        Self::default()
    }

    pub fn with_price_source(price_source: Arc<dyn PriceSource>) -> Self {
        Self {
            price_source: Some(price_source),
        }
    }

    /// Use Amadeus when credentials are present in the environment.
    pub fn from_env(timeout_ms: u64) -> Self {
        match AmadeusConfig::from_env() {
            Some(config) => Self::with_price_source(Arc::new(AmadeusClient::new(
                config.with_timeout_ms(timeout_ms),
            ))),
            None => Self::links_only(),
        }
    }

    pub async fn search(&self, params: SearchParams, use_api: bool) -> SearchResult {
        let api_results = if use_api {
            self.lookup_prices(&params).await
        } else {
            None
        };

        SearchResult {
            urls: search_urls(&params),
            points_urls: points_urls(),
            search_params: params,
            api_results,
            timestamp: OffsetDateTime::now_utc(),
            trip_name: None,
        }
    }

    /// Search every outbound/return combination of a preset, in order.
    pub async fn search_preset(
        &self,
        preset: &TripPreset,
        use_api: bool,
    ) -> Result<Vec<SearchResult>, ValidationError> {
        let combinations = preset.combinations()?;
        let mut results = Vec::with_capacity(combinations.len());

        for params in combinations {
            info!(
                preset = preset.name,
                "searching {} → {}", params.depart_date, params.return_date
            );
            let mut result = self.search(params, use_api).await;
            result.trip_name = Some(preset.name.to_owned());
            results.push(result);
        }

        Ok(results)
    }

    async fn lookup_prices(&self, params: &SearchParams) -> Option<Vec<FlightOffer>> {
        let Some(source) = &self.price_source else {
            warn!("Amadeus API not configured (set AMADEUS_API_KEY and AMADEUS_API_SECRET)");
            return None;
        };

        info!(
            "searching {} for {} → {}",
            source.name(),
            params.origin,
            params.destination
        );
        match source.offers(params).await {
            Ok(offers) => {
                info!(count = offers.len(), "found offers");
                Some(offers)
            }
            Err(error) => {
                warn!(code = error.code(), "{} search error: {}", source.name(), error.message());
                None
            }
        }
    }
}
