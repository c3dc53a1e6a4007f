mod amadeus;

pub use amadeus::{
    parse_offers, AmadeusClient, AmadeusConfig, AMADEUS_API_KEY_ENV, AMADEUS_API_SECRET_ENV,
    AMADEUS_BASE_URL_ENV, DEFAULT_AMADEUS_BASE_URL,
};
