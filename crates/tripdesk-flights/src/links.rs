//! Comparison-shopping and points-portal links for a round trip.

use std::collections::BTreeMap;

use crate::SearchParams;

pub const CHASE_ULTIMATE_REWARDS_URL: &str = "https://ultimaterewardspoints.chase.com/travel";
pub const CITI_THANKYOU_URL: &str = "https://www.thankyou.com/cms/thankyou/travel.page";

const SOUTHWEST_BOOKING_URL: &str = "https://www.southwest.com/air/booking/select.html";

pub fn google_flights_url(params: &SearchParams) -> String {
    format!(
        "https://www.google.com/travel/flights?q=Flights+to+{}+from+{}+on+{}+through+{}",
        params.destination, params.origin, params.depart_date, params.return_date
    )
}

/// The trailing passenger segment is left empty for a single traveller.
pub fn kayak_url(params: &SearchParams) -> String {
    let passengers = if params.passengers > 1 {
        format!("{}adults", params.passengers)
    } else {
        String::new()
    };

    format!(
        "https://www.kayak.com/flights/{}-{}/{}/{}/{passengers}",
        params.origin, params.destination, params.depart_date, params.return_date
    )
}

pub fn skyscanner_url(params: &SearchParams) -> String {
    format!(
        "https://www.skyscanner.com/transport/flights/{}/{}/{}/{}/",
        params.origin.to_lowercase(),
        params.destination.to_lowercase(),
        params.depart_date.compact(),
        params.return_date.compact()
    )
}

pub fn southwest_url(params: &SearchParams) -> String {
    let passengers = params.passengers.to_string();
    let depart = params.depart_date.iso();
    let return_date = params.return_date.iso();
    let query = [
        ("originationAirportCode", params.origin.as_str()),
        ("destinationAirportCode", params.destination.as_str()),
        ("returnAirportCode", ""),
        ("departureDate", depart.as_str()),
        ("departureTimeOfDay", "ALL_DAY"),
        ("returnDate", return_date.as_str()),
        ("returnTimeOfDay", "ALL_DAY"),
        ("adultPassengersCount", passengers.as_str()),
        ("seniorPassengersCount", "0"),
        ("tripType", "roundtrip"),
        ("fareType", "USD"),
        ("passengerType", "ADULT"),
        ("reset", "true"),
        ("int", "HOMEQBOMAIR"),
    ];

    format!("{SOUTHWEST_BOOKING_URL}?{}", encode_query(&query))
}

/// Fare-comparison links keyed by site name.
pub fn search_urls(params: &SearchParams) -> BTreeMap<String, String> {
    BTreeMap::from([
        (String::from("google_flights"), google_flights_url(params)),
        (String::from("kayak"), kayak_url(params)),
        (String::from("skyscanner"), skyscanner_url(params)),
        (String::from("southwest"), southwest_url(params)),
    ])
}

/// Credit-card travel portals; independent of the trip.
pub fn points_urls() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            String::from("chase_ultimate_rewards"),
            String::from(CHASE_ULTIMATE_REWARDS_URL),
        ),
        (String::from("citi_thankyou"), String::from(CITI_THANKYOU_URL)),
    ])
}

pub(crate) fn encode_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
