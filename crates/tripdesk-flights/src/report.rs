//! Text and JSON renderings of search results.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::links::points_urls;
use crate::{FlightError, SearchResult};

const MAX_LISTED_OFFERS: usize = 5;
const HEAVY_RULE_WIDTH: usize = 70;
const LIGHT_RULE_WIDTH: usize = 50;

/// Human-readable report; points portals are listed once at the end.
pub fn format_text(results: &[SearchResult]) -> String {
    let heavy_rule = "=".repeat(HEAVY_RULE_WIDTH);
    let mut lines = vec![
        heavy_rule.clone(),
        String::from("FLIGHT SEARCH RESULTS"),
        heavy_rule.clone(),
    ];

    for result in results {
        let params = &result.search_params;
        lines.push(String::new());
        lines.push(format!("Route: {} → {}", params.origin, params.destination));
        lines.push(format!(
            "Dates: {} to {}",
            params.depart_date, params.return_date
        ));
        lines.push(format!("Passengers: {}", params.passengers));
        lines.push("-".repeat(LIGHT_RULE_WIDTH));

        match result.api_results.as_deref() {
            Some(offers) if !offers.is_empty() => {
                lines.push(String::from("API RESULTS (prices in USD):"));
                for (index, offer) in offers.iter().take(MAX_LISTED_OFFERS).enumerate() {
                    lines.push(format!(
                        "  {}. ${:.2} - {}",
                        index + 1,
                        offer.price,
                        offer.airlines.join(", ")
                    ));
                }
            }
            _ => lines.push(String::from("API: Not available (check URLs below)")),
        }

        lines.push(String::new());
        lines.push(String::from("SEARCH URLS (click to compare prices):"));
        push_links(&mut lines, &result.urls);
        lines.push(String::new());
    }

    lines.push(heavy_rule);
    lines.push(String::from("POINTS PORTALS:"));
    match results.first() {
        Some(first) => push_links(&mut lines, &first.points_urls),
        None => push_links(&mut lines, &points_urls()),
    }

    lines.push(String::new());
    lines.push(String::from(
        "NOTE: Points redemption values vary. Check portals for current rates:",
    ));
    lines.push(String::from(
        "  - Chase UR: Often 1.25-1.5 cents/point via portal",
    ));
    lines.push(String::from("  - Citi TY: Often 1-1.25 cents/point via portal"));
    lines.push(String::from("  - Transfer partners may offer better value"));

    lines.join("\n")
}

/// Pretty-printed JSON array of results.
pub fn format_json(results: &[SearchResult]) -> Result<String, FlightError> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Write results as pretty JSON, regardless of the display format.
pub fn save_json(path: &Path, results: &[SearchResult]) -> Result<(), FlightError> {
    let payload = format_json(results)?;
    fs::write(path, payload)?;
    debug!(path = %path.display(), count = results.len(), "saved search results");
    Ok(())
}

fn push_links(lines: &mut Vec<String>, links: &BTreeMap<String, String>) {
    for (name, url) in links {
        lines.push(format!("  • {}: {url}", title_case(name)));
    }
}

/// `google_flights` → `Google Flights`.
fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
