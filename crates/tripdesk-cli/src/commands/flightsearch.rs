use std::fmt::Write as _;

use tracing::info;
use tripdesk_flights::{find_preset, report, FlightSearch, SearchParams, SearchResult, PRESETS};

use crate::cli::FlightsearchCli;
use crate::error::CliError;

/// What the parsed options ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPlan {
    ListPresets,
    Preset(String),
    Manual(SearchParams),
}

/// Decide what to run; a preset wins over manual parameters.
pub fn plan(cli: &FlightsearchCli) -> Result<SearchPlan, CliError> {
    if cli.list_presets {
        return Ok(SearchPlan::ListPresets);
    }
    if let Some(name) = &cli.preset {
        return Ok(SearchPlan::Preset(name.clone()));
    }

    match (&cli.origin, &cli.dest, &cli.depart, &cli.return_date) {
        (Some(origin), Some(dest), Some(depart), Some(return_date)) => Ok(SearchPlan::Manual(
            SearchParams::parse(origin, dest, depart, return_date, cli.passengers)?,
        )),
        _ => Err(CliError::MissingSearchArguments),
    }
}

/// Preset listing printed by `--list-presets`.
pub fn preset_listing() -> String {
    let mut listing = String::from("Available presets:");
    for preset in PRESETS {
        let _ = write!(listing, "\n{preset}");
    }
    listing
}

/// Execute a plan and render the results for stdout.
pub async fn run(
    cli: &FlightsearchCli,
    plan: SearchPlan,
    search: &FlightSearch,
) -> Result<String, CliError> {
    let use_api = !cli.no_api;
    let results: Vec<SearchResult> = match plan {
        SearchPlan::ListPresets => return Ok(preset_listing()),
        SearchPlan::Preset(name) => {
            let preset = find_preset(&name)?;
            search.search_preset(preset, use_api).await?
        }
        SearchPlan::Manual(params) => vec![search.search(params, use_api).await],
    };

    let output = if cli.json {
        report::format_json(&results)?
    } else {
        report::format_text(&results)
    };

    if let Some(path) = &cli.save {
        report::save_json(path, &results)?;
        info!(path = %path.display(), "saved results");
        eprintln!("\nResults saved to: {}", path.display());
    }

    Ok(output)
}
