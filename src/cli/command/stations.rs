//! Scrape the station directory listing and save it as JSON.

use std::fs;

use anyhow::{Context, Result};

use crate::{
    cli::create_spinner,
    json,
    scrape::StationExtractor,
    station::{self, Stations},
};

use super::{input_file_name, output_file_name};

pub fn stations() -> Result<String> {
    let input_file = input_file_name();
    let html = fs::read_to_string(&input_file)
        .with_context(|| format!("Failed to read station listing `{}`", input_file.display()))?;

    let bar = create_spinner("Parsing station listing...".to_string());
    let stations = extract_stations(&html)?;
    bar.finish_with_message(format!("Parsed {} stations", stations.len()));

    report_column_lengths(&stations);

    let output_file = output_file_name();
    let bar = create_spinner("Saving station records...".to_string());
    json::save_stations(&stations, &output_file)?;
    bar.finish_with_message("Station records saved");

    Ok(output_file.to_string_lossy().to_string())
}

/// Runs the extractor over one whole document.
pub fn extract_stations(html: &str) -> Result<Stations> {
    let mut extractor = StationExtractor::default();
    extractor.feed(html)?;

    Ok(extractor.into_stations())
}

// Maxes inform the column widths of a downstream fixed-width schema
fn report_column_lengths(stations: &Stations) {
    for (column, length) in station::column_lengths(stations) {
        println!("Max {} length: {}", column, length);
    }
}

// -- Tests -------------------------------------------------------------------
