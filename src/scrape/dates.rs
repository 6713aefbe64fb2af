//! Date-range normalisation for station date fields.
//!
//! A date field reads `"<start> - <end>"`, where the start may be blank and
//! the end is either a concrete date or the word `present`.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;

/// The listing's one and only date shape, e.g. `Jan 15, 1998`.
const INPUT_FORMAT: &str = "%b %d, %Y";
const ISO_8601: &str = "%Y-%m-%d";

/// Normalised form of one date field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
    pub active: bool,
}

/// Splits a date field on its first `-` and normalises both halves to
/// `YYYY-MM-DD`. A blank start half stays blank; an end half containing
/// `present` (any case) leaves the end blank and marks the station active.
/// Anything else must match the fixed input shape or the run fails.
pub fn parse_date_range(text: &str) -> Result<DateRange> {
    let (start, end) = text
        .split_once('-')
        .ok_or_else(|| anyhow!("Missing `-` separator in date field `{}`", text))?;

    let start = start.trim();
    let start_date = if start.is_empty() {
        String::new()
    } else {
        to_iso_8601(start)?
    };

    let end = end.trim();
    let (end_date, active) = if end.to_lowercase().contains("present") {
        (String::new(), true)
    } else {
        (to_iso_8601(end)?, false)
    };

    Ok(DateRange {
        start_date,
        end_date,
        active,
    })
}

fn to_iso_8601(text: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(text, INPUT_FORMAT)
        .with_context(|| format!("Invalid date `{}`, expected e.g. `Jan 15, 1998`", text))?;

    Ok(date.format(ISO_8601).to_string())
}

// -- Tests -------------------------------------------------------------------
