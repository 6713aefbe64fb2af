//! Station record and schema-sizing diagnostics.

use indexmap::IndexMap;
use serde::Serialize;

/// Station records keyed by station id, in document encounter order.
pub type Stations = IndexMap<String, Station>;

/// One weather-observation station from the directory listing.
///
/// Field order here is the field order in the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    pub station_id: String,
    pub area: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub active: bool,
}

impl Station {
    /// Seeds a record for a station encountered under `area`. The name and
    /// dates are filled in later, as their elements are walked; a station
    /// with no end date counts as active.
    pub fn new(station_id: String, area: String) -> Self {
        Station {
            station_id,
            area,
            name: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            active: true,
        }
    }
}

/// Maximum observed character length of each text column, for sizing a
/// downstream fixed-width schema. All zeroes when no stations were parsed.
pub fn column_lengths(stations: &Stations) -> [(&'static str, usize); 3] {
    [
        ("name", max_chars(stations, |s| &s.name)),
        ("area", max_chars(stations, |s| &s.area)),
        ("station_id", max_chars(stations, |s| &s.station_id)),
    ]
}

fn max_chars<F>(stations: &Stations, column: F) -> usize
where
    F: Fn(&Station) -> &str,
{
    stations
        .values()
        .map(|station| column(station).chars().count())
        .max()
        .unwrap_or(0)
}

// -- Tests -------------------------------------------------------------------
