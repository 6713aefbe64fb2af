pub mod stations;

use std::path::PathBuf;

pub use stations::stations;

/// Fixed location of the scraped directory listing.
pub fn input_file_name() -> PathBuf {
    PathBuf::from("data/noaa_station_list.html")
}

/// Fixed location of the generated station records.
pub fn output_file_name() -> PathBuf {
    PathBuf::from("data/noaa_station_list.json")
}
