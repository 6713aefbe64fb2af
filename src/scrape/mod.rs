//! Scraping the station directory listing: tokenizer events in, station
//! records out.

pub mod dates;
pub mod events;
pub mod extractor;

pub use extractor::StationExtractor;
