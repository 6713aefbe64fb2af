//! Finite-state extraction of station records from the listing markup.

use std::collections::HashMap;

use anyhow::{anyhow, bail, Context, Result};
use scraper::Html;

use crate::station::{Station, Stations};

use super::{
    dates::parse_date_range,
    events::{events, MarkupEvent},
};

/// Void elements never drive the machine, whatever their attributes.
const VOID_TAGS: [&str; 3] = ["br", "hr", "img"];

/// Where the extractor is inside the document structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ParseState {
    #[default]
    Start,
    InArea,
    InStation,
    CapturingName,
    CapturingDate,
}

/// Walks tokenizer events and accumulates one record per station.
///
/// The machine runs `Start → InArea → InStation → {CapturingName,
/// CapturingDate}`, with both capturing states dropping back to `InStation`.
/// An area header is honoured from any state and replaces the single area
/// context; areas never nest. A record only reaches the output map when its
/// enclosing `div` closes, so a half-built record is abandoned rather than
/// emitted if the document moves on without closing it.
#[derive(Debug, Default)]
pub struct StationExtractor {
    stations: Stations,
    current: Option<Station>,
    state: ParseState,
    area: String,
}

impl StationExtractor {
    /// Tokenizes a whole document and runs every event through the machine.
    pub fn feed(&mut self, html: &str) -> Result<()> {
        let document = Html::parse_document(html);
        for event in events(&document) {
            self.process(&event)?;
        }

        Ok(())
    }

    /// Advances the machine by one event.
    pub fn process(&mut self, event: &MarkupEvent) -> Result<()> {
        match event {
            MarkupEvent::Start { name, attrs } => self.handle_start_tag(name, attrs),
            MarkupEvent::End { name } => self.handle_end_tag(name),
            MarkupEvent::Text(text) => self.handle_text(text),
        }
    }

    /// The finished records, keyed by station id in encounter order.
    pub fn into_stations(self) -> Stations {
        self.stations
    }

    fn handle_start_tag(&mut self, name: &str, attrs: &HashMap<String, String>) -> Result<()> {
        if VOID_TAGS.contains(&name) {
            return Ok(());
        }

        if has_marker(attrs, "areaheader") {
            self.enter_area(attrs)
        } else if has_marker(attrs, "station") {
            self.enter_station(attrs)
        } else if name == "a" && self.state == ParseState::InStation {
            self.enter_name_capture()
        } else if has_marker(attrs, "datefield") {
            self.enter_date_capture()
        } else {
            Ok(())
        }
    }

    fn handle_end_tag(&mut self, name: &str) -> Result<()> {
        if self.state == ParseState::InStation && name == "div" {
            self.exit_station()?;
        }

        Ok(())
    }

    fn handle_text(&mut self, text: &str) -> Result<()> {
        match self.state {
            ParseState::CapturingName => self.exit_name_capture(text),
            ParseState::CapturingDate => self.exit_date_capture(text),
            _ => Ok(()),
        }
    }

    fn enter_area(&mut self, attrs: &HashMap<String, String>) -> Result<()> {
        self.area = marker_id(attrs, "Area header")?.to_string();
        self.state = ParseState::InArea;

        Ok(())
    }

    fn enter_station(&mut self, attrs: &HashMap<String, String>) -> Result<()> {
        let station_id = marker_id(attrs, "Station")?;
        if self.state != ParseState::InArea {
            bail!("Station marker `{}` outside an area header", station_id);
        }

        self.current = Some(Station::new(station_id.to_string(), self.area.clone()));
        self.state = ParseState::InStation;

        Ok(())
    }

    /// Finishes the current record. A later station with the same id
    /// overwrites this one's values but keeps its position in the map.
    fn exit_station(&mut self) -> Result<()> {
        let station = self
            .current
            .take()
            .context("Station block closed with no record in progress")?;
        self.stations.insert(station.station_id.clone(), station);
        self.state = ParseState::InArea;

        Ok(())
    }

    fn enter_name_capture(&mut self) -> Result<()> {
        if self.state != ParseState::InStation {
            bail!("Name link outside a station block");
        }
        self.state = ParseState::CapturingName;

        Ok(())
    }

    fn exit_name_capture(&mut self, text: &str) -> Result<()> {
        self.current_record()?.name = text.to_string();
        self.state = ParseState::InStation;

        Ok(())
    }

    fn enter_date_capture(&mut self) -> Result<()> {
        if self.state != ParseState::InStation {
            bail!("Date field outside a station block");
        }
        self.state = ParseState::CapturingDate;

        Ok(())
    }

    fn exit_date_capture(&mut self, text: &str) -> Result<()> {
        let range = parse_date_range(text)?;
        let current = self.current_record()?;
        current.start_date = range.start_date;
        current.end_date = range.end_date;
        current.active = range.active;
        self.state = ParseState::InStation;

        Ok(())
    }

    fn current_record(&mut self) -> Result<&mut Station> {
        self.current
            .as_mut()
            .context("No station record in progress")
    }
}

/// Marker test: substring containment over the whole `class` value, not
/// class-list membership.
fn has_marker(attrs: &HashMap<String, String>, marker: &str) -> bool {
    attrs
        .get("class")
        .is_some_and(|class| class.contains(marker))
}

fn marker_id<'a>(attrs: &'a HashMap<String, String>, kind: &str) -> Result<&'a str> {
    attrs
        .get("id")
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} marker has no id attribute", kind))
}

// -- Tests -------------------------------------------------------------------
