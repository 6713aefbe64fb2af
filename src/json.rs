//! Save the station records to a JSON file.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

use crate::station::Stations;

/// Writes the station mapping as pretty-printed JSON, keyed by station id in
/// document encounter order. The rendering is deterministic: the same mapping
/// always produces the same bytes.
pub fn save_stations(stations: &Stations, file_path: &Path) -> Result<()> {
    let file = File::create(file_path)
        .with_context(|| format!("Failed to create `{}`", file_path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, stations)?;
    writer.flush()?;

    Ok(())
}

// -- Tests -------------------------------------------------------------------
