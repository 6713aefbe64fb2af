mod cli;
mod json;
mod scrape;
mod station;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli};

fn main() -> Result<(), Error> {
    Cli::parse();

    let filename = command::stations()?;
    println!("File saved to `{}`", filename);

    Ok(())
}
