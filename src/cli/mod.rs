//! Command line interface.

pub mod command;

use std::time::Duration;

use clap::Parser;
use indicatif::ProgressBar;

/// Takes no options; the listing and output locations are fixed.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}
