use std::path::PathBuf;

use clap::Parser;
use skipyard_core::model::{DEFAULT_AREA, DEFAULT_POSTCODE, Location};

/// Browse and compare skip hire options for a location.
#[derive(Debug, Parser)]
#[command(name = "skipyard", version, about)]
pub(crate) struct Cli {
    /// Postcode to list skips for.
    #[arg(long, default_value = DEFAULT_POSTCODE)]
    pub postcode: String,

    /// Area to list skips for.
    #[arg(long, default_value = DEFAULT_AREA)]
    pub area: String,

    /// Override the by-location listing endpoint.
    #[arg(long, env = "SKIP_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// File that log output is written to.
    #[arg(long, env = "SKIPYARD_LOG_FILE", default_value = "skipyard.log")]
    pub log_file: PathBuf,

    /// Print the enriched listings as JSON instead of starting the browser.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub(crate) fn location(&self) -> Location {
        Location::new(self.postcode.trim(), self.area.trim())
    }
}
