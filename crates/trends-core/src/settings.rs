use clap::Parser;
use std::path::PathBuf;

/// Default API host for the historical endpoint.
pub const DEFAULT_BASE_URL: &str = "https://disease.sh";

/// Country used when the interactive prompt is left blank.
pub const DEFAULT_COUNTRY: &str = "USA";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Terminal dashboard for historical COVID-19 trends
#[derive(Parser, Debug, Clone)]
#[command(
    name = "covid-trends",
    about = "Terminal dashboard for historical COVID-19 trends",
    version
)]
pub struct Settings {
    /// Country to chart (prompted interactively when omitted)
    pub country: Option<String>,

    /// Base URL of the disease.sh-compatible API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "auto"])]
    pub theme: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Log file path (stderr when omitted)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from the process arguments.
    pub fn load() -> Self {
        Self::parse()
    }
}
