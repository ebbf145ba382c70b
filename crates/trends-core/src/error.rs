use thiserror::Error;

/// All errors produced by covid-trends.
#[derive(Error, Debug)]
pub enum TrendsError {
    /// The API response did not contain the expected historical data,
    /// typically because the country is unknown to the data source.
    #[error("No historical data available for {0}")]
    DataUnavailable(String),

    /// A transport-level failure reaching the data endpoint.
    #[error("Network error: {0}")]
    Network(String),

    /// A date label in the payload did not match the expected `%m/%d/%y`
    /// format.
    #[error("Invalid date label: {0}")]
    DateParse(String),

    /// The cases and deaths series do not cover the same set of dates.
    #[error("Schema mismatch between series: {0}")]
    SchemaMismatch(String),

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for raw I/O errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the trends crates.
pub type Result<T> = std::result::Result<T, TrendsError>;
