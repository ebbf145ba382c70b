use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use trends_core::settings::DEFAULT_COUNTRY;

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.covid-trends/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing
/// parents):
/// - `~/.covid-trends/`
/// - `~/.covid-trends/logs/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let trends_dir = home.join(".covid-trends");
    std::fs::create_dir_all(&trends_dir)?;
    std::fs::create_dir_all(trends_dir.join("logs"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
///
/// The `log_file` parameter is accepted for forward-compatibility but file
/// logging is not yet wired – all output currently goes to stderr.
pub fn setup_logging(log_level: &str, _log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        _ => "info",
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Country prompt ─────────────────────────────────────────────────────────────

/// Normalise free-text country input: trim whitespace, fall back to the
/// default country when the result is empty.
pub fn resolve_country(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_COUNTRY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Interactively ask for a country on stdin.
///
/// A blank answer selects the default (`"USA"`).
pub fn prompt_country() -> std::io::Result<String> {
    let mut stdout = std::io::stdout();
    write!(
        stdout,
        "Which country are you interested in? (e.g., USA, Brazil, India) [USA]: "
    )?;
    stdout.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(resolve_country(&line))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
