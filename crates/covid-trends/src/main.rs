mod bootstrap;

use trends_core::error::{Result, TrendsError};
use trends_core::normalizer;
use trends_core::settings::Settings;
use trends_data::client::HistoryClient;
use trends_ui::app::App;
use trends_ui::chart_view::DashboardData;

#[tokio::main]
async fn main() {
    let settings = Settings::load();

    // All fetch and normalization errors funnel through here: one
    // human-readable line, no partial dashboard.
    if let Err(err) = run(settings).await {
        eprintln!("covid-trends: {err}");
        std::process::exit(1);
    }
}

async fn run(settings: Settings) -> Result<()> {
    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("covid-trends v{} starting", env!("CARGO_PKG_VERSION"));

    let country = match settings.country {
        Some(ref input) => bootstrap::resolve_country(input),
        None => bootstrap::prompt_country()?,
    };

    tracing::info!("Fetching COVID data for {}", country);
    let client = HistoryClient::new(&settings.base_url)?;
    let timeline = client.fetch_history(&country).await?;

    let series = normalizer::normalize(&timeline)?;
    let totals = normalizer::cumulative(&series.records);
    tracing::info!(
        "Normalized {} days of history for {}",
        series.len(),
        country
    );

    let data = DashboardData::from_series(&country, &series, &totals);
    let app = App::new(&settings.theme);
    app.run_dashboard(data)
        .await
        .map_err(|e| TrendsError::Terminal(e.to_string()))?;

    Ok(())
}
