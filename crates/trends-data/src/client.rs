//! HTTP client for the disease.sh historical endpoint.

use reqwest::StatusCode;
use tracing::{debug, info};

use trends_core::error::{Result, TrendsError};
use trends_core::models::{HistoricalResponse, Timeline};

/// Request timeout for the single historical fetch.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for `GET /v3/covid-19/historical/{country}?lastdays=all`.
#[derive(Debug)]
pub struct HistoryClient {
    base_url: String,
    client: reqwest::Client,
}

impl HistoryClient {
    /// Create a new client against `base_url` (e.g. `"https://disease.sh"`).
    ///
    /// Trailing slashes are stripped; a URL without an `http(s)://` scheme
    /// is a configuration error.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(TrendsError::Config(format!(
                "base_url must start with http:// or https://, got '{base_url}'"
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| TrendsError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { base_url, client })
    }

    /// Fetch the full recorded history for `country`.
    ///
    /// One GET, no retry. HTTP 404 and a payload without a `timeline` key
    /// both surface as [`TrendsError::DataUnavailable`]; every other
    /// transport or status failure is [`TrendsError::Network`].
    pub async fn fetch_history(&self, country: &str) -> Result<Timeline> {
        let url = format!(
            "{}/v3/covid-19/historical/{}?lastdays=all",
            self.base_url, country
        );
        debug!("Fetching historical data: url={}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TrendsError::Network(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(TrendsError::DataUnavailable(country.to_string()));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read response body".to_string());
            return Err(TrendsError::Network(format!(
                "API returned status {status}: {body}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TrendsError::Network(format!("failed to read response body: {e}")))?;

        let timeline = parse_history_body(country, &body)?;
        info!(
            "Fetched {} days of history for {}",
            timeline.len(),
            country
        );
        Ok(timeline)
    }
}

/// Parse a historical response body and extract its timeline.
///
/// Split from the request path so schema handling is testable without a
/// network. A body that parses but carries no `timeline` key (the API's
/// unknown-country answer) maps to [`TrendsError::DataUnavailable`].
pub fn parse_history_body(country: &str, body: &str) -> Result<Timeline> {
    let response: HistoricalResponse = serde_json::from_str(body)?;
    response
        .timeline
        .ok_or_else(|| TrendsError::DataUnavailable(country.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── HistoryClient::new ────────────────────────────────────────────────

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = HistoryClient::new("https://disease.sh/").unwrap();
        assert_eq!(client.base_url, "https://disease.sh");
    }

    #[test]
    fn test_new_trims_whitespace() {
        let client = HistoryClient::new("  http://localhost:8080  ").unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_new_rejects_missing_scheme() {
        let err = HistoryClient::new("disease.sh").unwrap_err();
        assert!(matches!(err, TrendsError::Config(_)));
    }

    // ── parse_history_body ────────────────────────────────────────────────

    #[test]
    fn test_parse_history_body_full_payload() {
        let body = r#"{
            "country": "USA",
            "province": [],
            "timeline": {
                "cases": {"1/22/20": 1, "1/23/20": 1, "1/24/20": 2},
                "deaths": {"1/22/20": 0, "1/23/20": 0, "1/24/20": 0}
            }
        }"#;
        let timeline = parse_history_body("USA", body).unwrap();
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.cases.get("1/24/20"), Some(&2));
    }

    #[test]
    fn test_parse_history_body_missing_timeline() {
        let body = r#"{"message": "Country not found or doesn't have any historical data"}"#;
        let err = parse_history_body("Atlantis", body).unwrap_err();
        assert!(matches!(err, TrendsError::DataUnavailable(_)));
        assert!(err.to_string().contains("Atlantis"));
    }

    #[test]
    fn test_parse_history_body_malformed_json() {
        let err = parse_history_body("USA", "{not json").unwrap_err();
        assert!(matches!(err, TrendsError::JsonParse(_)));
    }

    #[test]
    fn test_parse_history_body_ignores_unknown_fields() {
        let body = r#"{
            "country": "France",
            "extra": 42,
            "timeline": {"cases": {"1/1/21": 9}, "deaths": {"1/1/21": 1}}
        }"#;
        let timeline = parse_history_body("France", body).unwrap();
        assert_eq!(timeline.deaths.get("1/1/21"), Some(&1));
    }
}
