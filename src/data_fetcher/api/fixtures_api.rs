//! Fixtures API client

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, info, instrument, warn};

use super::fetch_utils::{fetch_text, parse_json};
use super::http_client::create_http_client_with_timeout;
use super::sources::FixturesSource;
use super::urls::build_fixtures_url;
use crate::config::Config;
use crate::data_fetcher::models::{ApiFixture, FixturesResponse};
use crate::error::AppError;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-apisports-key";

/// [`FixturesSource`] backed by the API-Football `fixtures` endpoint.
pub struct ApiFootballClient {
    client: Client,
    api_domain: String,
    api_key: String,
    timezone: String,
}

impl ApiFootballClient {
    pub fn new(
        client: Client,
        api_domain: impl Into<String>,
        api_key: impl Into<String>,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_domain: api_domain.into(),
            api_key: api_key.into(),
            timezone: timezone.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(
            client,
            &config.api_domain,
            &config.api_key,
            &config.timezone,
        ))
    }

    fn headers(&self) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&self.api_key)
            .map_err(|e| AppError::config_error(format!("API key is not a valid header: {e}")))?;
        headers.insert(API_KEY_HEADER, value);
        Ok(headers)
    }
}

/// Reads the fixtures envelope, skipping entries that do not have the fixture shape.
pub fn parse_fixtures_response(text: &str, url: &str) -> Result<Vec<ApiFixture>, AppError> {
    let envelope: FixturesResponse = parse_json(text, url)?;

    if let Some(message) = envelope.error_message() {
        return Err(AppError::api_unexpected_structure(message, url));
    }

    let total = envelope.response.len();
    let fixtures: Vec<ApiFixture> = envelope
        .response
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<ApiFixture>(entry) {
            Ok(fixture) => Some(fixture),
            Err(e) => {
                warn!("Skipping malformed fixture #{index} from {url}: {e}");
                None
            }
        })
        .collect();

    debug!("Parsed {} of {} fixtures from {}", fixtures.len(), total, url);
    Ok(fixtures)
}

impl FixturesSource for ApiFootballClient {
    #[instrument(skip(self))]
    async fn fetch_fixtures(&self, iso_date: &str) -> Result<Vec<ApiFixture>, AppError> {
        let url = build_fixtures_url(&self.api_domain, iso_date, &self.timezone);
        let text = fetch_text(&self.client, &url, self.headers()?).await?;
        let fixtures = parse_fixtures_response(&text, &url)?;
        info!("Fetched {} fixtures for {}", fixtures.len(), iso_date);
        Ok(fixtures)
    }
}
