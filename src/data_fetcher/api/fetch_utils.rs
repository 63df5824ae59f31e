//! Generic HTTP fetching utilities with retry logic and status-code mapping

use reqwest::Client;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::retry;
use crate::error::AppError;

/// Maps a non-success HTTP status to the matching [`AppError`] variant.
pub fn status_to_error(status_code: u16, reason: &str, url: &str) -> AppError {
    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Fetches a URL and returns the response body as text.
///
/// Failures that [`AppError::is_retryable`] accepts are retried with
/// exponential backoff, honouring `Retry-After` when the server sends it.
/// Any other failure is returned immediately.
#[instrument(skip(client, headers))]
pub async fn fetch_text(
    client: &Client,
    url: &str,
    headers: HeaderMap,
) -> Result<String, AppError> {
    info!("Fetching data from URL: {url}");

    let mut attempt = 0u32;
    let mut backoff = Duration::from_millis(retry::BASE_DELAY_MS);
    loop {
        let (result, retry_after) = fetch_once(client, url, &headers).await;
        match result {
            Err(e) if e.is_retryable() && attempt < retry::MAX_ATTEMPTS => {
                let wait = retry_after.unwrap_or(backoff);
                warn!(
                    "{} Retrying in {:?} (attempt {}/{})",
                    e,
                    wait,
                    attempt + 1,
                    retry::MAX_ATTEMPTS
                );
                tokio::time::sleep(wait).await;
                attempt += 1;
                backoff = backoff.saturating_mul(2);
            }
            other => return other,
        }
    }
}

/// One request. A failed status comes back with the server's `Retry-After`, if any.
async fn fetch_once(
    client: &Client,
    url: &str,
    headers: &HeaderMap,
) -> (Result<String, AppError>, Option<Duration>) {
    let response = match client.get(url).headers(headers.clone()).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            let err = if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            };
            return (Err(err), None);
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status.as_u16(), reason, url);
        return (Err(status_to_error(status.as_u16(), reason, url)), retry_after);
    }

    let text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    });
    if let Ok(body) = &text {
        debug!("Response length: {} bytes", body.len());
    }
    (text, None)
}

/// Parses a JSON body, telling empty, non-JSON and wrongly-shaped bodies apart.
pub fn parse_json<T: DeserializeOwned>(text: &str, url: &str) -> Result<T, AppError> {
    serde_json::from_str::<T>(text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        let preview: String = text.chars().take(200).collect();
        debug!("Response text (first 200 chars): {preview}");

        let trimmed = text.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use reqwest::header::HeaderValue;
    use serde::Deserialize;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        results: i64,
    }

    #[test]
    fn test_status_to_error_mapping() {
        let url = "https://api.example.com/fixtures";
        assert!(matches!(
            status_to_error(404, "Not Found", url),
            AppError::ApiNotFound { .. }
        ));
        assert!(matches!(
            status_to_error(429, "Too Many Requests", url),
            AppError::ApiRateLimit { .. }
        ));
        assert!(matches!(
            status_to_error(403, "Forbidden", url),
            AppError::ApiClientError { status: 403, .. }
        ));
        assert!(matches!(
            status_to_error(503, "Service Unavailable", url),
            AppError::ApiServiceUnavailable { .. }
        ));
        assert!(matches!(
            status_to_error(500, "Internal Server Error", url),
            AppError::ApiServerError { status: 500, .. }
        ));
    }

    #[test]
    fn test_parse_json_classifies_failures() {
        let url = "https://api.example.com/fixtures";
        assert!(parse_json::<Payload>(r#"{"results": 2}"#, url).is_ok());
        assert!(matches!(
            parse_json::<Payload>("   ", url),
            Err(AppError::ApiNoData { .. })
        ));
        assert!(matches!(
            parse_json::<Payload>("<html>busy</html>", url),
            Err(AppError::ApiMalformedJson { .. })
        ));
        assert!(matches!(
            parse_json::<Payload>(r#"{"errors": []}"#, url),
            Err(AppError::ApiUnexpectedStructure { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_text_retries_after_rate_limit() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fixtures"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
            .up_to_n_times(1)
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/fixtures"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"results": 1}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/fixtures", mock_server.uri());
        let text = fetch_text(&create_test_http_client(), &url, HeaderMap::new())
            .await
            .unwrap();
        assert_eq!(text, r#"{"results": 1}"#);
    }

    #[tokio::test]
    async fn test_fetch_text_gives_up_after_max_attempts() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).insert_header("Retry-After", "0"))
            .expect(u64::from(retry::MAX_ATTEMPTS) + 1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/fixtures", mock_server.uri());
        let result = fetch_text(&create_test_http_client(), &url, HeaderMap::new()).await;
        assert!(matches!(
            result,
            Err(AppError::ApiServiceUnavailable { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_text_does_not_retry_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/missing", mock_server.uri());
        let result = fetch_text(&create_test_http_client(), &url, HeaderMap::new()).await;
        assert!(matches!(result, Err(AppError::ApiNotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_text_sends_headers() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("x-test", "yes"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut headers = HeaderMap::new();
        headers.insert("x-test", HeaderValue::from_static("yes"));
        let text = fetch_text(&create_test_http_client(), &mock_server.uri(), headers)
            .await
            .unwrap();
        assert_eq!(text, "ok");
    }
}
