//! URL building utilities for the fixtures API and broadcast guides

use super::date_logic::request_to_api_date;
use crate::error::AppError;

/// Builds the fixtures URL for one day.
///
/// # Example
/// ```
/// use jogos_na_tv::data_fetcher::api::build_fixtures_url;
///
/// let url = build_fixtures_url("https://api.example.com", "2024-05-12", "America/Sao_Paulo");
/// assert_eq!(
///     url,
///     "https://api.example.com/fixtures?date=2024-05-12&timezone=America/Sao_Paulo"
/// );
/// ```
pub fn build_fixtures_url(api_domain: &str, iso_date: &str, timezone: &str) -> String {
    let api_domain = api_domain.trim_end_matches('/');
    format!("{api_domain}/fixtures?date={iso_date}&timezone={timezone}")
}

/// Expands a guide URL template for a `dd-mm-yyyy` request date.
///
/// `{date}` is replaced with the request date and `{iso_date}` with the same
/// day as `yyyy-mm-dd`.
///
/// # Example
/// ```
/// use jogos_na_tv::data_fetcher::api::build_guide_url;
///
/// let url = build_guide_url("https://guia.example.com/jogos/{iso_date}", "12-05-2024").unwrap();
/// assert_eq!(url, "https://guia.example.com/jogos/2024-05-12");
/// ```
pub fn build_guide_url(template: &str, date: &str) -> Result<String, AppError> {
    let mut url = template.replace("{date}", date);
    if url.contains("{iso_date}") {
        url = url.replace("{iso_date}", &request_to_api_date(date)?);
    }
    Ok(url)
}

/// Cache key for one request date.
///
/// # Example
/// ```
/// use jogos_na_tv::data_fetcher::api::create_cache_key;
///
/// assert_eq!(create_cache_key("12-05-2024"), "jogos-12-05-2024");
/// ```
pub fn create_cache_key(date: &str) -> String {
    format!("jogos-{date}")
}
