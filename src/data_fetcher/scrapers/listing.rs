//! Listing-style guide: one table row per match.
//!
//! ```html
//! <tr>
//!   <td class="match-time">21:30</td>
//!   <td class="match-home">Santos</td>
//!   <td class="match-away">Grêmio</td>
//!   <td><ul class="match-channels"><li>SPORTV</li><li>PREMIERE FC</li></ul></td>
//! </tr>
//! ```

use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::info;

use super::{GuidePage, RawScrapedRow, collect_matches, element_text};
use crate::config::Config;
use crate::data_fetcher::api::create_scraper_client_with_timeout;
use crate::data_fetcher::api::sources::BroadcastSource;
use crate::data_fetcher::models::BroadcastSourceMatch;
use crate::error::AppError;

const SOURCE_NAME: &str = "listing guide";

static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("valid selector"));
static HOME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".match-home").expect("valid selector"));
static AWAY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".match-away").expect("valid selector"));
static TIME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".match-time").expect("valid selector"));
static CHANNEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".match-channels li").expect("valid selector"));

fn first_text(row: ElementRef<'_>, selector: &Selector) -> Option<String> {
    row.select(selector).next().map(element_text)
}

/// Reads every table row that names at least one team.
pub fn parse_listing_page(html: &str) -> Vec<RawScrapedRow> {
    let document = Html::parse_document(html);

    document
        .select(&ROW)
        .filter(|row| row.select(&HOME).next().is_some() || row.select(&AWAY).next().is_some())
        .map(|row| RawScrapedRow {
            home: first_text(row, &HOME),
            away: first_text(row, &AWAY),
            time: first_text(row, &TIME),
            channels: row.select(&CHANNEL).map(element_text).collect(),
        })
        .collect()
}

pub struct ListingScraper {
    page: GuidePage,
}

impl ListingScraper {
    pub fn new(client: Client, url_template: Option<String>) -> Self {
        Self {
            page: GuidePage::new(SOURCE_NAME, client, url_template),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_scraper_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(client, config.primary_guide_url.clone()))
    }
}

impl BroadcastSource for ListingScraper {
    fn name(&self) -> &str {
        self.page.name()
    }

    async fn fetch_matches(&self, date: &str) -> Result<Vec<BroadcastSourceMatch>, AppError> {
        let html = self.page.fetch(date).await?;
        let matches = collect_matches(SOURCE_NAME, parse_listing_page(&html));
        info!("{}: {} matches for {}", SOURCE_NAME, matches.len(), date);
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    const PAGE: &str = r#"
        <html><body>
          <table>
            <thead><tr><th>Hora</th><th>Mandante</th><th>Visitante</th><th>Canais</th></tr></thead>
            <tbody>
              <tr>
                <td class="match-time"> 21:30 </td>
                <td class="match-home">Santos</td>
                <td class="match-away">Grêmio</td>
                <td><ul class="match-channels"><li>SPORTV</li><li> PREMIERE   FC </li></ul></td>
              </tr>
              <tr>
                <td class="match-time">16h</td>
                <td class="match-home">Flamengo</td>
                <td class="match-away">Botafogo</td>
                <td><ul class="match-channels"><li>GLOBO RJ, SP</li></ul></td>
              </tr>
              <tr>
                <td class="match-time">A definir</td>
                <td class="match-home">Bahia</td>
                <td class="match-away"></td>
                <td><ul class="match-channels"></ul></td>
              </tr>
            </tbody>
          </table>
        </body></html>
    "#;

    #[test]
    fn test_parse_listing_page_reads_every_match_row() {
        let rows = parse_listing_page(PAGE);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].home.as_deref(), Some("Santos"));
        assert_eq!(rows[0].time.as_deref(), Some("21:30"));
        assert_eq!(rows[0].channels, vec!["SPORTV", "PREMIERE FC"]);
        assert_eq!(rows[2].away.as_deref(), Some(""));
    }

    #[test]
    fn test_listing_rows_validate_into_matches() {
        let matches = collect_matches(SOURCE_NAME, parse_listing_page(PAGE));
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].kickoff_time, "21h30");
        assert_eq!(matches[1].kickoff_time, "16h00");
        assert_eq!(matches[1].channels, vec!["GLOBO RJ, SP"]);
    }

    #[test]
    fn test_page_without_rows_is_empty() {
        assert!(parse_listing_page("<html><body><p>Sem jogos</p></body></html>").is_empty());
    }

    #[tokio::test]
    async fn test_listing_scraper_reads_served_page() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/programacao/2024-05-12"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .expect(1)
            .mount(&mock_server)
            .await;

        let scraper = ListingScraper::new(
            create_test_http_client(),
            Some(format!("{}/programacao/{{iso_date}}", mock_server.uri())),
        );
        let matches = scraper.fetch_matches("12-05-2024").await.unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].teams, ("Santos".to_string(), "Grêmio".to_string()));
        assert_eq!(matches[0].channels, vec!["SPORTV", "PREMIERE FC"]);
    }
}
