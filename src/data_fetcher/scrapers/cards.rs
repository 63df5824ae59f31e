//! Card-style guide: one element per match with the teams and time in
//! `data-*` attributes and the channels as child elements.
//!
//! ```html
//! <article class="game" data-home="Santos FC" data-away="Gremio" data-time="21h30">
//!   <span class="channel-name">Premiere 3</span>
//! </article>
//! ```

use reqwest::Client;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::info;

use super::{GuidePage, RawScrapedRow, collect_matches, element_text};
use crate::config::Config;
use crate::data_fetcher::api::create_scraper_client_with_timeout;
use crate::data_fetcher::api::sources::BroadcastSource;
use crate::data_fetcher::models::BroadcastSourceMatch;
use crate::error::AppError;

const SOURCE_NAME: &str = "card guide";

static CARD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[data-home], [data-away]").expect("valid selector"));
static CHANNEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".channel-name").expect("valid selector"));

pub fn parse_card_page(html: &str) -> Vec<RawScrapedRow> {
    let document = Html::parse_document(html);

    document
        .select(&CARD)
        .map(|card| {
            let attr = |name: &str| card.value().attr(name).map(str::to_string);
            RawScrapedRow {
                home: attr("data-home"),
                away: attr("data-away"),
                time: attr("data-time"),
                channels: card.select(&CHANNEL).map(element_text).collect(),
            }
        })
        .collect()
}

pub struct CardScraper {
    page: GuidePage,
}

impl CardScraper {
    pub fn new(client: Client, url_template: Option<String>) -> Self {
        Self {
            page: GuidePage::new(SOURCE_NAME, client, url_template),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_scraper_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(client, config.secondary_guide_url.clone()))
    }
}

impl BroadcastSource for CardScraper {
    fn name(&self) -> &str {
        self.page.name()
    }

    async fn fetch_matches(&self, date: &str) -> Result<Vec<BroadcastSourceMatch>, AppError> {
        let html = self.page.fetch(date).await?;
        let matches = collect_matches(SOURCE_NAME, parse_card_page(&html));
        info!("{}: {} matches for {}", SOURCE_NAME, matches.len(), date);
        Ok(matches)
    }
}
