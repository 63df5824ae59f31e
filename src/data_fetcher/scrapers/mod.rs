//! Broadcast guide adapters.
//!
//! Each adapter fetches one guide page, reads it into [`RawScrapedRow`]s and
//! keeps the rows that carry both team names and a kickoff time.

pub mod cards;
pub mod listing;

pub use cards::CardScraper;
pub use listing::ListingScraper;

use reqwest::Client;
use reqwest::header::HeaderMap;
use scraper::ElementRef;
use tracing::{debug, instrument};

use crate::data_fetcher::api::build_guide_url;
use crate::data_fetcher::api::fetch_utils::fetch_text;
use crate::data_fetcher::models::BroadcastSourceMatch;
use crate::data_fetcher::processors::canonicalize_scraped_time;
use crate::error::AppError;

/// A guide row as found on the page, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawScrapedRow {
    pub home: Option<String>,
    pub away: Option<String>,
    pub time: Option<String>,
    pub channels: Vec<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl RawScrapedRow {
    /// Both team names and the kickoff time are present.
    pub fn is_complete(&self) -> bool {
        is_filled(&self.home) && is_filled(&self.away) && is_filled(&self.time)
    }

    /// The validated match, or `None` when a team name or the time is missing.
    pub fn into_match(self) -> Option<BroadcastSourceMatch> {
        let home = non_blank(self.home)?;
        let away = non_blank(self.away)?;
        let time = non_blank(self.time)?;
        let channels = self
            .channels
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        Some(BroadcastSourceMatch::new(
            home,
            away,
            canonicalize_scraped_time(&time),
            channels,
        ))
    }
}

/// Validates rows, logging the ones that are skipped.
pub fn collect_matches(source_name: &str, rows: Vec<RawScrapedRow>) -> Vec<BroadcastSourceMatch> {
    let total = rows.len();
    let matches: Vec<BroadcastSourceMatch> = rows
        .into_iter()
        .filter_map(|row| {
            if row.is_complete() {
                row.into_match()
            } else {
                debug!("{source_name}: skipping incomplete row {row:?}");
                None
            }
        })
        .collect();

    debug!("{source_name}: kept {} of {} rows", matches.len(), total);
    matches
}

/// Text content of an element with runs of whitespace collapsed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Where a guide lives and how to download it.
#[derive(Debug, Clone)]
pub(crate) struct GuidePage {
    name: &'static str,
    client: Client,
    url_template: Option<String>,
}

impl GuidePage {
    pub(crate) fn new(name: &'static str, client: Client, url_template: Option<String>) -> Self {
        Self {
            name,
            client,
            url_template,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    #[instrument(skip(self), fields(source = self.name))]
    pub(crate) async fn fetch(&self, date: &str) -> Result<String, AppError> {
        let template = self
            .url_template
            .as_deref()
            .ok_or_else(|| AppError::source_not_configured(self.name))?;
        let url = build_guide_url(template, date)?;

        let html = fetch_text(&self.client, &url, HeaderMap::new()).await?;
        if html.trim().is_empty() {
            return Err(AppError::scrape_error(self.name, format!("empty page at {url}")));
        }
        Ok(html)
    }
}
