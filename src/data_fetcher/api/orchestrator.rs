//! Aggregation of fixtures and broadcast guides into the daily match list

use tracing::{debug, info, instrument, warn};

use super::date_logic::{parse_request_date, request_to_api_date, resolve_request_date};
use super::fixtures_api::ApiFootballClient;
use super::sources::{BroadcastSource, FixturesSource};
use super::urls::create_cache_key;
use crate::config::Config;
use crate::data_fetcher::cache::{CacheStore, JsonFileCache};
use crate::data_fetcher::models::{ApiFixture, BroadcastSourceMatch, CanonicalFixture};
use crate::data_fetcher::processors::{
    FixtureFilter, convert_fixture, reconcile_pools, record_kickoff,
};
use crate::data_fetcher::scrapers::{CardScraper, ListingScraper};
use crate::error::AppError;

/// Runs one aggregation per requested date.
///
/// The fixtures source decides which matches exist. The two broadcast
/// sources only contribute channels, and a fixture no guide lists is left out.
pub struct MatchAggregator<F, P, S, C> {
    fixtures: F,
    primary: P,
    secondary: S,
    cache: C,
    filter: FixtureFilter,
}

impl<F, P, S, C> MatchAggregator<F, P, S, C>
where
    F: FixturesSource,
    P: BroadcastSource,
    S: BroadcastSource,
    C: CacheStore,
{
    pub fn new(fixtures: F, primary: P, secondary: S, cache: C) -> Self {
        Self {
            fixtures,
            primary,
            secondary,
            cache,
            filter: FixtureFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: FixtureFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Matches on TV for `date` (`dd-mm-yyyy`), today when absent or malformed.
    pub async fn get_matches(&self, date: Option<&str>) -> Vec<CanonicalFixture> {
        self.get_matches_with_options(date, true).await
    }

    /// Like [`Self::get_matches`]; `use_cache = false` skips the cache lookup
    /// but still stores the fresh result.
    ///
    /// Never fails: every error is logged and the caller sees an empty list.
    #[instrument(skip(self))]
    pub async fn get_matches_with_options(
        &self,
        date: Option<&str>,
        use_cache: bool,
    ) -> Vec<CanonicalFixture> {
        let date = resolve_request_date(date);
        let cache_key = create_cache_key(&date);

        if use_cache {
            match self.cache.get(&cache_key).await {
                Ok(Some(cached)) => {
                    info!("Cache hit for {}: {} fixtures", cache_key, cached.len());
                    return cached;
                }
                Ok(None) => debug!("Cache miss for {cache_key}"),
                Err(e) => warn!("Cache read failed for {cache_key}, fetching fresh data: {e}"),
            }
        }

        let records = match self.fetch_fixtures(&date).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Fixtures fetch failed for {date}, returning no matches: {e}");
                return Vec::new();
            }
        };

        let in_scope = self.select_in_scope(records, &date);
        if in_scope.is_empty() {
            info!("No tracked fixtures on {date}");
            self.store(&cache_key, &[]).await;
            return Vec::new();
        }

        let (primary_pool, secondary_pool) = tokio::join!(
            fetch_pool(&self.primary, &date),
            fetch_pool(&self.secondary, &date)
        );
        let pools = [primary_pool.as_slice(), secondary_pool.as_slice()];

        let mut matches: Vec<CanonicalFixture> = Vec::with_capacity(in_scope.len());
        for record in &in_scope {
            let mut fixture = match convert_fixture(record, &date) {
                Ok(Some(fixture)) => fixture,
                Ok(None) => continue,
                Err(e) => {
                    warn!("Dropping fixture {:?}: {}", record.fixture.id, e);
                    continue;
                }
            };

            fixture.channels = reconcile_pools(&fixture, &pools);
            if fixture.channels.is_empty() {
                debug!(
                    "No broadcast found for {} x {} at {}",
                    fixture.teams.0, fixture.teams.1, fixture.kickoff_time
                );
                continue;
            }
            matches.push(fixture);
        }

        // sort_by_key is stable, so equal kickoffs keep source order
        matches.sort_by_key(|fixture| fixture.kickoff);

        info!(
            "{} of {} tracked fixtures on {} have a broadcast",
            matches.len(),
            in_scope.len(),
            date
        );
        self.store(&cache_key, &matches).await;
        matches
    }

    async fn fetch_fixtures(&self, date: &str) -> Result<Vec<ApiFixture>, AppError> {
        let iso_date = request_to_api_date(date)?;
        self.fixtures.fetch_fixtures(&iso_date).await
    }

    /// Keeps fixtures that kick off on `date` and belong to a tracked league.
    fn select_in_scope(&self, records: Vec<ApiFixture>, date: &str) -> Vec<ApiFixture> {
        let Ok(day) = parse_request_date(date) else {
            return Vec::new();
        };
        let total = records.len();

        let selected: Vec<ApiFixture> = records
            .into_iter()
            .filter(|record| match record_kickoff(record) {
                Ok(kickoff) if kickoff.date() == day => true,
                Ok(kickoff) => {
                    debug!(
                        "Dropping fixture {:?} dated {} (requested {})",
                        record.fixture.id,
                        kickoff.date(),
                        day
                    );
                    false
                }
                Err(e) => {
                    warn!("Dropping fixture {:?}: {}", record.fixture.id, e);
                    false
                }
            })
            .filter(|record| self.filter.is_in_scope(record))
            .collect();

        debug!("{} of {} fixtures are in scope", selected.len(), total);
        selected
    }

    async fn store(&self, key: &str, fixtures: &[CanonicalFixture]) {
        if let Err(e) = self.cache.set(key, fixtures).await {
            warn!("Failed to write cache entry {key}: {e}");
        }
    }
}

/// Fetches one broadcast pool; a failing guide becomes an empty pool.
async fn fetch_pool<B: BroadcastSource>(source: &B, date: &str) -> Vec<BroadcastSourceMatch> {
    match source.fetch_matches(date).await {
        Ok(pool) => {
            info!("{} listed {} matches for {}", source.name(), pool.len(), date);
            pool
        }
        Err(e) => {
            warn!("{} unavailable for {}, using an empty pool: {}", source.name(), date, e);
            Vec::new()
        }
    }
}

/// Aggregator wired to the live collaborators described by `config`.
pub type LiveAggregator =
    MatchAggregator<ApiFootballClient, ListingScraper, CardScraper, JsonFileCache>;

/// Builds the live collaborators from `config`.
pub fn build_aggregator(config: &Config) -> Result<LiveAggregator, AppError> {
    let fixtures = ApiFootballClient::from_config(config)?;
    let primary = ListingScraper::from_config(config)?;
    let secondary = CardScraper::from_config(config)?;
    let cache = JsonFileCache::new(config.cache_file());

    Ok(MatchAggregator::new(fixtures, primary, secondary, cache)
        .with_filter(FixtureFilter::new(config.extra_league_ids.clone())))
}

/// Main entry point: the broadcast list for `date` using the user's configuration.
///
/// # Example
/// ```rust,no_run
/// use jogos_na_tv::data_fetcher::api::fetch_broadcast_matches;
///
/// #[tokio::main]
/// async fn main() -> Result<(), jogos_na_tv::AppError> {
///     // Today, cache allowed
///     let today = fetch_broadcast_matches(None, true).await?;
///
///     // A specific day, bypassing the cache
///     let other = fetch_broadcast_matches(Some("12-05-2024"), false).await?;
///
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// Only configuration problems are errors; fetch failures yield an empty list.
#[instrument]
pub async fn fetch_broadcast_matches(
    date: Option<&str>,
    use_cache: bool,
) -> Result<Vec<CanonicalFixture>, AppError> {
    let config = Config::load().await?;
    info!("Config loaded successfully");

    let aggregator = build_aggregator(&config)?;
    Ok(aggregator.get_matches_with_options(date, use_cache).await)
}
