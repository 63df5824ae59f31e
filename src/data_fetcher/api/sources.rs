//! Collaborator contracts the aggregator depends on

use crate::data_fetcher::models::{ApiFixture, BroadcastSourceMatch};
use crate::error::AppError;

/// Authoritative list of fixtures for a day.
#[allow(async_fn_in_trait)]
pub trait FixturesSource {
    /// Fixtures for `iso_date` (`yyyy-mm-dd`). Records that cannot be read
    /// are skipped by the implementation; only whole-request failures are errors.
    async fn fetch_fixtures(&self, iso_date: &str) -> Result<Vec<ApiFixture>, AppError>;
}

/// A broadcast guide consulted only for channel listings.
#[allow(async_fn_in_trait)]
pub trait BroadcastSource {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Guide rows for `date` (`dd-mm-yyyy`).
    async fn fetch_matches(&self, date: &str) -> Result<Vec<BroadcastSourceMatch>, AppError>;
}
