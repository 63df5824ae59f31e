//! Cache capability injected into the aggregator

use crate::data_fetcher::models::CanonicalFixture;
use crate::error::AppError;

/// Date-keyed store of finished fixture lists.
///
/// Implementations must round-trip every [`CanonicalFixture`] field exactly.
/// An empty list is a valid entry and means "nothing to show for that date".
#[allow(async_fn_in_trait)]
pub trait CacheStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<CanonicalFixture>>, AppError>;

    async fn set(&self, key: &str, fixtures: &[CanonicalFixture]) -> Result<(), AppError>;
}
