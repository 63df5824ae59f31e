pub mod api;
pub mod cache;
pub mod models;
pub mod processors;
pub mod scrapers;

pub use api::{
    BroadcastSource, FixturesSource, MatchAggregator, build_aggregator, fetch_broadcast_matches,
};
pub use cache::{CacheStore, JsonFileCache, MemoryCache};
pub use models::{BroadcastSourceMatch, CanonicalFixture};
