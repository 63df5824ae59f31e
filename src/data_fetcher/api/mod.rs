pub mod date_logic;
pub mod fetch_utils;
pub mod fixtures_api;
pub mod http_client;
pub mod orchestrator;
pub mod sources;
pub mod urls;

pub use date_logic::{
    format_request_date, parse_request_date, request_to_api_date, resolve_request_date,
    resolve_request_date_with_today,
};
pub use fixtures_api::{ApiFootballClient, parse_fixtures_response};
pub use http_client::{create_http_client_with_timeout, create_scraper_client_with_timeout};
pub use orchestrator::{LiveAggregator, MatchAggregator, build_aggregator, fetch_broadcast_matches};
pub use sources::{BroadcastSource, FixturesSource};
pub use urls::{build_fixtures_url, build_guide_url, create_cache_key};
