//! Jogos na TV
//!
//! Builds the day's list of football matches on Brazilian TV by taking the
//! fixtures from an authoritative API and attaching the channels that two
//! broadcast guides list for each of them.
//!
//! # Examples
//!
//! Using the configured live sources:
//!
//! ```rust,no_run
//! use jogos_na_tv::data_fetcher::fetch_broadcast_matches;
//! use jogos_na_tv::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     for fixture in fetch_broadcast_matches(Some("12-05-2024"), true).await? {
//!         println!(
//!             "{} {} x {}: {}",
//!             fixture.kickoff_time,
//!             fixture.teams.0,
//!             fixture.teams.1,
//!             fixture.channels.join(", ")
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The aggregator itself only depends on the [`data_fetcher::FixturesSource`],
//! [`data_fetcher::BroadcastSource`] and [`data_fetcher::CacheStore`] traits,
//! so any source can be plugged in.

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::fetch_broadcast_matches;
pub use data_fetcher::models::{BroadcastSourceMatch, CanonicalFixture};
pub use data_fetcher::{JsonFileCache, MatchAggregator, MemoryCache};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
