pub mod broadcast;
pub mod fixture;
pub mod fixtures_api;

pub use broadcast::BroadcastSourceMatch;
pub use fixture::{CanonicalFixture, Pair};
pub use fixtures_api::{
    ApiFixture, ApiFixtureInfo, ApiLeague, ApiTeam, ApiTeams, ApiVenue, FixturesResponse,
};
