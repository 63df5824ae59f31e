pub mod channels;
pub mod fixture_filter;
pub mod reconciler;
pub mod team_matching;
pub mod time_formatting;

pub use channels::{ChannelSet, apply_channel_precedence, normalize_channel, normalize_channels};
pub use fixture_filter::{
    FixtureFilter, convert_fixture, fallback_abbreviation, league_display_name, record_kickoff,
};
pub use reconciler::{reconcile, reconcile_pools};
pub use team_matching::{
    fixtures_match, fold_diacritics, kickoff_times_match, normalize_team_name, team_names_match,
};
pub use time_formatting::{
    canonicalize_scraped_time, format_kickoff_hour, leading_hour, normalize_time_string,
    parse_kickoff,
};
