use super::channels::{ChannelSet, apply_channel_precedence, normalize_channels};
use super::team_matching::fixtures_match;
use crate::data_fetcher::models::{BroadcastSourceMatch, CanonicalFixture};
use tracing::{debug, trace};

/// Channels one broadcast pool offers for a fixture.
///
/// Every record that matches the fixture contributes its normalized channels;
/// records without two team names are skipped.
pub fn reconcile(fixture: &CanonicalFixture, pool: &[BroadcastSourceMatch]) -> ChannelSet {
    let mut channels = ChannelSet::new();

    for candidate in pool {
        if !candidate.has_team_names() {
            trace!("Skipping broadcast record without team names: {candidate:?}");
            continue;
        }
        if !fixtures_match(
            &fixture.teams,
            &fixture.kickoff_time,
            &candidate.teams,
            &candidate.kickoff_time,
        ) {
            continue;
        }

        debug!(
            "Matched {} x {} ({}) with {} x {} ({})",
            fixture.teams.0,
            fixture.teams.1,
            fixture.kickoff_time,
            candidate.teams.0,
            candidate.teams.1,
            candidate.kickoff_time
        );
        channels.extend(normalize_channels(candidate.channels.as_slice()).into_vec());
    }

    channels
}

/// Union of [`reconcile`] over every pool, with the channel-precedence rule applied.
pub fn reconcile_pools(
    fixture: &CanonicalFixture,
    pools: &[&[BroadcastSourceMatch]],
) -> Vec<String> {
    let mut channels = ChannelSet::new();
    for pool in pools {
        channels.extend(reconcile(fixture, pool).into_vec());
    }
    apply_channel_precedence(channels).into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixture(home: &str, away: &str, time: &str) -> CanonicalFixture {
        CanonicalFixture {
            league: "Brasileirão Série A".to_string(),
            stadium: String::new(),
            kickoff_time: time.to_string(),
            abbreviations: (String::new(), String::new()),
            teams: (home.to_string(), away.to_string()),
            channels: Vec::new(),
            crests: (String::new(), String::new()),
            kickoff: NaiveDate::from_ymd_opt(2024, 5, 12)
                .unwrap()
                .and_hms_opt(21, 30, 0)
                .unwrap(),
        }
    }

    fn record(home: &str, away: &str, time: &str, channels: &[&str]) -> BroadcastSourceMatch {
        BroadcastSourceMatch::new(
            home,
            away,
            time,
            channels.iter().map(|c| c.to_string()).collect(),
        )
    }

    #[test]
    fn test_reconcile_collects_every_matching_record() {
        let target = fixture("São Paulo", "Corinthians", "21h30");
        let pool = vec![
            record("Sao Paulo FC", "Corinthians", "21h30", &["SPORTV"]),
            record("São Paulo", "Corinthians", "21h00", &["sportv", "PREMIERE FC"]),
            record("Palmeiras", "Santos", "21h30", &["ESPN"]),
        ];

        assert_eq!(
            reconcile(&target, &pool).into_vec(),
            vec!["SporTV", "Premiere"]
        );
    }

    #[test]
    fn test_reconcile_skips_records_without_team_names() {
        let target = fixture("Santos", "Grêmio", "21h30");
        let pool = vec![
            record("", "Grêmio", "21h30", &["ESPN"]),
            record("Santos", "Grêmio", "21h30", &["SPORTV"]),
        ];

        assert_eq!(reconcile(&target, &pool).into_vec(), vec!["SporTV"]);
    }

    #[test]
    fn test_reconcile_without_match_is_empty() {
        let target = fixture("Santos", "Grêmio", "21h30");
        let pool = vec![record("Santos", "Grêmio", "18h30", &["SPORTV"])];
        assert!(reconcile(&target, &pool).is_empty());
        assert!(reconcile(&target, &[]).is_empty());
    }

    #[test]
    fn test_reconcile_pools_unions_then_applies_precedence() {
        let target = fixture("Santos", "Grêmio", "21h30");
        let listing = vec![record("Santos", "Grêmio", "21h30", &["PREMIERE FC", "SPORTV"])];
        let cards = vec![record("Santos FC", "Gremio", "21:30", &["Premiere 3", "SporTV"])];

        assert_eq!(
            reconcile_pools(&target, &[listing.as_slice(), cards.as_slice()]),
            vec!["SporTV", "Premiere 3"]
        );
    }

    #[test]
    fn test_reconcile_pools_with_empty_pools() {
        let target = fixture("Santos", "Grêmio", "21h30");
        let empty: Vec<BroadcastSourceMatch> = Vec::new();
        assert!(reconcile_pools(&target, &[empty.as_slice(), empty.as_slice()]).is_empty());
    }
}
