use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Home/away pair, always in that order.
pub type Pair<T> = (T, T);

/// A fixture from the authoritative source, enriched with broadcast channels.
///
/// There is no stored identifier: two fixtures are the same match when their
/// full team names and kickoff time agree under the fuzzy rules in
/// [`crate::data_fetcher::processors::team_matching`].
///
/// The serialized field names are the ones persisted in the match cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalFixture {
    #[serde(rename = "campeonato")]
    pub league: String,
    #[serde(rename = "estadio")]
    pub stadium: String,
    /// Kickoff in `<H>h<MM>` form, e.g. `21h30`
    #[serde(rename = "horario")]
    pub kickoff_time: String,
    #[serde(rename = "siglas")]
    pub abbreviations: Pair<String>,
    #[serde(rename = "times")]
    pub teams: Pair<String>,
    /// Normalized, deduplicated channel names
    #[serde(rename = "canais")]
    pub channels: Vec<String>,
    #[serde(rename = "escudos")]
    pub crests: Pair<String>,
    /// Kickoff resolved from the requested date and `kickoff_time`
    #[serde(rename = "data")]
    pub kickoff: NaiveDateTime,
}

impl CanonicalFixture {
    pub fn home_team(&self) -> &str {
        &self.teams.0
    }

    pub fn away_team(&self) -> &str {
        &self.teams.1
    }

    pub fn has_channels(&self) -> bool {
        !self.channels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> CanonicalFixture {
        CanonicalFixture {
            league: "Brasileirão Série A".to_string(),
            stadium: "Vila Belmiro".to_string(),
            kickoff_time: "21h30".to_string(),
            abbreviations: ("SAN".to_string(), "GRE".to_string()),
            teams: ("Santos".to_string(), "Grêmio".to_string()),
            channels: vec!["SporTV".to_string(), "Premiere".to_string()],
            crests: (
                "https://img.example.com/128.png".to_string(),
                String::new(),
            ),
            kickoff: NaiveDate::from_ymd_opt(2024, 5, 12)
                .unwrap()
                .and_hms_opt(21, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_serialized_shape_uses_cache_field_names() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["campeonato"], "Brasileirão Série A");
        assert_eq!(value["horario"], "21h30");
        assert_eq!(value["times"][1], "Grêmio");
        assert_eq!(value["canais"][0], "SporTV");
        assert_eq!(value["data"], "2024-05-12T21:30:00");
    }

    #[test]
    fn test_cache_roundtrip_preserves_every_field() {
        let fixture = sample();
        let json = serde_json::to_string(&fixture).unwrap();
        let restored: CanonicalFixture = serde_json::from_str(&json).unwrap();
        assert_eq!(fixture, restored);
    }

    #[test]
    fn test_accessors() {
        let fixture = sample();
        assert_eq!(fixture.home_team(), "Santos");
        assert_eq!(fixture.away_team(), "Grêmio");
        assert!(fixture.has_channels());
    }
}
