use super::fixture::Pair;

/// One match as rendered by a broadcast guide page.
///
/// Team names and kickoff time are kept exactly as the guide shows them; the
/// channel names are raw and still need normalizing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BroadcastSourceMatch {
    pub teams: Pair<String>,
    pub kickoff_time: String,
    pub channels: Vec<String>,
}

impl BroadcastSourceMatch {
    pub fn new(
        home: impl Into<String>,
        away: impl Into<String>,
        kickoff_time: impl Into<String>,
        channels: Vec<String>,
    ) -> Self {
        Self {
            teams: (home.into(), away.into()),
            kickoff_time: kickoff_time.into(),
            channels,
        }
    }

    /// Both team names are present and not blank
    pub fn has_team_names(&self) -> bool {
        !self.teams.0.trim().is_empty() && !self.teams.1.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_team_names() {
        let record = BroadcastSourceMatch::new("Santos", "Grêmio", "21h30", vec![]);
        assert!(record.has_team_names());

        let record = BroadcastSourceMatch::new("Santos", "  ", "21h30", vec![]);
        assert!(!record.has_team_names());

        assert!(!BroadcastSourceMatch::default().has_team_names());
    }
}
