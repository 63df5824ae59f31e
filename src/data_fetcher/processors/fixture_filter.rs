use super::team_matching::fold_diacritics;
use super::time_formatting::{format_kickoff_hour, parse_kickoff};
use crate::constants::leagues::{EDITORIAL_NAMES, TARGET_COUNTRY, TRACKED_LEAGUE_IDS};
use crate::data_fetcher::models::{ApiFixture, ApiTeam, CanonicalFixture};
use crate::error::AppError;
use chrono::{DateTime, NaiveDateTime};
use tracing::debug;

/// Decides which authoritative fixtures the guide covers.
///
/// A fixture is in scope when its league belongs to the target country or its
/// league ID is on the static allow-list (plus any configured extras).
#[derive(Debug, Clone, Default)]
pub struct FixtureFilter {
    extra_league_ids: Vec<i64>,
}

impl FixtureFilter {
    pub fn new(extra_league_ids: Vec<i64>) -> Self {
        Self { extra_league_ids }
    }

    pub fn is_in_scope(&self, record: &ApiFixture) -> bool {
        let league = &record.league;
        league.country.as_deref() == Some(TARGET_COUNTRY)
            || TRACKED_LEAGUE_IDS.contains(&league.id)
            || self.extra_league_ids.contains(&league.id)
    }
}

/// Wall-clock kickoff of a record, in the offset the API rendered it in.
///
/// # Errors
///
/// `AppError::DateTimeParse` when the record's timestamp is not RFC 3339.
pub fn record_kickoff(record: &ApiFixture) -> Result<NaiveDateTime, AppError> {
    DateTime::parse_from_rfc3339(record.fixture.date.trim())
        .map(|dt| dt.naive_local())
        .map_err(|e| {
            AppError::datetime_parse_error(format!(
                "Invalid fixture timestamp '{}': {e}",
                record.fixture.date
            ))
        })
}

/// Fallback abbreviation: first three letters of the folded, space-free, upper-cased name.
///
/// ```
/// use jogos_na_tv::data_fetcher::processors::fallback_abbreviation;
///
/// assert_eq!(fallback_abbreviation("Grêmio"), "GRE");
/// assert_eq!(fallback_abbreviation("São Paulo"), "SAO");
/// ```
pub fn fallback_abbreviation(name: &str) -> String {
    fold_diacritics(name)
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(3)
        .collect::<String>()
        .to_uppercase()
}

fn team_abbreviation(team: &ApiTeam, name: &str) -> String {
    match team.code.as_deref().map(str::trim) {
        Some(code) if !code.is_empty() => code.to_uppercase(),
        _ => fallback_abbreviation(name),
    }
}

/// League display name: the record's editorial name, then the built-in
/// editorial table, then the raw league name.
pub fn league_display_name(record: &ApiFixture) -> String {
    let league = &record.league;
    if let Some(editorial) = league
        .editorial_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
    {
        return editorial.to_string();
    }

    EDITORIAL_NAMES
        .iter()
        .find(|(id, _)| *id == league.id)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| league.name.clone())
}

fn team_name(team: &ApiTeam) -> Option<&str> {
    team.name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Converts an authoritative record into a canonical fixture with no channels.
///
/// `date` is the requested `dd-mm-yyyy` date the kickoff is resolved against.
/// Returns `Ok(None)` when either team name is missing.
///
/// # Errors
///
/// The record's timestamp cannot be read or its hour string does not parse.
/// Callers drop that record and carry on.
pub fn convert_fixture(
    record: &ApiFixture,
    date: &str,
) -> Result<Option<CanonicalFixture>, AppError> {
    let (Some(home), Some(away)) = (team_name(&record.teams.home), team_name(&record.teams.away))
    else {
        debug!(
            "Skipping fixture {:?} with a missing team name",
            record.fixture.id
        );
        return Ok(None);
    };

    let kickoff_time = format_kickoff_hour(&record_kickoff(record)?.time());
    let kickoff = parse_kickoff(date, &kickoff_time)?;

    Ok(Some(CanonicalFixture {
        league: league_display_name(record),
        stadium: record.venue_name().unwrap_or_default().to_string(),
        kickoff_time,
        abbreviations: (
            team_abbreviation(&record.teams.home, home),
            team_abbreviation(&record.teams.away, away),
        ),
        teams: (home.to_string(), away.to_string()),
        channels: Vec::new(),
        crests: (
            record.teams.home.logo.clone().unwrap_or_default(),
            record.teams.away.logo.clone().unwrap_or_default(),
        ),
        kickoff,
    }))
}
