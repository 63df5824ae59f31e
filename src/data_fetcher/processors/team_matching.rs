//! Decides whether two renderings of a match refer to the same fixture.
//!
//! Guides abbreviate and decorate club names differently from the fixtures
//! API (`Sao Paulo FC`, `Atlético-MG`, `Corinthians (F)`), so names are folded
//! to a common form and compared by containment rather than equality.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::time_formatting::{leading_hour, normalize_time_string};
use crate::data_fetcher::models::Pair;

/// Ordered alias substitutions applied to folded, lower-cased names.
///
/// Suffix forms come first so club corrections see a uniform name.
const TEAM_ALIASES: &[(&str, &str)] = &[
    // women's teams
    (" (f)", " feminino"),
    (" fem.", " feminino"),
    (" women", " feminino"),
    (" fem ", " feminino "),
    // under-age categories
    (" u-20", " sub-20"),
    (" u20", " sub-20"),
    (" sub 20", " sub-20"),
    (" u-17", " sub-17"),
    (" u17", " sub-17"),
    (" sub 17", " sub-17"),
    // club corrections
    ("athletico-pr", "athletico paranaense"),
    ("atletico-pr", "athletico paranaense"),
    ("atletico paranaense", "athletico paranaense"),
    ("atletico-mg", "atletico mineiro"),
    ("atletico-go", "atletico goianiense"),
    ("america-mg", "america mineiro"),
    ("red bull bragantino", "bragantino"),
    ("rb bragantino", "bragantino"),
    ("vasco da gama", "vasco"),
];

/// Strips diacritics by canonical decomposition, dropping combining marks.
///
/// Letters whose stroke or missing dot is not a combining mark (`ı`, `ø`,
/// `ł`, `đ`) are mapped to their base letter explicitly.
pub fn fold_diacritics(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'ı' => 'i',
            'ø' => 'o',
            'Ø' => 'O',
            'ł' => 'l',
            'Ł' => 'L',
            'đ' => 'd',
            'Đ' => 'D',
            other => other,
        })
        .collect()
}

/// Canonical comparison form of a club name.
///
/// # Examples
///
/// ```
/// use jogos_na_tv::data_fetcher::processors::normalize_team_name;
///
/// assert_eq!(normalize_team_name("Grêmio"), "gremio");
/// assert_eq!(normalize_team_name("Atlético-MG"), "atletico mineiro");
/// assert_eq!(normalize_team_name("Corinthians (F)"), "corinthians feminino");
/// ```
pub fn normalize_team_name(name: &str) -> String {
    let folded = fold_diacritics(name.trim()).to_lowercase();
    let collapsed = folded.split_whitespace().collect::<Vec<_>>().join(" ");

    // Padding lets suffix aliases that start with a space match at the ends
    let mut normalized = format!(" {collapsed} ");
    for (alias, canonical) in TEAM_ALIASES {
        if normalized.contains(alias) {
            normalized = normalized.replace(alias, canonical);
        }
    }
    if let Some(stripped) = normalized.trim_end().strip_suffix(" w") {
        normalized = format!("{stripped} feminino");
    }

    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Two names match when either normalized form contains the other.
///
/// Blank names never match.
pub fn team_names_match(left: &str, right: &str) -> bool {
    let left = normalize_team_name(left);
    let right = normalize_team_name(right);
    if left.is_empty() || right.is_empty() {
        return false;
    }
    left.contains(&right) || right.contains(&left)
}

/// Kickoff times match when identical after normalization or when their
/// leading hours are at most one apart.
///
/// The hour comparison is literal: `23h50` and `00h10` are 23 hours apart.
pub fn kickoff_times_match(left: &str, right: &str) -> bool {
    let left = normalize_time_string(left);
    let right = normalize_time_string(right);
    if left == right {
        return true;
    }
    match (leading_hour(&left), leading_hour(&right)) {
        (Some(a), Some(b)) => a.abs_diff(b) <= 1,
        _ => false,
    }
}

/// True when home matches home, away matches away, and the kickoff times match.
///
/// Sides are never swapped.
pub fn fixtures_match(
    fixture_teams: &Pair<String>,
    fixture_time: &str,
    candidate_teams: &Pair<String>,
    candidate_time: &str,
) -> bool {
    team_names_match(&fixture_teams.0, &candidate_teams.0)
        && team_names_match(&fixture_teams.1, &candidate_teams.1)
        && kickoff_times_match(fixture_time, candidate_time)
}
