//! Channel-name normalization.
//!
//! Guides spell the same channel many ways (`SPORTV`, `Sportv 2`,
//! `PREMIERE FC`, `GLOBO SP, MG`). Each raw entry maps to one or more
//! canonical names. Rules are tried in order and the first one that applies
//! wins, so the order of [`REWRITE_RULES`] is part of the observable output.

use crate::constants::channels::{PAY_PER_VIEW, REGION_CODES, STATE_BROADCASTER};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Insertion-ordered set of channel names, first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelSet {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl ChannelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a name unless an identical one is already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.seen.contains(&name) {
            return false;
        }
        self.seen.insert(name.clone());
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Keeps only the names for which `keep` returns true, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        let seen = &mut self.seen;
        self.names.retain(|name| {
            let kept = keep(name.as_str());
            if !kept {
                seen.remove(name);
            }
            kept
        });
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

impl Extend<String> for ChannelSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl FromIterator<String> for ChannelSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = ChannelSet::new();
        set.extend(iter);
        set
    }
}

enum Rewrite {
    /// Whole entry equals one of the lower-case labels
    Exact(&'static [&'static str], &'static str),
    /// Brand token anywhere in the entry is replaced, surrounding text kept
    Token(Regex, &'static str),
    /// Brand token anywhere in the entry; output is the brand plus whatever trails it
    Trailing(Regex, &'static str),
}

impl Rewrite {
    fn apply(&self, entry: &str) -> Option<String> {
        match self {
            Rewrite::Exact(labels, canonical) => {
                let lower = entry.to_lowercase();
                labels
                    .iter()
                    .any(|label| *label == lower)
                    .then(|| canonical.to_string())
            }
            Rewrite::Token(pattern, canonical) => pattern
                .is_match(entry)
                .then(|| pattern.replace_all(entry, *canonical).trim().to_string()),
            Rewrite::Trailing(pattern, canonical) => pattern
                .find(entry)
                .map(|m| format!("{canonical}{}", &entry[m.end()..]).trim_end().to_string()),
        }
    }
}

fn brand_pattern(brand: &str) -> Regex {
    Regex::new(&format!("(?i){}", regex::escape(brand))).expect("valid brand pattern")
}

static REWRITE_RULES: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    vec![
        Rewrite::Exact(&["premiere fc"], "Premiere"),
        Rewrite::Exact(&["globo", "tv globo", "rede globo"], "Globo"),
        Rewrite::Exact(&["disney+ premium"], "Disney+"),
        Rewrite::Token(brand_pattern("sportv"), "SporTV"),
        Rewrite::Exact(&["cazetv", "cazétv"], "CazéTV"),
        Rewrite::Trailing(brand_pattern(PAY_PER_VIEW), PAY_PER_VIEW),
    ]
});

static STATE_BROADCASTER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(STATE_BROADCASTER)))
        .expect("valid broadcaster token pattern")
});

static REGION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2}\b").expect("valid region token pattern"));

static NUMBERED_PAY_PER_VIEW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^{}\s+\d+$", regex::escape(PAY_PER_VIEW)))
        .expect("valid numbered feed pattern")
});

/// Expands `GLOBO SP, MS, BA` into one regional feed per distinct region code.
fn expand_regional_feeds(entry: &str) -> Option<Vec<String>> {
    if !STATE_BROADCASTER_TOKEN.is_match(entry) {
        return None;
    }

    let without_brand = STATE_BROADCASTER_TOKEN.replace_all(entry, " ");
    let mut regions: Vec<&str> = Vec::new();
    for token in REGION_TOKEN.find_iter(&without_brand) {
        let code = token.as_str();
        if REGION_CODES.contains(&code) && !regions.contains(&code) {
            regions.push(code);
        }
    }

    if regions.is_empty() {
        return None;
    }

    Some(
        regions
            .into_iter()
            .map(|code| format!("{STATE_BROADCASTER} {code}"))
            .collect(),
    )
}

/// Canonical names for one raw channel entry. Blank entries yield nothing.
pub fn normalize_channel(raw: &str) -> Vec<String> {
    let entry = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if entry.is_empty() {
        return Vec::new();
    }

    if let Some(feeds) = expand_regional_feeds(&entry) {
        return feeds;
    }

    REWRITE_RULES
        .iter()
        .find_map(|rule| rule.apply(&entry))
        .map(|name| vec![name])
        .unwrap_or_else(|| vec![entry])
}

/// Normalizes a raw channel list into an ordered, deduplicated set.
///
/// # Examples
///
/// ```
/// use jogos_na_tv::data_fetcher::processors::normalize_channels;
///
/// let channels = normalize_channels(&["SPORTV", "PREMIERE FC", "sportv"]);
/// assert_eq!(channels.into_vec(), vec!["SporTV", "Premiere"]);
/// ```
pub fn normalize_channels<S: AsRef<str>>(raw: &[S]) -> ChannelSet {
    raw.iter()
        .flat_map(|entry| normalize_channel(entry.as_ref()))
        .collect()
}

/// Drops the generic pay-per-view feed once a numbered feed is known.
///
/// `{"Premiere", "Premiere 3", "SporTV"}` becomes `{"Premiere 3", "SporTV"}`;
/// without a numbered feed the set is returned unchanged.
pub fn apply_channel_precedence(mut channels: ChannelSet) -> ChannelSet {
    let has_numbered_feed = channels
        .iter()
        .any(|name| NUMBERED_PAY_PER_VIEW.is_match(name));

    if has_numbered_feed {
        channels.retain(|name| !name.trim().eq_ignore_ascii_case(PAY_PER_VIEW));
    }
    channels
}
