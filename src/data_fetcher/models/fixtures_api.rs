use serde::{Deserialize, Serialize};

/// Envelope of the fixtures endpoint.
///
/// Entries are kept as raw JSON so that one malformed fixture is skipped on
/// its own instead of failing the whole response.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FixturesResponse {
    #[serde(default)]
    pub results: Option<i64>,
    /// `[]` on success, an object of messages (bad key, quota) otherwise
    #[serde(default)]
    pub errors: serde_json::Value,
    #[serde(default)]
    pub response: Vec<serde_json::Value>,
}

impl FixturesResponse {
    /// Error messages reported in the body of a 200 response, joined with "; ".
    pub fn error_message(&self) -> Option<String> {
        let messages: Vec<String> = match &self.errors {
            serde_json::Value::Object(map) => map
                .iter()
                .map(|(field, message)| match message.as_str() {
                    Some(text) => format!("{field}: {text}"),
                    None => format!("{field}: {message}"),
                })
                .collect(),
            serde_json::Value::Array(items) => items.iter().map(ToString::to_string).collect(),
            _ => Vec::new(),
        };
        (!messages.is_empty()).then(|| messages.join("; "))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiFixture {
    pub fixture: ApiFixtureInfo,
    pub league: ApiLeague,
    pub teams: ApiTeams,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiFixtureInfo {
    #[serde(default)]
    pub id: Option<i64>,
    /// RFC 3339 kickoff timestamp in the timezone the request asked for
    pub date: String,
    #[serde(default)]
    pub venue: Option<ApiVenue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiVenue {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiLeague {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    /// Editorial display name that overrides `name` when present
    #[serde(default, alias = "display_name")]
    pub editorial_name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiTeams {
    pub home: ApiTeam,
    pub away: ApiTeam,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiTeam {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    /// Short code; the fixtures endpoint usually leaves it out
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl ApiFixture {
    pub fn venue_name(&self) -> Option<&str> {
        self.fixture.venue.as_ref().and_then(|v| v.name.as_deref())
    }
}
