//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers and fixed tables the matching
//! rules depend on, so rule changes happen in one place.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Default fixtures API domain
pub const DEFAULT_API_DOMAIN: &str = "https://v3.football.api-sports.io";

/// Timezone sent to the fixtures API so kickoff timestamps come back in local wall-clock time
pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

/// User agent used when fetching broadcast guide pages
pub const SCRAPER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";

/// Capacity of the in-memory match cache (number of dates)
pub const MEMORY_CACHE_CAPACITY: usize = 31;

/// Date format of the public entry point and cache keys (dd-mm-yyyy)
pub const REQUEST_DATE_FORMAT: &str = "%d-%m-%Y";

/// Date format expected by the fixtures API (yyyy-mm-dd)
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Leagues and countries the guide tracks
pub mod leagues {
    /// Fixtures from this country are always in scope
    pub const TARGET_COUNTRY: &str = "Brazil";

    pub const BRASILEIRAO_SERIE_A: i64 = 71;
    pub const BRASILEIRAO_SERIE_B: i64 = 72;
    pub const COPA_DO_BRASIL: i64 = 73;
    pub const LIBERTADORES: i64 = 13;
    pub const LIBERTADORES_FEMININA: i64 = 1076;
    pub const PREMIER_LEAGUE: i64 = 39;
    pub const LA_LIGA: i64 = 140;
    pub const SERIE_A_ITALY: i64 = 135;
    pub const LIGUE_1: i64 = 61;
    pub const CHAMPIONS_LEAGUE: i64 = 2;
    pub const SAUDI_PRO_LEAGUE: i64 = 307;

    /// League IDs that are in scope regardless of country
    pub const TRACKED_LEAGUE_IDS: &[i64] = &[
        BRASILEIRAO_SERIE_A,
        BRASILEIRAO_SERIE_B,
        LIBERTADORES,
        LIBERTADORES_FEMININA,
        PREMIER_LEAGUE,
        LA_LIGA,
        SERIE_A_ITALY,
        LIGUE_1,
        CHAMPIONS_LEAGUE,
        SAUDI_PRO_LEAGUE,
    ];

    /// Display names used when a record carries no editorial name of its own
    pub const EDITORIAL_NAMES: &[(i64, &str)] = &[
        (BRASILEIRAO_SERIE_A, "Brasileirão Série A"),
        (BRASILEIRAO_SERIE_B, "Brasileirão Série B"),
        (COPA_DO_BRASIL, "Copa do Brasil"),
        (LIBERTADORES, "Copa Libertadores"),
    ];
}

/// Broadcaster brands the channel rules key on
pub mod channels {
    /// State broadcaster that lists regional feeds by federative unit
    pub const STATE_BROADCASTER: &str = "Globo";

    /// Pay-per-view brand with numbered feeds
    pub const PAY_PER_VIEW: &str = "Premiere";

    /// Brazilian federative-unit codes accepted as regional feed suffixes
    pub const REGION_CODES: &[&str] = &[
        "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB",
        "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
    ];
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "JOGOS_API_DOMAIN";

    /// Environment variable for API key override
    pub const API_KEY: &str = "JOGOS_API_KEY";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "JOGOS_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "JOGOS_HTTP_TIMEOUT";

    /// Environment variable for cache file path override
    pub const CACHE_FILE: &str = "JOGOS_CACHE_FILE";
}

/// Retry configuration
pub mod retry {
    /// Maximum number of retry attempts for API calls
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Base delay for exponential backoff (milliseconds)
    pub const BASE_DELAY_MS: u64 = 250;
}
