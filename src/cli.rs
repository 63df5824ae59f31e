use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// True when the arguments ask for a configuration change rather than a listing.
pub fn is_config_update(args: &Args) -> bool {
    args.new_api_key.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Jogos na TV
///
/// Lists the day's football matches shown on Brazilian TV and streaming,
/// combining an authoritative fixtures API with two broadcast guides.
///
/// Only matches at least one guide lists a channel for are shown. Results are
/// cached per date; use --no-cache to fetch fresh data.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show matches for a specific date in DD-MM-YYYY format.
    /// If not provided or not a valid date, shows today's matches.
    #[arg(long = "date", short = 'd', help_heading = "Display Options")]
    pub date: Option<String>,

    /// Ignore the cached result for the date and fetch everything again.
    /// The fresh result still replaces the cached one.
    #[arg(long = "no-cache", help_heading = "Display Options")]
    pub no_cache: bool,

    /// Print the matches as JSON instead of a plain list.
    #[arg(long = "json", help_heading = "Display Options")]
    pub json: bool,

    /// Update the fixtures API key in config. Will prompt for the key if not provided.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_KEY",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_key: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Mirror log output to the terminal in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["jogos_na_tv"]);
        assert_eq!(args.date, None);
        assert!(!args.no_cache);
        assert!(!args.json);
        assert!(!is_config_update(&args));
    }

    #[test]
    fn test_date_and_output_flags() {
        let args = Args::parse_from(["jogos_na_tv", "-d", "12-05-2024", "--no-cache", "--json"]);
        assert_eq!(args.date.as_deref(), Some("12-05-2024"));
        assert!(args.no_cache);
        assert!(args.json);
    }

    #[test]
    fn test_config_without_value_prompts() {
        let args = Args::parse_from(["jogos_na_tv", "--config"]);
        assert_eq!(args.new_api_key.as_deref(), Some(""));
        assert!(is_config_update(&args));

        let args = Args::parse_from(["jogos_na_tv", "--config", "abc123"]);
        assert_eq!(args.new_api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_log_file_flags() {
        let args = Args::parse_from(["jogos_na_tv", "--clear-log-file"]);
        assert!(is_config_update(&args));

        let args = Args::parse_from(["jogos_na_tv", "--log-file", "/tmp/j.log", "--debug"]);
        assert!(!is_config_update(&args));
        assert!(args.debug);
    }
}
