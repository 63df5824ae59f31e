use crate::cli::Args;
use jogos_na_tv::config::Config;
use jogos_na_tv::config::user_prompts::prompt_for_api_key;
use jogos_na_tv::data_fetcher::{CanonicalFixture, fetch_broadcast_matches};
use jogos_na_tv::error::AppError;
use std::path::Path;

/// Handles the --version command.
pub fn handle_version_command() {
    println!("{} {}", jogos_na_tv::NAME, jogos_na_tv::VERSION);
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// Starts from the saved config (or defaults when none exists yet), applies
/// the requested changes and saves.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    if let Some(new_key) = &args.new_api_key {
        config.api_key = if new_key.trim().is_empty() {
            prompt_for_api_key().await?
        } else {
            new_key.trim().to_string()
        };
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// One plain-text line per match: `21h30  Santos x Grêmio  [Brasileirão Série A]  SporTV, Premiere`.
pub fn format_match_line(fixture: &CanonicalFixture) -> String {
    format!(
        "{}  {} x {}  [{}]  {}",
        fixture.kickoff_time,
        fixture.home_team(),
        fixture.away_team(),
        fixture.league,
        fixture.channels.join(", ")
    )
}

/// Fetches the matches for the requested date and prints them.
pub async fn handle_list_command(args: &Args) -> Result<(), AppError> {
    let matches = fetch_broadcast_matches(args.date.as_deref(), !args.no_cache).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("Nenhum jogo com transmissão encontrado.");
        return Ok(());
    }

    for fixture in &matches {
        println!("{}", format_match_line(fixture));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_match_line() {
        let fixture = CanonicalFixture {
            league: "Brasileirão Série A".to_string(),
            stadium: "Vila Belmiro".to_string(),
            kickoff_time: "21h30".to_string(),
            abbreviations: ("SAN".to_string(), "GRE".to_string()),
            teams: ("Santos".to_string(), "Grêmio".to_string()),
            channels: vec!["SporTV".to_string(), "Premiere".to_string()],
            crests: (String::new(), String::new()),
            kickoff: NaiveDate::from_ymd_opt(2024, 5, 12)
                .unwrap()
                .and_hms_opt(21, 30, 0)
                .unwrap(),
        };

        assert_eq!(
            format_match_line(&fixture),
            "21h30  Santos x Grêmio  [Brasileirão Série A]  SporTV, Premiere"
        );
    }
}
