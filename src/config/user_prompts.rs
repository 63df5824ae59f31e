//! User prompts for first-run configuration setup

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for the fixtures API key and returns the trimmed input.
///
/// # Example
/// ```no_run
/// use jogos_na_tv::config::user_prompts::prompt_for_api_key;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let api_key = prompt_for_api_key().await?;
/// println!("Got {} characters", api_key.len());
/// # Ok(())
/// # }
/// ```
pub async fn prompt_for_api_key() -> Result<String, AppError> {
    println!("Please enter your fixtures API key: ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
