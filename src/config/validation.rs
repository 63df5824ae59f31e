use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain and API key cannot be empty
/// - API domain must be a valid URL or domain name
/// - Guide URL templates must be http(s) URLs containing `{date}` or `{iso_date}`
/// - If log file path is provided, it cannot be empty and its parent must be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    let api_domain = config.api_domain.as_str();
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // If it doesn't start with protocol, it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    if config.api_key.trim().is_empty() {
        return Err(AppError::config_error("API key cannot be empty"));
    }

    for template in [&config.primary_guide_url, &config.secondary_guide_url]
        .into_iter()
        .flatten()
    {
        validate_guide_template(template)?;
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_guide_template(template: &str) -> Result<(), AppError> {
    if !template.starts_with("http://") && !template.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "Guide URL must start with http:// or https://: {template}"
        )));
    }
    if !template.contains("{date}") && !template.contains("{iso_date}") {
        return Err(AppError::config_error(format!(
            "Guide URL must contain a {{date}} or {{iso_date}} placeholder: {template}"
        )));
    }
    Ok(())
}
