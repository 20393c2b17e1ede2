//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SheetflowConfig;
use crate::config::secret_string;
use crate::domain::errors::SheetflowError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SheetflowConfig
/// 4. Applies environment variable overrides (SHEETFLOW_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use sheetflow::config::loader::load_config;
///
/// let config = load_config("sheetflow.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SheetflowConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SheetflowError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SheetflowError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: SheetflowConfig = toml::from_str(&contents)
        .map_err(|e| SheetflowError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        SheetflowError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched so a commented-out `${VAR}` does not
/// count as a missing variable.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static regex is valid");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SheetflowError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the SHEETFLOW_* prefix
///
/// Environment variables follow the pattern: SHEETFLOW_<SECTION>_<KEY>
/// For example: SHEETFLOW_PLATFORM_BASE_URL, SHEETFLOW_WEBHOOK_URL
fn apply_env_overrides(config: &mut SheetflowConfig) {
    if let Ok(val) = std::env::var("SHEETFLOW_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("SHEETFLOW_PLATFORM_BASE_URL") {
        config.platform.base_url = val;
    }
    if let Ok(val) = std::env::var("SHEETFLOW_PLATFORM_API_TOKEN") {
        config.platform.api_token = secret_string(val);
    }
    if let Ok(val) = std::env::var("SHEETFLOW_PLATFORM_TIMEOUT_SECONDS") {
        if let Ok(seconds) = val.parse() {
            config.platform.timeout_seconds = seconds;
        }
    }
    if let Ok(val) = std::env::var("SHEETFLOW_PLATFORM_TLS_VERIFY") {
        config.platform.tls_verify = val.parse().unwrap_or(true);
    }

    if let Ok(val) = std::env::var("SHEETFLOW_WEBHOOK_URL") {
        config.webhook.url = val;
    }

    if let Ok(val) = std::env::var("SHEETFLOW_LISTENER_POLL_INTERVAL_MS") {
        if let Ok(interval) = val.parse() {
            config.listener.poll_interval_ms = interval;
        }
    }
    if let Ok(val) = std::env::var("SHEETFLOW_LISTENER_PAGE_SIZE") {
        if let Ok(size) = val.parse() {
            config.listener.page_size = size;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_env_vars_present() {
        std::env::set_var("SHEETFLOW_TEST_SUB_VAR", "substituted");
        let input = "url = \"${SHEETFLOW_TEST_SUB_VAR}\"";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("substituted"));
        std::env::remove_var("SHEETFLOW_TEST_SUB_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        let input = "token = \"${SHEETFLOW_TEST_DEFINITELY_MISSING}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err
            .to_string()
            .contains("SHEETFLOW_TEST_DEFINITELY_MISSING"));
    }

    #[test]
    fn test_substitute_skips_comments() {
        let input = "# token = \"${SHEETFLOW_TEST_COMMENTED_VAR}\"";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("${SHEETFLOW_TEST_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/nonexistent/sheetflow.toml").unwrap_err();
        assert!(matches!(err, SheetflowError::Configuration(_)));
        assert!(err.to_string().contains("not found"));
    }
}
