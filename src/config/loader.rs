//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::RedcapConfig;
use crate::config::secret_string;
use crate::domain::errors::RedcapError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`RedcapConfig`]
/// 4. Applies environment variable overrides (`REDCAP_*` prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use redcap_client::config::load_config;
///
/// let config = load_config("redcap.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<RedcapConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RedcapError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        RedcapError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: RedcapConfig = toml::from_str(&contents)
        .map_err(|e| RedcapError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        RedcapError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static regex");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Don't process env vars in comment lines
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
        return Err(RedcapError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `REDCAP_*` prefix
///
/// Supported variables: `REDCAP_API_URL`, `REDCAP_API_TOKEN`,
/// `REDCAP_TIMEOUT_SECONDS`, `REDCAP_LOGGING_LEVEL`,
/// `REDCAP_LOGGING_LOCAL_ENABLED`, `REDCAP_LOGGING_LOCAL_PATH`
fn apply_env_overrides(config: &mut RedcapConfig) {
    if let Ok(val) = std::env::var("REDCAP_API_URL") {
        config.api_url = val;
    }
    if let Ok(val) = std::env::var("REDCAP_API_TOKEN") {
        config.token = secret_string(val);
    }
    if let Ok(val) = std::env::var("REDCAP_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.timeout_seconds = timeout;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("REDCAP_LOGGING_LEVEL") {
        config.logging.level = val;
    }
    if let Ok(val) = std::env::var("REDCAP_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("REDCAP_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_known_variable() {
        std::env::set_var("REDCAP_TEST_SUBST_VAR", "substituted");
        let input = "token = \"${REDCAP_TEST_SUBST_VAR}\"";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("substituted"));
        std::env::remove_var("REDCAP_TEST_SUBST_VAR");
    }

    #[test]
    fn test_substitute_missing_variable_fails() {
        let input = "token = \"${REDCAP_TEST_DEFINITELY_UNSET}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err
            .to_string()
            .contains("REDCAP_TEST_DEFINITELY_UNSET"));
    }

    #[test]
    fn test_substitution_skips_comments() {
        let input = "# token = \"${REDCAP_TEST_DEFINITELY_UNSET}\"\napi_url = \"x\"";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("${REDCAP_TEST_DEFINITELY_UNSET}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/nonexistent/redcap.toml").unwrap_err();
        assert!(matches!(err, RedcapError::Configuration(_)));
        assert!(err.to_string().contains("not found"));
    }
}
