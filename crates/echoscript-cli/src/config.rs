//! CLI configuration via environment variables
//!
//! EchoScript uses environment variables for optional configuration.
//! This keeps the CLI simple while allowing customization.

use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Default to JSON diagnostic output (ESCRIPT_DIAGNOSTICS=json)
    pub default_json: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            default_json: env::var("ESCRIPT_DIAGNOSTICS")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        env::remove_var("ESCRIPT_DIAGNOSTICS");
        let config = Config::from_env();
        assert!(!config.default_json);
    }

    #[test]
    fn test_config_json_diagnostics() {
        env::set_var("ESCRIPT_DIAGNOSTICS", "json");
        let config = Config::from_env();
        assert!(config.default_json);
        env::remove_var("ESCRIPT_DIAGNOSTICS");
    }

    #[test]
    fn test_config_other_value_is_ignored() {
        env::set_var("ESCRIPT_DIAGNOSTICS", "human");
        let config = Config::from_env();
        assert!(!config.default_json);
        env::remove_var("ESCRIPT_DIAGNOSTICS");
    }
}
