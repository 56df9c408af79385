use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid portal config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PortalConfig {
    pub projects: ProjectsConfig,
    pub animation: AnimationConfig,
}

/// Projects table: data location and progressive loading
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProjectsConfig {
    pub data_url: String,
    /// Rows rendered by the first batch of a filter
    pub initial_rows: usize,
    /// Rows rendered by each following batch
    pub load_more_rows: usize,
    pub truncate_length: usize,
    /// Pause before a follow-up batch is appended
    pub load_delay_ms: u32,
    /// Distance below the viewport at which the sentinel triggers loading
    pub sentinel_margin_px: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AnimationConfig {
    pub count_duration_ms: u32,
    pub value_swap_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[projects]
data_url = "/data/dpwh-projects.json"
initial_rows = 8
load_more_rows = 8
truncate_length = 80
load_delay_ms = 150
sentinel_margin_px = 100

[animation]
count_duration_ms = 2000
value_swap_ms = 150
"#;

pub fn parse_config(source: &str) -> Result<PortalConfig, ConfigError> {
    Ok(toml::from_str(source)?)
}

/// Load the embedded configuration.
///
/// Falls back to [`PortalConfig::default`] if the embedded text does not parse.
pub fn load_config() -> PortalConfig {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => {
            log::debug!("Using embedded portal configuration");
            config
        }
        Err(err) => {
            log::warn!("{}; using built-in defaults", err);
            PortalConfig::default()
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            projects: ProjectsConfig {
                data_url: "/data/dpwh-projects.json".to_string(),
                initial_rows: 8,
                load_more_rows: 8,
                truncate_length: 80,
                load_delay_ms: 150,
                sentinel_margin_px: 100,
            },
            animation: AnimationConfig {
                count_duration_ms: 2000,
                value_swap_ms: 150,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), PortalConfig::default());
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let err = parse_config("[projects]\ninitial_rows = 8\n").unwrap_err();
        assert!(err.to_string().starts_with("invalid portal config"));
    }
}
