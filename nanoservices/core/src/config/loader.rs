use std::path::Path;

use bulkcopy_utils::error::Error;

use crate::config::types::DemoConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

/// Load a demo config from a YAML file.
pub fn load_config(path: impl AsRef<Path>) -> Result<DemoConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse a demo config from a YAML string.
pub fn parse_config(yaml: &str) -> Result<DemoConfig, ConfigError> {
    let config: DemoConfig = serde_yaml::from_str(yaml)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &DemoConfig) -> Result<(), ConfigError> {
    if config.batch_size == 0 {
        return Err(ConfigError::Invalid("batch_size must be at least 1".to_string()));
    }
    if let Some(p) = config.pipelines.iter().find(|p| p.name.trim().is_empty()) {
        return Err(ConfigError::Invalid(format!(
            "pipeline for system {:?} has an empty name",
            p.system
        )));
    }
    Ok(())
}
