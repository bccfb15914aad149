use std::path::Path;
use crate::errors::DroneError;
use super::types::DroneConfig;
use tracing::warn;

pub async fn parse_config(path: &Path) -> Result<DroneConfig, DroneError> {
    if !path.exists() {
        return Err(DroneError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await.map_err(|e| read_error(path, e))?;
    if metadata.len() > 1_048_576 {
        return Err(DroneError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await.map_err(|e| read_error(path, e))?;
    let config = parse_config_str(&content)?;
    validate_config(&config)?;

    Ok(config)
}

fn read_error(path: &Path, err: std::io::Error) -> DroneError {
    DroneError::Config(format!("Could not read config file {}: {}", path.display(), err))
}

fn parse_config_str(content: &str) -> Result<DroneConfig, DroneError> {
    // An empty file is a valid, empty config
    if content.trim().is_empty() {
        return Ok(DroneConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Reject values that can never work and warn about suspicious ones.
fn validate_config(config: &DroneConfig) -> Result<(), DroneError> {
    if config.project_id.as_deref().is_some_and(|id| id.trim().is_empty()) {
        return Err(DroneError::Config("project_id must not be empty".into()));
    }

    if config.api_server.as_deref().is_some_and(|url| url.trim().is_empty()) {
        return Err(DroneError::Config("api_server must not be empty".into()));
    }

    if let Some(tags) = &config.tags {
        if tags.iter().any(|t| t.is_empty()) {
            warn!("Config contains empty tags, they will be imported as-is");
        }
    }

    if config.insecure == Some(true) {
        warn!("TLS certificate verification disabled by config file");
    }

    Ok(())
}
