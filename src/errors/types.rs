use thiserror::Error;

#[derive(Debug, Error)]
pub enum DroneError {
    /// Missing or malformed endpoint, credentials, project id or config file.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scan report unreadable or not an nmap XML document.
    #[error("Input error: {0}")]
    Input(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The API server answered with `status == "Error"`.
    #[error("Import failed: {0}")]
    Remote(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
