use super::types::DroneError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl DroneError {
    /// Classify this error into its reporting category and process exit code.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            DroneError::Config(_) | DroneError::Yaml(_) => ErrorClassification {
                error_type: "ConfigurationError",
                exit_code: 2,
            },
            DroneError::Input(_) => ErrorClassification {
                error_type: "InputError",
                exit_code: 3,
            },
            DroneError::Transport(_) => ErrorClassification {
                error_type: "TransportError",
                exit_code: 4,
            },
            DroneError::Serialization(_) => ErrorClassification {
                error_type: "SerializationError",
                exit_code: 5,
            },
            DroneError::Remote(_) => ErrorClassification {
                error_type: "RemoteError",
                exit_code: 6,
            },
        }
    }

    /// The single line printed before a failed run exits.
    pub fn diagnostic(&self) -> String {
        format!("Fatal: {}: {}", self.classify().error_type, self)
    }
}
