use serde::{Deserialize, Serialize};

use crate::config::ApiEndpoint;

/// Connection settings for the Lair API server.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub username: String,
    pub password: String,
    pub scheme: String,
    pub host: String,
    /// Skip TLS certificate verification. Only ever set on explicit request.
    pub insecure_skip_verify: bool,
}

impl ClientOptions {
    pub fn from_endpoint(endpoint: &ApiEndpoint, insecure_skip_verify: bool) -> Self {
        Self {
            username: endpoint.username.clone(),
            password: endpoint.password.clone(),
            scheme: endpoint.scheme.clone(),
            host: endpoint.host.clone(),
            insecure_skip_verify,
        }
    }
}

/// Server-side import policy toggles, passed through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Disable the server's protection against hosts with excessive ports.
    pub force_ports: bool,
    /// Only import hosts that have at least one service.
    pub limit_hosts: bool,
}

impl ImportOptions {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, &'static str)> {
        let mut pairs = Vec::new();
        if self.force_ports {
            pairs.push(("force-ports", "true"));
        }
        if self.limit_hosts {
            pairs.push(("limit-hosts", "true"));
        }
        pairs
    }
}

/// Status document returned by the import endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl ImportResponse {
    pub fn is_error(&self) -> bool {
        self.status == "Error"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_empty_by_default() {
        assert!(ImportOptions::default().query_pairs().is_empty());
    }

    #[test]
    fn test_query_pairs_both_flags() {
        let opts = ImportOptions { force_ports: true, limit_hosts: true };
        assert_eq!(opts.query_pairs(), vec![("force-ports", "true"), ("limit-hosts", "true")]);
    }

    #[test]
    fn test_response_error_status() {
        let resp: ImportResponse = serde_json::from_str(r#"{"status":"Error","message":"duplicate project"}"#).unwrap();
        assert!(resp.is_error());
        assert_eq!(resp.message, "duplicate project");
    }

    #[test]
    fn test_response_non_error_status() {
        let resp: ImportResponse = serde_json::from_str(r#"{"status":"Ok"}"#).unwrap();
        assert!(!resp.is_error());
        assert!(resp.message.is_empty());
    }

    #[test]
    fn test_response_without_status_rejected() {
        assert!(serde_json::from_str::<ImportResponse>(r#"{"message":"hi"}"#).is_err());
    }
}
