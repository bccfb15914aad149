use percent_encoding::percent_decode_str;
use reqwest::Url;
use tracing::debug;

use crate::errors::DroneError;
use super::types::ApiEndpoint;

/// Resolve a config value. If the value starts with '$', treat it as an
/// environment variable reference and resolve from the environment.
pub fn resolve_credential(value: &str) -> String {
    if let Some(var_name) = value.strip_prefix('$') {
        match std::env::var(var_name) {
            Ok(resolved) => {
                debug!(var = %var_name, "Resolved credential from environment");
                resolved
            }
            Err(_) => {
                debug!(var = %var_name, "Environment variable not set, using literal");
                value.to_string()
            }
        }
    } else {
        value.to_string()
    }
}

/// Split an API server URL into scheme, host and basic auth credentials.
/// Both username and password are required.
pub fn parse_endpoint(raw: &str) -> Result<ApiEndpoint, DroneError> {
    let url = Url::parse(raw)
        .map_err(|e| DroneError::Config(format!("Error parsing API server URL: {}", e)))?;

    let host = url
        .host_str()
        .ok_or_else(|| DroneError::Config("API server URL has no host".into()))?;
    let host = match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };

    let username = decode(url.username());
    let password = url.password().map(decode).unwrap_or_default();
    if username.is_empty() || password.is_empty() {
        return Err(DroneError::Config("Missing username and/or password".into()));
    }

    Ok(ApiEndpoint {
        scheme: url.scheme().to_string(),
        host,
        username,
        password,
    })
}

/// Render a URL with its password masked, for logging.
pub fn redact_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) if url.password().is_some() => {
            // Cannot fail: the URL already carries credentials
            let _ = url.set_password(Some("REDACTED"));
            url.to_string()
        }
        Ok(url) => url.to_string(),
        Err(_) => "[unparseable URL]".to_string(),
    }
}

fn decode(component: &str) -> String {
    percent_decode_str(component).decode_utf8_lossy().into_owned()
}
