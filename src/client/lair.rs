use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::errors::DroneError;
use crate::models::Project;
use crate::utils::truncation::truncate_error;
use super::types::{ClientOptions, ImportOptions, ImportResponse};

/// Client for the Lair API server's project import endpoint.
pub struct LairClient {
    client: Client,
    base_url: Url,
    username: String,
    password: String,
}

impl LairClient {
    pub fn new(opts: ClientOptions) -> Result<Self, DroneError> {
        if opts.username.is_empty() || opts.password.is_empty() {
            return Err(DroneError::Config("Missing username and/or password".into()));
        }
        if opts.scheme.is_empty() || opts.host.is_empty() {
            return Err(DroneError::Config("Missing API server scheme and/or host".into()));
        }

        let base_url = Url::parse(&format!("{}://{}/", opts.scheme, opts.host))
            .map_err(|e| DroneError::Config(format!("Invalid API server address: {}", e)))?;

        let client = Client::builder()
            .danger_accept_invalid_certs(opts.insecure_skip_verify)
            .build()
            .map_err(|e| DroneError::Transport(format!("Error setting up client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            username: opts.username,
            password: opts.password,
        })
    }

    /// Upload `project` in a single request. A server reply with status
    /// `"Error"` becomes `DroneError::Remote` carrying the server's message.
    pub async fn import_project(
        &self,
        opts: &ImportOptions,
        project: &Project,
    ) -> Result<ImportResponse, DroneError> {
        if project.id.is_empty() {
            return Err(DroneError::Config("Project ID can not be empty".into()));
        }

        let url = self.import_url(&project.id)?;
        let body = serde_json::to_vec(project)
            .map_err(|e| DroneError::Serialization(format!("Could not encode project: {}", e)))?;

        info!(
            project_id = %project.id,
            hosts = project.hosts.len(),
            force_ports = opts.force_ports,
            limit_hosts = opts.limit_hosts,
            "Importing project"
        );

        let resp = self.client
            .post(url)
            .query(&opts.query_pairs())
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| DroneError::Transport(format!("Unable to import project: {}", e)))?;

        let status = resp.status();
        let text = resp.text().await
            .map_err(|e| DroneError::Transport(format!("Error reading response: {}", e)))?;
        debug!(http_status = status.as_u16(), bytes = text.len(), "Received import response");

        let result: ImportResponse = serde_json::from_str(&text).map_err(|e| {
            DroneError::Serialization(format!(
                "Could not unmarshal JSON (HTTP {}): {}; body: {}",
                status, e, truncate_error(&text)
            ))
        })?;

        if result.is_error() {
            return Err(DroneError::Remote(result.message));
        }

        Ok(result)
    }

    fn import_url(&self, project_id: &str) -> Result<Url, DroneError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DroneError::Config(format!("API server URL cannot be a base: {}", self.base_url)))?
            .clear()
            .extend(["api", "projects", project_id]);
        Ok(url)
    }
}
