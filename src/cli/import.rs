use std::path::PathBuf;

use tracing::info;

use crate::cli::commands::Cli;
use crate::client::{ClientOptions, ImportOptions, ImportResponse, LairClient};
use crate::config::{self, ApiEndpoint, DroneConfig};
use crate::errors::DroneError;
use crate::mapping::{build_project, parse_tags};
use crate::nmap::parse_nmap_xml;

pub const API_SERVER_ENV: &str = "LAIR_API_SERVER";
pub const PROJECT_ID_ENV: &str = "LAIR_ID";

/// Everything needed for one import run, resolved from the command line,
/// the config file and the environment.
#[derive(Debug, Clone)]
pub struct ImportSettings {
    pub endpoint: ApiEndpoint,
    pub project_id: String,
    pub filename: PathBuf,
    pub tags: Vec<String>,
    pub insecure: bool,
    pub import_options: ImportOptions,
}

pub async fn handle_import(cli: Cli) -> Result<(), DroneError> {
    let file_config = if let Some(config_path) = &cli.config {
        Some(config::parse_config(&PathBuf::from(config_path)).await?)
    } else {
        None
    };

    let settings = build_settings(&cli, file_config.as_ref(), |name| std::env::var(name).ok())?;
    let response = run_import(&settings).await?;

    info!(status = %response.status, message = %response.message, "Import accepted");
    println!("Success: Operation completed successfully");
    Ok(())
}

/// Read the scan report, build the project and upload it.
pub async fn run_import(settings: &ImportSettings) -> Result<ImportResponse, DroneError> {
    let client = LairClient::new(ClientOptions::from_endpoint(&settings.endpoint, settings.insecure))?;

    let data = tokio::fs::read(&settings.filename).await.map_err(|e| {
        DroneError::Input(format!("Could not open file {}: {}", settings.filename.display(), e))
    })?;
    let report = parse_nmap_xml(&data)?;
    info!(
        file = %settings.filename.display(),
        hosts = report.hosts.len(),
        up = report.up_host_count(),
        "Parsed nmap report"
    );

    let project = build_project(&report, &settings.project_id, &settings.tags);
    info!(hosts = project.hosts.len(), services = project.service_count(), "Built project");

    client.import_project(&settings.import_options, &project).await
}

/// Resolve settings. Precedence: command line, then config file, then
/// environment.
pub fn build_settings<F>(
    cli: &Cli,
    file_config: Option<&DroneConfig>,
    env: F,
) -> Result<ImportSettings, DroneError>
where
    F: Fn(&str) -> Option<String>,
{
    let api_server = file_config
        .and_then(|c| c.api_server.as_deref())
        .map(config::resolve_credential)
        .or_else(|| env(API_SERVER_ENV))
        .filter(|url| !url.is_empty())
        .ok_or_else(|| DroneError::Config(format!("Missing {} environment variable", API_SERVER_ENV)))?;
    info!(api_server = %config::redact_url(&api_server), "Using Lair API server");
    let endpoint = config::parse_endpoint(&api_server)?;

    let (positional_id, filename) = match &cli.file {
        Some(file) => (Some(cli.id_or_file.clone()), file.clone()),
        None => (None, cli.id_or_file.clone()),
    };

    let project_id = positional_id
        .or_else(|| file_config.and_then(|c| c.project_id.clone()))
        .or_else(|| env(PROJECT_ID_ENV))
        .filter(|id| !id.is_empty())
        .ok_or_else(|| DroneError::Config(format!(
            "Missing project ID: pass it as the first argument or set {}",
            PROJECT_ID_ENV
        )))?;

    let tags = match &cli.tags {
        Some(raw) => parse_tags(raw),
        None => file_config.and_then(|c| c.tags.clone()).unwrap_or_default(),
    };

    let from_file = |pick: fn(&DroneConfig) -> Option<bool>| file_config.and_then(pick).unwrap_or(false);

    Ok(ImportSettings {
        endpoint,
        project_id,
        filename: PathBuf::from(filename),
        tags,
        insecure: cli.insecure || from_file(|c| c.insecure),
        import_options: ImportOptions {
            force_ports: cli.force_ports || from_file(|c| c.force_ports),
            limit_hosts: cli.limit_hosts || from_file(|c| c.limit_hosts),
        },
    })
}
