use clap::Parser;
use drone_nmap::{cli, errors};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::import::handle_import(cli).await {
        let class: errors::ErrorClassification = e.classify();
        tracing::debug!(error_type = class.error_type, "Import aborted");
        eprintln!("{}", e.diagnostic());
        std::process::exit(class.exit_code);
    }
}
