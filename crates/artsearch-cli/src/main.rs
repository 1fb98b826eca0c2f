use artsearch_cli::{Cli, CliError, load_config, write_records};
use artsearch_core::GenericFindQuery;
use artsearch_maven::MavenCentralSearch;
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "artsearch failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;
    let search = MavenCentralSearch::from_config(config)?;
    let result = search.find(&cli.fields).await;

    tracing::info!(count = result.total_count(), "search finished");
    write_records(&mut std::io::stdout().lock(), result.results())
}
