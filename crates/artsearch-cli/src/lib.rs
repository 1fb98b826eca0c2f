//! Argument handling and output for the `artsearch` binary.

use artsearch_core::{FieldName, QueryField, VersionRecord};
use artsearch_maven::{CentralConfig, MavenError};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

const FIELDS_HELP: &str = "\
Fields:
  name        free-text search (other fields are ignored)
  groupId     group id, combined with artifactId/version
  artifactId  artifact id
  version     version
  packaging   packaging type (group/artifact/version are ignored)

Set RUST_LOG to control log output on stderr.";

/// Search Maven Central and print one JSON object per artifact file
#[derive(Parser, Debug)]
#[command(name = "artsearch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search Maven Central and print one JSON object per artifact file", long_about = None)]
#[command(after_help = FIELDS_HELP)]
pub struct Cli {
    /// JSON connector settings (base_url, max_stale_secs, timeout_secs, user_agent)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Search fields
    #[arg(value_name = "FIELD=VALUE", value_parser = parse_field)]
    pub fields: Vec<QueryField>,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] MavenError),

    #[error("Failed to serialize record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses one `FIELD=VALUE` argument. Unknown field names are kept.
pub fn parse_field(arg: &str) -> Result<QueryField, String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{arg}'"))?;
    if name.is_empty() {
        return Err(format!("missing field name in '{arg}'"));
    }
    let field = match name.parse::<FieldName>() {
        Ok(field) => field,
        Err(never) => match never {},
    };
    if let FieldName::Other(other) = &field {
        tracing::warn!(field = %other, "unsupported search field");
    }
    Ok(QueryField::new(field, value))
}

/// Reads connector settings from a JSON file, or returns the defaults.
pub fn load_config(path: Option<&Path>) -> Result<CentralConfig, CliError> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(CentralConfig::from_json_str(&text)?)
        }
        None => Ok(CentralConfig::default()),
    }
}

/// Writes one JSON object per record, newline separated.
pub fn write_records<W: Write>(out: &mut W, records: &[VersionRecord]) -> Result<(), CliError> {
    for record in records {
        let line = serde_json::to_string(record)?;
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
