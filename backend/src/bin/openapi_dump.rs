//! Print the OpenAPI document as JSON or YAML.

use std::io::Write;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use event_api::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

/// Dump the event API OpenAPI document to stdout.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump")]
struct Args {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let doc = ApiDoc::openapi();
    let rendered = match args.format {
        Format::Json => doc
            .to_pretty_json()
            .wrap_err("serialise OpenAPI document as JSON")?,
        Format::Yaml => doc
            .to_yaml()
            .wrap_err("serialise OpenAPI document as YAML")?,
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").wrap_err("write OpenAPI document")?;
    Ok(())
}
