//! Convert command - re-encode a forest between exchange formats

use super::show::{load_store, ExchangeFormat};
use anyhow::Context;
use clap::Args;
use convo_core::export::ExportManager;
use std::path::PathBuf;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input exchange file (.json or .xml)
    pub input: PathBuf,

    /// Output exchange file (.json or .xml)
    pub output: PathBuf,

    /// Input format, inferred from the file extension when omitted
    #[arg(long, value_enum)]
    pub from: Option<ExchangeFormat>,

    /// Output format, inferred from the file extension when omitted
    #[arg(long, value_enum)]
    pub to: Option<ExchangeFormat>,

    /// Emit compact instead of pretty-printed records
    #[arg(long)]
    pub compact: bool,
}

/// Execute the convert command
pub fn execute(args: ConvertArgs) -> anyhow::Result<()> {
    let store = load_store(&args.input, args.from)?;

    let to = match args.to {
        Some(format) => format,
        None => ExchangeFormat::from_path(&args.output)?,
    };
    let format = match to {
        ExchangeFormat::Json if args.compact => "json-compact",
        ExchangeFormat::Json => "json",
        ExchangeFormat::Xml => "xml",
    };

    let manager = ExportManager::new();
    manager
        .export_to_file(&store, format, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "Converted {} ({} comments) -> {}",
        args.input.display(),
        store.len(),
        args.output.display()
    );
    Ok(())
}
