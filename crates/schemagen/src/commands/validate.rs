//! Validate command - check a schema without generating anything.

use anyhow::Context;
use clap::Args;
use schemagen_typegen::Registry;
use std::path::PathBuf;

/// Validate command arguments
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Input schema file (.json, .yaml or .yml)
    pub schema: PathBuf,

    /// Generator whose validation rules to apply
    #[arg(short, long)]
    pub generator: Option<String>,
}

/// Run the validate command
pub fn run(args: ValidateArgs, registry: &Registry) -> anyhow::Result<()> {
    let generator = super::pick_generator(registry, args.generator.as_deref(), &args.schema)?;
    let count = generator
        .validate_schema(&args.schema)
        .context("schema validation failed")?;
    println!(
        "{}: {} definitions ({})",
        args.schema.display(),
        count,
        generator.name()
    );
    Ok(())
}
