//! Subcommands of the `schemagen` binary.

pub mod generate;
pub mod list;
pub mod validate;

use anyhow::Context;
use schemagen_typegen::{Generator, Registry};
use std::path::Path;

/// The generator named on the command line, or the first one (in name order)
/// supporting the schema's file suffix.
pub(crate) fn pick_generator<'a>(
    registry: &'a Registry,
    name: Option<&str>,
    schema: &Path,
) -> anyhow::Result<&'a dyn Generator> {
    if let Some(name) = name {
        return registry.get(name).context("generator lookup failed");
    }

    let candidates = registry.for_path(schema)?;
    let chosen = candidates[0];
    if candidates.len() > 1 {
        let names: Vec<&str> = candidates.iter().map(|g| g.name()).collect();
        tracing::info!(
            "multiple generators support this format: {}. Using '{}'. Use --generator to choose.",
            names.join(", "),
            chosen.name()
        );
    }
    Ok(chosen)
}
