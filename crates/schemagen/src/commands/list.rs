//! List command - show registered generators.

use clap::Args;
use schemagen_typegen::Registry;

/// List command arguments
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the list command
pub fn run(args: ListArgs, registry: &Registry) -> anyhow::Result<()> {
    let infos = registry.info();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    if infos.is_empty() {
        println!("No generators registered.");
        return Ok(());
    }

    println!("Available generators:");
    for info in infos {
        println!();
        println!("  {}", info.name);
        println!("    Description: {}", info.description);
        println!(
            "    Supported formats: {}",
            info.supported_formats.join(", ")
        );
    }
    Ok(())
}
