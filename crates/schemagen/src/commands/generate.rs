//! Generate command - write Go types for a schema file.

use crate::config::SchemagenConfig;
use anyhow::Context;
use clap::Args;
use schemagen_typegen::{GenerateConfig, GenerateOptions, Registry};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Generate command arguments
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Input schema file (.json, .yaml or .yml)
    pub schema: PathBuf,

    /// Output Go file
    pub output: PathBuf,

    /// Generator to use (auto-detected from the file suffix if omitted)
    #[arg(short, long)]
    pub generator: Option<String>,

    /// Go package name [default: types]
    #[arg(short, long)]
    pub package: Option<String>,

    /// JSON object of acronym overrides, e.g. '{"api":true,"jwt":true}'
    #[arg(long, value_name = "JSON")]
    pub acronyms: Option<String>,

    /// Do not emit schema descriptions as comments
    #[arg(long)]
    pub no_comments: bool,

    /// Do not run gofmt on the output
    #[arg(long)]
    pub no_format: bool,

    /// Config file (defaults to ./schemagen.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Defaults, then the config file, then command-line flags.
    pub fn options(&self, config: &SchemagenConfig) -> anyhow::Result<GenerateOptions> {
        let mut options = GenerateOptions::default();
        config.apply(&mut options);

        if let Some(package) = &self.package {
            options.package = package.clone();
        }
        if let Some(json) = &self.acronyms {
            let overrides: BTreeMap<String, bool> =
                serde_json::from_str(json).context("failed to parse --acronyms JSON")?;
            options.acronyms.extend(overrides);
        }
        if self.no_comments {
            options.include_comments = false;
        }
        if self.no_format {
            options.format_output = false;
        }
        Ok(options)
    }
}

/// Run the generate command
pub fn run(args: GenerateArgs, registry: &Registry) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let config = SchemagenConfig::load(args.config.as_deref(), &cwd)?;
    let options = args.options(&config)?;

    let generator = super::pick_generator(registry, args.generator.as_deref(), &args.schema)?;
    generator
        .validate_schema(&args.schema)
        .context("schema validation failed")?;

    let generate_config = GenerateConfig {
        schema_path: args.schema.clone(),
        output_path: args.output.clone(),
        options,
    };
    generator
        .generate(&generate_config)
        .context("failed to generate code")?;

    println!(
        "Generated {} using '{}'",
        args.output.display(),
        generator.name()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    fn parse(argv: &[&str]) -> GenerateArgs {
        Cli::parse_from(std::iter::once("schemagen").chain(argv.iter().copied())).args
    }

    #[test]
    fn flags_override_config() {
        let config = SchemagenConfig {
            package: Some("models".into()),
            comments: Some(true),
            format: Some(true),
            acronyms: BTreeMap::from([("jwt".to_string(), true)]),
        };
        let args = parse(&[
            "in.json",
            "out.go",
            "--package",
            "api",
            "--no-comments",
            "--no-format",
            "--acronyms",
            r#"{"jwt": false, "sdk": true}"#,
        ]);

        let options = args.options(&config).unwrap();
        assert_eq!(options.package, "api");
        assert!(!options.include_comments);
        assert!(!options.format_output);
        assert_eq!(options.acronyms.get("jwt"), Some(&false));
        assert_eq!(options.acronyms.get("sdk"), Some(&true));
    }

    #[test]
    fn config_fills_unset_flags() {
        let config = SchemagenConfig {
            package: Some("models".into()),
            ..Default::default()
        };
        let options = parse(&["in.json", "out.go"]).options(&config).unwrap();
        assert_eq!(options.package, "models");
        assert!(options.include_comments);
        assert!(options.format_output);
    }

    #[test]
    fn malformed_acronyms_are_rejected() {
        let args = parse(&["in.json", "out.go", "--acronyms", "[1, 2]"]);
        let err = args.options(&SchemagenConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--acronyms"));
    }
}
