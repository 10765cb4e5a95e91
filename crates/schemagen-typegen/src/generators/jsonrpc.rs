//! JSON Schema and JSON-RPC (OpenRPC) documents.

use crate::error::Result;
use crate::generate::{generate_file, validate_schema};
use crate::input::SchemaFormat;
use crate::traits::{GenerateConfig, Generator};
use std::path::Path;

pub struct JsonRpcGenerator;

impl Generator for JsonRpcGenerator {
    fn name(&self) -> &'static str {
        "jsonrpc"
    }

    fn description(&self) -> &'static str {
        "Generates Go types from JSON-RPC specifications and JSON Schema files"
    }

    fn supported_formats(&self) -> &'static [&'static str] {
        SchemaFormat::SUFFIXES
    }

    fn generate(&self, config: &GenerateConfig) -> Result<()> {
        generate_file(&config.schema_path, &config.output_path, &config.options)
    }

    fn validate_schema(&self, path: &Path) -> Result<usize> {
        let count = validate_schema(path)?;
        tracing::debug!(path = %path.display(), definitions = count, "schema is valid");
        Ok(count)
    }
}
