//! OpenAPI 3.x documents.
//!
//! `components.schemas` is ordinary JSON Schema, so generation shares the
//! JSON Schema pipeline. Only validation differs.

use crate::error::{Error, Result};
use crate::generate::generate_file;
use crate::input::{SchemaFormat, parse_document, validate_document};
use crate::traits::{GenerateConfig, Generator};
use std::path::Path;

/// Words one of which an OpenAPI or Swagger document must mention.
const MARKERS: &[&str] = &["openapi", "swagger"];

pub struct OpenApiGenerator;

impl Generator for OpenApiGenerator {
    fn name(&self) -> &'static str {
        "openapi"
    }

    fn description(&self) -> &'static str {
        "Generates Go types from OpenAPI 3.x specifications"
    }

    fn supported_formats(&self) -> &'static [&'static str] {
        SchemaFormat::SUFFIXES
    }

    fn generate(&self, config: &GenerateConfig) -> Result<()> {
        generate_file(&config.schema_path, &config.output_path, &config.options)
    }

    fn validate_schema(&self, path: &Path) -> Result<usize> {
        let format = SchemaFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if !MARKERS.iter().any(|marker| content.contains(marker)) {
            return Err(Error::NotOpenApi {
                path: path.to_path_buf(),
            });
        }
        let count = validate_document(&parse_document(&content, format)?)?;
        tracing::debug!(path = %path.display(), definitions = count, "schema is valid");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn requires_openapi_marker() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.json");
        fs::write(&path, r#"{"$defs": {"A": {"type": "string"}}}"#).unwrap();

        assert!(matches!(
            OpenApiGenerator.validate_schema(&path),
            Err(Error::NotOpenApi { .. })
        ));
    }

    #[test]
    fn accepts_components_schemas() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("api.yaml");
        fs::write(
            &path,
            "openapi: 3.0.0\ncomponents:\n  schemas:\n    Pet:\n      type: object\n",
        )
        .unwrap();

        assert_eq!(OpenApiGenerator.validate_schema(&path).unwrap(), 1);
    }

    #[test]
    fn unsupported_suffix_before_reading() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("api.txt");

        assert!(matches!(
            OpenApiGenerator.validate_schema(&path),
            Err(Error::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn marker_without_definitions_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("api.json");
        fs::write(&path, r#"{"openapi": "3.1.0", "paths": {}}"#).unwrap();

        assert!(matches!(
            OpenApiGenerator.validate_schema(&path),
            Err(Error::EmptySchema)
        ));
    }
}
