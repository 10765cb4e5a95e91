//! Traits for schema generators.

use crate::error::Result;
use crate::generate::GenerateOptions;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Everything a generator needs for one run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub schema_path: PathBuf,
    pub output_path: PathBuf,
    pub options: GenerateOptions,
}

impl GenerateConfig {
    pub fn new(schema_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            schema_path: schema_path.into(),
            output_path: output_path.into(),
            options: GenerateOptions::default(),
        }
    }
}

/// A generator turning one family of schema documents into Go types.
///
/// # Implementing Custom Generators
///
/// ```ignore
/// use schemagen_typegen::{Generator, GenerateConfig, Registry, Result};
/// use std::path::Path;
///
/// struct Protobuf;
///
/// impl Generator for Protobuf {
///     fn name(&self) -> &'static str { "protobuf" }
///     fn description(&self) -> &'static str { "Protocol buffer descriptors" }
///     fn supported_formats(&self) -> &'static [&'static str] { &[".pb.json"] }
///     fn generate(&self, config: &GenerateConfig) -> Result<()> { /* ... */ }
///     fn validate_schema(&self, path: &Path) -> Result<usize> { /* ... */ }
/// }
///
/// let mut registry = Registry::with_builtin();
/// registry.register(Box::new(Protobuf))?;
/// ```
pub trait Generator: Send + Sync {
    /// Unique generator identifier (e.g., "jsonrpc", "openapi").
    fn name(&self) -> &'static str;

    /// One-line human description.
    fn description(&self) -> &'static str;

    /// File suffixes this generator reads, lowercase with the dot.
    fn supported_formats(&self) -> &'static [&'static str];

    /// Generate the output file described by `config`.
    fn generate(&self, config: &GenerateConfig) -> Result<()>;

    /// Check that `path` is a document this generator can process and
    /// return how many definitions it holds.
    fn validate_schema(&self, path: &Path) -> Result<usize>;
}

/// Serializable summary of a registered generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub supported_formats: &'static [&'static str],
}

impl GeneratorInfo {
    pub fn of(generator: &dyn Generator) -> Self {
        Self {
            name: generator.name(),
            description: generator.description(),
            supported_formats: generator.supported_formats(),
        }
    }
}
