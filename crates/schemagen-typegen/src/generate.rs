//! End-to-end pipeline: schema file in, Go source file out.

use crate::error::{Error, Result};
use crate::format::format_go_file;
use crate::input::{collect_definitions, load_document, validate_document};
use crate::naming::AcronymTable;
use crate::output::{GoOptions, generate_go_types};
use crate::plan::plan;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Go package name.
    pub package: String,
    /// Acronym overrides merged over the defaults; `false` disables one.
    pub acronyms: BTreeMap<String, bool>,
    /// Emit descriptions as comments.
    pub include_comments: bool,
    /// Run `gofmt` on the written file.
    pub format_output: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            package: "types".into(),
            acronyms: BTreeMap::new(),
            include_comments: true,
            format_output: true,
        }
    }
}

impl GenerateOptions {
    fn go_options(&self) -> GoOptions {
        GoOptions {
            package: self.package.clone(),
            include_comments: self.include_comments,
        }
    }
}

/// Render Go source for an already-parsed document.
pub fn generate_source(document: &Value, options: &GenerateOptions) -> Result<String> {
    let definitions = collect_definitions(document)?;
    let acronyms = AcronymTable::with_overrides(&options.acronyms);
    let schema = plan(&definitions, &acronyms);
    tracing::debug!(
        definitions = definitions.len(),
        declarations = schema.definitions.len(),
        "planned declarations"
    );
    Ok(generate_go_types(&schema, &options.go_options()))
}

/// Generate `output` from the schema at `schema`.
///
/// Nothing is written unless rendering succeeds. Formatting failures only
/// produce a warning.
pub fn generate_file(schema: &Path, output: &Path, options: &GenerateOptions) -> Result<()> {
    let document = load_document(schema)?;
    let source = generate_source(&document, options)?;

    std::fs::write(output, source).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!(schema = %schema.display(), output = %output.display(), "generated");

    if options.format_output {
        format_go_file(output);
    }
    Ok(())
}

/// Check that `schema` loads and contributes at least one definition.
///
/// Returns the number of definitions found.
pub fn validate_schema(schema: &Path) -> Result<usize> {
    let document = load_document(schema)?;
    validate_document(&document)
}
