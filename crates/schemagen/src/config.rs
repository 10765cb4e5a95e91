//! Configuration file for schemagen.
//!
//! Loaded from `--config <path>`, or from `schemagen.toml` in the working
//! directory when present. Command-line flags override every value here.
//!
//! Example schemagen.toml:
//! ```toml
//! package = "models"
//! comments = true
//! format = false
//!
//! [acronyms]
//! jwt = true
//! id = false
//! ```

use anyhow::Context;
use schemagen_typegen::GenerateOptions;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE: &str = "schemagen.toml";

/// Root configuration structure. Unset keys keep the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemagenConfig {
    /// Go package name.
    pub package: Option<String>,
    /// Emit descriptions as comments.
    pub comments: Option<bool>,
    /// Run gofmt on the output.
    pub format: Option<bool>,
    /// Acronym overrides.
    pub acronyms: BTreeMap<String, bool>,
}

impl SchemagenConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise `schemagen.toml` under `dir` is
    /// used if present, and defaults if not.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply the values that are set onto `options`.
    pub fn apply(&self, options: &mut GenerateOptions) {
        if let Some(package) = &self.package {
            options.package = package.clone();
        }
        if let Some(comments) = self.comments {
            options.include_comments = comments;
        }
        if let Some(format) = self.format {
            options.format_output = format;
        }
        options.acronyms.extend(
            self.acronyms
                .iter()
                .map(|(token, enabled)| (token.clone(), *enabled)),
        );
    }
}
