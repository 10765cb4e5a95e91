//! Registry of schema generators.
//!
//! The registry is a plain value built at start-up and handed to whatever
//! needs it; there is no global state.

use crate::error::{Error, Result};
use crate::generators::{JsonRpcGenerator, OpenApiGenerator};
use crate::traits::{Generator, GeneratorInfo};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Default)]
pub struct Registry {
    generators: BTreeMap<&'static str, Box<dyn Generator>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in generators.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        let builtin: [Box<dyn Generator>; 2] =
            [Box::new(JsonRpcGenerator), Box::new(OpenApiGenerator)];
        for generator in builtin {
            let name = generator.name();
            registry.generators.insert(name, generator);
        }
        registry
    }

    /// Register a generator. Names must be non-empty and unique.
    pub fn register(&mut self, generator: Box<dyn Generator>) -> Result<()> {
        let name = generator.name();
        if name.is_empty() {
            return Err(Error::EmptyGeneratorName);
        }
        if self.generators.contains_key(name) {
            return Err(Error::DuplicateGenerator(name.to_string()));
        }
        tracing::debug!(name, "registered generator");
        self.generators.insert(name, generator);
        Ok(())
    }

    /// Get a generator by name.
    pub fn get(&self, name: &str) -> Result<&dyn Generator> {
        self.generators
            .get(name)
            .map(|g| g.as_ref())
            .ok_or_else(|| Error::UnknownGenerator(name.to_string()))
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.generators.keys().copied().collect()
    }

    /// Generators whose supported formats match the suffix of `path`, in name
    /// order. Matching ignores case.
    pub fn for_path(&self, path: &Path) -> Result<Vec<&dyn Generator>> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        let matches: Vec<&dyn Generator> = self
            .generators
            .values()
            .filter(|g| {
                g.supported_formats()
                    .iter()
                    .any(|suffix| file_name.ends_with(&suffix.to_ascii_lowercase()))
            })
            .map(|g| g.as_ref())
            .collect();

        if matches.is_empty() {
            return Err(Error::NoGeneratorForFormat {
                path: path.to_path_buf(),
            });
        }
        Ok(matches)
    }

    /// Summaries of every registered generator, in name order.
    pub fn info(&self) -> Vec<GeneratorInfo> {
        self.generators
            .values()
            .map(|g| GeneratorInfo::of(g.as_ref()))
            .collect()
    }
}
