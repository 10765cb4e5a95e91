//! Schema document loading.
//!
//! Every supported syntax is read into the same [`serde_json::Value`] tree,
//! so the rest of the pipeline only ever pattern-matches one shape.

mod definitions;

pub use definitions::{Definitions, collect_definitions, validate_document};

use crate::error::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// On-disk syntax of a schema document, decided by file suffix alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Yaml,
}

impl SchemaFormat {
    /// File suffixes accepted by the loader.
    pub const SUFFIXES: &'static [&'static str] = &[".json", ".yaml", ".yml"];

    /// Pick the format from the path suffix (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path.to_string_lossy().to_ascii_lowercase();
        if name.ends_with(".json") {
            Ok(Self::Json)
        } else if name.ends_with(".yaml") || name.ends_with(".yml") {
            Ok(Self::Yaml)
        } else {
            Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Read and parse a schema file.
pub fn load_document(path: &Path) -> Result<Value> {
    let format = SchemaFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&content, format)
}

/// Parse schema text in the given syntax.
pub fn parse_document(content: &str, format: SchemaFormat) -> Result<Value> {
    let parse_error = |message: String| Error::Parse {
        format: format.name(),
        message,
    };

    match format {
        SchemaFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
        SchemaFormat::Yaml => {
            let mut value: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            value
                .apply_merge()
                .map_err(|e| parse_error(e.to_string()))?;
            Ok(yaml_to_json(value))
        }
    }
}

fn yaml_to_json(value: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(map) => Value::Object(
            map.into_iter()
                .filter_map(|(key, value)| Some((yaml_key(key)?, yaml_to_json(value))))
                .collect(),
        ),
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

/// Mapping keys become strings; `200:` in an OpenAPI response map is common.
fn yaml_key(key: serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => Some(s),
        Yaml::Number(n) => Some(n.to_string()),
        Yaml::Bool(b) => Some(b.to_string()),
        Yaml::Null => Some("null".to_string()),
        Yaml::Tagged(tagged) => yaml_key(tagged.value),
        Yaml::Sequence(_) | Yaml::Mapping(_) => {
            tracing::debug!("skipping YAML mapping entry with a non-scalar key");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn format_from_suffix() {
        assert_eq!(
            SchemaFormat::from_path(Path::new("schema.json")).unwrap(),
            SchemaFormat::Json
        );
        assert_eq!(
            SchemaFormat::from_path(Path::new("a2a.yaml")).unwrap(),
            SchemaFormat::Yaml
        );
        assert_eq!(
            SchemaFormat::from_path(Path::new("openrpc.YML")).unwrap(),
            SchemaFormat::Yaml
        );
    }

    #[test]
    fn unknown_suffix_is_rejected() {
        let err = SchemaFormat::from_path(&PathBuf::from("schema.toml")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn yaml_numeric_keys_become_strings() {
        let doc = parse_document(
            "responses:\n  200:\n    description: ok\n",
            SchemaFormat::Yaml,
        )
        .unwrap();
        assert_eq!(doc, json!({"responses": {"200": {"description": "ok"}}}));
    }

    #[test]
    fn yaml_merge_keys_are_applied() {
        let doc = parse_document(
            "base: &base\n  type: string\nderived:\n  <<: *base\n  format: date-time\n",
            SchemaFormat::Yaml,
        )
        .unwrap();
        assert_eq!(doc["derived"]["type"], "string");
        assert_eq!(doc["derived"]["format"], "date-time");
    }

    #[test]
    fn malformed_json_keeps_parser_message() {
        let err = parse_document("{\"definitions\": ", SchemaFormat::Json).unwrap_err();
        match err {
            Error::Parse { format, message } => {
                assert_eq!(format, "JSON");
                assert!(message.contains("EOF"), "{message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
