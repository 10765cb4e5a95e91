//! Collect named type definitions from every container location a
//! JSON Schema, OpenRPC or OpenAPI document may use.

use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;

/// Flat name → fragment mapping. Sorted, so iteration is deterministic.
pub type Definitions = BTreeMap<String, Value>;

/// Locations checked, in order. Later locations overwrite earlier ones.
const LOCATIONS: &[&str] = &[
    "/definitions",
    "/$defs",
    "/components/schemas",
    "/components/contentDescriptors",
    "/schemas",
];

/// Gather every named definition in the document.
///
/// Each location is checked independently; a location that is missing or is
/// not a mapping contributes nothing. Fragments are not inspected here.
pub fn collect_definitions(document: &Value) -> Result<Definitions> {
    let mut definitions = Definitions::new();

    for location in LOCATIONS {
        let Some(entries) = document.pointer(location).and_then(Value::as_object) else {
            continue;
        };
        tracing::debug!(location, count = entries.len(), "collecting definitions");
        for (name, fragment) in entries {
            if name.is_empty() {
                tracing::warn!(location, "skipping definition with an empty name");
                continue;
            }
            if definitions.insert(name.clone(), fragment.clone()).is_some() {
                tracing::debug!(name = name.as_str(), location, "definition overwritten");
            }
        }
    }

    if definitions.is_empty() {
        return Err(Error::EmptySchema);
    }
    Ok(definitions)
}

/// Structural check run before committing to generation.
///
/// Returns the number of definitions the document would contribute.
pub fn validate_document(document: &Value) -> Result<usize> {
    collect_definitions(document).map(|definitions| definitions.len())
}
