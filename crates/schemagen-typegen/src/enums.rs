//! Discovery of inline enumerations.
//!
//! A property such as `"state": {"enum": ["TASK_STATE_OK", "TASK_STATE_FAILED"]}`
//! has no name of its own. Each one gets a named enum (`TaskState`) that is
//! emitted ahead of the structs referring to it.

use crate::input::Definitions;
use crate::ir::Type;
use crate::naming::{TypeNames, derive_enum_name};
use crate::resolve::{Resolver, literal_type};
use serde_json::Value;
use std::collections::BTreeMap;

/// A synthesized enum for a property-level `enum`.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineEnum {
    pub name: String,
    /// Distinct literal values, sorted.
    pub values: Vec<Value>,
    pub description: Option<String>,
    /// Underlying Go type.
    pub base: Type,
}

/// The non-empty `enum` array of a property, if any.
pub fn property_enum(property: &Value) -> Option<&[Value]> {
    property
        .get("enum")
        .and_then(Value::as_array)
        .filter(|values| !values.is_empty())
        .map(Vec::as_slice)
}

/// Scan every definition's properties for inline enums.
///
/// Properties deriving the same name coalesce into one record; the last one
/// seen (definitions and properties in name order) wins. A derived name that
/// is already the Go name of a definition is not synthesized; the property
/// then refers to that definition.
pub fn discover_inline_enums(
    definitions: &Definitions,
    names: &TypeNames,
) -> BTreeMap<String, InlineEnum> {
    let resolver = Resolver::new(names);
    let mut found: BTreeMap<String, InlineEnum> = BTreeMap::new();

    for (def_name, fragment) in definitions {
        let Some(properties) = fragment.get("properties").and_then(Value::as_object) else {
            continue;
        };

        let mut prop_names: Vec<&String> = properties.keys().collect();
        prop_names.sort();

        for prop_name in prop_names {
            let property = &properties[prop_name.as_str()];
            let Some(values) = property_enum(property) else {
                continue;
            };

            let name = derive_enum_name(values, prop_name, names.acronyms());
            if names.is_taken(&name) {
                tracing::warn!(
                    name = name.as_str(),
                    definition = def_name.as_str(),
                    property = prop_name.as_str(),
                    "inline enum name clashes with a definition; using the definition"
                );
                continue;
            }

            let record = InlineEnum {
                base: enum_base(&resolver, property, values),
                values: sorted_literals(values),
                description: property
                    .get("description")
                    .and_then(Value::as_str)
                    .map(String::from),
                name: name.clone(),
            };

            if let Some(previous) = found.get(&name)
                && previous.values != record.values
            {
                tracing::debug!(
                    name = name.as_str(),
                    definition = def_name.as_str(),
                    property = prop_name.as_str(),
                    "inline enums with the same name differ; keeping the later values"
                );
            }
            found.insert(name, record);
        }
    }

    found
}

/// Underlying type of an enum: the resolved fragment type when it is a
/// scalar, otherwise inferred from the first scalar value.
pub fn enum_base(resolver: &Resolver<'_>, fragment: &Value, values: &[Value]) -> Type {
    let resolved = resolver.resolve(fragment);
    if resolved.is_scalar() {
        return resolved;
    }
    values
        .iter()
        .map(literal_type)
        .find(Type::is_scalar)
        .unwrap_or(Type::String)
}

/// Distinct scalar literals in lexicographic order of their text.
///
/// `null`, arrays and objects cannot be Go constants and are dropped.
pub fn sorted_literals(values: &[Value]) -> Vec<Value> {
    let mut literals: Vec<Value> = values
        .iter()
        .filter(|v| v.is_string() || v.is_number() || v.is_boolean())
        .cloned()
        .collect();
    literals.sort_by_key(literal_text);
    literals.dedup();
    literals
}

/// Sort key and prefix-matching text of a literal.
pub fn literal_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
