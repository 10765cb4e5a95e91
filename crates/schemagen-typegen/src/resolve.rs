//! Schema fragment → [`Type`] resolution.
//!
//! Resolution never fails. Anything the rules below do not recognize
//! becomes [`Type::Any`]. `$ref`s are not followed, only named, so the
//! recursion is bounded by the depth of the fragment itself.

use crate::ir::Type;
use crate::naming::TypeNames;
use serde_json::Value;

/// Primitive `type` keywords resolved through the format table.
const PRIMITIVES: &[&str] = &["string", "integer", "number", "boolean", "object", "null"];

pub struct Resolver<'a> {
    names: &'a TypeNames,
}

impl<'a> Resolver<'a> {
    pub fn new(names: &'a TypeNames) -> Self {
        Self { names }
    }

    /// Resolve a fragment. First matching rule wins:
    /// `$ref`, array, primitive type, union, `const`, untyped `enum`.
    pub fn resolve(&self, fragment: &Value) -> Type {
        if let Some(reference) = fragment.get("$ref").and_then(Value::as_str) {
            return self.reference(reference);
        }

        let type_name = type_keyword(fragment);

        if type_name == Some("array") {
            let items = fragment
                .get("items")
                .filter(|items| items.is_object())
                .map(|items| self.resolve(items))
                .unwrap_or(Type::Any);
            return Type::Array(Box::new(items));
        }

        if let Some(primitive) = type_name.filter(|t| PRIMITIVES.contains(t)) {
            return self.primitive(primitive, fragment);
        }

        if is_union(fragment) {
            return Type::Any;
        }

        if fragment.get("const").is_some() {
            return Type::Any;
        }

        if fragment.get("type").is_none()
            && let Some(first) = fragment
                .get("enum")
                .and_then(Value::as_array)
                .and_then(|values| values.first())
        {
            return literal_type(first);
        }

        Type::Any
    }

    fn reference(&self, reference: &str) -> Type {
        let name = reference.rsplit('/').next().unwrap_or(reference);
        if !self.names.is_collected(name) {
            tracing::debug!(reference, "$ref does not match a collected definition");
        }
        Type::Ref(self.names.go_name(name))
    }

    fn primitive(&self, type_name: &str, fragment: &Value) -> Type {
        let format = fragment.get("format").and_then(Value::as_str);
        match (type_name, format) {
            ("string", Some("date-time")) => Type::DateTime,
            ("string", _) => Type::String,
            ("integer", Some("int64")) => Type::Integer { bits: Some(64) },
            ("integer", Some("int32")) => Type::Integer { bits: Some(32) },
            ("integer", _) => Type::Integer { bits: None },
            ("number", Some("float")) => Type::Float { bits: 32 },
            ("number", _) => Type::Float { bits: 64 },
            ("boolean", _) => Type::Boolean,
            ("object", _) => match fragment.get("additionalProperties") {
                Some(values) if values.is_object() => Type::Map(Box::new(self.resolve(values))),
                _ => Type::Map(Box::new(Type::Any)),
            },
            _ => Type::Any,
        }
    }
}

/// The fragment's `type`, accepting the `["T", "null"]` nullable shorthand.
pub fn type_keyword(fragment: &Value) -> Option<&str> {
    match fragment.get("type")? {
        Value::String(name) => Some(name.as_str()),
        Value::Array(names) => {
            let mut non_null = names
                .iter()
                .filter_map(Value::as_str)
                .filter(|name| *name != "null");
            match (non_null.next(), non_null.next()) {
                (Some(name), None) => Some(name),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Non-empty `oneOf`, `anyOf` or `allOf`.
pub fn is_union(fragment: &Value) -> bool {
    ["oneOf", "anyOf", "allOf"].iter().any(|key| {
        fragment
            .get(*key)
            .and_then(Value::as_array)
            .is_some_and(|members| !members.is_empty())
    })
}

/// Type of a literal enum value.
pub fn literal_type(value: &Value) -> Type {
    match value {
        Value::String(_) => Type::String,
        Value::Number(n) if n.is_i64() || n.is_u64() => Type::Integer { bits: None },
        Value::Number(_) => Type::Float { bits: 64 },
        Value::Bool(_) => Type::Boolean,
        _ => Type::Any,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::AcronymTable;
    use serde_json::json;

    fn resolve(fragment: Value) -> Type {
        let names = TypeNames::new(std::iter::empty(), &AcronymTable::default());
        Resolver::new(&names).resolve(&fragment)
    }

    #[test]
    fn refs_use_the_last_segment() {
        assert_eq!(
            resolve(json!({ "$ref": "#/definitions/TaskStatus" })),
            Type::Ref("TaskStatus".into())
        );
        assert_eq!(
            resolve(json!({ "$ref": "#/components/schemas/Pet", "type": "string" })),
            Type::Ref("Pet".into())
        );
        assert_eq!(resolve(json!({ "$ref": "Bare" })), Type::Ref("Bare".into()));
    }

    #[test]
    fn refs_use_declared_go_names() {
        let raw = ["task-status".to_string(), "Pet".to_string()];
        let names = TypeNames::new(&raw, &AcronymTable::default());
        let resolver = Resolver::new(&names);

        assert_eq!(
            resolver.resolve(&json!({ "$ref": "#/definitions/task-status" })),
            Type::Ref("TaskStatus".into())
        );
        assert_eq!(
            resolver.resolve(&json!({ "$ref": "#/components/schemas/Pet" })),
            Type::Ref("Pet".into())
        );
        assert_eq!(
            resolver.resolve(&json!({ "$ref": "#/definitions/io.k8s.api.core.v1.Pod" })),
            Type::Ref("IoK8sAPICoreV1Pod".into())
        );
    }

    #[test]
    fn arrays() {
        assert_eq!(
            resolve(json!({ "type": "array", "items": { "$ref": "#/$defs/Part" } })),
            Type::Array(Box::new(Type::Ref("Part".into())))
        );
        assert_eq!(
            resolve(json!({ "type": "array" })),
            Type::Array(Box::new(Type::Any))
        );
        assert_eq!(
            resolve(json!({
                "type": "array",
                "items": { "type": "array", "items": { "type": "integer" } }
            })),
            Type::Array(Box::new(Type::Array(Box::new(Type::Integer { bits: None }))))
        );
    }

    #[test]
    fn primitives_and_formats() {
        assert_eq!(resolve(json!({ "type": "string" })), Type::String);
        assert_eq!(
            resolve(json!({ "type": "string", "format": "date-time" })),
            Type::DateTime
        );
        assert_eq!(
            resolve(json!({ "type": "string", "format": "uri" })),
            Type::String
        );
        assert_eq!(
            resolve(json!({ "type": "integer", "format": "int64" })),
            Type::Integer { bits: Some(64) }
        );
        assert_eq!(
            resolve(json!({ "type": "integer" })),
            Type::Integer { bits: None }
        );
        assert_eq!(
            resolve(json!({ "type": "number" })),
            Type::Float { bits: 64 }
        );
        assert_eq!(resolve(json!({ "type": "boolean" })), Type::Boolean);
        assert_eq!(resolve(json!({ "type": "null" })), Type::Any);
    }

    #[test]
    fn objects_become_maps() {
        assert_eq!(
            resolve(json!({ "type": "object" })),
            Type::Map(Box::new(Type::Any))
        );
        assert_eq!(
            resolve(json!({ "type": "object", "additionalProperties": true })),
            Type::Map(Box::new(Type::Any))
        );
        assert_eq!(
            resolve(json!({
                "type": "object",
                "additionalProperties": { "type": "string" }
            })),
            Type::Map(Box::new(Type::String))
        );
    }

    #[test]
    fn nullable_shorthand() {
        assert_eq!(resolve(json!({ "type": ["string", "null"] })), Type::String);
        assert_eq!(resolve(json!({ "type": ["string", "integer"] })), Type::Any);
    }

    #[test]
    fn unions_and_consts_are_untyped() {
        assert_eq!(
            resolve(json!({ "oneOf": [{ "type": "string" }, { "type": "integer" }] })),
            Type::Any
        );
        assert_eq!(resolve(json!({ "allOf": [{ "$ref": "#/$defs/A" }] })), Type::Any);
        assert_eq!(resolve(json!({ "const": "text" })), Type::Any);
        assert_eq!(resolve(json!({ "anyOf": [] })), Type::Any);
    }

    #[test]
    fn untyped_enums_use_first_value() {
        assert_eq!(resolve(json!({ "enum": ["a", "b"] })), Type::String);
        assert_eq!(
            resolve(json!({ "enum": [1, 2] })),
            Type::Integer { bits: None }
        );
        assert_eq!(
            resolve(json!({ "enum": [0.5] })),
            Type::Float { bits: 64 }
        );
        assert_eq!(resolve(json!({ "enum": [true] })), Type::Boolean);
        assert_eq!(resolve(json!({ "enum": [null] })), Type::Any);
    }

    #[test]
    fn unknown_shapes_fall_back() {
        assert_eq!(resolve(json!({})), Type::Any);
        assert_eq!(resolve(json!({ "type": "uuid" })), Type::Any);
        assert_eq!(resolve(json!("not a fragment")), Type::Any);
    }
}
