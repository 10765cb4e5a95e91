//! Turn collected definitions into an ordered [`Schema`].
//!
//! Emission order is total and independent of source order:
//! 1. inline enums, by name
//! 2. definitions that are enums, by name
//! 3. every other definition, by name, as an alias or a struct

use crate::enums::{
    InlineEnum, discover_inline_enums, enum_base, literal_text, property_enum, sorted_literals,
};
use crate::input::Definitions;
use crate::ir::{EnumDef, EnumVariant, Field, Schema, StructDef, Type, TypeDef, TypeDefKind};
use crate::naming::{
    AcronymTable, PLACEHOLDER, TypeNames, derive_enum_name, meaningful_prefix, to_identifier,
};
use crate::resolve::{Resolver, is_union, type_keyword};
use serde_json::Value;
use std::collections::BTreeSet;

/// `type` keywords that make a property-less definition an alias.
const ALIAS_TYPES: &[&str] = &[
    "string", "integer", "number", "boolean", "object", "null", "array",
];

/// Plan the declarations of one output file.
pub fn plan(definitions: &Definitions, acronyms: &AcronymTable) -> Schema {
    let names = TypeNames::new(definitions.keys(), acronyms);
    let resolver = Resolver::new(&names);
    let mut schema = Schema::new();

    for inline in discover_inline_enums(definitions, &names).into_values() {
        schema.add(inline_enum_def(inline, acronyms));
    }

    let mut enums = Vec::new();
    let mut rest = Vec::new();
    for (raw, fragment) in definitions {
        if !fragment.is_object() {
            tracing::warn!(name = raw.as_str(), "skipping definition that is not an object");
            continue;
        }
        let name = names.go_name(raw);
        match property_enum(fragment) {
            Some(values) => enums.push(enum_def(name, fragment, values, &resolver, acronyms)),
            None => rest.push((name, fragment)),
        }
    }

    // Renamed definitions sort by their Go name.
    enums.sort_by(|a, b| a.name.cmp(&b.name));
    rest.sort_by(|a, b| a.0.cmp(&b.0));

    for def in enums {
        schema.add(def);
    }
    for (name, fragment) in rest {
        schema.add(TypeDef {
            name,
            docs: description(fragment),
            kind: shape(fragment, &resolver, acronyms),
        });
    }

    schema
}

fn shape(fragment: &Value, resolver: &Resolver<'_>, acronyms: &AcronymTable) -> TypeDefKind {
    let has_properties = fragment.get("properties").is_some();

    if !has_properties && fragment.get("$ref").and_then(Value::as_str).is_some() {
        return TypeDefKind::Alias(resolver.resolve(fragment));
    }
    if !has_properties && type_keyword(fragment).is_some_and(|t| ALIAS_TYPES.contains(&t)) {
        return TypeDefKind::Alias(resolver.resolve(fragment));
    }
    if is_union(fragment) {
        return TypeDefKind::Alias(Type::Any);
    }
    TypeDefKind::Struct(struct_def(fragment, resolver, acronyms))
}

fn struct_def(fragment: &Value, resolver: &Resolver<'_>, acronyms: &AcronymTable) -> StructDef {
    let required: BTreeSet<&str> = fragment
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let Some(properties) = fragment.get("properties").and_then(Value::as_object) else {
        return StructDef { fields: Vec::new() };
    };

    let mut names: Vec<&String> = properties.keys().collect();
    names.sort();

    let mut idents = Identifiers::default();
    let mut fields = Vec::with_capacity(names.len());

    for name in names {
        let property = &properties[name.as_str()];
        if !property.is_object() {
            tracing::debug!(property = name.as_str(), "skipping property that is not an object");
            continue;
        }

        let is_required = required.contains(name.as_str());
        let ty = match property_enum(property) {
            Some(values) => Type::Ref(derive_enum_name(values, name, acronyms)),
            None => resolver.resolve(property),
        };
        let ty = if is_required || property.get("default").is_some() {
            ty
        } else {
            ty.optional()
        };

        fields.push(Field {
            name: name.clone(),
            ident: idents.claim(to_identifier(name, acronyms)),
            ty,
            required: is_required,
            docs: description(property),
        });
    }

    StructDef { fields }
}

fn enum_def(
    name: String,
    fragment: &Value,
    values: &[Value],
    resolver: &Resolver<'_>,
    acronyms: &AcronymTable,
) -> TypeDef {
    let literals = sorted_literals(values);
    let variants = variants(&name, &literals, acronyms);
    TypeDef {
        name,
        docs: description(fragment),
        kind: TypeDefKind::Enum(EnumDef {
            base: enum_base(resolver, fragment, values),
            variants,
        }),
    }
}

fn inline_enum_def(inline: InlineEnum, acronyms: &AcronymTable) -> TypeDef {
    let variants = variants(&inline.name, &inline.values, acronyms);
    TypeDef {
        name: inline.name,
        docs: inline.description,
        kind: TypeDefKind::Enum(EnumDef {
            base: inline.base,
            variants,
        }),
    }
}

/// Constants for sorted literals. A common prefix shared by the string
/// values is stripped before naming (`LEVEL_LOW` → `LevelLOW`).
fn variants(type_name: &str, literals: &[Value], acronyms: &AcronymTable) -> Vec<EnumVariant> {
    let strings: Vec<&str> = literals.iter().filter_map(Value::as_str).collect();
    let prefix = meaningful_prefix(&strings).unwrap_or("");

    let mut idents = Identifiers::default();
    literals
        .iter()
        .map(|value| {
            let suffix = match value {
                Value::String(s) => {
                    let s = s.as_str();
                    let rest = s.strip_prefix(prefix).unwrap_or(s);
                    to_identifier(if rest.is_empty() { s } else { rest }, acronyms)
                }
                Value::Bool(b) => to_identifier(&b.to_string(), acronyms),
                other => {
                    let text = literal_text(other).replace('-', "neg_");
                    to_identifier(&format!("{PLACEHOLDER}_{text}"), acronyms)
                }
            };
            EnumVariant {
                ident: idents.claim(format!("{type_name}{suffix}")),
                value: value.clone(),
            }
        })
        .collect()
}

fn description(fragment: &Value) -> Option<String> {
    fragment
        .get("description")
        .and_then(Value::as_str)
        .filter(|d| !d.trim().is_empty())
        .map(String::from)
}

/// Identifiers already used in one scope (a struct or an enum block).
#[derive(Default)]
struct Identifiers {
    used: BTreeSet<String>,
}

impl Identifiers {
    /// Return `ident`, or `ident2`, `ident3`, ... if already taken.
    fn claim(&mut self, ident: String) -> String {
        if self.used.insert(ident.clone()) {
            return ident;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{ident}{n}");
            if self.used.insert(candidate.clone()) {
                tracing::warn!(
                    ident = ident.as_str(),
                    renamed = candidate.as_str(),
                    "generated identifier already used"
                );
                return candidate;
            }
            n += 1;
        }
    }
}
