//! Go type generation from the IR.

use crate::ir::{EnumDef, Schema, StructDef, Type, TypeDef, TypeDefKind};
use serde_json::Value;

/// First line of every generated file.
pub const BANNER: &str = "// Code generated by schemagen. DO NOT EDIT.";

/// Options for Go code generation.
#[derive(Debug, Clone)]
pub struct GoOptions {
    /// Package name in the `package` clause.
    pub package: String,
    /// Emit schema descriptions as comments.
    pub include_comments: bool,
}

impl Default for GoOptions {
    fn default() -> Self {
        Self {
            package: "types".into(),
            include_comments: true,
        }
    }
}

impl GoOptions {
    pub fn with_package(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Default::default()
        }
    }
}

/// Render a whole Go source file.
pub fn generate_go_types(schema: &Schema, options: &GoOptions) -> String {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push_str("\n\n");
    out.push_str(&format!("package {}\n\n", options.package));

    if schema.uses_time() {
        out.push_str("import \"time\"\n\n");
    }

    let blocks: Vec<String> = schema
        .definitions
        .iter()
        .map(|def| declaration(def, options))
        .collect();
    out.push_str(&blocks.join("\n"));

    out
}

fn declaration(def: &TypeDef, options: &GoOptions) -> String {
    let mut out = String::new();
    if options.include_comments
        && let Some(docs) = &def.docs
    {
        out.push_str(&comment(docs, ""));
    }

    match &def.kind {
        TypeDefKind::Enum(e) => out.push_str(&enum_block(&def.name, e)),
        TypeDefKind::Alias(ty) => out.push_str(&format!("type {} {}\n", def.name, go_type(ty))),
        TypeDefKind::Struct(s) => out.push_str(&struct_block(&def.name, s, options)),
    }
    out
}

fn enum_block(name: &str, def: &EnumDef) -> String {
    let mut out = format!("type {} {}\n", name, go_type(&def.base));
    if def.variants.is_empty() {
        return out;
    }

    out.push_str(&format!("\n// {name} enum values\nconst (\n"));
    for variant in &def.variants {
        out.push_str(&format!(
            "\t{} {} = {}\n",
            variant.ident,
            name,
            go_literal(&variant.value)
        ));
    }
    out.push_str(")\n");
    out
}

fn struct_block(name: &str, def: &StructDef, options: &GoOptions) -> String {
    let mut out = format!("type {name} struct {{\n");
    for field in &def.fields {
        if options.include_comments
            && let Some(docs) = &field.docs
        {
            out.push_str(&comment(docs, "\t"));
        }
        let omit = if field.required { "" } else { ",omitempty" };
        out.push_str(&format!(
            "\t{} {} `json:\"{}{}\"`\n",
            field.ident,
            go_type(&field.ty),
            field.name,
            omit
        ));
    }
    out.push_str("}\n");
    out
}

/// Go spelling of a resolved type.
pub fn go_type(ty: &Type) -> String {
    match ty {
        Type::String => "string".into(),
        Type::Integer { bits: None } => "int".into(),
        Type::Integer { bits: Some(bits) } => format!("int{bits}"),
        Type::Float { bits } => format!("float{bits}"),
        Type::Boolean => "bool".into(),
        Type::DateTime => "time.Time".into(),
        Type::Array(inner) => format!("[]{}", go_type(inner)),
        Type::Map(inner) => format!("map[string]{}", go_type(inner)),
        Type::Optional(inner) => format!("*{}", go_type(inner)),
        Type::Ref(name) => name.clone(),
        Type::Any => "interface{}".into(),
    }
}

/// A description as `//` comment lines, one per source line.
pub fn comment(text: &str, indent: &str) -> String {
    text.lines()
        .map(|line| match line.trim() {
            "" => format!("{indent}//\n"),
            line => format!("{indent}// {line}\n"),
        })
        .collect()
}

fn go_literal(value: &Value) -> String {
    match value {
        Value::String(s) => quote(s),
        other => other.to_string(),
    }
}

/// Interpreted Go string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() && (c as u32) < 0x80 => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{EnumVariant, Field};
    use serde_json::json;

    fn schema(defs: Vec<TypeDef>) -> Schema {
        let mut schema = Schema::new();
        for def in defs {
            schema.add(def);
        }
        schema
    }

    #[test]
    fn header_and_package() {
        let out = generate_go_types(&Schema::new(), &GoOptions::with_package("models"));
        assert_eq!(out, format!("{BANNER}\n\npackage models\n\n"));
    }

    #[test]
    fn struct_tags_and_pointers() {
        let def = TypeDef {
            name: "Foo".into(),
            docs: Some("A foo.\n\n  Second paragraph.  ".into()),
            kind: TypeDefKind::Struct(StructDef {
                fields: vec![
                    Field {
                        name: "bar".into(),
                        ident: "Bar".into(),
                        ty: Type::String,
                        required: true,
                        docs: Some("The bar.".into()),
                    },
                    Field {
                        name: "count".into(),
                        ident: "Count".into(),
                        ty: Type::Integer { bits: Some(64) }.optional(),
                        required: false,
                        docs: None,
                    },
                ],
            }),
        };

        let out = generate_go_types(&schema(vec![def]), &GoOptions::default());
        insta::assert_snapshot!(out, @r#"
        // Code generated by schemagen. DO NOT EDIT.

        package types

        // A foo.
        //
        // Second paragraph.
        type Foo struct {
        	// The bar.
        	Bar string `json:"bar"`
        	Count *int64 `json:"count,omitempty"`
        }
        "#);
    }

    #[test]
    fn enums_and_aliases() {
        let defs = vec![
            TypeDef {
                name: "Status".into(),
                docs: None,
                kind: TypeDefKind::Enum(EnumDef {
                    base: Type::String,
                    variants: vec![
                        EnumVariant {
                            ident: "StatusACTIVE".into(),
                            value: json!("ACTIVE"),
                        },
                        EnumVariant {
                            ident: "StatusINACTIVE".into(),
                            value: json!("INACTIVE"),
                        },
                    ],
                }),
            },
            TypeDef {
                name: "Created".into(),
                docs: None,
                kind: TypeDefKind::Alias(Type::DateTime),
            },
        ];

        let out = generate_go_types(&schema(defs), &GoOptions::with_package("api"));
        insta::assert_snapshot!(out, @r#"
        // Code generated by schemagen. DO NOT EDIT.

        package api

        import "time"

        type Status string

        // Status enum values
        const (
        	StatusACTIVE Status = "ACTIVE"
        	StatusINACTIVE Status = "INACTIVE"
        )

        type Created time.Time
        "#);
    }

    #[test]
    fn comments_can_be_disabled() {
        let def = TypeDef {
            name: "Part".into(),
            docs: Some("Any part.".into()),
            kind: TypeDefKind::Alias(Type::Any),
        };
        let options = GoOptions {
            include_comments: false,
            ..Default::default()
        };
        let out = generate_go_types(&schema(vec![def]), &options);
        assert!(out.ends_with("package types\n\ntype Part interface{}\n"));
    }

    #[test]
    fn type_spelling() {
        let nested = Type::Map(Box::new(Type::Array(Box::new(
            Type::Ref("Part".into()).optional(),
        ))));
        assert_eq!(go_type(&nested), "map[string][]*Part");
        assert_eq!(go_type(&Type::Integer { bits: Some(32) }), "int32");
        assert_eq!(go_type(&Type::Float { bits: 32 }), "float32");
        assert_eq!(go_type(&Type::Float { bits: 64 }), "float64");
        assert_eq!(go_type(&Type::Any), "interface{}");
    }

    #[test]
    fn string_literals_are_escaped() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(quote("line\nnext\ttab"), "\"line\\nnext\\ttab\"");
        assert_eq!(quote("\u{7}"), "\"\\x07\"");
    }

    #[test]
    fn numeric_and_bool_literals() {
        assert_eq!(go_literal(&json!(-1)), "-1");
        assert_eq!(go_literal(&json!(2.5)), "2.5");
        assert_eq!(go_literal(&json!(true)), "true");
    }
}
