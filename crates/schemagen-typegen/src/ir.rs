//! Intermediate representation for generated declarations.
//!
//! The planner ([`crate::plan`]) turns collected schema definitions into a
//! [`Schema`] whose declarations are already in emission order; the Go
//! backend only renders it.

use serde::Serialize;
use serde_json::Value;

/// Every declaration of one output file, in emission order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Schema {
    pub definitions: Vec<TypeDef>,
}

/// A named declaration.
#[derive(Debug, Clone, Serialize)]
pub struct TypeDef {
    /// Go type name.
    pub name: String,
    /// Documentation comment (the schema `description`).
    pub docs: Option<String>,
    pub kind: TypeDefKind,
}

#[derive(Debug, Clone, Serialize)]
pub enum TypeDefKind {
    /// A named type with a block of typed constants.
    Enum(EnumDef),
    /// `type Name <type>`.
    Alias(Type),
    Struct(StructDef),
}

#[derive(Debug, Clone, Serialize)]
pub struct EnumDef {
    /// Underlying type of the enum (`string`, `int`, ...).
    pub base: Type,
    /// Constants, sorted by value.
    pub variants: Vec<EnumVariant>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnumVariant {
    /// Full constant name, type name included (`StatusACTIVE`).
    pub ident: String,
    /// The literal as it appears in the schema.
    pub value: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct StructDef {
    /// Fields, sorted by schema property name.
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Field {
    /// Property name as it appears in the schema; used as the JSON tag.
    pub name: String,
    /// Go field name.
    pub ident: String,
    pub ty: Type,
    /// Listed in the parent's `required` array.
    pub required: bool,
    pub docs: Option<String>,
}

/// A resolved type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Type {
    String,
    /// `bits: None` is the platform `int`.
    Integer { bits: Option<u8> },
    Float { bits: u8 },
    Boolean,
    DateTime,

    Array(Box<Type>),
    /// String-keyed map.
    Map(Box<Type>),
    Optional(Box<Type>),

    /// Reference to another named declaration.
    Ref(String),

    Any,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, def: TypeDef) {
        self.definitions.push(def);
    }

    /// Whether any declaration needs the `time` package.
    pub fn uses_time(&self) -> bool {
        self.definitions.iter().any(|def| match &def.kind {
            TypeDefKind::Enum(e) => e.base.uses_time(),
            TypeDefKind::Alias(ty) => ty.uses_time(),
            TypeDefKind::Struct(s) => s.fields.iter().any(|f| f.ty.uses_time()),
        })
    }
}

impl Type {
    /// Slices and maps already have an "absent" value.
    pub fn is_collection(&self) -> bool {
        matches!(self, Type::Array(_) | Type::Map(_))
    }

    /// Plain scalar usable as the underlying type of an enum.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Type::String | Type::Integer { .. } | Type::Float { .. } | Type::Boolean
        )
    }

    pub fn uses_time(&self) -> bool {
        match self {
            Type::DateTime => true,
            Type::Array(inner) | Type::Map(inner) | Type::Optional(inner) => inner.uses_time(),
            _ => false,
        }
    }

    /// Wrap for a field that may be absent, unless a collection.
    pub fn optional(self) -> Self {
        if self.is_collection() || matches!(self, Type::Optional(_)) {
            self
        } else {
            Type::Optional(Box::new(self))
        }
    }
}
