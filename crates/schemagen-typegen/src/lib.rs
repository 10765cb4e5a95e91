//! Go type generation from schema documents.
//!
//! `schemagen-typegen` reads a JSON Schema, OpenRPC or OpenAPI document
//! (JSON or YAML) and writes one Go source file declaring a type for every
//! schema definition.
//!
//! # Architecture
//!
//! ```text
//! Schema file        Definitions          IR               Output
//! ────────────     ───────────────     ──────────     ─────────────
//! JSON / YAML ───> definitions     ──> Schema   ───> Go source ──> gofmt
//!  (input)         $defs            (plan.rs)     (output/go.rs)  (format.rs)
//!                  components.schemas
//!                  ...
//! ```
//!
//! Inline property enums are promoted to named types and emitted first, so
//! every declaration only refers to names already declared above it or to
//! other schema definitions.
//!
//! # Example
//!
//! ```
//! use schemagen_typegen::{GenerateOptions, generate_source};
//!
//! let document = serde_json::json!({
//!     "definitions": {
//!         "Foo": {
//!             "type": "object",
//!             "properties": { "bar": { "type": "string" } },
//!             "required": ["bar"]
//!         }
//!     }
//! });
//!
//! let go = generate_source(&document, &GenerateOptions::default()).unwrap();
//! assert!(go.contains("type Foo struct {\n\tBar string `json:\"bar\"`\n}"));
//! ```
//!
//! # Using the Generator Registry
//!
//! ```no_run
//! use schemagen_typegen::{GenerateConfig, Registry};
//! use std::path::Path;
//!
//! let registry = Registry::with_builtin();
//! let generator = registry.for_path(Path::new("a2a.json"))?[0];
//! generator.validate_schema(Path::new("a2a.json"))?;
//! generator.generate(&GenerateConfig::new("a2a.json", "a2a_types.go"))?;
//! # Ok::<(), schemagen_typegen::Error>(())
//! ```

pub mod enums;
pub mod error;
pub mod format;
pub mod generate;
pub mod generators;
pub mod input;
pub mod ir;
pub mod naming;
pub mod output;
pub mod plan;
pub mod registry;
pub mod resolve;
pub mod traits;

pub use error::{Error, Result};
pub use generate::{GenerateOptions, generate_file, generate_source, validate_schema};
pub use input::{SchemaFormat, collect_definitions, load_document, parse_document};
pub use naming::{AcronymTable, TypeNames, derive_enum_name, is_go_identifier, to_identifier};
pub use output::{GoOptions, generate_go_types};
pub use registry::Registry;
pub use traits::{GenerateConfig, Generator, GeneratorInfo};
