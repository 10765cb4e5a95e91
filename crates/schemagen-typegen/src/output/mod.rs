//! Output backends for code generation.
//!
//! A backend takes an IR [`Schema`](crate::ir::Schema) and produces source
//! text. Go is the only target.

pub mod go;

pub use go::{GoOptions, generate_go_types};
