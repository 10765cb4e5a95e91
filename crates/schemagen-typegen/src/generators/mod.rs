//! Built-in generators.

mod jsonrpc;
mod openapi;

pub use jsonrpc::JsonRpcGenerator;
pub use openapi::OpenApiGenerator;
