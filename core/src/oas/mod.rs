#![deny(missing_docs)]

//! # OpenAPI Module
//!
//! - **document**: Loading and minimal validation of OpenAPI documents.
//! - **resolver**: Document-internal `$ref` pointer resolution.
//! - **schema**: Tagged classification of raw schema nodes.
//! - **example**: Recursive example value materialization.

pub mod document;
pub mod example;
pub mod resolver;
pub mod schema;

pub use document::OpenApiDocument;
pub use example::materialize;
pub use resolver::resolve;
pub use schema::{PrimitiveType, SchemaNode};
