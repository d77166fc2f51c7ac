#![deny(missing_docs)]

//! # O2P Core
//!
//! Core library for the OpenAPI -> Postman collection converter.
//!
//! The conversion engine is two composed stages: a reference resolver
//! that walks document-internal `$ref` pointers, and an example
//! materializer that recursively turns schema nodes into concrete
//! sample values. The collection builder drives both while assembling
//! the Postman envelope.

/// Shared error types.
pub mod error;

/// OpenAPI document handling: loading, reference resolution, example
/// materialization.
pub mod oas;

/// Postman collection model and assembly.
pub mod postman;

pub use error::{AppError, AppResult};
pub use oas::document::OpenApiDocument;
pub use oas::example::materialize;
pub use oas::resolver::resolve;
pub use oas::schema::{PrimitiveType, SchemaNode};
pub use postman::builder::{convert, ConvertOptions};
pub use postman::collection::{
    Collection, Header, Info, Item, Parameter, Request, RequestUrl, Response,
};
