#![deny(missing_docs)]

//! # Postman Module
//!
//! - **collection**: Serde model of the emitted Postman Collection v2.1
//!   subset.
//! - **builder**: Assembly of the collection from a loaded OpenAPI
//!   document.

pub mod builder;
pub mod collection;

pub use builder::{convert, ConvertOptions};
pub use collection::{Collection, Header, Info, Item, Parameter, Request, RequestUrl, Response};
