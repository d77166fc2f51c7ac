#![deny(missing_docs)]

//! # Postman Collection Model
//!
//! Serde model of the Postman Collection v2.1 subset this tool emits.
//! Field renames mirror the wire format (`_postman_id`, `originalRequest`,
//! `_postman_previewlanguage`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The Postman Collection v2.1 schema URL.
pub const COLLECTION_SCHEMA_URL: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// A complete Postman collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection metadata.
    pub info: Info,
    /// One item per path operation.
    pub item: Vec<Item>,
}

/// Collection metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// Unique collection identifier.
    #[serde(rename = "_postman_id")]
    pub postman_id: String,
    /// Collection name (the API title).
    pub name: String,
    /// Collection description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Postman collection format schema URL.
    pub schema: String,
}

/// A single request with its example responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name (the operation summary).
    pub name: String,
    /// The example request.
    pub request: Request,
    /// Example responses, one per declared response code.
    pub response: Vec<Response>,
}

/// An example request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Uppercased HTTP method.
    pub method: String,
    /// Request headers (none are synthesized).
    pub header: Vec<Header>,
    /// The structured request URL.
    pub url: RequestUrl,
}

/// The structured URL of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestUrl {
    /// Full URL string including the base URL prefix.
    pub raw: String,
    /// Host segments (the base URL as a single segment).
    pub host: Vec<String>,
    /// Path segments.
    pub path: Vec<String>,
    /// Query parameter placeholders.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<Parameter>,
    /// Path variable placeholders.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variable: Vec<Parameter>,
}

/// A query or path parameter placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub key: String,
    /// Always serialized, even when null.
    pub value: Option<Value>,
    /// Parameter description, when declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Placeholders are disabled by construction.
    pub disabled: bool,
}

/// A key/value header pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Header name.
    pub key: String,
    /// Header value.
    pub value: String,
}

/// An example response attached to an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Display name (`"{summary} {code}"`).
    pub name: String,
    /// The request this response is an example for.
    #[serde(rename = "originalRequest")]
    pub original_request: Request,
    /// Reason phrase for the status code.
    pub status: String,
    /// Numeric status code (`0` for non-numeric keys such as `default`).
    pub code: u16,
    /// Preview language hint for the Postman UI.
    #[serde(rename = "_postman_previewlanguage")]
    pub preview_language: String,
    /// Response headers (the declared content media type).
    pub header: Vec<Header>,
    /// Cookies (never synthesized).
    pub cookie: Vec<Value>,
    /// Pretty-printed example body, empty when none could be produced.
    pub body: String,
}
