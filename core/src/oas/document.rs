#![deny(missing_docs)]

//! # OpenAPI Document Loading
//!
//! Wraps a parsed OpenAPI document and provides the accessors the
//! collection builder needs. Validation is deliberately minimal: the
//! root must be an object with a `paths` object, since nothing can be
//! converted without one. Everything else is checked at the point of
//! use.

use crate::error::{AppError, AppResult};
use serde_json::{Map, Value};

/// A loaded, read-only OpenAPI document.
///
/// The raw JSON tree is kept as-is so that `$ref` pointers can be walked
/// from the root; property order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenApiDocument {
    raw: Value,
}

impl OpenApiDocument {
    /// Parses a JSON OpenAPI document.
    pub fn from_json_str(content: &str) -> AppResult<Self> {
        let raw: Value = serde_json::from_str(content)?;
        Self::from_value(raw)
    }

    /// Parses a YAML OpenAPI document.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let raw: Value = serde_yaml::from_str(content)?;
        Self::from_value(raw)
    }

    /// Wraps an already-parsed document after root validation.
    pub fn from_value(raw: Value) -> AppResult<Self> {
        if !raw.is_object() {
            return Err(AppError::General(
                "OpenAPI document root must be an object".into(),
            ));
        }
        if raw.get("paths").and_then(Value::as_object).is_none() {
            return Err(AppError::General(
                "OpenAPI document missing required 'paths' object".into(),
            ));
        }
        Ok(Self { raw })
    }

    /// The raw document, for reference resolution.
    pub fn root(&self) -> &Value {
        &self.raw
    }

    /// The API title from `info.title`.
    pub fn title(&self) -> Option<&str> {
        self.raw.pointer("/info/title").and_then(Value::as_str)
    }

    /// The API description from `info.description`.
    pub fn description(&self) -> Option<&str> {
        self.raw
            .pointer("/info/description")
            .and_then(Value::as_str)
    }

    /// Iterates `(path, path item)` pairs in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.raw
            .get("paths")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(Map::iter)
    }
}
