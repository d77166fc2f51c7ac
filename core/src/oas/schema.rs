#![deny(missing_docs)]

//! # Schema Classification
//!
//! Classifies raw JSON schema nodes into a tagged union so that
//! materialization is a single exhaustive match instead of ad hoc key
//! sniffing. The same classification applies no matter whether a node
//! arrived via `properties`, `items`, or a resolved reference.

use crate::error::{AppError, AppResult};
use serde_json::{Map, Value};

/// Primitive schema types with a fixed zero-value default.
///
/// The table is exhaustive: a `type` without an entry here (and which is
/// not `object`/`array`) is an `UnknownSchemaType` error, never a silent
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    /// `type: string`, defaults to `"string"`.
    String,
    /// `type: integer`, defaults to `0`.
    Integer,
    /// `type: boolean`, defaults to `false`.
    Boolean,
}

impl PrimitiveType {
    /// Returns the zero-value default example for this primitive.
    pub fn default_value(self) -> Value {
        match self {
            PrimitiveType::String => Value::String("string".to_string()),
            PrimitiveType::Integer => Value::from(0),
            PrimitiveType::Boolean => Value::Bool(false),
        }
    }
}

/// A classified schema node.
///
/// A node is *either* a reference (`$ref`, sibling keys supplementary and
/// ignored) *or* an inline schema (`type`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchemaNode<'a> {
    /// A `$ref` to another location in the same document.
    Reference(&'a str),
    /// An object schema with its (possibly absent) `properties` map.
    Object(Option<&'a Map<String, Value>>),
    /// An array schema with its (possibly absent) `items` node.
    Array(Option<&'a Value>),
    /// A primitive schema.
    Primitive(PrimitiveType),
}

impl<'a> SchemaNode<'a> {
    /// Classifies a raw JSON value as a schema node.
    ///
    /// References win over an inline `type`; an absent or unmapped `type`
    /// fails with `UnknownSchemaType` carrying the offending type string
    /// (`"<unspecified>"` when the node declares none).
    pub fn classify(value: &'a Value) -> AppResult<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| AppError::UnknownSchemaType(json_type_name(value).to_string()))?;

        if let Some(pointer) = map.get("$ref").and_then(Value::as_str) {
            return Ok(SchemaNode::Reference(pointer));
        }

        match map.get("type").and_then(Value::as_str) {
            Some("object") => Ok(SchemaNode::Object(
                map.get("properties").and_then(Value::as_object),
            )),
            Some("array") => Ok(SchemaNode::Array(map.get("items"))),
            Some("string") => Ok(SchemaNode::Primitive(PrimitiveType::String)),
            Some("integer") => Ok(SchemaNode::Primitive(PrimitiveType::Integer)),
            Some("boolean") => Ok(SchemaNode::Primitive(PrimitiveType::Boolean)),
            Some(other) => Err(AppError::UnknownSchemaType(other.to_string())),
            None => Err(AppError::UnknownSchemaType("<unspecified>".to_string())),
        }
    }
}

/// Names the JSON type of a non-object schema node for diagnostics.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_reference_wins_over_siblings() {
        let node = json!({ "$ref": "#/components/schemas/Pet", "something": "hi" });
        assert_eq!(
            SchemaNode::classify(&node).unwrap(),
            SchemaNode::Reference("#/components/schemas/Pet")
        );
    }

    #[test]
    fn test_classify_primitives() {
        let string = json!({ "type": "string" });
        let integer = json!({ "type": "integer" });
        let boolean = json!({ "type": "boolean" });
        assert_eq!(
            SchemaNode::classify(&string).unwrap(),
            SchemaNode::Primitive(PrimitiveType::String)
        );
        assert_eq!(
            SchemaNode::classify(&integer).unwrap(),
            SchemaNode::Primitive(PrimitiveType::Integer)
        );
        assert_eq!(
            SchemaNode::classify(&boolean).unwrap(),
            SchemaNode::Primitive(PrimitiveType::Boolean)
        );
    }

    #[test]
    fn test_classify_object_without_properties() {
        let node = json!({ "type": "object" });
        assert_eq!(SchemaNode::classify(&node).unwrap(), SchemaNode::Object(None));
    }

    #[test]
    fn test_classify_array_without_items() {
        let node = json!({ "type": "array" });
        assert_eq!(SchemaNode::classify(&node).unwrap(), SchemaNode::Array(None));
    }

    #[test]
    fn test_classify_unknown_type() {
        let node = json!({ "type": "tuple" });
        let err = SchemaNode::classify(&node).unwrap_err();
        match err {
            AppError::UnknownSchemaType(t) => assert_eq!(t, "tuple"),
            other => panic!("expected UnknownSchemaType, got {}", other),
        }
    }

    #[test]
    fn test_classify_missing_type() {
        let node = json!({ "description": "no type at all" });
        let err = SchemaNode::classify(&node).unwrap_err();
        match err {
            AppError::UnknownSchemaType(t) => assert_eq!(t, "<unspecified>"),
            other => panic!("expected UnknownSchemaType, got {}", other),
        }
    }

    #[test]
    fn test_classify_non_object_node() {
        let node = json!(42);
        let err = SchemaNode::classify(&node).unwrap_err();
        match err {
            AppError::UnknownSchemaType(t) => assert_eq!(t, "number"),
            other => panic!("expected UnknownSchemaType, got {}", other),
        }
    }

    #[test]
    fn test_primitive_defaults() {
        assert_eq!(PrimitiveType::String.default_value(), json!("string"));
        assert_eq!(PrimitiveType::Integer.default_value(), json!(0));
        assert_eq!(PrimitiveType::Boolean.default_value(), json!(false));
    }
}
