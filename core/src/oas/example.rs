#![deny(missing_docs)]

//! # Example Materialization
//!
//! Recursively produces a concrete example value for a schema node.
//!
//! Literal `example` fields take precedence at any depth. References are
//! transparent: materializing `{ "$ref": "#/x" }` yields the same value
//! as materializing the target directly. Objects recurse per property in
//! declaration order, arrays produce a representative one-element
//! sequence, primitives take their defaults from the type default table.

use crate::error::{AppError, AppResult};
use crate::oas::resolver::resolve;
use crate::oas::schema::SchemaNode;
use serde_json::{Map, Value};

/// Materializes an example value for `schema` against `document`.
///
/// Reference cycles are detected via an in-flight pointer stack and fail
/// with `CyclicSchemaReference` instead of recursing without bound. The
/// stack is scoped to this call chain, so repeated (diamond-shaped)
/// references to the same target are fine.
pub fn materialize(schema: &Value, document: &Value) -> AppResult<Value> {
    let mut in_flight = Vec::new();
    materialize_node(schema, document, &mut in_flight)
}

fn materialize_node(
    schema: &Value,
    document: &Value,
    in_flight: &mut Vec<String>,
) -> AppResult<Value> {
    // Literal examples win over synthesized defaults at any depth.
    if let Some(example) = schema.get("example") {
        return Ok(example.clone());
    }

    match SchemaNode::classify(schema)? {
        SchemaNode::Reference(pointer) => {
            if in_flight.iter().any(|p| p == pointer) {
                return Err(AppError::CyclicSchemaReference(pointer.to_string()));
            }
            in_flight.push(pointer.to_string());
            let target = resolve(pointer, document)?;
            let value = materialize_node(target, document, in_flight)?;
            in_flight.pop();
            Ok(value)
        }
        SchemaNode::Object(properties) => {
            let mut example = Map::new();
            if let Some(properties) = properties {
                for (name, child) in properties {
                    example.insert(name.clone(), materialize_node(child, document, in_flight)?);
                }
            }
            Ok(Value::Object(example))
        }
        SchemaNode::Array(items) => match items {
            Some(items) => Ok(Value::Array(vec![materialize_node(
                items, document, in_flight,
            )?])),
            None => Ok(Value::Array(Vec::new())),
        },
        SchemaNode::Primitive(kind) => Ok(kind.default_value()),
    }
}
