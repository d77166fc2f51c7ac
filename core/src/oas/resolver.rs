#![deny(missing_docs)]

//! # Reference Resolution
//!
//! Document-internal `$ref` pointer walking.
//!
//! Only `#/`-rooted references are supported: external and remote
//! references fail with `UnsupportedReferenceKind` instead of being
//! fetched. The walk is a pure lookup with no side effects; the target
//! node is returned as found, without shape validation.

use crate::error::{AppError, AppResult};
use percent_encoding::percent_decode_str;
use serde_json::Value;

/// Resolves a document-internal `$ref` pointer to the node it targets.
///
/// # Arguments
///
/// * `pointer` - The reference string (e.g. `#/components/schemas/User`).
/// * `root` - The full document to walk.
///
/// Segments after the `#` root marker are decoded and looked up
/// sequentially as keys into nested mappings. A missing key fails with
/// `ReferenceNotFound` carrying the pointer and the offending segment.
pub fn resolve<'a>(pointer: &str, root: &'a Value) -> AppResult<&'a Value> {
    let mut segments = pointer.split('/');
    if segments.next() != Some("#") {
        return Err(AppError::UnsupportedReferenceKind(pointer.to_string()));
    }

    let mut current = root;
    for raw_segment in segments {
        let segment = decode_pointer_segment(raw_segment);
        current = current
            .get(segment.as_str())
            .ok_or_else(|| AppError::ReferenceNotFound {
                pointer: pointer.to_string(),
                segment,
            })?;
    }
    Ok(current)
}

/// Decodes a JSON Pointer segment (handles `~1`, `~0` and percent escapes).
fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> Value {
        json!({
            "components": {
                "schemas": {
                    "Pet": { "type": "object" },
                    "Pet/Details": { "type": "string" }
                },
                "parameters": {
                    "Limit": { "name": "limit", "in": "query" }
                }
            }
        })
    }

    #[test]
    fn test_resolve_component_schema() {
        let doc = document();
        let node = resolve("#/components/schemas/Pet", &doc).unwrap();
        assert_eq!(node, &json!({ "type": "object" }));
    }

    #[test]
    fn test_resolve_root_marker_only() {
        let doc = document();
        let node = resolve("#", &doc).unwrap();
        assert_eq!(node, &doc);
    }

    #[test]
    fn test_resolve_escaped_segment() {
        let doc = document();
        let node = resolve("#/components/schemas/Pet~1Details", &doc).unwrap();
        assert_eq!(node, &json!({ "type": "string" }));
    }

    #[test]
    fn test_resolve_missing_segment() {
        let doc = document();
        let err = resolve("#/components/schemas/Missing", &doc).unwrap_err();
        match err {
            AppError::ReferenceNotFound { pointer, segment } => {
                assert_eq!(pointer, "#/components/schemas/Missing");
                assert_eq!(segment, "Missing");
            }
            other => panic!("expected ReferenceNotFound, got {}", other),
        }
    }

    #[test]
    fn test_resolve_external_reference_unsupported() {
        let doc = document();
        let err = resolve("https://example.com/api.json#/components", &doc).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedReferenceKind(_)));
    }

    #[test]
    fn test_resolve_relative_reference_unsupported() {
        let doc = document();
        let err = resolve("other.json#/components/schemas/Pet", &doc).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedReferenceKind(_)));
    }
}
