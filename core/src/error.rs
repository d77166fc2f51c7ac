#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Wrapper for JSON parse/serialize errors.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// Wrapper for YAML parse errors.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// A `$ref` pointer walk hit a segment absent from the document.
    #[from(ignore)]
    #[display("Reference '{pointer}' not found: no key '{segment}'")]
    ReferenceNotFound {
        /// The full pointer that was being resolved.
        pointer: String,
        /// The segment that was absent from the current node.
        segment: String,
    },

    /// A reference that does not target the current document.
    /// Only `#/`-rooted references are supported.
    #[from(ignore)]
    #[display("Unsupported reference kind: '{_0}'")]
    UnsupportedReferenceKind(String),

    /// A schema `type` with no entry in the default table, carrying the
    /// offending type string.
    #[from(ignore)]
    #[display("Unknown schema type: '{_0}'")]
    UnknownSchemaType(String),

    /// A `$ref` chain re-entered a pointer that is still being
    /// materialized.
    #[from(ignore)]
    #[display("Cyclic schema reference: '{_0}'")]
    CyclicSchemaReference(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because the
/// `General(String)` variant contains a `String`, which does not implement
/// `std::error::Error`, causing auto-derived `source()` implementations to
/// fail compilation.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
