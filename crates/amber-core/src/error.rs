//! Error types for amber decoding and encoding operations.

use thiserror::Error;

/// Errors that can occur while decoding a document or encoding a field map.
#[derive(Error, Debug)]
pub enum AmberError {
    /// The input bytes were not a syntactically valid JSON object (decoding
    /// path, generic pass). The caller's field map is left empty.
    #[error("malformed JSON document: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The document parsed as a generic object, but some value could not be
    /// coerced into the typed view's declared field type (decoding path,
    /// typed pass). The caller's field map already holds the full generic
    /// decode and may still be inspected.
    #[error("document does not fit the typed view: {0}")]
    TypeMismatch(#[source] serde_json::Error),

    /// The merged field map could not be serialized (encoding path). Not
    /// expected for maps built from previously decoded values.
    #[error("field map serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Convenience alias used throughout amber-core.
pub type Result<T> = std::result::Result<T, AmberError>;
