//! Decoder — parses a JSON document into a typed view plus its field map.
//!
//! The document is deserialized twice over the same bytes:
//!
//! 1. **Generic pass**: every top-level key lands in the caller's
//!    [`FieldMap`], values decoded structurally with no type narrowing.
//! 2. **Typed pass**: the same bytes deserialize into the caller's view
//!    type through serde's normal field matching — unknown document keys
//!    are ignored, declared-but-absent fields take their serde defaults.
//!
//! The two results are independent: neither is computed from the other.
//! The map is the superset the encoder later re-serializes; the view is
//! the ergonomic subset the caller reads and mutates in between.

use crate::error::{AmberError, Result};
use crate::view::FieldMap;
use serde::de::DeserializeOwned;

/// Decode a JSON object document into a typed view, capturing every
/// top-level field in `fields` along the way.
///
/// `fields` is reset before use and may be a map left over from a previous
/// decode. On success it holds the complete field set of `data` and the
/// returned view holds the declared subset.
///
/// # Errors
///
/// - [`AmberError::Malformed`] if `data` is not a valid JSON object.
///   `fields` is left empty and the typed pass is not attempted.
/// - [`AmberError::TypeMismatch`] if the typed pass rejects a value.
///   `fields` keeps the already-completed generic decode, so callers that
///   only need the untyped superset may still use it.
///
/// # Example
///
/// ```
/// use amber_core::{decode, FieldMap};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Event {
///     kind: String,
/// }
///
/// let doc = br#"{"kind":"event","location":"Portland"}"#;
/// let mut fields = FieldMap::new();
/// let event: Event = decode(doc, &mut fields).unwrap();
/// assert_eq!(event.kind, "event");
/// assert_eq!(fields["location"], "Portland");
/// ```
pub fn decode<T>(data: &[u8], fields: &mut FieldMap) -> Result<T>
where
    T: DeserializeOwned,
{
    fields.clear();
    *fields = serde_json::from_slice(data).map_err(AmberError::Malformed)?;
    serde_json::from_slice(data).map_err(AmberError::TypeMismatch)
}
