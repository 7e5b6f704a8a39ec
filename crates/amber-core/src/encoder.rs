//! Encoder — folds a typed view back into its field map and serializes.
//!
//! The view itself is never serialized. Instead, each tagged field's
//! current value overwrites its key in the field map (picking up whatever
//! the caller changed since decoding), and the map — which still carries
//! every field the view never declared — becomes the output document.

use crate::error::{AmberError, Result};
use crate::view::{FieldMap, TypedView};
use serde_json::Value;

/// Copy every tagged field's current value from `view` into `fields`,
/// replacing any stale entry at the same key.
///
/// Keys not claimed by the view's field table are left untouched, which is
/// what keeps unknown fields alive across the round trip. Entries for keys
/// the map has never seen (a tagged field absent from the decoded
/// document) are appended in table order.
pub fn merge_fields<V>(view: &V, fields: &mut FieldMap)
where
    V: TypedView,
{
    for (key, value) in view.tagged_fields() {
        fields.insert(key.to_owned(), Value::String(value));
    }
}

/// Encode `fields` as a JSON document after merging `view`'s tagged fields
/// into it.
///
/// Mutates `fields` in place (the merge step) before serializing; callers
/// that need the pre-merge map must clone it first. Calling twice with an
/// unchanged view is harmless — the second merge overwrites each key with
/// the value it already holds.
///
/// # Errors
///
/// [`AmberError::Serialize`] if the merged map cannot be serialized. Maps
/// built from previously decoded values always serialize.
///
/// # Example
///
/// ```
/// use amber_core::{decode, encode, FieldMap, TypedView};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Event {
///     kind: String,
/// }
///
/// impl TypedView for Event {
///     fn tagged_fields(&self) -> Vec<(&'static str, String)> {
///         vec![("kind", self.kind.clone())]
///     }
/// }
///
/// let doc = br#"{"kind":"meeting","location":"Portland"}"#;
/// let mut fields = FieldMap::new();
/// let mut event: Event = decode(doc, &mut fields).unwrap();
/// event.kind = "cancelled".to_string();
///
/// let out = encode(&event, &mut fields).unwrap();
/// assert_eq!(out, br#"{"kind":"cancelled","location":"Portland"}"#);
/// ```
pub fn encode<V>(view: &V, fields: &mut FieldMap) -> Result<Vec<u8>>
where
    V: TypedView,
{
    merge_fields(view, fields);
    serde_json::to_vec(fields).map_err(AmberError::Serialize)
}
