//! Typed-view plumbing: the untyped field map and the `TypedView` trait.
//!
//! A document round-trips through two representations held side by side:
//! a [`FieldMap`] capturing every top-level field exactly as decoded, and a
//! caller-defined view struct capturing the declared subset with real types.
//! The map is the authoritative superset; the view is never serialized
//! directly.

use serde_json::Value;

/// Every top-level field of a document, keyed by serialized name.
///
/// Backed by `serde_json::Map` with the `preserve_order` feature, so
/// iteration (and therefore re-encoding) follows insertion order — the
/// original document's key order, with merged-in new keys appended last.
/// Values keep whatever shape the generic decode produced: strings,
/// numbers, booleans, nulls, nested objects, arrays.
pub type FieldMap = serde_json::Map<String, Value>;

/// Compile-time field table for a typed view.
///
/// Rust has no runtime tag reflection, so each view type declares its own
/// binding of struct fields to serialized keys by listing
/// `(key, current value)` pairs. A field is visible to
/// [`merge_fields`](crate::merge_fields) exactly when it appears here;
/// anything left out keeps its decode-time value in the field map.
///
/// Versioned views built by wrapping an earlier layer (a struct field
/// deserialized with `#[serde(flatten)]`) should chain: start from the
/// inner layer's table and append their own entries.
///
/// ```
/// use amber_core::TypedView;
///
/// struct Event {
///     kind: String,
///     summary: String,
/// }
///
/// impl TypedView for Event {
///     fn tagged_fields(&self) -> Vec<(&'static str, String)> {
///         vec![("kind", self.kind.clone()), ("summary", self.summary.clone())]
///     }
/// }
/// ```
///
/// Only string-valued fields participate; write-back of numeric or nested
/// fields is out of scope for the merge step.
pub trait TypedView {
    /// (serialized key, current value) for every tagged string field,
    /// innermost layer first.
    fn tagged_fields(&self) -> Vec<(&'static str, String)>;
}
