//! # amber-core
//!
//! Lossless JSON round-tripping for evolving schemas: decode into a typed
//! struct for ergonomic access, and still re-encode **every** field the
//! document carried — including ones your struct has never heard of.
//!
//! A struct modeling version N of a schema silently drops fields added in
//! version N+1 the moment it re-serializes data it decoded, because
//! encoding walks only the declared fields. amber keeps an untyped
//! [`FieldMap`] beside the typed view and folds the view's tagged fields
//! back into that map before encoding, so undeclared fields ride along
//! unharmed and mutations made through the view still land in the output.
//!
//! ## Quick start
//!
//! ```rust
//! use amber_core::{decode, encode, FieldMap, TypedView};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct ThingV1 {
//!     kind: String,
//!     v1key: String,
//! }
//!
//! impl TypedView for ThingV1 {
//!     fn tagged_fields(&self) -> Vec<(&'static str, String)> {
//!         vec![("kind", self.kind.clone()), ("v1key", self.v1key.clone())]
//!     }
//! }
//!
//! // v2key is unknown to ThingV1, but survives the round trip.
//! let doc = br#"{"kind":"thing/v2","v1key":"value1","v2key":"value2"}"#;
//! let mut fields = FieldMap::new();
//! let mut thing: ThingV1 = decode(doc, &mut fields).unwrap();
//!
//! thing.v1key = "changed".to_string();
//! let out = encode(&thing, &mut fields).unwrap();
//! assert_eq!(
//!     out,
//!     br#"{"kind":"thing/v2","v1key":"changed","v2key":"value2"}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`decoder`] — JSON bytes → typed view + field map
//! - [`encoder`] — typed view + field map → JSON bytes
//! - [`error`] — Error types for decode/encode failures
//! - [`view`] — `FieldMap` and the `TypedView` field table trait

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod view;

pub use decoder::decode;
pub use encoder::{encode, merge_fields};
pub use error::AmberError;
pub use view::{FieldMap, TypedView};
