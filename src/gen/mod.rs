//! Offline-generated Bot API method table.
//!
//! The contents of `methods.rs` are produced by the codegen tool from the
//! machine-readable Bot API description (`api.json`) and checked in; the
//! server depends only on the shape. Regenerate offline against a newer
//! `api.json` instead of editing by hand.

mod methods;

pub use methods::{method_spec, FieldSpec, MethodSpec, METHODS};
