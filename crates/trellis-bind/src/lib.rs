//! # Trellis Bind
//!
//! Dynamic path resolution and type-coercive request binding for the
//! Trellis web framework.
//!
//! A decoded request body is a flat list of `field path → string value`
//! pairs like `posts[0].title = "Hello"`. This crate turns those pairs into
//! typed assignments on arbitrary destination structs, defending against
//! malformed, oversized, or maliciously crafted paths along the way.
//!
//! ## Pipeline
//!
//! Each body item flows through three stages:
//!
//! | Stage | Entry point | Job |
//! |-------|-------------|-----|
//! | Validate | [`validate_field_access`] | length bound, substring denylist, identifier checks |
//! | Resolve | [`resolve`] | walk the object graph, grow sequences, produce a [`FieldHandle`] |
//! | Assign | [`set_field_value`] | coerce the raw string into the field's concrete type |
//!
//! [`Binder`] drives the pipeline over a whole body, best effort: one bad
//! item is recorded and skipped, the rest still bind.
//!
//! ## Destination types
//!
//! Destinations implement [`Bindable`], a per-type registry mapping field
//! names to typed [`Field`] descriptors. Derive it with
//! `#[derive(Bindable)]` from `trellis-derive`, or write the registry by
//! hand (see [`fixtures`] for reference implementations).
//!
//! ## Example
//!
//! ```rust
//! use trellis_bind::fixtures::Author;
//! use trellis_bind::{Binder, BodyItem};
//!
//! let mut author = Author::default();
//! let items = vec![
//!     BodyItem::new("name", "Ann"),
//!     BodyItem::new("posts[0].title", "First post"),
//!     BodyItem::new("active", "true"),
//! ];
//!
//! let report = Binder::new().bind(&mut author, &items).unwrap();
//! assert!(report.is_clean());
//! assert_eq!(author.posts[0].title, "First post");
//! ```

#![doc(html_root_url = "https://docs.rs/trellis-bind/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bindable;
mod binder;
mod config;
mod context;
mod error;
pub mod fixtures;
mod path;
mod resolver;
mod safety;
mod setter;
mod temporal;

pub use bindable::{Bindable, BindableSlice, Field, FieldHandle, Slot, StringAlias};
pub use binder::{BindFailure, BindReport, Binder, BodyItem};
pub use config::{BindLimits, SafetyPolicy};
pub use context::RequestContext;
pub use error::{BindError, BindResult};
pub use path::{FieldPath, PathSegment};
pub use resolver::resolve;
pub use safety::{is_valid_field_name, validate_field_access};
pub use setter::set_field_value;
pub use temporal::parse_timestamp;

// Re-export the parameter types the context exposes.
pub use trellis_router::{PathParams, QueryParams};
