//! Derive macro for Trellis bindable types.
//!
//! `#[derive(Bindable)]` generates the per-type field registry that the
//! binding engine walks: a `field_mut` implementation mapping each public
//! field name to a typed descriptor. The mapping is driven by the field's
//! declared type, with `#[bind(...)]` attributes for the cases the type
//! alone cannot express.
//!
//! # Example
//!
//! ```rust,ignore
//! use trellis_bind::Bindable;
//!
//! #[derive(Default, Bindable)]
//! struct Vehicle {
//!     name: String,
//!     seats: i64,
//!     #[bind(rename = "plate")]
//!     registration: String,
//!     #[bind(private)]
//!     owner_token: String,
//! }
//! ```
//!
//! # Field attributes
//!
//! | Attribute | Effect |
//! |-----------|--------|
//! | `#[bind(rename = "name")]` | Registers the field under a different name |
//! | `#[bind(skip)]` | Leaves the field out of the registry entirely |
//! | `#[bind(private)]` | Registers the field as private; binding it is rejected |
//! | `#[bind(read_only)]` | Registers the field as not settable |
//! | `#[bind(text)]` | Binds through `StringAlias` for named text types |
//!
//! # Type mapping
//!
//! `String`, the fixed-width integers, `f32`/`f64`, `bool`, and
//! `chrono::DateTime<Utc>` become leaf slots; `Option<T>` of those becomes
//! the optional slot. `Vec<T>` becomes a growable sequence (requiring
//! `T: Bindable + Default`), `Option<T>` of a record becomes an optional
//! nested record, and any other named type is treated as a nested record
//! implementing `Bindable`.

mod expand;

use proc_macro::TokenStream;

/// Generates a `trellis_bind::Bindable` implementation for a struct with
/// named fields.
#[proc_macro_derive(Bindable, attributes(bind))]
pub fn derive_bindable(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    expand::expand_bindable(&input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
