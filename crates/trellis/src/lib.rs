//! # Trellis
//!
//! **Request binding for server-rendered web applications**
//!
//! Trellis turns loosely-typed HTTP input into strongly-typed values:
//!
//! - **Route matching** – `{name}` placeholder patterns compiled at
//!   registration, matched per request with parameter capture
//! - **Form binding** – flat `field path → string value` bodies resolved
//!   against typed destination structs, with on-demand sequence growth
//! - **Strict coercion** – exact overflow, boolean, and timestamp semantics
//!   with a full error taxonomy
//! - **Path safety** – length bounds, identifier validation, and a
//!   configurable substring denylist over untrusted paths
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis::prelude::*;
//!
//! #[derive(Default, Bindable)]
//! struct Vehicle {
//!     name: String,
//!     seats: i64,
//! }
//!
//! // Register routes once at startup.
//! let table = RouteTable::new();
//! table.register("/vehicles/edit/{id}", "Edit vehicle", "editVehicle");
//!
//! // Per request: match, then bind the decoded body.
//! let matched = table.match_path("/vehicles/edit/7").unwrap();
//! assert_eq!(matched.params.get("id"), Some("7"));
//!
//! let mut vehicle = Vehicle::default();
//! let items = vec![
//!     BodyItem::new("name", "Vardo"),
//!     BodyItem::new("seats", "4"),
//! ];
//! let report = Binder::new().bind(&mut vehicle, &items).unwrap();
//! assert!(report.is_clean());
//! assert_eq!(vehicle.seats, 4);
//! ```

#![doc(html_root_url = "https://docs.rs/trellis/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export router types
pub use trellis_router as router;

// Re-export binding types
pub use trellis_bind as bind;

// Re-export the derive macro
pub use trellis_derive::Bindable;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust,ignore
/// use trellis::prelude::*;
/// ```
pub mod prelude {
    pub use trellis_bind::{
        BindError, BindLimits, BindReport, Bindable, Binder, BodyItem, RequestContext,
        SafetyPolicy,
    };
    pub use trellis_derive::Bindable;
    pub use trellis_router::{PathParams, QueryParams, Route, RouteMatch, RouteTable};
}
