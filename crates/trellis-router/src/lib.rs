//! Route pattern compiler and matcher for the Trellis web framework.
//!
//! Declared patterns use `{name}` placeholder syntax. Compilation happens
//! once at registration time; matching is a hash lookup for literal routes
//! and a declaration-order segment walk for parameterized ones.
//!
//! # Example
//!
//! ```rust
//! use trellis_router::{QueryParams, RouteTable};
//!
//! let table = RouteTable::new();
//! table.register("/users/{userId}/posts/{postId}", "User post", "getUserPost");
//!
//! let matched = table.match_path("/users/123/posts/456?draft=true").unwrap();
//! assert_eq!(matched.route.title(), "User post");
//! assert_eq!(matched.params.get("userId"), Some("123"));
//! assert_eq!(matched.params.get("postId"), Some("456"));
//!
//! // Query content never affects matching; it decodes separately.
//! let query = QueryParams::parse("draft=true");
//! assert_eq!(query.get("draft"), Some("true"));
//! ```

#![doc(html_root_url = "https://docs.rs/trellis-router/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod params;
mod query;
mod route;
mod table;

pub use params::PathParams;
pub use query::QueryParams;
pub use route::{Route, RouteSegment};
pub use table::RouteTable;

use std::sync::Arc;

/// A matched route and the parameters captured from the incoming path.
///
/// Created fresh per request and discarded after the handler runs.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The compiled route that matched.
    pub route: Arc<Route>,
    /// Captured parameters in declaration order.
    pub params: PathParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_matching() {
        let table = RouteTable::new();
        table.register("/", "Home", "home");
        table.register("/vehicles", "Vehicles", "listVehicles");
        table.register("/vehicles/edit/{id}", "Edit vehicle", "editVehicle");

        assert_eq!(
            table.match_path("/").unwrap().route.operation_id(),
            "home"
        );

        let matched = table.match_path("/vehicles/edit/123").unwrap();
        assert_eq!(matched.route.operation_id(), "editVehicle");
        assert_eq!(matched.params.get("id"), Some("123"));

        assert!(table.match_path("/vehicles/view/123").is_none());
        assert!(table.match_path("/vehicles/edit/123/details").is_none());
    }
}
