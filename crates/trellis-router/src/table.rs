//! The shared route table.
//!
//! Literal routes are looked up by exact normalized path; parameterized
//! routes are scanned in registration order with a segment walk. The table
//! is guarded by a reader/writer lock so in-flight request matching runs
//! concurrently while registrations serialize.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::route::normalize;
use crate::{PathParams, Route, RouteMatch};

#[derive(Debug, Default)]
struct TableInner {
    /// Literal routes keyed by normalized pattern.
    exact: HashMap<String, Arc<Route>>,
    /// Parameterized routes in registration order.
    dynamic: Vec<Arc<Route>>,
}

/// Registered routes with concurrent match support.
///
/// # Example
///
/// ```rust
/// use trellis_router::RouteTable;
///
/// let table = RouteTable::new();
/// table.register("/vehicles", "Vehicles", "listVehicles");
/// table.register("/vehicles/edit/{id}", "Edit vehicle", "editVehicle");
///
/// let matched = table.match_path("/vehicles/edit/123?tab=history").unwrap();
/// assert_eq!(matched.route.operation_id(), "editVehicle");
/// assert_eq!(matched.params.get("id"), Some("123"));
///
/// assert!(table.match_path("/garages/9").is_none());
/// ```
#[derive(Debug, Default)]
pub struct RouteTable {
    inner: RwLock<TableInner>,
}

impl RouteTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles and registers a route.
    ///
    /// Returns the compiled route. Registering the same literal pattern
    /// twice replaces the earlier entry; parameterized routes are tried in
    /// registration order, so the earlier of two overlapping patterns wins.
    pub fn register(
        &self,
        pattern: impl Into<String>,
        title: impl Into<String>,
        operation_id: impl Into<String>,
    ) -> Arc<Route> {
        let route = Arc::new(Route::compile(pattern, title, operation_id));
        tracing::debug!(
            pattern = route.pattern(),
            title = route.title(),
            operation = route.operation_id(),
            "registered route"
        );

        let mut inner = self.inner.write();
        if route.has_params() {
            inner.dynamic.push(Arc::clone(&route));
        } else {
            inner.exact.insert(route.normalized_pattern(), Arc::clone(&route));
        }
        route
    }

    /// Matches a raw request path against the table.
    ///
    /// Query content after the first `?` is ignored for matching. Literal
    /// routes win over parameterized ones; "no match" is a normal outcome,
    /// not an error.
    #[must_use]
    pub fn match_path(&self, raw_path: &str) -> Option<RouteMatch> {
        let path = raw_path.split_once('?').map_or(raw_path, |(p, _)| p);
        let normalized = normalize(path);

        let inner = self.inner.read();
        if let Some(route) = inner.exact.get(normalized) {
            return Some(RouteMatch {
                route: Arc::clone(route),
                params: PathParams::new(),
            });
        }

        inner.dynamic.iter().find_map(|route| {
            route.matches(path).map(|params| RouteMatch {
                route: Arc::clone(route),
                params,
            })
        })
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        let inner = self.inner.read();
        inner.exact.len() + inner.dynamic.len()
    }

    /// Returns true if no routes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
