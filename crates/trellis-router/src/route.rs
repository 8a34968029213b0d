//! Route pattern compilation and per-route matching.
//!
//! A declared pattern like `/vehicles/edit/{id}` is compiled once, at
//! registration time, into a list of literal and placeholder segments.
//! Matching an incoming path walks the two segment lists in lockstep.

use crate::PathParams;

/// One compiled segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSegment {
    /// Literal text that must match the incoming segment byte-for-byte.
    Literal(String),
    /// A `{name}` placeholder that captures the incoming segment verbatim.
    Param(String),
}

/// A compiled, immutable route.
///
/// Compilation normalizes slashes (a leading slash is optional, a trailing
/// slash is stripped) and records parameter names in declaration order.
/// The compiled record is never mutated after registration.
///
/// # Example
///
/// ```rust
/// use trellis_router::Route;
///
/// let route = Route::compile("/vehicles/edit/{id}", "Edit vehicle", "editVehicle");
/// assert!(route.has_params());
/// assert_eq!(route.param_names(), ["id"]);
///
/// let params = route.matches("/vehicles/edit/123").unwrap();
/// assert_eq!(params.get("id"), Some("123"));
/// assert!(route.matches("/vehicles/view/123").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    /// The declared pattern, exactly as registered.
    pattern: String,
    /// Human-readable route title.
    title: String,
    /// Handler reference for this route.
    operation_id: String,
    /// Compiled segments in order.
    segments: Vec<RouteSegment>,
    /// Placeholder names in declaration order.
    param_names: Vec<String>,
}

impl Route {
    /// Compiles a declared pattern into a route.
    ///
    /// Segments wrapped in `{` `}` become placeholders; everything else is
    /// literal. The root pattern `/` compiles to a single empty literal
    /// segment so it matches like any other one-segment exact path.
    #[must_use]
    pub fn compile(
        pattern: impl Into<String>,
        title: impl Into<String>,
        operation_id: impl Into<String>,
    ) -> Self {
        let pattern = pattern.into();
        let mut segments = Vec::new();
        let mut param_names = Vec::new();

        for raw in normalize(&pattern).split('/') {
            if let Some(name) = raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                param_names.push(name.to_string());
                segments.push(RouteSegment::Param(name.to_string()));
            } else {
                segments.push(RouteSegment::Literal(raw.to_string()));
            }
        }

        Self {
            pattern,
            title: title.into(),
            operation_id: operation_id.into(),
            segments,
            param_names,
        }
    }

    /// The declared pattern string.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The human-readable title given at registration.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The handler reference given at registration.
    #[must_use]
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    /// The compiled segments in order.
    #[must_use]
    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    /// Placeholder names in declaration order.
    #[must_use]
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Returns true if the route has at least one placeholder segment.
    #[must_use]
    pub fn has_params(&self) -> bool {
        !self.param_names.is_empty()
    }

    /// The normalized form of the declared pattern, used for exact lookup.
    #[must_use]
    pub(crate) fn normalized_pattern(&self) -> String {
        normalize(&self.pattern).to_string()
    }

    /// Matches an incoming path (query already stripped) against this route.
    ///
    /// Returns the captured parameters on a match. The incoming path must
    /// split into exactly as many segments as the route; literal positions
    /// must match byte-for-byte; placeholder positions capture the incoming
    /// text verbatim, including an empty string for a present-but-empty
    /// segment. A path that ends one segment short is a non-match, never an
    /// empty capture.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let incoming: Vec<&str> = normalize(path).split('/').collect();
        if incoming.len() != self.segments.len() {
            return None;
        }

        let mut params = PathParams::new();
        for (segment, text) in self.segments.iter().zip(&incoming) {
            match segment {
                RouteSegment::Literal(literal) => {
                    if literal != text {
                        return None;
                    }
                }
                RouteSegment::Param(name) => params.push(name.clone(), (*text).to_string()),
            }
        }
        Some(params)
    }
}

/// Strips one leading and one trailing slash.
///
/// `/vehicles/edit/` and `vehicles/edit` normalize to the same string; the
/// root path `/` normalizes to the empty string, which splits into a single
/// empty segment.
pub(crate) fn normalize(path: &str) -> &str {
    let path = path.strip_prefix('/').unwrap_or(path);
    path.strip_suffix('/').unwrap_or(path)
}
