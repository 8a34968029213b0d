//! Per-request context handed to handlers.
//!
//! The context couples the matched path parameters with query access. A
//! pre-parsed query map takes priority when one was supplied; otherwise the
//! raw query string from the request target is decoded on first use.

use std::cell::OnceCell;

use http::Uri;
use trellis_router::{PathParams, QueryParams};

/// Read-only request data for one handler invocation.
///
/// # Example
///
/// ```rust
/// use http::Uri;
/// use trellis_bind::RequestContext;
/// use trellis_router::PathParams;
///
/// let mut params = PathParams::new();
/// params.push("id", "123");
///
/// let ctx = RequestContext::new(
///     Uri::from_static("/vehicles/edit/123?tab=history&tab=notes"),
///     params,
/// );
///
/// assert_eq!(ctx.param("id"), "123");
/// assert_eq!(ctx.param("missing"), "");
/// assert_eq!(ctx.query("tab"), Some("history"));
/// assert_eq!(ctx.query_all("tab"), ["history", "notes"]);
/// ```
#[derive(Debug, Clone)]
pub struct RequestContext {
    uri: Uri,
    path_params: PathParams,
    query_override: Option<QueryParams>,
    decoded_query: OnceCell<QueryParams>,
}

impl RequestContext {
    /// Creates a context from the request target and matched parameters.
    #[must_use]
    pub fn new(uri: Uri, path_params: PathParams) -> Self {
        Self {
            uri,
            path_params,
            query_override: None,
            decoded_query: OnceCell::new(),
        }
    }

    /// Supplies a pre-parsed query map, which takes priority over the raw
    /// query string.
    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query_override = Some(query);
        self
    }

    /// The request path.
    #[must_use]
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// The raw query string, if the request carried one.
    #[must_use]
    pub fn raw_query(&self) -> Option<&str> {
        self.uri.query()
    }

    /// A path parameter by name, or the empty string for unknown keys.
    #[must_use]
    pub fn param(&self, name: &str) -> &str {
        self.path_params.get(name).unwrap_or("")
    }

    /// The matched path parameters.
    #[must_use]
    pub fn path_params(&self) -> &PathParams {
        &self.path_params
    }

    /// First query value for `name`, if present.
    #[must_use]
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query_params().get(name)
    }

    /// Every query value for `name`, in wire order.
    #[must_use]
    pub fn query_all(&self, name: &str) -> Vec<&str> {
        self.query_params().get_all(name)
    }

    /// All query parameters.
    ///
    /// Uses the pre-parsed map when one was supplied, otherwise decodes the
    /// raw query string once and caches the result.
    #[must_use]
    pub fn query_params(&self) -> &QueryParams {
        if let Some(query) = &self.query_override {
            return query;
        }
        self.decoded_query
            .get_or_init(|| QueryParams::parse(self.raw_query().unwrap_or("")))
    }
}
