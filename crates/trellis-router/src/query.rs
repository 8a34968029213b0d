//! Decoded query-string parameters.
//!
//! Query parameters are kept as an order-preserving multimap: the same key
//! may appear several times and callers can ask for the first value, every
//! value, or the full pair list.

/// Decoded query parameters in wire order.
///
/// # Example
///
/// ```rust
/// use trellis_router::QueryParams;
///
/// let query = QueryParams::parse("q=hello%20world&tag=g-sui&tag=web");
/// assert_eq!(query.get("q"), Some("hello world"));
/// assert_eq!(query.get_all("tag"), ["g-sui", "web"]);
/// assert_eq!(query.get("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a raw query string (without the leading `?`).
    ///
    /// Percent-escapes and `+` are decoded; pair order is preserved.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            pairs: form_urlencoded::parse(raw.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// First value for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `name`, in wire order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Iterates over all `(name, value)` pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Returns true if `name` appears at least once.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(n, _)| n == name)
    }

    /// Returns true if the query string decoded to nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of decoded pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}
