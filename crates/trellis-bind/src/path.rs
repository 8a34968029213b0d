//! Field-path parsing.
//!
//! A field path is a string of dot-separated segments, each optionally
//! carrying one bracketed sequence index: `author.posts[2].title`. Paths
//! are expected to have passed [`validate_field_access`] first; parsing
//! here only deals with structure and index bounds.
//!
//! [`validate_field_access`]: crate::validate_field_access

use crate::{BindError, BindLimits};

/// One parsed segment of a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    name: String,
    index: Option<usize>,
}

impl PathSegment {
    /// The field name of this segment.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sequence index, when the segment was written `name[index]`.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

/// A parsed field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    raw: String,
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Parses a dotted field path.
    ///
    /// Bracket content must be a non-negative base-10 integer no greater
    /// than `limits.max_index`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trellis_bind::{BindLimits, FieldPath};
    ///
    /// let path = FieldPath::parse("posts[2].title", &BindLimits::default()).unwrap();
    /// assert_eq!(path.segments().len(), 2);
    /// assert_eq!(path.segments()[0].name(), "posts");
    /// assert_eq!(path.segments()[0].index(), Some(2));
    /// assert_eq!(path.leaf_name(), "title");
    /// ```
    pub fn parse(path: &str, limits: &BindLimits) -> Result<Self, BindError> {
        let mut segments = Vec::new();

        for raw in path.split('.') {
            match raw.split_once('[') {
                Some((name, rest)) => {
                    let content =
                        rest.strip_suffix(']')
                            .ok_or_else(|| BindError::InvalidIndex {
                                name: name.to_string(),
                                raw: rest.to_string(),
                            })?;
                    let index: usize =
                        content.parse().map_err(|_| BindError::InvalidIndex {
                            name: name.to_string(),
                            raw: content.to_string(),
                        })?;
                    if index > limits.max_index {
                        return Err(BindError::IndexTooLarge {
                            name: name.to_string(),
                            index,
                            max: limits.max_index,
                        });
                    }
                    segments.push(PathSegment {
                        name: name.to_string(),
                        index: Some(index),
                    });
                }
                None => segments.push(PathSegment {
                    name: raw.to_string(),
                    index: None,
                }),
            }
        }

        Ok(Self {
            raw: path.to_string(),
            segments,
        })
    }

    /// The original path string.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The parsed segments in order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The field name of the final segment.
    #[must_use]
    pub fn leaf_name(&self) -> &str {
        self.segments.last().map_or("", |s| s.name.as_str())
    }
}
