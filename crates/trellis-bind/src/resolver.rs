//! Path resolution over live destination objects.
//!
//! The resolver walks a parsed [`FieldPath`] against a [`Bindable`] object,
//! descending through nested records, growing sequences on demand within
//! the configured caps, and producing the [`FieldHandle`] the setter
//! assigns into.

use crate::{BindError, BindLimits, Bindable, Field, FieldHandle, FieldPath, PathSegment};

/// Outcome of resolving one path segment.
enum Step<'a> {
    /// The final segment produced its handle.
    Done(FieldHandle<'a>),
    /// An intermediate segment; continue from the nested record.
    Descend(&'a mut dyn Bindable),
}

/// Resolves `path` against `root`, returning a handle to the final field.
///
/// The path must already have passed [`validate_field_access`]. Sequence
/// indices beyond the current length append default-constructed elements up
/// to `limits.max_slice_len`; a growth request past the cap fails without
/// mutating the sequence.
///
/// [`validate_field_access`]: crate::validate_field_access
///
/// # Example
///
/// ```rust
/// use trellis_bind::fixtures::Author;
/// use trellis_bind::{resolve, set_field_value, BindLimits, FieldPath};
///
/// let limits = BindLimits::default();
/// let mut author = Author::default();
///
/// let path = FieldPath::parse("posts[2].title", &limits).unwrap();
/// let handle = resolve(&mut author, &path, &limits).unwrap();
/// set_field_value("title", handle, "Growing season", &limits).unwrap();
///
/// assert_eq!(author.posts.len(), 3);
/// assert_eq!(author.posts[2].title, "Growing season");
/// ```
pub fn resolve<'a>(
    root: &'a mut dyn Bindable,
    path: &FieldPath,
    limits: &BindLimits,
) -> Result<FieldHandle<'a>, BindError> {
    let segments = path.segments();
    if segments.is_empty() {
        return Err(BindError::UnknownField {
            name: path.raw().to_string(),
        });
    }
    resolve_segments(root, segments, limits)
}

/// Walks the remaining segments recursively. Depth is bounded by the path
/// length cap enforced upstream.
fn resolve_segments<'a>(
    cursor: &'a mut dyn Bindable,
    segments: &[PathSegment],
    limits: &BindLimits,
) -> Result<FieldHandle<'a>, BindError> {
    let (segment, rest) = match segments.split_first() {
        Some(pair) => pair,
        None => {
            return Err(BindError::UnknownField {
                name: String::new(),
            })
        }
    };

    match step(cursor, segment, rest.is_empty(), limits)? {
        Step::Done(handle) => Ok(handle),
        Step::Descend(next) => resolve_segments(next, rest, limits),
    }
}

fn step<'a>(
    cursor: &'a mut dyn Bindable,
    segment: &PathSegment,
    is_last: bool,
    limits: &BindLimits,
) -> Result<Step<'a>, BindError> {
    let name = segment.name();
    let field = cursor
        .field_mut(name)
        .ok_or_else(|| BindError::UnknownField {
            name: name.to_string(),
        })?;

    match segment.index() {
        None => resolve_plain(field, name, is_last),
        Some(index) => resolve_indexed(field, name, index, is_last, limits),
    }
}

fn resolve_plain<'a>(
    field: Field<'a>,
    name: &str,
    is_last: bool,
) -> Result<Step<'a>, BindError> {
    match field {
        Field::Slot(slot) => {
            if is_last {
                Ok(Step::Done(FieldHandle::Slot(slot)))
            } else {
                Err(BindError::NotAStruct {
                    name: name.to_string(),
                })
            }
        }
        Field::Struct(inner) => {
            if is_last {
                Ok(Step::Done(FieldHandle::Struct(inner)))
            } else {
                Ok(Step::Descend(inner))
            }
        }
        Field::Unset => Err(BindError::UnsetOptional {
            name: name.to_string(),
        }),
        Field::Slice(slice) => {
            if is_last {
                Ok(Step::Done(FieldHandle::Slice(slice)))
            } else {
                Err(BindError::NotAStruct {
                    name: name.to_string(),
                })
            }
        }
        Field::ReadOnly => Err(BindError::NotSettable {
            name: name.to_string(),
        }),
        Field::Private => Err(BindError::PrivateField {
            name: name.to_string(),
        }),
    }
}

fn resolve_indexed<'a>(
    field: Field<'a>,
    name: &str,
    index: usize,
    is_last: bool,
    limits: &BindLimits,
) -> Result<Step<'a>, BindError> {
    let slice = match field {
        Field::Slice(slice) => slice,
        Field::ReadOnly => {
            return Err(BindError::NotSettable {
                name: name.to_string(),
            })
        }
        Field::Private => {
            return Err(BindError::PrivateField {
                name: name.to_string(),
            })
        }
        _ => {
            return Err(BindError::NotASlice {
                name: name.to_string(),
            })
        }
    };

    if index >= slice.len() {
        let requested = index + 1;
        if requested > limits.max_slice_len {
            return Err(BindError::SliceGrowthLimitExceeded {
                name: name.to_string(),
                requested,
                max: limits.max_slice_len,
            });
        }
        while slice.len() < requested {
            slice.grow();
        }
    }

    let element = slice
        .element_mut(index)
        .ok_or_else(|| BindError::InvalidIndex {
            name: name.to_string(),
            raw: index.to_string(),
        })?;

    if is_last {
        Ok(Step::Done(FieldHandle::Struct(element)))
    } else {
        Ok(Step::Descend(element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{Author, Post};
    use crate::Slot;

    fn limits() -> BindLimits {
        BindLimits::default()
    }

    fn parse(path: &str) -> FieldPath {
        FieldPath::parse(path, &limits()).unwrap()
    }

    #[test]
    fn test_resolves_top_level_scalar() {
        let mut author = Author::default();
        let path = parse("name");

        let handle = resolve(&mut author, &path, &limits()).unwrap();
        assert!(matches!(handle, FieldHandle::Slot(Slot::Text(_))));
    }

    #[test]
    fn test_resolves_nested_scalar() {
        let mut author = Author::default();
        let path = parse("settings.timezone");

        let handle = resolve(&mut author, &path, &limits()).unwrap();
        assert!(matches!(handle, FieldHandle::Slot(Slot::Text(_))));
    }

    #[test]
    fn test_unknown_field() {
        let mut author = Author::default();
        let path = parse("colour");

        let err = resolve(&mut author, &path, &limits()).unwrap_err();
        assert_eq!(
            err,
            BindError::UnknownField {
                name: "colour".to_string()
            }
        );
    }

    #[test]
    fn test_descending_into_scalar_fails() {
        let mut author = Author::default();
        let path = parse("name.length");

        let err = resolve(&mut author, &path, &limits()).unwrap_err();
        assert_eq!(
            err,
            BindError::NotAStruct {
                name: "name".to_string()
            }
        );
    }

    #[test]
    fn test_indexing_a_non_sequence_fails() {
        let mut author = Author::default();
        let path = parse("name[0]");

        let err = resolve(&mut author, &path, &limits()).unwrap_err();
        assert_eq!(
            err,
            BindError::NotASlice {
                name: "name".to_string()
            }
        );
    }

    #[test]
    fn test_grows_sequence_to_reach_index() {
        let mut author = Author::default();
        author.posts.push(Post {
            title: "first".to_string(),
            ..Post::default()
        });

        let path = parse("posts[2]");
        let handle = resolve(&mut author, &path, &limits()).unwrap();
        assert!(matches!(handle, FieldHandle::Struct(_)));

        assert_eq!(author.posts.len(), 3);
        assert_eq!(author.posts[0].title, "first");
        assert_eq!(author.posts[1].title, "");
        assert_eq!(author.posts[2].title, "");
    }

    #[test]
    fn test_growth_cap_leaves_sequence_untouched() {
        let mut author = Author::default();
        author.posts.push(Post::default());

        let path = parse("posts[2000]");
        let err = resolve(&mut author, &path, &limits()).unwrap_err();
        assert_eq!(
            err,
            BindError::SliceGrowthLimitExceeded {
                name: "posts".to_string(),
                requested: 2001,
                max: 1000
            }
        );
        assert_eq!(author.posts.len(), 1);
    }

    #[test]
    fn test_existing_index_does_not_grow() {
        let mut author = Author::default();
        author.posts.push(Post::default());
        author.posts.push(Post::default());

        let path = parse("posts[0].title");
        resolve(&mut author, &path, &limits()).unwrap();
        assert_eq!(author.posts.len(), 2);
    }

    #[test]
    fn test_unset_optional_record() {
        let mut author = Author::default();
        let path = parse("profile.bio");

        let err = resolve(&mut author, &path, &limits()).unwrap_err();
        assert_eq!(
            err,
            BindError::UnsetOptional {
                name: "profile".to_string()
            }
        );
    }

    #[test]
    fn test_set_optional_record_resolves() {
        let mut author = Author::default();
        author.profile = Some(crate::fixtures::Profile::default());

        let path = parse("profile.bio");
        let handle = resolve(&mut author, &path, &limits()).unwrap();
        assert!(matches!(handle, FieldHandle::Slot(Slot::Text(_))));
    }

    #[test]
    fn test_private_field_is_rejected() {
        let mut author = Author::default();
        let path = parse("password_hash");

        let err = resolve(&mut author, &path, &limits()).unwrap_err();
        assert_eq!(
            err,
            BindError::PrivateField {
                name: "password_hash".to_string()
            }
        );
    }

    #[test]
    fn test_read_only_field_is_rejected() {
        let mut author = Author::default();
        let path = parse("id");

        let err = resolve(&mut author, &path, &limits()).unwrap_err();
        assert_eq!(
            err,
            BindError::NotSettable {
                name: "id".to_string()
            }
        );
    }

    #[test]
    fn test_final_struct_segment_yields_struct_handle() {
        let mut author = Author::default();
        let path = parse("settings");

        let handle = resolve(&mut author, &path, &limits()).unwrap();
        assert!(matches!(handle, FieldHandle::Struct(_)));
    }
}
