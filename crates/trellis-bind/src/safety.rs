//! Field-name and path-safety validation.
//!
//! Every field path from a request body passes through here before the
//! resolver touches the destination object. Validation is deliberately
//! conservative: ASCII identifiers only, and a substring denylist that
//! over-blocks rather than under-blocks.

use crate::{BindError, SafetyPolicy};

/// Returns true if `name` is an acceptable field identifier.
///
/// The first character must be an ASCII letter or underscore; the rest must
/// be ASCII letters, digits, or underscores. No normalization and no
/// Unicode identifiers — the name is later matched exactly against a typed
/// record's registry.
///
/// # Example
///
/// ```rust
/// use trellis_bind::is_valid_field_name;
///
/// assert!(is_valid_field_name("first_name"));
/// assert!(is_valid_field_name("_"));
/// assert!(!is_valid_field_name("1abc"));
/// assert!(!is_valid_field_name(""));
/// ```
#[must_use]
pub fn is_valid_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validates a full dotted/bracketed field path against `policy`.
///
/// Checks, in order: the length bound, the case-insensitive substring
/// denylist, then every `.`-separated segment via [`is_valid_field_name`]
/// (for indexed segments, only the name before the `[` is checked here).
/// Returns the first violation found.
///
/// # Example
///
/// ```rust
/// use trellis_bind::{validate_field_access, SafetyPolicy};
///
/// let policy = SafetyPolicy::default();
/// assert!(validate_field_access("posts[0].title", &policy).is_ok());
/// assert!(validate_field_access("user.__private", &policy).is_err());
/// assert!(validate_field_access("os.Exec", &policy).is_err());
/// ```
pub fn validate_field_access(path: &str, policy: &SafetyPolicy) -> Result<(), BindError> {
    if path.len() > policy.max_path_len {
        return Err(BindError::PathTooLong {
            length: path.len(),
            max: policy.max_path_len,
        });
    }

    let lowered = path.to_ascii_lowercase();
    for pattern in &policy.denylist {
        if lowered.contains(&pattern.to_ascii_lowercase()) {
            return Err(BindError::UnsafePath {
                pattern: pattern.clone(),
            });
        }
    }

    for segment in path.split('.') {
        let name = segment.split_once('[').map_or(segment, |(name, _)| name);
        if !is_valid_field_name(name) {
            return Err(BindError::InvalidFieldName {
                name: name.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_field_names() {
        for name in ["_", "a", "A1", "first_name", "posts", "Title"] {
            assert!(is_valid_field_name(name), "expected {name:?} to be valid");
        }
    }

    #[test]
    fn test_invalid_field_names() {
        for name in ["", "1abc", "a-b", "a b", "naïve", "a.b", "a[0]"] {
            assert!(!is_valid_field_name(name), "expected {name:?} to be invalid");
        }
    }

    #[test]
    fn test_accepts_indexed_paths() {
        let policy = SafetyPolicy::default();
        assert!(validate_field_access("Posts[0].Title", &policy).is_ok());
        assert!(validate_field_access("author.posts[12].tags", &policy).is_ok());
    }

    #[test]
    fn test_rejects_double_underscore() {
        let policy = SafetyPolicy::default();
        let err = validate_field_access("User.__private", &policy).unwrap_err();
        assert!(matches!(err, BindError::UnsafePath { .. }));
    }

    #[test]
    fn test_rejects_system_looking_paths() {
        let policy = SafetyPolicy::default();
        for path in ["os.Exec", "cmd.execute", "Syscall6", "UnsafePointer"] {
            let err = validate_field_access(path, &policy).unwrap_err();
            assert!(
                matches!(err, BindError::UnsafePath { .. }),
                "expected {path:?} to be denylisted"
            );
        }
    }

    #[test]
    fn test_denylist_scan_is_case_insensitive() {
        let policy = SafetyPolicy::default();
        assert!(validate_field_access("RunTimeConfig", &policy).is_err());
    }

    #[test]
    fn test_length_bound_is_exact() {
        let policy = SafetyPolicy::default();

        let at_limit = "a".repeat(256);
        assert!(validate_field_access(&at_limit, &policy).is_ok());

        let past_limit = "a".repeat(257);
        let err = validate_field_access(&past_limit, &policy).unwrap_err();
        assert_eq!(
            err,
            BindError::PathTooLong {
                length: 257,
                max: 256
            }
        );
    }

    #[test]
    fn test_rejects_bad_segment_names() {
        let policy = SafetyPolicy::default();

        let err = validate_field_access("posts.1abc", &policy).unwrap_err();
        assert!(matches!(err, BindError::InvalidFieldName { .. }));

        let err = validate_field_access("", &policy).unwrap_err();
        assert!(matches!(err, BindError::InvalidFieldName { .. }));

        let err = validate_field_access("a..b", &policy).unwrap_err();
        assert!(matches!(err, BindError::InvalidFieldName { .. }));
    }

    #[test]
    fn test_injected_denylist_entry_applies() {
        let policy = SafetyPolicy::default().deny("shadow");
        let err = validate_field_access("ShadowCopy", &policy).unwrap_err();
        assert_eq!(
            err,
            BindError::UnsafePath {
                pattern: "shadow".to_string()
            }
        );
    }
}
