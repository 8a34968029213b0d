//! Binding error taxonomy.
//!
//! Every failure the binding pipeline can produce is one variant of
//! [`BindError`], from path validation through resolution to type coercion.
//! Most failures affect a single body item; the request-fatal kinds
//! short-circuit the whole bind call.

use thiserror::Error;

/// Result type alias using [`BindError`].
pub type BindResult<T> = Result<T, BindError>;

/// Errors produced while validating, resolving, or setting a field path.
///
/// # Example
///
/// ```rust
/// use trellis_bind::{validate_field_access, BindError, SafetyPolicy};
///
/// let policy = SafetyPolicy::default();
/// let err = validate_field_access("user.__private", &policy).unwrap_err();
/// assert!(matches!(err, BindError::UnsafePath { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The field path exceeds the configured length bound.
    #[error("field path is {length} bytes, limit is {max}")]
    PathTooLong {
        /// Length of the offending path.
        length: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The path contains a denylisted substring.
    #[error("field path contains disallowed pattern {pattern:?}")]
    UnsafePath {
        /// The denylist entry that matched.
        pattern: String,
    },

    /// A path segment is not an acceptable identifier.
    #[error("invalid field name {name:?}")]
    InvalidFieldName {
        /// The offending segment.
        name: String,
    },

    /// The destination exposes no field with this name.
    #[error("unknown field {name:?}")]
    UnknownField {
        /// The looked-up field name.
        name: String,
    },

    /// A path descends into a field that is not a nested record.
    #[error("field {name:?} is not a nested record")]
    NotAStruct {
        /// The field the path tried to descend into.
        name: String,
    },

    /// An indexed segment names a field that is not a sequence.
    #[error("field {name:?} is not a sequence")]
    NotASlice {
        /// The field the index was applied to.
        name: String,
    },

    /// Bracket content did not parse as a non-negative integer.
    #[error("invalid index {raw:?} on segment {name:?}")]
    InvalidIndex {
        /// The segment carrying the bracket.
        name: String,
        /// The raw bracket content.
        raw: String,
    },

    /// The index exceeds the configured ceiling.
    #[error("index {index} on segment {name:?} exceeds the limit of {max}")]
    IndexTooLarge {
        /// The segment carrying the index.
        name: String,
        /// The requested index.
        index: usize,
        /// Configured ceiling.
        max: usize,
    },

    /// Growing the sequence to hold the index would pass the absolute cap.
    #[error("growing sequence {name:?} to {requested} elements exceeds the cap of {max}")]
    SliceGrowthLimitExceeded {
        /// The sequence-valued field.
        name: String,
        /// The length growth would have produced.
        requested: usize,
        /// Configured cap.
        max: usize,
    },

    /// The path traverses an optional record that is currently unset.
    #[error("optional record {name:?} is unset")]
    UnsetOptional {
        /// The segment naming the unset record.
        name: String,
    },

    /// The destination field does not permit mutation.
    #[error("field {name:?} is not settable")]
    NotSettable {
        /// The read-only field.
        name: String,
    },

    /// The field exists but is not publicly bindable.
    #[error("field {name:?} is private")]
    PrivateField {
        /// The private field.
        name: String,
    },

    /// The parsed value does not fit the destination width.
    #[error("value {value:?} overflows {width}")]
    Overflow {
        /// The raw input.
        value: String,
        /// The destination type name.
        width: &'static str,
    },

    /// The input is not a base-10 integer.
    #[error("invalid integer {value:?}")]
    InvalidInteger {
        /// The raw input.
        value: String,
    },

    /// The input is not a decimal or scientific float.
    #[error("invalid float {value:?}")]
    InvalidFloat {
        /// The raw input.
        value: String,
    },

    /// The input is not exactly `"true"` or `"false"`.
    #[error("invalid boolean {value:?}, expected \"true\" or \"false\"")]
    InvalidBoolean {
        /// The raw input.
        value: String,
    },

    /// No accepted timestamp layout matched the input.
    #[error("invalid timestamp {value:?}")]
    InvalidTimestamp {
        /// The raw input.
        value: String,
    },

    /// The destination is not a leaf scalar the setter can assign.
    #[error("field {name:?} has an unsupported destination type")]
    UnsupportedFieldType {
        /// The field the setter was pointed at.
        name: String,
    },

    /// The request carries more body items than allowed. Request-fatal.
    #[error("request carries {count} body items, limit is {max}")]
    TooManyItems {
        /// Items in the request.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A single body value exceeds the size cap. Request-fatal.
    #[error("value for {name:?} is {length} bytes, limit is {max}")]
    ValueTooLarge {
        /// The field path of the oversized value.
        name: String,
        /// Value length in bytes.
        length: usize,
        /// Configured maximum.
        max: usize,
    },
}

impl BindError {
    /// Returns true for violations that abort the whole request rather
    /// than a single body item.
    #[must_use]
    pub fn is_request_fatal(&self) -> bool {
        matches!(
            self,
            Self::TooManyItems { .. } | Self::ValueTooLarge { .. }
        )
    }
}
