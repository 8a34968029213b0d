//! Best-effort body binding.
//!
//! A decoded request body arrives as a flat sequence of [`BodyItem`]s. The
//! binder pushes each item through validation, resolution, and assignment,
//! recording per-item failures instead of aborting the request. Only the
//! request-level caps (item count, value size) are fatal.

use crate::{
    resolve, set_field_value, validate_field_access, BindError, BindLimits, Bindable, FieldPath,
    SafetyPolicy,
};

/// One decoded body field: a path, a raw value, and an advisory type hint.
///
/// The hint travels with the item for the benefit of upstream decoders; the
/// setter dispatches purely on the destination field's concrete type and a
/// mismatched hint is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyItem {
    /// The field path, e.g. `posts[0].title`.
    pub name: String,
    /// The raw string value.
    pub value: String,
    /// Declared type tag from the decoder, e.g. `"int64"`.
    pub type_hint: Option<String>,
}

impl BodyItem {
    /// Creates an item without a type hint.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            type_hint: None,
        }
    }

    /// Attaches the decoder's declared type tag.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.type_hint = Some(hint.into());
        self
    }
}

/// One skipped body item and the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindFailure {
    /// The field path of the skipped item.
    pub field: String,
    /// The error that stopped it.
    pub error: BindError,
}

/// Outcome of binding one request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    /// Items successfully assigned.
    pub bound: usize,
    /// Items skipped, in request order.
    pub failures: Vec<BindFailure>,
}

impl BindReport {
    /// Returns true if every item was bound.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Binds decoded body items onto destination objects.
///
/// # Example
///
/// ```rust
/// use trellis_bind::fixtures::Author;
/// use trellis_bind::{Binder, BodyItem};
///
/// let mut author = Author::default();
/// let items = vec![
///     BodyItem::new("age", "1_000").with_hint("int"),
///     BodyItem::new("name", "Ann").with_hint("string"),
/// ];
///
/// let report = Binder::new().bind(&mut author, &items).unwrap();
/// assert!(report.is_clean());
/// assert_eq!(author.age, 1000);
/// assert_eq!(author.name, "Ann");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Binder {
    policy: SafetyPolicy,
    limits: BindLimits,
    strict: bool,
}

impl Binder {
    /// Creates a binder with the default policy and limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the path-safety policy.
    #[must_use]
    pub fn with_policy(mut self, policy: SafetyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the resource limits.
    #[must_use]
    pub fn with_limits(mut self, limits: BindLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Turns the first per-item failure into the call's error instead of
    /// recording it and continuing.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Binds `items` onto `target`, best effort.
    ///
    /// Request-level violations (item count, value size) abort before any
    /// item is processed. Everything else is per-item: the failure is
    /// logged, recorded in the report, and the remaining items still bind.
    pub fn bind(
        &self,
        target: &mut dyn Bindable,
        items: &[BodyItem],
    ) -> Result<BindReport, BindError> {
        if items.len() > self.limits.max_body_items {
            return Err(BindError::TooManyItems {
                count: items.len(),
                max: self.limits.max_body_items,
            });
        }
        for item in items {
            if item.value.len() > self.limits.max_value_bytes {
                return Err(BindError::ValueTooLarge {
                    name: item.name.clone(),
                    length: item.value.len(),
                    max: self.limits.max_value_bytes,
                });
            }
        }

        let mut report = BindReport::default();
        for item in items {
            match self.bind_item(target, item) {
                Ok(()) => report.bound += 1,
                Err(error) if self.strict => return Err(error),
                Err(error) => {
                    tracing::warn!(field = %item.name, %error, "skipping body item");
                    report.failures.push(BindFailure {
                        field: item.name.clone(),
                        error,
                    });
                }
            }
        }

        Ok(report)
    }

    fn bind_item(&self, target: &mut dyn Bindable, item: &BodyItem) -> Result<(), BindError> {
        validate_field_access(&item.name, &self.policy)?;
        let path = FieldPath::parse(&item.name, &self.limits)?;
        let handle = resolve(target, &path, &self.limits)?;
        set_field_value(path.leaf_name(), handle, &item.value, &self.limits)
    }
}
