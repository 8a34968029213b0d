//! Capability traits for bindable destination objects.
//!
//! Destination types expose their fields through [`Bindable`], a per-type
//! registry that maps a field name to a typed [`Field`] descriptor. The
//! resolver walks these descriptors; the setter consumes the leaf
//! [`Slot`] handles they carry. Implementations are usually generated with
//! `#[derive(Bindable)]` from `trellis-derive`, but writing the registry by
//! hand is fully supported.

use chrono::{DateTime, Utc};

/// A destination object with named, typed, bindable fields.
///
/// # Example
///
/// ```rust
/// use trellis_bind::{Bindable, Field, Slot};
///
/// #[derive(Default)]
/// struct Vehicle {
///     name: String,
///     seats: i64,
/// }
///
/// impl Bindable for Vehicle {
///     fn field_mut(&mut self, name: &str) -> Option<Field<'_>> {
///         match name {
///             "name" => Some(Field::Slot(Slot::Text(&mut self.name))),
///             "seats" => Some(Field::Slot(Slot::I64(&mut self.seats))),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Bindable {
    /// Looks up a field by exact name.
    ///
    /// Returns `None` when the type exposes no field with that name.
    fn field_mut(&mut self, name: &str) -> Option<Field<'_>>;
}

/// A growable sequence of bindable records.
///
/// Implemented for `Vec<T>` where the element type is `Bindable + Default`,
/// which covers the sequence fields the resolver can traverse and grow.
pub trait BindableSlice {
    /// Current element count.
    fn len(&self) -> usize;

    /// Returns true if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends one default-constructed element.
    fn grow(&mut self);

    /// Mutable access to the element at `index`.
    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Bindable>;
}

impl<T: Bindable + Default> BindableSlice for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn grow(&mut self) {
        self.push(T::default());
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Bindable> {
        self.get_mut(index).map(|element| element as &mut dyn Bindable)
    }
}

/// A named type whose underlying representation is text.
///
/// Values are assigned verbatim, exactly like a plain `String` field, no
/// matter how many newtype layers wrap the text.
pub trait StringAlias {
    /// Replaces the wrapped text with `value`.
    fn set_str(&mut self, value: &str);
}

/// A typed descriptor for one field of a [`Bindable`] type.
pub enum Field<'a> {
    /// A leaf scalar the setter can assign.
    Slot(Slot<'a>),
    /// A nested bindable record.
    Struct(&'a mut dyn Bindable),
    /// An optional nested record that is currently `None`.
    Unset,
    /// A growable sequence of bindable records.
    Slice(&'a mut dyn BindableSlice),
    /// A field that exists but does not permit mutation.
    ReadOnly,
    /// A field that exists but is not publicly bindable.
    Private,
}

/// An addressable leaf scalar inside a destination object.
///
/// Produced by the resolver for the final path segment and consumed
/// immediately by the setter; a slot never outlives a single bind
/// operation.
pub enum Slot<'a> {
    /// UTF-8 text, assigned verbatim.
    Text(&'a mut String),
    /// A named text type, assigned verbatim through [`StringAlias`].
    Alias(&'a mut dyn StringAlias),
    /// Signed 8-bit integer.
    I8(&'a mut i8),
    /// Signed 16-bit integer.
    I16(&'a mut i16),
    /// Signed 32-bit integer.
    I32(&'a mut i32),
    /// Signed 64-bit integer.
    I64(&'a mut i64),
    /// Unsigned 8-bit integer.
    U8(&'a mut u8),
    /// Unsigned 16-bit integer.
    U16(&'a mut u16),
    /// Unsigned 32-bit integer.
    U32(&'a mut u32),
    /// Unsigned 64-bit integer.
    U64(&'a mut u64),
    /// 32-bit float.
    F32(&'a mut f32),
    /// 64-bit float.
    F64(&'a mut f64),
    /// Boolean, accepting only the exact literals `"true"` and `"false"`.
    Bool(&'a mut bool),
    /// UTC timestamp; the empty string assigns the Unix epoch.
    Timestamp(&'a mut DateTime<Utc>),
    /// Optional UTC timestamp; the empty string clears it to `None`.
    OptTimestamp(&'a mut Option<DateTime<Utc>>),
    /// Optional text.
    OptText(&'a mut Option<String>),
    /// Optional signed 8-bit integer.
    OptI8(&'a mut Option<i8>),
    /// Optional signed 16-bit integer.
    OptI16(&'a mut Option<i16>),
    /// Optional signed 32-bit integer.
    OptI32(&'a mut Option<i32>),
    /// Optional signed 64-bit integer.
    OptI64(&'a mut Option<i64>),
    /// Optional unsigned 8-bit integer.
    OptU8(&'a mut Option<u8>),
    /// Optional unsigned 16-bit integer.
    OptU16(&'a mut Option<u16>),
    /// Optional unsigned 32-bit integer.
    OptU32(&'a mut Option<u32>),
    /// Optional unsigned 64-bit integer.
    OptU64(&'a mut Option<u64>),
    /// Optional 32-bit float.
    OptF32(&'a mut Option<f32>),
    /// Optional 64-bit float.
    OptF64(&'a mut Option<f64>),
    /// Optional boolean.
    OptBool(&'a mut Option<bool>),
}

/// The resolver's output: an addressable reference to exactly one field.
///
/// Only the [`FieldHandle::Slot`] form is assignable; handing a `Struct` or
/// `Slice` handle to the setter reports an unsupported destination type.
pub enum FieldHandle<'a> {
    /// A leaf scalar.
    Slot(Slot<'a>),
    /// A nested record reached without a further path segment.
    Struct(&'a mut dyn Bindable),
    /// A sequence reached without an index.
    Slice(&'a mut dyn BindableSlice),
}

impl core::fmt::Debug for FieldHandle<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Slot(_) => f.write_str("FieldHandle::Slot"),
            Self::Struct(_) => f.write_str("FieldHandle::Struct"),
            Self::Slice(_) => f.write_str("FieldHandle::Slice"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Widget {
        label: String,
    }

    impl Bindable for Widget {
        fn field_mut(&mut self, name: &str) -> Option<Field<'_>> {
            match name {
                "label" => Some(Field::Slot(Slot::Text(&mut self.label))),
                _ => None,
            }
        }
    }

    #[test]
    fn test_vec_grows_with_default_elements() {
        let mut widgets: Vec<Widget> = vec![];
        let slice: &mut dyn BindableSlice = &mut widgets;

        assert!(slice.is_empty());
        slice.grow();
        slice.grow();
        assert_eq!(slice.len(), 2);
        assert!(slice.element_mut(1).is_some());
        assert!(slice.element_mut(2).is_none());
    }

    #[test]
    fn test_field_lookup_is_exact() {
        let mut widget = Widget::default();
        assert!(widget.field_mut("label").is_some());
        assert!(widget.field_mut("Label").is_none());
        assert!(widget.field_mut("").is_none());
    }
}
