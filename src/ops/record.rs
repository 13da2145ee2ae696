use crate::info::FieldInfo;
use crate::value::Value;

// -----------------------------------------------------------------------------
// Record

/// A capability trait for named aggregates of typed fields.
///
/// Implemented by [`#[derive(Model)]`](crate::Model) for structs with named
/// fields. Only public fields participate: private fields are invisible to
/// every accessor here, though they still take part in whole-value
/// operations such as [`Value::clone_literal`].
pub trait Record: Value {
    /// Returns a reference to the field named `name`, or `None` if no such
    /// public field exists.
    fn field(&self, name: &str) -> Option<&dyn Value>;

    /// Returns a mutable reference to the field named `name`, or `None` if
    /// no such public field exists.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Value>;

    /// Returns a reference to the field at declaration position `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Value>;

    /// Returns the number of public fields.
    fn field_len(&self) -> usize;

    /// Returns the compile-time metadata for every public field, in
    /// declaration order.
    fn field_info(&self) -> &'static [FieldInfo];

    /// Returns the declared name of the field at position `index`.
    fn name_at(&self, index: usize) -> Option<&'static str> {
        self.field_info().get(index).map(FieldInfo::name)
    }
}

impl dyn Record {
    /// Returns the field named `name` downcast to `T`.
    ///
    /// Returns `None` when the field is missing or of a different type.
    #[inline]
    pub fn field_as<T: 'static>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Value>::downcast_ref)
    }

    /// Returns the field named `name` downcast mutably to `T`.
    #[inline]
    pub fn field_mut_as<T: 'static>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name).and_then(<dyn Value>::downcast_mut)
    }

    /// Iterates over the public fields as `(metadata, value)` pairs.
    #[inline]
    pub fn iter_fields(&self) -> RecordFieldIter<'_> {
        RecordFieldIter {
            record: self,
            index: 0,
        }
    }
}

// -----------------------------------------------------------------------------
// RecordFieldIter

/// An iterator over a record's public fields, yielding each field's
/// metadata alongside its value.
pub struct RecordFieldIter<'a> {
    record: &'a dyn Record,
    index: usize,
}

impl<'a> Iterator for RecordFieldIter<'a> {
    type Item = (&'static FieldInfo, &'a dyn Value);

    fn next(&mut self) -> Option<Self::Item> {
        let info = self.record.field_info().get(self.index)?;
        let value = self.record.field_at(self.index)?;
        self.index += 1;
        Some((info, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.record.field_len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordFieldIter<'_> {}
