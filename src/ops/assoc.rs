use core::any::TypeId;

use crate::value::Value;

// -----------------------------------------------------------------------------
// Assoc

/// A capability trait for associative key/value containers.
///
/// Implemented for `HashMap<K, V, S>` and `BTreeMap<K, V>`. Entry order is
/// whatever the underlying container yields; callers must not rely on it
/// for hash maps.
pub trait Assoc: Value {
    /// Returns the entry at iteration position `index`.
    ///
    /// Positional access exists for the iterator; it is linear for hash
    /// maps.
    fn entry_at(&self, index: usize) -> Option<(&dyn Value, &dyn Value)>;

    /// Returns the number of entries.
    fn entry_len(&self) -> usize;

    /// Builds a fresh container of the same concrete type, cloning every
    /// key literally and running `f` over every value.
    ///
    /// If `f` produces a value of the wrong type for an entry, that entry's
    /// value is reproduced by a literal clone instead.
    fn rebuild_with(
        &self,
        f: &mut dyn FnMut(&dyn Value) -> Box<dyn Value>,
    ) -> Box<dyn Value>;

    /// Builds a fresh container of this concrete type out of `src`'s
    /// entries, cloning every key literally and running `convert` over
    /// every value with this container's value type as the target.
    ///
    /// Returns `None` when any key or converted value does not fit this
    /// container's types.
    fn rebuild_from(
        &self,
        src: &dyn Assoc,
        convert: &mut dyn FnMut(&dyn Value, TypeId) -> Option<Box<dyn Value>>,
    ) -> Option<Box<dyn Value>>;
}

impl dyn Assoc {
    /// Iterates over the entries as `(key, value)` pairs.
    #[inline]
    pub fn iter_entries(&self) -> AssocIter<'_> {
        AssocIter {
            assoc: self,
            index: 0,
        }
    }
}

// -----------------------------------------------------------------------------
// AssocIter

/// An iterator over an associative container's entries.
pub struct AssocIter<'a> {
    assoc: &'a dyn Assoc,
    index: usize,
}

impl<'a> Iterator for AssocIter<'a> {
    type Item = (&'a dyn Value, &'a dyn Value);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.assoc.entry_at(self.index)?;
        self.index += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.assoc.entry_len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AssocIter<'_> {}
