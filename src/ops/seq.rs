use core::any::TypeId;

use crate::value::Value;

// -----------------------------------------------------------------------------
// Seq

/// A capability trait for ordered element sequences.
///
/// Implemented for `Vec<T>` and `[T; N]`. Byte payloads (`Vec<u8>`,
/// `[u8; N]`) are deliberately *not* sequences; they report
/// [`Kind::Bytes`](crate::Kind::Bytes) and are handled as atomic terminals.
pub trait Seq: Value {
    /// Returns a reference to the element at `index`.
    fn elem(&self, index: usize) -> Option<&dyn Value>;

    /// Returns the number of elements.
    fn elem_len(&self) -> usize;

    /// Builds a fresh sequence of the same concrete type by running `f`
    /// over every element.
    ///
    /// If `f` produces a value of the wrong type for an element, that
    /// element is reproduced by a literal clone instead.
    fn rebuild_with(
        &self,
        f: &mut dyn FnMut(&dyn Value) -> Box<dyn Value>,
    ) -> Box<dyn Value>;

    /// Builds a fresh sequence of this concrete type out of `src`'s
    /// elements, running `convert` over each with this sequence's element
    /// type as the target.
    ///
    /// Returns `None` when any element fails to convert, or when the
    /// shapes are incompatible (a fixed-size array and a source of a
    /// different length).
    fn rebuild_from(
        &self,
        src: &dyn Seq,
        convert: &mut dyn FnMut(&dyn Value, TypeId) -> Option<Box<dyn Value>>,
    ) -> Option<Box<dyn Value>>;
}

impl dyn Seq {
    /// Iterates over the elements.
    #[inline]
    pub fn iter_elems(&self) -> SeqIter<'_> {
        SeqIter {
            seq: self,
            index: 0,
        }
    }
}

// -----------------------------------------------------------------------------
// SeqIter

/// An iterator over a sequence's elements.
pub struct SeqIter<'a> {
    seq: &'a dyn Seq,
    index: usize,
}

impl<'a> Iterator for SeqIter<'a> {
    type Item = &'a dyn Value;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.seq.elem(self.index)?;
        self.index += 1;
        Some(elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.elem_len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SeqIter<'_> {}
