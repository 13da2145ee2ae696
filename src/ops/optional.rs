use crate::value::Value;

// -----------------------------------------------------------------------------
// Optional

/// A capability trait for values that may be absent.
///
/// Implemented for `Option<T>`. An absent value is zero by definition; a
/// present one defers to its payload for traversal.
pub trait Optional: Value {
    /// Returns the payload when present.
    fn inner(&self) -> Option<&dyn Value>;

    /// Builds a fresh optional of the same concrete type: absent stays
    /// absent, present runs `f` over the payload.
    ///
    /// If `f` produces a value of the wrong type, the payload is reproduced
    /// by a literal clone instead.
    fn rebuild_with(
        &self,
        f: &mut dyn FnMut(&dyn Value) -> Box<dyn Value>,
    ) -> Box<dyn Value>;
}
