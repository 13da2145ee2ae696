use crate::tag::Tag;

// -----------------------------------------------------------------------------
// FieldInfo

/// Compile-time metadata for a single record field.
///
/// The derive macro emits one `FieldInfo` per public field, in declaration
/// order, carrying the declared name, the raw `#[model("...")]` annotation
/// (empty when absent) and whether the field was marked
/// `#[model(embedded)]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    name: &'static str,
    tag: &'static str,
    embedded: bool,
}

impl FieldInfo {
    /// Creates the metadata for one field.
    pub const fn new(name: &'static str, tag: &'static str, embedded: bool) -> Self {
        FieldInfo {
            name,
            tag,
            embedded,
        }
    }

    /// Returns the declared field name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the raw annotation string.
    #[inline]
    pub fn raw_tag(&self) -> &'static str {
        self.tag
    }

    /// Parses the annotation.
    #[inline]
    pub fn tag(&self) -> Tag<'static> {
        Tag::parse(self.tag)
    }

    /// Returns `true` when the field was marked `#[model(embedded)]`.
    #[inline]
    pub fn embedded(&self) -> bool {
        self.embedded
    }

    /// Returns `true` unless the annotation excludes the field from
    /// processing.
    #[inline]
    pub fn visible(&self) -> bool {
        !self.tag().is_omit_field()
    }

    /// Returns the effective name: the annotation's alternate name when
    /// present, the declared name otherwise.
    #[inline]
    pub fn effective_name(&self) -> &'static str {
        self.tag().name().unwrap_or(self.name)
    }
}
