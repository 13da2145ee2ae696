//! Parsing of `#[model("...")]` field annotations.

/// Option keyword: skip the field when its source value is zero.
pub const OMIT_EMPTY: &str = "omitempty";

/// Option keyword: treat the field's record value as an opaque unit.
pub const NO_TRAVERSE: &str = "notraverse";

/// Name marker: exclude the field from processing entirely.
pub const OMIT_FIELD: &str = "-";

// -----------------------------------------------------------------------------
// Tag

/// A parsed field annotation of the form `name,opt1,opt2,...`.
///
/// The first comma-separated segment is the field's alternate name; every
/// following segment is an option keyword. Both parts may be empty: an empty
/// name falls back to the declared field name, and unknown options are
/// carried but ignored.
///
/// # Examples
///
/// ```
/// use remodel::Tag;
///
/// let tag = Tag::parse("nickname,omitempty");
/// assert_eq!(tag.name(), Some("nickname"));
/// assert!(tag.is_omit_empty());
/// assert!(!tag.is_no_traverse());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag<'a> {
    name: &'a str,
    options: &'a str,
}

impl<'a> Tag<'a> {
    /// Parses a raw annotation string.
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(',') {
            Some((name, options)) => Tag { name, options },
            None => Tag {
                name: raw,
                options: "",
            },
        }
    }

    /// Returns the alternate name, or `None` when the tag does not supply
    /// one.
    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        if self.name.is_empty() || self.name == OMIT_FIELD {
            None
        } else {
            Some(self.name)
        }
    }

    /// Returns the raw option segment following the name.
    #[inline]
    pub fn options(&self) -> &'a str {
        self.options
    }

    /// Returns `true` when the field is excluded from processing entirely.
    ///
    /// Only the whole annotation being exactly `-` omits; `-` followed by
    /// options does not.
    #[inline]
    pub fn is_omit_field(&self) -> bool {
        self.name == OMIT_FIELD && self.options.is_empty()
    }

    /// Returns `true` when a zero source value should be skipped.
    #[inline]
    pub fn is_omit_empty(&self) -> bool {
        self.options.contains(OMIT_EMPTY)
    }

    /// Returns `true` when the field value is handled as an opaque unit.
    #[inline]
    pub fn is_no_traverse(&self) -> bool {
        self.options.contains(NO_TRAVERSE)
    }
}

// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tag_has_no_name_or_options() {
        let tag = Tag::parse("");
        assert_eq!(tag.name(), None);
        assert_eq!(tag.options(), "");
        assert!(!tag.is_omit_field());
        assert!(!tag.is_omit_empty());
        assert!(!tag.is_no_traverse());
    }

    #[test]
    fn name_only() {
        let tag = Tag::parse("renamed");
        assert_eq!(tag.name(), Some("renamed"));
        assert!(!tag.is_omit_empty());
    }

    #[test]
    fn name_with_options() {
        let tag = Tag::parse("renamed,omitempty,notraverse");
        assert_eq!(tag.name(), Some("renamed"));
        assert_eq!(tag.options(), "omitempty,notraverse");
        assert!(tag.is_omit_empty());
        assert!(tag.is_no_traverse());
    }

    #[test]
    fn options_without_name() {
        let tag = Tag::parse(",notraverse");
        assert_eq!(tag.name(), None);
        assert!(tag.is_no_traverse());
        assert!(!tag.is_omit_empty());
    }

    #[test]
    fn omit_field_marker() {
        assert!(Tag::parse("-").is_omit_field());
        assert!(!Tag::parse("-x").is_omit_field());
        assert!(!Tag::parse("-,omitempty").is_omit_field());
        assert_eq!(Tag::parse("-").name(), None);
    }
}
