//! Zero-value detection over records.

use crate::ops::{Record, ValueRef};
use crate::registry::is_no_traverse_type;
use crate::tag::Tag;
use crate::value::{Value, as_record};

/// Resolves a value through dynamic slots and present optionals to the
/// value that drives traversal decisions.
pub(crate) fn resolve(value: &dyn Value) -> &dyn Value {
    match value.value_ref() {
        ValueRef::Dynamic(inner) => resolve(inner),
        ValueRef::Optional(optional) => optional.inner().map_or(value, resolve),
        _ => value,
    }
}

/// Combines the two no-traverse sources for a field: its annotation and the
/// process-wide registry.
pub(crate) fn no_traverse_for(value: &dyn Value, tag: Tag<'_>) -> bool {
    tag.is_no_traverse() || is_no_traverse_type(resolve(value).ty_id())
}

// -----------------------------------------------------------------------------
// IsZero

/// Reports whether every visible field of `value` is zero.
///
/// `value` is resolved through dynamic slots and optionals first; an absent
/// optional is zero, and anything that does not resolve to a record is not.
/// Nested records recurse over their own visible fields, except where a
/// `notraverse` annotation or the registry demands a literal comparison.
///
/// # Examples
///
/// ```
/// use remodel::{Model, is_zero};
///
/// #[derive(Model, Default)]
/// struct Session {
///     pub user: String,
///     pub hits: u32,
/// }
///
/// assert!(is_zero(&Session::default()));
/// assert!(!is_zero(&Session { user: "jeeva".into(), hits: 0 }));
/// ```
pub fn is_zero(value: &dyn Value) -> bool {
    match value.value_ref() {
        ValueRef::Dynamic(inner) => is_zero(inner),
        ValueRef::Optional(optional) => match optional.inner() {
            Some(inner) => is_zero(inner),
            None => true,
        },
        ValueRef::Record(record) => record_is_zero(record),
        _ => false,
    }
}

pub(crate) fn record_is_zero(record: &dyn Record) -> bool {
    for (info, value) in record.iter_fields() {
        if !info.visible() {
            continue;
        }
        if no_traverse_for(value, info.tag()) {
            if !value.is_zero_value() {
                return false;
            }
        } else if let Some(nested) = as_record(value) {
            if !record_is_zero(nested) {
                return false;
            }
        } else if !value.is_zero_value() {
            return false;
        }
    }
    true
}

// -----------------------------------------------------------------------------
// HasZero

/// Reports whether any visible field of `value` is zero.
///
/// The dual of [`is_zero`]: resolution and traversal rules are identical,
/// and a record with no visible fields has no zero field.
pub fn has_zero(value: &dyn Value) -> bool {
    match value.value_ref() {
        ValueRef::Dynamic(inner) => has_zero(inner),
        ValueRef::Optional(optional) => match optional.inner() {
            Some(inner) => has_zero(inner),
            None => true,
        },
        ValueRef::Record(record) => record_has_zero(record),
        _ => false,
    }
}

pub(crate) fn record_has_zero(record: &dyn Record) -> bool {
    for (info, value) in record.iter_fields() {
        if !info.visible() {
            continue;
        }
        if no_traverse_for(value, info.tag()) {
            if value.is_zero_value() {
                return true;
            }
        } else if let Some(nested) = as_record(value) {
            if record_has_zero(nested) {
                return true;
            }
        } else if value.is_zero_value() {
            return true;
        }
    }
    false
}

// -----------------------------------------------------------------------------
// IsZeroInFields

/// Returns the first of the named fields whose value is literally zero.
///
/// Lookup is by declared field name over the record's visible fields;
/// names that match nothing, or that name an annotation-omitted field, are
/// skipped. Each named field is compared as one literal unit, without
/// traversal. Returns `None` when no named field is zero, including when
/// `names` is empty.
///
/// # Examples
///
/// ```
/// use remodel::{Model, is_zero_in_fields};
///
/// #[derive(Model)]
/// struct Signup {
///     pub email: String,
///     pub referrer: String,
/// }
///
/// let signup = Signup { email: "a@b.c".into(), referrer: String::new() };
/// assert_eq!(is_zero_in_fields(&signup, &["email", "referrer"]), Some("referrer"));
/// assert_eq!(is_zero_in_fields(&signup, &["email"]), None);
/// ```
pub fn is_zero_in_fields<'n>(record: &dyn Record, names: &[&'n str]) -> Option<&'n str> {
    names.iter().copied().find(|name| {
        record.iter_fields().any(|(info, value)| {
            info.visible() && info.name() == *name && value.is_zero_value()
        })
    })
}
