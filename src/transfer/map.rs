use crate::ops::{Record, ValueRef};
use crate::registry::is_no_traverse_type;
use crate::value::{Value, as_record};
use crate::zero::{no_traverse_for, record_is_zero};

/// The flattened form of a record: effective field names mapped to values.
///
/// A `FieldMap` is itself a [`Value`] of kind
/// [`Assoc`](crate::Kind::Assoc), so nested records appear as nested
/// `FieldMap`s inside it.
pub type FieldMap = crate::hash::HashMap<String, Box<dyn Value>>;

// -----------------------------------------------------------------------------
// Map

/// Flattens `src` into a [`FieldMap`].
///
/// Keys are each visible field's tag name override, or its declared name.
/// Embedded record fields splice their own keys into the parent mapping;
/// other nested records become nested `FieldMap`s; sequences of records
/// become sequences of `FieldMap`s; associative containers are re-keyed by
/// each key's [`key_string`](Value::key_string). A zero field appears with
/// its zero value unless annotated `omitempty`, in which case its key is
/// absent. No-traverse record values are carried as one literal unit.
///
/// # Examples
///
/// ```
/// use remodel::{Model, field_map};
///
/// #[derive(Model)]
/// struct Login {
///     #[model("username")]
///     pub user: String,
///     #[model(",omitempty")]
///     pub otp: u32,
/// }
///
/// let map = field_map(&Login { user: "jeeva".into(), otp: 0 });
/// assert!(map.contains_key("username"));
/// assert!(!map.contains_key("otp"));
/// ```
pub fn field_map(src: &dyn Record) -> FieldMap {
    let mut out = FieldMap::default();
    map_record_fields(src, &mut out);
    out
}

fn map_record_fields(record: &dyn Record, out: &mut FieldMap) {
    for (info, value) in record.iter_fields() {
        if !info.visible() {
            continue;
        }
        let tag = info.tag();
        let key = info.effective_name();
        let no_traverse = no_traverse_for(value, tag);

        let nested = as_record(value);
        let zero = match nested {
            Some(nested) if !no_traverse => record_is_zero(nested),
            _ => value.is_zero_value(),
        };
        if zero {
            if !tag.is_omit_empty() {
                out.insert(key.to_string(), value.make_zero());
            }
            continue;
        }

        if let Some(nested) = nested {
            if no_traverse {
                out.insert(key.to_string(), value.clone_literal());
            } else if info.embedded() {
                map_record_fields(nested, out);
            } else {
                out.insert(key.to_string(), Box::new(field_map(nested)));
            }
            continue;
        }

        out.insert(key.to_string(), map_value(value));
    }
}

// -----------------------------------------------------------------------------
// Value mapping

/// Maps one non-record field value into its flattened form.
fn map_value(value: &dyn Value) -> Box<dyn Value> {
    match value.value_ref() {
        ValueRef::Dynamic(inner) => map_value(inner),
        ValueRef::Optional(optional) => match optional.inner() {
            Some(inner) => map_value(inner),
            None => value.clone_literal(),
        },
        ValueRef::Record(record) => {
            if is_no_traverse_type(record.ty_id()) {
                value.clone_literal()
            } else {
                Box::new(field_map(record))
            }
        }
        ValueRef::Assoc(assoc) => {
            let mut mapped = FieldMap::default();
            for (entry_key, entry_value) in assoc.iter_entries() {
                mapped.insert(entry_key.key_string(), map_value(entry_value));
            }
            Box::new(mapped)
        }
        ValueRef::Seq(seq) => {
            let mapped: Vec<Box<dyn Value>> = seq.iter_elems().map(map_value).collect();
            Box::new(mapped)
        }
        ValueRef::Bytes(value) | ValueRef::Scalar(value) => value.clone_literal(),
    }
}
