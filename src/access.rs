//! Field introspection and by-name access.

use thiserror::Error;

use crate::info::FieldInfo;
use crate::ops::Record;
use crate::value::{Kind, Value};

// -----------------------------------------------------------------------------
// AccessError

/// The failure of a single by-name access operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// No public field with the given name.
    #[error("no accessible field `{field}`")]
    UnknownField { field: String },

    /// The incoming value's shape does not match the field's.
    #[error("field `{field}`: cannot assign {from} into {to}")]
    KindMismatch {
        field: String,
        from: Kind,
        to: Kind,
    },

    /// The incoming value's concrete type does not match the field's.
    #[error("field `{field}`: cannot assign `{from}` into `{to}`")]
    TypeMismatch {
        field: String,
        from: &'static str,
        to: &'static str,
    },
}

// -----------------------------------------------------------------------------
// Introspection

/// Returns the metadata of every visible field, in declaration order.
pub fn fields(record: &dyn Record) -> Vec<&'static FieldInfo> {
    record
        .field_info()
        .iter()
        .filter(|info| info.visible())
        .collect()
}

/// Returns the raw annotation string of the named visible field.
pub fn tag(record: &dyn Record, name: &str) -> Result<&'static str, AccessError> {
    record
        .field_info()
        .iter()
        .find(|info| info.visible() && info.name() == name)
        .map(FieldInfo::raw_tag)
        .ok_or_else(|| AccessError::UnknownField {
            field: name.to_string(),
        })
}

/// Returns every visible field's raw annotation string, keyed by declared
/// field name.
pub fn tags(record: &dyn Record) -> crate::hash::HashMap<&'static str, &'static str> {
    record
        .field_info()
        .iter()
        .filter(|info| info.visible())
        .map(|info| (info.name(), info.raw_tag()))
        .collect()
}

/// Returns the structural kind of the named visible field's current value.
pub fn field_kind(record: &dyn Record, name: &str) -> Result<Kind, AccessError> {
    record
        .iter_fields()
        .find(|(info, _)| info.visible() && info.name() == name)
        .map(|(_, value)| value.value_kind())
        .ok_or_else(|| AccessError::UnknownField {
            field: name.to_string(),
        })
}

// -----------------------------------------------------------------------------
// Get / Set

/// Reads the named field.
///
/// Access is physical: any public field is readable, annotations
/// (including omit-entirely) notwithstanding.
pub fn get_field<'r>(record: &'r dyn Record, name: &str) -> Result<&'r dyn Value, AccessError> {
    record.field(name).ok_or_else(|| AccessError::UnknownField {
        field: name.to_string(),
    })
}

/// Writes the named field.
///
/// Access is physical, like [`get_field`]. The incoming value must match
/// the field's kind and concrete type exactly; a dynamic slot accepts any
/// payload. On error the record is untouched.
///
/// # Examples
///
/// ```
/// use remodel::{Model, get_field, set_field};
///
/// #[derive(Model, Default)]
/// struct Profile {
///     pub handle: String,
/// }
///
/// let mut profile = Profile::default();
/// set_field(&mut profile, "handle", Box::new(String::from("jeeva"))).unwrap();
/// assert!(get_field(&profile, "handle").unwrap().is::<String>());
/// assert_eq!(profile.handle, "jeeva");
/// ```
pub fn set_field(
    record: &mut dyn Record,
    name: &str,
    value: Box<dyn Value>,
) -> Result<(), AccessError> {
    let Some(field) = record.field_mut(name) else {
        return Err(AccessError::UnknownField {
            field: name.to_string(),
        });
    };
    let incoming = &*value;
    if field.value_kind() != Kind::Dynamic {
        if incoming.value_kind() != field.value_kind() {
            return Err(AccessError::KindMismatch {
                field: name.to_string(),
                from: incoming.value_kind(),
                to: field.value_kind(),
            });
        }
        if incoming.ty_id() != field.ty_id() {
            return Err(AccessError::TypeMismatch {
                field: name.to_string(),
                from: incoming.type_path(),
                to: field.type_path(),
            });
        }
    }
    if let Err(rejected) = field.set_boxed(value) {
        return Err(AccessError::TypeMismatch {
            field: name.to_string(),
            from: rejected.type_path(),
            to: field.type_path(),
        });
    }
    Ok(())
}
