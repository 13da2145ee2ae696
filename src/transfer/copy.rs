use core::any::TypeId;

use crate::ops::{Record, ValueMut, ValueRef};
use crate::registry::{conversion_for, is_no_traverse_type};
use crate::transfer::TransferError;
use crate::value::{Kind, Value, as_record};
use crate::zero::{no_traverse_for, record_is_zero, resolve};

// -----------------------------------------------------------------------------
// Copy / Clone

/// Deep-copies every visible field of `src` into `dst`.
///
/// Destination fields are matched by declared name. Per field: a zero
/// source value writes the destination's own zero, unless the field is
/// annotated `omitempty`, in which case the destination keeps its prior
/// value. A non-zero source value must find a destination field of the
/// same kind and concrete type (dynamic destination slots accept
/// anything), passing through a registered conversion first when one
/// matches the type pair. A sequence or map field of a different element
/// type copies element-wise when the element type pair has a conversion.
/// Nested records are rebuilt from scratch, not merged.
///
/// Field failures are accumulated, never fatal: every copyable field is
/// copied even when others fail. An entirely zero source is rejected up
/// front.
///
/// # Examples
///
/// ```
/// use remodel::{Model, copy};
///
/// #[derive(Model)]
/// struct Guest {
///     pub name: String,
/// }
///
/// #[derive(Model, Default)]
/// struct Account {
///     pub name: String,
/// }
///
/// let guest = Guest { name: "jeeva".into() };
/// let mut account = Account::default();
/// copy(&mut account, &guest).unwrap();
/// assert_eq!(account.name, "jeeva");
/// ```
pub fn copy(dst: &mut dyn Record, src: &dyn Record) -> Result<(), Vec<TransferError>> {
    if record_is_zero(src) {
        return Err(vec![TransferError::EmptySource]);
    }
    let mut errors = Vec::new();
    copy_record_fields(dst, src, &mut errors);
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Builds a fresh record of `src`'s type and deep-copies `src` into it.
///
/// Field rules are those of [`copy`], applied against a zero destination.
pub fn clone_record(src: &dyn Record) -> Result<Box<dyn Value>, Vec<TransferError>> {
    if record_is_zero(src) {
        return Err(vec![TransferError::EmptySource]);
    }
    let mut errors = Vec::new();
    let mut fresh = src.make_zero();
    // Dispatch through the payload: `fresh` is a box, and the slot impl
    // would answer `Dynamic` for the box itself.
    if let ValueMut::Record(fresh_record) = fresh.as_mut().value_mut() {
        copy_record_fields(fresh_record, src, &mut errors);
    }
    if errors.is_empty() { Ok(fresh) } else { Err(errors) }
}

// -----------------------------------------------------------------------------
// Field walk

pub(crate) fn copy_record_fields(
    dst: &mut dyn Record,
    src: &dyn Record,
    errors: &mut Vec<TransferError>,
) {
    for (info, sfv) in src.iter_fields() {
        if !info.visible() {
            continue;
        }
        let field = info.name();
        let tag = info.tag();
        let no_traverse = no_traverse_for(sfv, tag);

        // Traversable record fields answer the zero question over their
        // visible fields; everything else compares literally.
        let zero = match as_record(sfv) {
            Some(nested) if !no_traverse => record_is_zero(nested),
            _ => sfv.is_zero_value(),
        };
        if zero {
            // Zero source: write the destination's zero, or keep the
            // destination value under `omitempty`. No validation here.
            if !tag.is_omit_empty()
                && let Some(dfv) = dst.field_mut(field)
            {
                let zeroed = dfv.make_zero();
                let _ = dfv.set_boxed(zeroed);
            }
            continue;
        }

        let Some(dfv) = dst.field_mut(field) else {
            errors.push(TransferError::FieldNotFound { field });
            continue;
        };

        if let Some(convert) = conversion_for(sfv.ty_id(), dfv.ty_id()) {
            match convert(resolve_dynamic(sfv)) {
                Ok(converted) => {
                    if let Err(rejected) = dfv.set_boxed(converted) {
                        errors.push(TransferError::TypeMismatch {
                            field,
                            from: rejected.type_path(),
                            to: dfv.type_path(),
                        });
                    }
                }
                Err(source) => errors.push(TransferError::Conversion { field, source }),
            }
            continue;
        }

        if dfv.value_kind() != Kind::Dynamic {
            if sfv.value_kind() != dfv.value_kind() {
                errors.push(TransferError::KindMismatch {
                    field,
                    from: sfv.value_kind(),
                    to: dfv.value_kind(),
                });
                continue;
            }
            if sfv.ty_id() != dfv.ty_id() {
                // Same-kind containers of different element types still
                // copy when the element type pair has a conversion.
                match convert_elements(sfv, &*dfv, field) {
                    Some(Ok(converted)) => {
                        if let Err(rejected) = dfv.set_boxed(converted) {
                            errors.push(TransferError::TypeMismatch {
                                field,
                                from: rejected.type_path(),
                                to: dfv.type_path(),
                            });
                        }
                    }
                    Some(Err(error)) => errors.push(error),
                    None => errors.push(TransferError::TypeMismatch {
                        field,
                        from: sfv.type_path(),
                        to: dfv.type_path(),
                    }),
                }
                continue;
            }
        }

        let copied = copy_field_value(sfv, no_traverse, errors);
        if let Err(rejected) = dfv.set_boxed(copied) {
            errors.push(TransferError::TypeMismatch {
                field,
                from: rejected.type_path(),
                to: dfv.type_path(),
            });
        }
    }
}

// -----------------------------------------------------------------------------
// Value transfer

/// Produces the value to assign into a destination field.
///
/// Records are rebuilt into a fresh zero value with nested errors
/// propagated; containers rebuild element-wise with nested errors dropped;
/// optionals re-wrap a transferred pointee; byte payloads, scalars and
/// no-traverse values are cloned as one literal unit.
pub(crate) fn copy_field_value(
    value: &dyn Value,
    no_traverse: bool,
    errors: &mut Vec<TransferError>,
) -> Box<dyn Value> {
    if no_traverse {
        return value.clone_literal();
    }
    match value.value_ref() {
        ValueRef::Record(record) => {
            let mut fresh = record.make_zero();
            if let ValueMut::Record(fresh_record) = fresh.as_mut().value_mut() {
                copy_record_fields(fresh_record, record, errors);
            }
            fresh
        }
        ValueRef::Optional(optional) => {
            optional.rebuild_with(&mut |inner| copy_field_value(inner, false, errors))
        }
        ValueRef::Dynamic(inner) => copy_field_value(inner, false, errors),
        ValueRef::Seq(seq) => seq.rebuild_with(&mut element_transfer),
        ValueRef::Assoc(assoc) => assoc.rebuild_with(&mut element_transfer),
        ValueRef::Bytes(value) | ValueRef::Scalar(value) => value.clone_literal(),
    }
}

/// Rebuilds a container field through a conversion registered for its
/// element type pair, `Vec<S>` into `Vec<D>` via `(S, D)` and likewise for
/// maps. Returns `None` when no element conversion applies.
fn convert_elements(
    src: &dyn Value,
    dst: &dyn Value,
    field: &'static str,
) -> Option<Result<Box<dyn Value>, TransferError>> {
    let mut failure = None;
    let mut per_elem = |elem: &dyn Value, target: TypeId| {
        let convert = conversion_for(elem.ty_id(), target)?;
        match convert(elem) {
            Ok(converted) => Some(converted),
            Err(source) => {
                failure = Some(TransferError::Conversion { field, source });
                None
            }
        }
    };
    let rebuilt = match (src.value_ref(), dst.value_ref()) {
        (ValueRef::Seq(src), ValueRef::Seq(dst)) => dst.rebuild_from(src, &mut per_elem),
        (ValueRef::Assoc(src), ValueRef::Assoc(dst)) => dst.rebuild_from(src, &mut per_elem),
        _ => return None,
    };
    match rebuilt {
        Some(converted) => Some(Ok(converted)),
        None => failure.map(Err),
    }
}

/// Transfers one container element. Only the registry decides no-traverse
/// here, and nested record errors are not surfaced.
fn element_transfer(elem: &dyn Value) -> Box<dyn Value> {
    let no_traverse = is_no_traverse_type(resolve(elem).ty_id());
    let mut dropped = Vec::new();
    copy_field_value(elem, no_traverse, &mut dropped)
}

/// Resolves through dynamic slots only, leaving optionals intact.
fn resolve_dynamic(value: &dyn Value) -> &dyn Value {
    match value.value_ref() {
        ValueRef::Dynamic(inner) => resolve_dynamic(inner),
        _ => value,
    }
}
