use core::any::{TypeId, type_name};
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use thiserror::Error;

use crate::hash::HashMap;
use crate::value::Value;

// -----------------------------------------------------------------------------
// ConvertError

/// The failure of a registered conversion.
///
/// Produced by conversion closures themselves, or by the registry when a
/// closure is invoked with an unexpected source type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert `{from}` into `{to}`: {reason}")]
pub struct ConvertError {
    from: &'static str,
    to: &'static str,
    reason: String,
}

impl ConvertError {
    /// Creates a conversion failure between the given type paths.
    pub fn new(from: &'static str, to: &'static str, reason: impl Into<String>) -> Self {
        ConvertError {
            from,
            to,
            reason: reason.into(),
        }
    }
}

// -----------------------------------------------------------------------------
// Registry

/// A type-erased conversion closure.
pub(crate) type ConvertFn =
    dyn Fn(&dyn Value) -> Result<Box<dyn Value>, ConvertError> + Send + Sync;

static CONVERSIONS: LazyLock<RwLock<HashMap<(TypeId, TypeId), Arc<ConvertFn>>>> =
    LazyLock::new(|| RwLock::new(HashMap::default()));

/// Registers a conversion from source type `S` to destination type `D`.
///
/// During a copy, a field pair whose declared types are exactly `(S, D)`
/// runs `convert` instead of the structural transfer; its result is
/// assigned to the destination field, and its error is recorded against the
/// field. Re-registering the same pair replaces the previous closure.
///
/// # Examples
///
/// ```
/// use remodel::{add_conversion, remove_conversion, ConvertError};
///
/// add_conversion::<u16, String>(|port| Ok(format!(":{port}")));
/// assert!(remove_conversion::<u16, String>());
/// ```
pub fn add_conversion<S: Value, D: Value>(convert: fn(&S) -> Result<D, ConvertError>) {
    let erased: Arc<ConvertFn> = Arc::new(move |value: &dyn Value| {
        let source = value.downcast_ref::<S>().ok_or_else(|| {
            ConvertError::new(
                value.type_path(),
                type_name::<D>(),
                format!("conversion registered for `{}`", type_name::<S>()),
            )
        })?;
        convert(source).map(|converted| Box::new(converted) as Box<dyn Value>)
    });
    CONVERSIONS
        .write()
        .insert((TypeId::of::<S>(), TypeId::of::<D>()), erased);
}

/// Removes the conversion registered for `(S, D)`, returning whether one
/// was present.
pub fn remove_conversion<S: Value, D: Value>() -> bool {
    CONVERSIONS
        .write()
        .remove(&(TypeId::of::<S>(), TypeId::of::<D>()))
        .is_some()
}

/// Looks up the conversion for a `(source, destination)` type pair.
pub(crate) fn conversion_for(src: TypeId, dst: TypeId) -> Option<Arc<ConvertFn>> {
    CONVERSIONS.read().get(&(src, dst)).cloned()
}
