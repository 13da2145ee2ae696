use core::any::TypeId;
use std::sync::LazyLock;
use std::time::{Duration, SystemTime};

use parking_lot::RwLock;

use crate::hash::HashSet;
use crate::value::Value;

static NO_TRAVERSE: LazyLock<RwLock<HashSet<TypeId>>> = LazyLock::new(|| {
    let mut seeded = HashSet::default();
    seeded.insert(TypeId::of::<SystemTime>());
    seeded.insert(TypeId::of::<Duration>());
    RwLock::new(seeded)
});

/// Registers `T` as opaque: the engine copies, clones and zero-checks values
/// of `T` as one literal unit instead of walking their fields.
///
/// The registry is process-wide and pre-seeded with
/// [`SystemTime`] and [`Duration`].
///
/// # Examples
///
/// ```
/// use remodel::{Model, add_no_traverse_type, remove_no_traverse_type};
///
/// #[derive(Model)]
/// struct Fingerprint {
///     pub bits: u64,
/// }
///
/// add_no_traverse_type::<Fingerprint>();
/// assert!(remove_no_traverse_type::<Fingerprint>());
/// assert!(!remove_no_traverse_type::<Fingerprint>());
/// ```
pub fn add_no_traverse_type<T: Value>() {
    NO_TRAVERSE.write().insert(TypeId::of::<T>());
}

/// Removes `T` from the opaque-type registry, returning whether it was
/// registered.
pub fn remove_no_traverse_type<T: Value>() -> bool {
    NO_TRAVERSE.write().remove(&TypeId::of::<T>())
}

/// Checks a concrete type id against the registry.
#[inline]
pub(crate) fn is_no_traverse_type(id: TypeId) -> bool {
    NO_TRAVERSE.read().contains(&id)
}
