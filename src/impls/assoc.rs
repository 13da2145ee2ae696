use core::any::TypeId;
use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeMap, HashMap};

use crate::__macro_exports::concrete;
use crate::ops::Assoc;
use crate::value::{Value, impl_value_cast_fn};

// -----------------------------------------------------------------------------
// HashMap

impl<K, V, S> Value for HashMap<K, V, S>
where
    K: Value + Eq + Hash,
    V: Value,
    S: BuildHasher + Default + Send + Sync + 'static,
{
    impl_value_cast_fn!(Assoc);

    fn clone_literal(&self) -> Box<dyn Value> {
        let cloned: HashMap<K, V, S> = self
            .iter()
            .map(|(key, value)| {
                (
                    concrete::<K>(key.clone_literal()),
                    concrete::<V>(value.clone_literal()),
                )
            })
            .collect();
        Box::new(cloned)
    }

    fn make_zero(&self) -> Box<dyn Value> {
        Box::new(HashMap::<K, V, S>::default())
    }

    #[inline]
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Assoc for HashMap<K, V, S>
where
    K: Value + Eq + Hash,
    V: Value,
    S: BuildHasher + Default + Send + Sync + 'static,
{
    fn entry_at(&self, index: usize) -> Option<(&dyn Value, &dyn Value)> {
        self.iter()
            .nth(index)
            .map(|(key, value)| (key as &dyn Value, value as &dyn Value))
    }

    #[inline]
    fn entry_len(&self) -> usize {
        self.len()
    }

    fn rebuild_with(&self, f: &mut dyn FnMut(&dyn Value) -> Box<dyn Value>) -> Box<dyn Value> {
        let mut out = HashMap::<K, V, S>::default();
        for (key, value) in self {
            let mapped = match f(value).take::<V>() {
                Ok(mapped) => mapped,
                Err(_) => concrete::<V>(value.clone_literal()),
            };
            out.insert(concrete::<K>(key.clone_literal()), mapped);
        }
        Box::new(out)
    }

    fn rebuild_from(
        &self,
        src: &dyn Assoc,
        convert: &mut dyn FnMut(&dyn Value, TypeId) -> Option<Box<dyn Value>>,
    ) -> Option<Box<dyn Value>> {
        let mut out = HashMap::<K, V, S>::default();
        for (key, value) in src.iter_entries() {
            let key = key.clone_literal().take::<K>().ok()?;
            let value = convert(value, TypeId::of::<V>())?.take::<V>().ok()?;
            out.insert(key, value);
        }
        Some(Box::new(out))
    }
}

// -----------------------------------------------------------------------------
// BTreeMap

impl<K, V> Value for BTreeMap<K, V>
where
    K: Value + Ord,
    V: Value,
{
    impl_value_cast_fn!(Assoc);

    fn clone_literal(&self) -> Box<dyn Value> {
        let cloned: BTreeMap<K, V> = self
            .iter()
            .map(|(key, value)| {
                (
                    concrete::<K>(key.clone_literal()),
                    concrete::<V>(value.clone_literal()),
                )
            })
            .collect();
        Box::new(cloned)
    }

    fn make_zero(&self) -> Box<dyn Value> {
        Box::new(BTreeMap::<K, V>::new())
    }

    #[inline]
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Assoc for BTreeMap<K, V>
where
    K: Value + Ord,
    V: Value,
{
    fn entry_at(&self, index: usize) -> Option<(&dyn Value, &dyn Value)> {
        self.iter()
            .nth(index)
            .map(|(key, value)| (key as &dyn Value, value as &dyn Value))
    }

    #[inline]
    fn entry_len(&self) -> usize {
        self.len()
    }

    fn rebuild_with(&self, f: &mut dyn FnMut(&dyn Value) -> Box<dyn Value>) -> Box<dyn Value> {
        let mut out = BTreeMap::<K, V>::new();
        for (key, value) in self {
            let mapped = match f(value).take::<V>() {
                Ok(mapped) => mapped,
                Err(_) => concrete::<V>(value.clone_literal()),
            };
            out.insert(concrete::<K>(key.clone_literal()), mapped);
        }
        Box::new(out)
    }

    fn rebuild_from(
        &self,
        src: &dyn Assoc,
        convert: &mut dyn FnMut(&dyn Value, TypeId) -> Option<Box<dyn Value>>,
    ) -> Option<Box<dyn Value>> {
        let mut out = BTreeMap::<K, V>::new();
        for (key, value) in src.iter_entries() {
            let key = key.clone_literal().take::<K>().ok()?;
            let value = convert(value, TypeId::of::<V>())?.take::<V>().ok()?;
            out.insert(key, value);
        }
        Some(Box::new(out))
    }
}
