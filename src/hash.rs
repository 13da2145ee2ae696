//! Hashing primitives used across the crate.

/// A [`HashMap`][std::collections::HashMap] with a faster, non-cryptographic
/// hasher.
pub type HashMap<K, V> = std::collections::HashMap<K, V, foldhash::fast::RandomState>;

/// A [`HashSet`][std::collections::HashSet] with a faster, non-cryptographic
/// hasher.
pub type HashSet<T> = std::collections::HashSet<T, foldhash::fast::RandomState>;
