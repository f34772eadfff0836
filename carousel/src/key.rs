#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type KeyIndexMap<K> = HashMap<K, usize>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyIndexMap<K> = BTreeMap<K, usize>;

/// Identity of a deferred resource.
///
/// With `std` this is `Hash + Eq`; without it the coordinator falls back to an ordered map and
/// requires `Ord` instead.
#[cfg(feature = "std")]
pub trait ResourceKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> ResourceKey for K {}

#[cfg(not(feature = "std"))]
pub trait ResourceKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> ResourceKey for K {}
