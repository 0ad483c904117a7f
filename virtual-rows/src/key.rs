#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type KeyHeightMap<K> = HashMap<K, u32>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyHeightMap<K> = BTreeMap<K, u32>;

/// Bound for row keys: hashable with `std`, ordered without it.
#[cfg(feature = "std")]
#[doc(hidden)]
pub trait RowKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> RowKey for K {}

/// Bound for row keys: hashable with `std`, ordered without it.
#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait RowKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> RowKey for K {}
