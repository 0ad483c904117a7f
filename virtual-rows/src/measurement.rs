use alloc::vec::Vec;

use crate::key::{KeyHeightMap, RowKey};

/// Observed row heights, keyed by row identity.
///
/// Entries only grow until [`MeasurementCache::clear_all`]; there is no eviction. Raw observations
/// are stored here, bounds are applied when heights enter the offset table.
#[derive(Clone, Debug)]
pub struct MeasurementCache<K> {
    heights: KeyHeightMap<K>,
}

impl<K: RowKey> MeasurementCache<K> {
    pub fn new() -> Self {
        Self {
            heights: KeyHeightMap::<K>::new(),
        }
    }

    /// Records an observed height.
    ///
    /// Returns `false` when the cached value is already `height`, in which case nothing
    /// downstream needs recomputing.
    pub fn record(&mut self, key: K, height: u32) -> bool {
        match self.heights.insert(key, height) {
            Some(prev) => prev != height,
            None => true,
        }
    }

    pub fn get(&self, key: &K) -> Option<u32> {
        self.heights.get(key).copied()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.heights.contains_key(key)
    }

    /// Drops every measurement.
    pub fn clear_all(&mut self) {
        self.heights.clear();
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn for_each(&self, mut f: impl FnMut(&K, u32)) {
        for (k, v) in self.heights.iter() {
            f(k, *v);
        }
    }

    pub fn to_vec(&self) -> Vec<(K, u32)>
    where
        K: Clone,
    {
        let mut out = Vec::with_capacity(self.heights.len());
        self.for_each(|k, v| out.push((k.clone(), v)));
        out
    }
}

impl<K: RowKey> Default for MeasurementCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

