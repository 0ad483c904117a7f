//! Row heights and the prefix-sum offset table derived from them.
//!
//! `offset(0) == 0`, `offset(i + 1) == offset(i) + height(i)` and `offset(n)` is the total
//! content height. Fixed-height lists never materialize the table: every query is answered by
//! arithmetic. Per-item and measured heights are accumulated once into a [`Fenwick`] tree so a
//! single measurement can be folded in without a full rebuild.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp;

use crate::fenwick::Fenwick;
use crate::key::RowKey;
use crate::measurement::MeasurementCache;

/// Height used for rows that have not been measured when no estimate is configured.
pub const DEFAULT_ESTIMATED_HEIGHT: u32 = 40;

/// How row heights are derived.
#[derive(Clone)]
pub enum HeightSpec {
    /// Every row has the same height.
    Fixed(u32),
    /// Heights come from a function of the row index.
    PerItem(Arc<dyn Fn(usize) -> u32 + Send + Sync>),
    /// Heights are discovered by measurement; unmeasured rows use `estimated_height`.
    Measured { estimated_height: u32 },
}

impl HeightSpec {
    pub fn per_item(f: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        Self::PerItem(Arc::new(f))
    }

    pub fn measured() -> Self {
        Self::Measured {
            estimated_height: DEFAULT_ESTIMATED_HEIGHT,
        }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self, Self::Measured { .. })
    }

    /// Whether both specs would produce the same offset table for the same inputs.
    pub(crate) fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Fixed(a), Self::Fixed(b)) => a == b,
            (Self::PerItem(a), Self::PerItem(b)) => Arc::ptr_eq(a, b),
            (
                Self::Measured {
                    estimated_height: a,
                },
                Self::Measured {
                    estimated_height: b,
                },
            ) => a == b,
            _ => false,
        }
    }
}

impl Default for HeightSpec {
    fn default() -> Self {
        Self::measured()
    }
}

impl core::fmt::Debug for HeightSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(h) => f.debug_tuple("Fixed").field(h).finish(),
            Self::PerItem(_) => f.write_str("PerItem(..)"),
            Self::Measured { estimated_height } => f
                .debug_struct("Measured")
                .field("estimated_height", estimated_height)
                .finish(),
        }
    }
}

/// Optional `[min, max]` bounds applied to every row height before accumulation.
///
/// If `min > max`, `max` wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeightBounds {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl HeightBounds {
    pub fn new(min: Option<u32>, max: Option<u32>) -> Self {
        Self { min, max }
    }

    pub fn apply(&self, height: u32) -> u32 {
        let mut h = height;
        if let Some(min) = self.min {
            h = cmp::max(h, min);
        }
        if let Some(max) = self.max {
            h = cmp::min(h, max);
        }
        h
    }
}

#[derive(Clone, Debug)]
enum Table {
    Uniform { count: usize, height: u32 },
    Prefix { heights: Vec<u32>, sums: Fenwick },
}

/// Offsets of every row, derived from a [`HeightSpec`].
#[derive(Clone, Debug)]
pub struct OffsetTable {
    table: Table,
}

impl OffsetTable {
    /// A table of `count` rows of `height` each, answered in `O(1)`.
    ///
    /// Zero heights are bumped to 1 so offset -> index division stays defined.
    pub fn uniform(count: usize, height: u32) -> Self {
        Self {
            table: Table::Uniform {
                count,
                height: cmp::max(height, 1),
            },
        }
    }

    /// Builds a prefix table from explicit heights in one `O(n)` pass.
    pub fn from_heights(heights: Vec<u32>) -> Self {
        let sums = Fenwick::from_heights(&heights);
        Self {
            table: Table::Prefix { heights, sums },
        }
    }

    pub fn empty() -> Self {
        Self::uniform(0, 1)
    }

    /// Derives the table for `count` rows.
    ///
    /// `key_for` maps an index to the key its measurement is stored under; it is only consulted
    /// for [`HeightSpec::Measured`].
    pub fn compute<K: RowKey>(
        count: usize,
        spec: &HeightSpec,
        bounds: HeightBounds,
        measured: &MeasurementCache<K>,
        key_for: impl Fn(usize) -> K,
    ) -> Self {
        match spec {
            HeightSpec::Fixed(h) => Self::uniform(count, bounds.apply(*h)),
            HeightSpec::PerItem(f) => {
                let mut heights = Vec::with_capacity(count);
                heights.extend((0..count).map(|i| bounds.apply(f(i))));
                Self::from_heights(heights)
            }
            HeightSpec::Measured { estimated_height } => {
                let mut heights = Vec::with_capacity(count);
                heights.extend((0..count).map(|i| {
                    let raw = measured.get(&key_for(i)).unwrap_or(*estimated_height);
                    bounds.apply(raw)
                }));
                Self::from_heights(heights)
            }
        }
    }

    pub fn len(&self) -> usize {
        match &self.table {
            Table::Uniform { count, .. } => *count,
            Table::Prefix { heights, .. } => heights.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The row height when every row has the same height.
    pub fn uniform_height(&self) -> Option<u32> {
        match &self.table {
            Table::Uniform { height, .. } => Some(*height),
            Table::Prefix { .. } => None,
        }
    }

    /// `offset(n)`: the full content height.
    pub fn total(&self) -> u64 {
        match &self.table {
            Table::Uniform { count, height } => (*count as u64).saturating_mul(*height as u64),
            Table::Prefix { sums, .. } => sums.total(),
        }
    }

    /// Start offset of row `index`; `index` is clamped to `len()`.
    pub fn offset(&self, index: usize) -> u64 {
        match &self.table {
            Table::Uniform { count, height } => {
                (cmp::min(index, *count) as u64).saturating_mul(*height as u64)
            }
            Table::Prefix { sums, .. } => sums.prefix_sum(index),
        }
    }

    pub fn height(&self, index: usize) -> Option<u32> {
        match &self.table {
            Table::Uniform { count, height } => (index < *count).then_some(*height),
            Table::Prefix { heights, .. } => heights.get(index).copied(),
        }
    }

    /// Greatest row index whose offset is `<= target`, clamped to the last row.
    ///
    /// A row starting exactly at `target` is the one returned. Returns 0 for an empty table.
    pub fn index_at_or_before(&self, target: u64) -> usize {
        let n = self.len();
        if n == 0 {
            return 0;
        }
        let found = match &self.table {
            Table::Uniform { height, .. } => {
                usize::try_from(target / *height as u64).unwrap_or(usize::MAX)
            }
            Table::Prefix { sums, .. } => sums.last_at_or_before(target),
        };
        cmp::min(found, n - 1)
    }

    /// Greatest row index whose offset is `< boundary`, clamped to the last row.
    ///
    /// Returns 0 when no row starts before `boundary` or the table is empty.
    pub fn index_before(&self, boundary: u64) -> usize {
        if boundary == 0 {
            return 0;
        }
        self.index_at_or_before(boundary - 1)
    }

    /// Replaces the height of one row in `O(log n)` and returns the signed change.
    ///
    /// Uniform tables cannot hold per-row heights; the call is ignored and returns 0.
    pub(crate) fn set_height(&mut self, index: usize, height: u32) -> i64 {
        match &mut self.table {
            Table::Uniform { .. } => {
                vwarn!(index, height, "OffsetTable::set_height on a uniform table");
                0
            }
            Table::Prefix { heights, sums } => {
                let Some(cur) = heights.get_mut(index) else {
                    return 0;
                };
                if *cur == height {
                    return 0;
                }
                let delta = height as i64 - *cur as i64;
                *cur = height;
                sums.add(index, delta);
                delta
            }
        }
    }
}

impl Default for OffsetTable {
    fn default() -> Self {
        Self::empty()
    }
}
