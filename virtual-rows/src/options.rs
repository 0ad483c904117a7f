use alloc::sync::Arc;

use crate::offsets::{HeightBounds, HeightSpec};
use crate::range::DEFAULT_INITIAL_ROW_COUNT;
use crate::{ItemKey, Viewport};

/// Invoked when the end-reached latch fires. Fetching, retrying and setting `is_loading` are the
/// caller's business.
pub type EndReachedCallback = Arc<dyn Fn() + Send + Sync>;

/// Raw scroll observer, called once per processed [`crate::VirtualList::update`].
pub type OnScrollCallback = Arc<dyn Fn(Viewport) + Send + Sync>;

pub const DEFAULT_OVERSCAN: usize = 1;
pub const DEFAULT_END_REACHED_THRESHOLD: u64 = 200;

/// Configuration for [`crate::VirtualList`].
///
/// Cheap to clone: callbacks are stored in `Arc`s so adapters can tweak a field and hand the
/// options back through `VirtualList::set_options`.
pub struct ListOptions<K = ItemKey> {
    pub count: usize,
    pub item_height: HeightSpec,
    /// Stable identity of the row at an index. Measurements are stored under this key.
    pub get_item_key: Arc<dyn Fn(usize) -> K + Send + Sync>,

    /// Extra rows rendered beyond the visible range on both edges.
    pub overscan: usize,
    /// Hard cap on simultaneously rendered rows.
    pub items_to_render: Option<usize>,
    /// Rows rendered while the container height is still 0.
    pub initial_row_count: usize,

    pub min_height: Option<u32>,
    pub max_height: Option<u32>,

    pub end_reached_threshold: u64,
    pub has_more: bool,
    pub is_loading: bool,
    pub on_end_reached: Option<EndReachedCallback>,

    pub on_scroll: Option<OnScrollCallback>,
}

impl<K> Clone for ListOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            item_height: self.item_height.clone(),
            get_item_key: Arc::clone(&self.get_item_key),
            overscan: self.overscan,
            items_to_render: self.items_to_render,
            initial_row_count: self.initial_row_count,
            min_height: self.min_height,
            max_height: self.max_height,
            end_reached_threshold: self.end_reached_threshold,
            has_more: self.has_more,
            is_loading: self.is_loading,
            on_end_reached: self.on_end_reached.clone(),
            on_scroll: self.on_scroll.clone(),
        }
    }
}

impl ListOptions<ItemKey> {
    /// Creates options for a list keyed by index (`ItemKey = u64`).
    pub fn new(count: usize, item_height: HeightSpec) -> Self {
        Self::new_with_key(count, item_height, |i| i as u64)
    }

    /// Every row is `height` pixels tall.
    pub fn fixed(count: usize, height: u32) -> Self {
        Self::new(count, HeightSpec::Fixed(height))
    }

    /// Row heights come from `item_height(index)`.
    pub fn per_item(
        count: usize,
        item_height: impl Fn(usize) -> u32 + Send + Sync + 'static,
    ) -> Self {
        Self::new(count, HeightSpec::per_item(item_height))
    }

    /// Row heights are measured by the host; `estimated_height` stands in until then.
    pub fn measured(count: usize, estimated_height: u32) -> Self {
        Self::new(count, HeightSpec::Measured { estimated_height })
    }
}

impl<K> ListOptions<K> {
    /// Creates options with a custom key mapping, so measurements follow rows across
    /// reordering and replacement.
    pub fn new_with_key(
        count: usize,
        item_height: HeightSpec,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            item_height,
            get_item_key: Arc::new(get_item_key),
            overscan: DEFAULT_OVERSCAN,
            items_to_render: None,
            initial_row_count: DEFAULT_INITIAL_ROW_COUNT,
            min_height: None,
            max_height: None,
            end_reached_threshold: DEFAULT_END_REACHED_THRESHOLD,
            has_more: false,
            is_loading: false,
            on_end_reached: None,
            on_scroll: None,
        }
    }

    pub fn height_bounds(&self) -> HeightBounds {
        HeightBounds::new(self.min_height, self.max_height)
    }

    pub fn with_get_item_key(
        mut self,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_item_key = Arc::new(get_item_key);
        self
    }

    pub fn with_item_height(mut self, item_height: HeightSpec) -> Self {
        self.item_height = item_height;
        self
    }

    /// Sets a fixed row height, unless a per-item function is already configured: the function
    /// takes precedence over a fixed value regardless of the order they were supplied in.
    pub fn with_fixed_height(mut self, height: u32) -> Self {
        if !matches!(self.item_height, HeightSpec::PerItem(_)) {
            self.item_height = HeightSpec::Fixed(height);
        }
        self
    }

    pub fn with_item_height_fn(
        mut self,
        f: impl Fn(usize) -> u32 + Send + Sync + 'static,
    ) -> Self {
        self.item_height = HeightSpec::per_item(f);
        self
    }

    /// Switches to measured heights with `estimated_height` for unmeasured rows.
    pub fn with_dynamic_height(mut self, estimated_height: u32) -> Self {
        self.item_height = HeightSpec::Measured { estimated_height };
        self
    }

    /// Updates the estimate of an already measured list. No effect in other modes.
    pub fn with_estimated_item_height(mut self, estimated_height: u32) -> Self {
        if let HeightSpec::Measured { .. } = self.item_height {
            self.item_height = HeightSpec::Measured { estimated_height };
        }
        self
    }

    pub fn with_height_bounds(
        mut self,
        min_height: Option<u32>,
        max_height: Option<u32>,
    ) -> Self {
        self.min_height = min_height;
        self.max_height = max_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_items_to_render(mut self, items_to_render: Option<usize>) -> Self {
        self.items_to_render = items_to_render;
        self
    }

    pub fn with_initial_row_count(mut self, initial_row_count: usize) -> Self {
        self.initial_row_count = initial_row_count;
        self
    }

    pub fn with_end_reached_threshold(mut self, threshold: u64) -> Self {
        self.end_reached_threshold = threshold;
        self
    }

    pub fn with_has_more(mut self, has_more: bool) -> Self {
        self.has_more = has_more;
        self
    }

    pub fn with_is_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn with_on_end_reached(
        mut self,
        on_end_reached: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_end_reached = on_end_reached.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(Viewport) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> core::fmt::Debug for ListOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("count", &self.count)
            .field("item_height", &self.item_height)
            .field("overscan", &self.overscan)
            .field("items_to_render", &self.items_to_render)
            .field("initial_row_count", &self.initial_row_count)
            .field("min_height", &self.min_height)
            .field("max_height", &self.max_height)
            .field("end_reached_threshold", &self.end_reached_threshold)
            .field("has_more", &self.has_more)
            .field("is_loading", &self.is_loading)
            .finish_non_exhaustive()
    }
}
