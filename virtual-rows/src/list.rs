use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::end_reached::{EndReachedInput, EndReachedSignal, EndReachedState};
use crate::key::RowKey;
use crate::measurement::MeasurementCache;
use crate::offsets::{HeightSpec, OffsetTable};
use crate::range::find_range;
use crate::scroll::resolve_scroll_top;
use crate::window::assemble;
use crate::{
    Align, ItemKey, ListOptions, RenderWindow, Viewport, VisibleRange, WindowItem,
    WindowItemKeyed,
};

/// A headless, per-list virtualization engine.
///
/// The host feeds it one [`Viewport`] per scroll/resize event through [`VirtualList::update`] and
/// renders the returned [`RenderWindow`]. Row measurements come back through
/// [`VirtualList::on_measurement`]. The offset table is only rebuilt when the row count, height
/// spec, bounds or key mapping change; scroll events never rebuild it.
///
/// Every instance owns its own offsets, measurements and end-reached latch. Nothing is shared
/// between lists.
#[derive(Clone, Debug)]
pub struct VirtualList<K = ItemKey> {
    options: ListOptions<K>,
    viewport: Viewport,
    offsets: OffsetTable,
    measured: Vec<bool>,
    cache: MeasurementCache<K>,
    end_reached: EndReachedSignal,
    last_window: RenderWindow,
}

impl<K: RowKey> VirtualList<K> {
    pub fn new(options: ListOptions<K>) -> Self {
        vdebug!(
            count = options.count,
            overscan = options.overscan,
            "VirtualList::new"
        );
        let mut end_reached = EndReachedSignal::new();
        end_reached.observe_loading(options.is_loading);
        let mut list = Self {
            options,
            viewport: Viewport::default(),
            offsets: OffsetTable::empty(),
            measured: Vec::new(),
            cache: MeasurementCache::new(),
            end_reached,
            last_window: RenderWindow::default(),
        };
        list.rebuild_offsets();
        list
    }

    pub fn options(&self) -> &ListOptions<K> {
        &self.options
    }

    /// Replaces the options, rebuilding the offset table only if a height-affecting field
    /// changed.
    pub fn set_options(&mut self, options: ListOptions<K>) {
        let needs_rebuild = options.count != self.options.count
            || !options.item_height.same_as(&self.options.item_height)
            || options.height_bounds() != self.options.height_bounds()
            || !Arc::ptr_eq(&options.get_item_key, &self.options.get_item_key);
        self.options = options;
        vtrace!(
            count = self.options.count,
            rebuild = needs_rebuild,
            "VirtualList::set_options"
        );
        self.end_reached.observe_loading(self.options.is_loading);
        if needs_rebuild {
            self.rebuild_offsets();
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ListOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.rebuild_offsets();
    }

    pub fn set_item_height(&mut self, item_height: HeightSpec) {
        if item_height.same_as(&self.options.item_height) {
            return;
        }
        self.options.item_height = item_height;
        self.rebuild_offsets();
    }

    pub fn set_height_bounds(&mut self, min_height: Option<u32>, max_height: Option<u32>) {
        if self.options.min_height == min_height && self.options.max_height == max_height {
            return;
        }
        self.options.min_height = min_height;
        self.options.max_height = max_height;
        self.rebuild_offsets();
    }

    pub fn set_get_item_key(&mut self, f: impl Fn(usize) -> K + Send + Sync + 'static) {
        self.options.get_item_key = Arc::new(f);
        self.rebuild_offsets();
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
    }

    pub fn set_items_to_render(&mut self, items_to_render: Option<usize>) {
        self.options.items_to_render = items_to_render;
    }

    pub fn set_has_more(&mut self, has_more: bool) {
        self.options.has_more = has_more;
    }

    /// Reports the caller's loading state. Going from `true` to `false` re-arms the
    /// end-reached latch.
    pub fn set_loading(&mut self, is_loading: bool) {
        self.options.is_loading = is_loading;
        self.end_reached.observe_loading(is_loading);
    }

    pub fn set_end_reached_threshold(&mut self, threshold: u64) {
        self.options.end_reached_threshold = threshold;
    }

    pub fn set_on_end_reached(&mut self, f: Option<impl Fn() + Send + Sync + 'static>) {
        self.options.on_end_reached = f.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_scroll(&mut self, f: Option<impl Fn(Viewport) + Send + Sync + 'static>) {
        self.options.on_scroll = f.map(|f| Arc::new(f) as _);
    }

    pub fn end_reached_state(&self) -> EndReachedState {
        self.end_reached.state()
    }

    /// Re-arms the end-reached latch without a loading round trip.
    pub fn reset_end_reached(&mut self) {
        self.end_reached.reset();
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Processes one scroll/resize event.
    ///
    /// Range, window and end-reached evaluation all observe the same `viewport` and total
    /// height. `on_scroll` runs once, then `on_end_reached` if the latch fired.
    pub fn update(&mut self, viewport: Viewport) -> RenderWindow {
        self.viewport = viewport;
        let window = self.render_window();
        vtrace!(
            scroll_top = viewport.scroll_top,
            container_height = viewport.container_height,
            start = window.start_index,
            end = window.end_index,
            "VirtualList::update"
        );

        let fired = if self.options.on_end_reached.is_some() {
            self.end_reached.evaluate(EndReachedInput {
                scroll_top: viewport.scroll_top,
                container_height: viewport.container_height,
                total_height: window.total_height,
                has_more: self.options.has_more,
                is_loading: self.options.is_loading,
                threshold: self.options.end_reached_threshold,
            })
        } else {
            self.end_reached.observe_loading(self.options.is_loading);
            false
        };
        self.last_window = window;

        if let Some(cb) = &self.options.on_scroll {
            cb(viewport);
        }
        if fired {
            if let Some(cb) = &self.options.on_end_reached {
                cb();
            }
        }
        window
    }

    /// The window emitted by the most recent [`VirtualList::update`].
    pub fn last_window(&self) -> RenderWindow {
        self.last_window
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.visible_range_for(self.viewport)
    }

    pub fn visible_range_for(&self, viewport: Viewport) -> VisibleRange {
        find_range(viewport, &self.offsets, self.options.initial_row_count)
    }

    /// The window for the current viewport and the current offsets.
    pub fn render_window(&self) -> RenderWindow {
        self.render_window_for(self.viewport)
    }

    pub fn render_window_for(&self, viewport: Viewport) -> RenderWindow {
        assemble(
            self.visible_range_for(viewport),
            self.options.overscan,
            self.options.items_to_render,
            &self.offsets,
        )
    }

    /// Records a measured row height (measured mode only).
    ///
    /// Returns `true` if the offsets changed. Re-recording an unchanged height is a no-op, and
    /// measurements for rows that no longer exist are dropped.
    pub fn on_measurement(&mut self, index: usize, height: u32) -> bool {
        if index >= self.options.count {
            vwarn!(
                index,
                count = self.options.count,
                "on_measurement: index out of range, dropped"
            );
            return false;
        }
        if !self.options.item_height.is_measured() {
            vtrace!(index, height, "on_measurement: list is not in measured mode");
            return false;
        }
        let key = self.key_for(index);
        self.measured[index] = true;
        if !self.cache.record(key, height) {
            return false;
        }
        let bounded = self.options.height_bounds().apply(height);
        let delta = self.offsets.set_height(index, bounded);
        vtrace!(index, height, delta, "on_measurement");
        delta != 0
    }

    /// Records several measurements. Returns how many of them changed the offsets.
    pub fn measure_many(
        &mut self,
        measurements: impl IntoIterator<Item = (usize, u32)>,
    ) -> usize {
        let mut changed = 0usize;
        for (index, height) in measurements {
            if self.on_measurement(index, height) {
                changed += 1;
            }
        }
        changed
    }

    /// Drops every measurement and rebuilds offsets from the estimate.
    pub fn recalculate_heights(&mut self) {
        vdebug!(cached = self.cache.len(), "recalculate_heights");
        self.cache.clear_all();
        self.rebuild_offsets();
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.measured.get(index).copied().unwrap_or(false)
    }

    pub fn measurement_cache(&self) -> &MeasurementCache<K> {
        &self.cache
    }

    pub fn offsets(&self) -> &OffsetTable {
        &self.offsets
    }

    pub fn total_height(&self) -> u64 {
        self.offsets.total()
    }

    pub fn key_for(&self, index: usize) -> K {
        (self.options.get_item_key)(index)
    }

    pub fn item_start(&self, index: usize) -> Option<u64> {
        (index < self.options.count).then(|| self.offsets.offset(index))
    }

    pub fn item_height(&self, index: usize) -> Option<u32> {
        self.offsets.height(index)
    }

    pub fn item_end(&self, index: usize) -> Option<u64> {
        let start = self.item_start(index)?;
        let height = self.item_height(index)? as u64;
        Some(start.saturating_add(height))
    }

    /// The row containing `offset`, clamped to the last row. `None` for an empty list.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        (self.options.count > 0).then(|| self.offsets.index_at_or_before(offset))
    }

    /// Largest scroll position that still fills the viewport with content.
    pub fn max_scroll_top(&self) -> u64 {
        self.total_height()
            .saturating_sub(self.viewport.container_height as u64)
    }

    /// Scroll position that brings `index` into view, or `None` if `index` is out of range.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> Option<u64> {
        resolve_scroll_top(index, align, self.viewport, &self.offsets)
    }

    pub fn for_each_window_index(&self, f: impl FnMut(usize)) {
        self.render_window().indices().for_each(f);
    }

    pub fn for_each_window_item(&self, mut f: impl FnMut(WindowItem)) {
        let window = self.render_window();
        let mut start = window.offset_y;
        for index in window.indices() {
            let Some(height) = self.offsets.height(index) else {
                break;
            };
            f(WindowItem {
                index,
                start,
                height,
            });
            start = start.saturating_add(height as u64);
        }
    }

    /// Like [`VirtualList::for_each_window_item`], with each row's key for stable render keys.
    pub fn for_each_window_item_keyed(&self, mut f: impl FnMut(WindowItemKeyed<K>)) {
        self.for_each_window_item(|item| {
            f(WindowItemKeyed {
                key: self.key_for(item.index),
                index: item.index,
                start: item.start,
                height: item.height,
            })
        });
    }

    /// Collects the current window's rows into `out` (clears `out` first).
    pub fn collect_window_items(&self, out: &mut Vec<WindowItem>) {
        out.clear();
        self.for_each_window_item(|item| out.push(item));
    }

    fn rebuild_offsets(&mut self) {
        let count = self.options.count;
        vdebug!(count, cached = self.cache.len(), "rebuild_offsets");
        let key_fn = &self.options.get_item_key;
        self.offsets = OffsetTable::compute(
            count,
            &self.options.item_height,
            self.options.height_bounds(),
            &self.cache,
            |i| key_fn(i),
        );

        self.measured.clear();
        if self.options.item_height.is_measured() {
            self.measured.reserve_exact(count);
            for i in 0..count {
                self.measured.push(self.cache.contains(&key_fn(i)));
            }
        }
    }
}
