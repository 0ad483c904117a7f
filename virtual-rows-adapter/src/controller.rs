use alloc::vec::Vec;

use virtual_rows::{
    Align, ItemKey, ListOptions, RenderWindow, RowKey, Viewport, VirtualList, resolve_scroll_top,
};

use crate::{ScrollBehavior, ScrollHost};

/// A framework-neutral controller that wraps a [`VirtualList`] and implements the adapter side
/// of the engine: event coalescing and the imperative scroll handle.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` / `on_resize` whenever the UI reports a change (any number of times per frame)
/// - `on_measurement` when a rendered row reports its height
/// - `tick()` once per frame, which runs at most one engine update
///
/// Imperative commands (`scroll_to`, `scroll_to_index`) borrow a [`ScrollHost`] and only emit
/// `perform_scroll`; the resulting scroll event comes back through `on_scroll` like any other.
#[derive(Clone, Debug)]
pub struct Controller<K = ItemKey> {
    list: VirtualList<K>,
    pending_scroll_top: Option<u64>,
    pending_container_height: Option<u32>,
    dirty: bool,
}

impl<K: RowKey> Controller<K> {
    pub fn new(options: ListOptions<K>) -> Self {
        Self::from_list(VirtualList::new(options))
    }

    /// Wraps an existing list. The first `tick` always emits a window.
    pub fn from_list(list: VirtualList<K>) -> Self {
        Self {
            list,
            pending_scroll_top: None,
            pending_container_height: None,
            dirty: true,
        }
    }

    pub fn list(&self) -> &VirtualList<K> {
        &self.list
    }

    /// Direct access to the list. Changes made through it are picked up by the next `tick`.
    pub fn list_mut(&mut self) -> &mut VirtualList<K> {
        self.dirty = true;
        &mut self.list
    }

    pub fn into_list(self) -> VirtualList<K> {
        self.list
    }

    /// Records the host's current scroll top and container height, e.g. on mount.
    pub fn sync_from(&mut self, host: &impl ScrollHost) {
        self.on_scroll(host.scroll_top());
        self.on_resize(host.container_height());
    }

    /// Records a scroll event. Only the latest value per frame is processed.
    pub fn on_scroll(&mut self, scroll_top: u64) {
        self.pending_scroll_top = Some(scroll_top);
        self.dirty = true;
    }

    /// Records a resize event. Only the latest value per frame is processed.
    pub fn on_resize(&mut self, container_height: u32) {
        self.pending_container_height = Some(container_height);
        self.dirty = true;
    }

    /// Forwards a row measurement. The window is refreshed on the next `tick` if the offsets
    /// changed.
    pub fn on_measurement(&mut self, index: usize, height: u32) -> bool {
        let changed = self.list.on_measurement(index, height);
        self.dirty |= changed;
        changed
    }

    /// Forwards a batch of measurements, see [`VirtualList::measure_many`].
    pub fn measure_many(
        &mut self,
        measurements: impl IntoIterator<Item = (usize, u32)>,
    ) -> usize {
        let changed = self.list.measure_many(measurements);
        self.dirty |= changed > 0;
        changed
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The viewport the next `tick` will process: the last processed one with any pending
    /// events applied.
    pub fn viewport(&self) -> Viewport {
        let current = self.list.viewport();
        Viewport::new(
            self.pending_scroll_top.unwrap_or(current.scroll_top),
            self.pending_container_height
                .unwrap_or(current.container_height),
        )
    }

    /// Runs one engine update if anything changed since the last tick.
    ///
    /// Returns the new window, or `None` when there was nothing to do.
    pub fn tick(&mut self) -> Option<RenderWindow> {
        if !self.dirty {
            return None;
        }
        let viewport = self.viewport();
        self.pending_scroll_top = None;
        self.pending_container_height = None;
        self.dirty = false;
        let window = self.list.update(viewport);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "virtual_rows_adapter",
            scroll_top = viewport.scroll_top,
            start = window.start_index,
            end = window.end_index,
            "Controller::tick"
        );
        Some(window)
    }

    /// The window emitted by the most recent `tick`.
    pub fn window(&self) -> RenderWindow {
        self.list.last_window()
    }

    /// Asks the host to scroll to an absolute offset.
    ///
    /// An instant scroll is also recorded as the pending scroll top, so later commands in the
    /// same frame resolve against the new position.
    pub fn scroll_to(
        &mut self,
        host: &mut impl ScrollHost,
        offset: u64,
        behavior: ScrollBehavior,
    ) {
        host.perform_scroll(offset, behavior);
        if !behavior.is_smooth() {
            self.on_scroll(offset);
        }
    }

    /// Asks the host to bring `index` into view.
    ///
    /// Returns the requested offset, or `None` (and issues nothing) when `index` is out of
    /// range. With [`Align::Auto`] and the row already fully visible, the current position is
    /// returned and no command is issued.
    pub fn scroll_to_index(
        &mut self,
        host: &mut impl ScrollHost,
        index: usize,
        align: Align,
        behavior: ScrollBehavior,
    ) -> Option<u64> {
        let viewport = self.viewport();
        let Some(target) = resolve_scroll_top(index, align, viewport, self.list.offsets()) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "virtual_rows_adapter",
                index,
                count = self.list.count(),
                "scroll_to_index: index out of range"
            );
            return None;
        };
        if align == Align::Auto && target == viewport.scroll_top {
            return Some(target);
        }
        self.scroll_to(host, target, behavior);
        Some(target)
    }

    /// Drops every measurement (measured mode only) and refreshes the window on the next tick.
    pub fn recalculate_heights(&mut self) {
        if !self.list.options().item_height.is_measured() {
            return;
        }
        self.list.recalculate_heights();
        self.dirty = true;
    }

    /// Calls `render_item` once per index of the current window, in order.
    pub fn render<R>(&self, mut render_item: impl FnMut(usize) -> R) -> Vec<R> {
        let window = self.window();
        let mut out = Vec::with_capacity(window.len());
        for index in window.indices() {
            out.push(render_item(index));
        }
        out
    }
}
