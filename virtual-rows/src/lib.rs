//! A headless list virtualization engine.
//!
//! Given a potentially huge list of rows with fixed, per-item or measured heights, this crate
//! computes on every scroll/resize event the minimal contiguous block of rows to materialize,
//! and the offset that places that block inside a full-height spacer:
//!
//! - [`OffsetTable`]: prefix sums over row heights (`O(1)` arithmetic for fixed heights, a
//!   Fenwick tree otherwise), with `O(log n)` offset -> index lookup.
//! - [`find_range`] / [`assemble`]: visible range, overscan and the `items_to_render` cap.
//! - [`resolve_scroll_top`]: scroll-to-index targets for start/center/end/auto alignment.
//! - [`EndReachedSignal`]: a single-fire latch for infinite-scroll pagination.
//! - [`MeasurementCache`]: observed heights for measured mode, cleared only on demand.
//! - [`VirtualList`]: the stateful per-list object tying these together.
//!
//! It is UI-agnostic and single-threaded. The host provides scroll position and container
//! height (ideally coalesced to one update per frame), renders the returned window and feeds
//! row measurements back. For an event-coalescing adapter with an imperative scroll handle, see
//! the `virtual-rows-adapter` crate.
//!
//! ```
//! use virtual_rows::{ListOptions, Viewport, VirtualList};
//!
//! let mut list = VirtualList::new(ListOptions::fixed(1_000, 60).with_overscan(0));
//! let window = list.update(Viewport::new(3_000, 400));
//! assert_eq!((window.start_index, window.end_index), (50, 57));
//! assert_eq!(window.offset_y, 3_000);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod end_reached;
mod fenwick;
mod key;
mod list;
mod measurement;
mod offsets;
mod options;
mod range;
mod scroll;
mod types;
mod window;


pub use end_reached::{EndReachedInput, EndReachedSignal, EndReachedState};
pub use key::RowKey;
pub use list::VirtualList;
pub use measurement::MeasurementCache;
pub use offsets::{DEFAULT_ESTIMATED_HEIGHT, HeightBounds, HeightSpec, OffsetTable};
pub use options::{
    DEFAULT_END_REACHED_THRESHOLD, DEFAULT_OVERSCAN, EndReachedCallback, ListOptions,
    OnScrollCallback,
};
pub use range::{DEFAULT_INITIAL_ROW_COUNT, find_range};
pub use scroll::resolve_scroll_top;
pub use types::{
    Align, ItemKey, RenderWindow, Viewport, VisibleRange, WindowItem, WindowItemKeyed,
};
pub use window::assemble;
