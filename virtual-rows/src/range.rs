use core::cmp;

use crate::offsets::OffsetTable;
use crate::{Viewport, VisibleRange};

/// Rows shown while the container height is still unknown.
pub const DEFAULT_INITIAL_ROW_COUNT: usize = 10;

/// Returns the rows that intersect `viewport`, before overscan.
///
/// - Uniform heights: `start = floor(scroll_top / h)`, `end = start + ceil(container / h)`,
///   both clamped to the last row. `O(1)`.
/// - Otherwise: `start` is the last row whose offset is `<= scroll_top` and `end` the last row
///   whose offset is `< scroll_top + container_height`. Two `O(log n)` descents.
///
/// A container height of 0 is treated as "not measured yet" and yields `initial_row_count` rows
/// starting at the scroll position, so the first paint is never empty.
pub fn find_range(
    viewport: Viewport,
    offsets: &OffsetTable,
    initial_row_count: usize,
) -> VisibleRange {
    let count = offsets.len();
    if count == 0 {
        return VisibleRange::empty();
    }
    let last = count - 1;

    if !viewport.is_measured() {
        let start_index = offsets.index_at_or_before(viewport.scroll_top);
        let rows = cmp::max(initial_row_count, 1);
        let end_index = cmp::min(last, start_index.saturating_add(rows - 1));
        vtrace!(start_index, end_index, "find_range: unmeasured container");
        return VisibleRange {
            start_index,
            end_index,
            count,
        };
    }

    let (start_index, end_index) = match offsets.uniform_height() {
        Some(height) => {
            let height = height as u64;
            let start = offsets.index_at_or_before(viewport.scroll_top);
            let visible = (viewport.container_height as u64).div_ceil(height);
            let visible = usize::try_from(visible).unwrap_or(usize::MAX);
            (start, cmp::min(last, start.saturating_add(visible)))
        }
        None => {
            let start = offsets.index_at_or_before(viewport.scroll_top);
            let end = offsets.index_before(viewport.scroll_bottom());
            (start, cmp::max(start, end))
        }
    };

    VisibleRange {
        start_index,
        end_index,
        count,
    }
}
