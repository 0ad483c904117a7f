use core::cmp;

use crate::offsets::OffsetTable;
use crate::{RenderWindow, VisibleRange};

/// Expands `range` by `overscan` rows on both sides and positions the result.
///
/// When `items_to_render` is set and the expanded window is longer than the cap, rows are cut
/// from the end: the window keeps its start, so the first visible row is always rendered even
/// if rows at the bottom of the viewport are not. If the cap is so small that leading overscan
/// alone would fill it, the window ends at the first visible row instead. A cap of 0 is treated
/// as 1.
///
/// `offset_y` is the start offset of the first rendered row.
pub fn assemble(
    range: VisibleRange,
    overscan: usize,
    items_to_render: Option<usize>,
    offsets: &OffsetTable,
) -> RenderWindow {
    let total_height = offsets.total();
    if range.is_empty() {
        return RenderWindow {
            total_height,
            ..RenderWindow::default()
        };
    }

    let count = range.count;
    let last = count - 1;
    let mut start_index = range.start_index.saturating_sub(overscan);
    let mut end_index = cmp::min(last, range.end_index.saturating_add(overscan));
    let mut truncated = false;

    if let Some(cap) = items_to_render {
        let cap = cmp::max(cap, 1);
        if end_index - start_index + 1 > cap {
            end_index = cmp::min(end_index, start_index + cap - 1);
            // A cap smaller than the leading overscan gives up overscan rows, never the first
            // visible row.
            if end_index < range.start_index {
                end_index = range.start_index;
                start_index = range.start_index + 1 - cap;
            }
            truncated = true;
            vtrace!(start_index, end_index, cap, "assemble: window capped");
        }
    }

    RenderWindow {
        start_index,
        end_index,
        offset_y: offsets.offset(start_index),
        total_height,
        count,
        truncated,
    }
}
