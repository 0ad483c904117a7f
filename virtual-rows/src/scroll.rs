use crate::offsets::OffsetTable;
use crate::{Align, Viewport};

/// Computes the scroll position that brings row `index` into view with `align`.
///
/// Returns `None` when `index` is out of range; callers must not issue a scroll command then.
/// The result is clamped to `>= 0` but not to the maximum scroll position, which belongs to the
/// host's scroll container. The function is pure: identical inputs give identical offsets.
///
/// With [`Align::Auto`], a row already fully inside the viewport resolves to the current
/// `scroll_top`.
///
/// While the container height is 0 (not measured yet) every alignment resolves like
/// [`Align::Start`], so the row is at the top of whatever viewport eventually appears.
pub fn resolve_scroll_top(
    index: usize,
    align: Align,
    viewport: Viewport,
    offsets: &OffsetTable,
) -> Option<u64> {
    let height = offsets.height(index)?;
    if !viewport.is_measured() {
        return Some(offsets.offset(index));
    }
    let start = offsets.offset(index) as i128;
    let height = height as i128;
    let container = viewport.container_height as i128;

    let target = match align {
        Align::Start => start,
        Align::Center => start - (container - height) / 2,
        Align::End => start - container + height,
        Align::Auto => {
            let top = viewport.scroll_top as i128;
            let bottom = top + container;
            if start >= top && start + height <= bottom {
                top
            } else if start < top {
                start
            } else {
                start - container + height
            }
        }
    };

    Some(target.clamp(0, u64::MAX as i128) as u64)
}
