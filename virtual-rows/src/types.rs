use core::ops::Range;

/// Where a row should land inside the viewport after a scroll-to-index request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Leave the scroll position alone if the row is fully visible, otherwise scroll the
    /// minimal distance (`Start` when above the viewport, `End` when below).
    #[default]
    Auto,
}

/// Scroll position and container height reported by the host for one event.
///
/// A `container_height` of 0 means "not measured yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub scroll_top: u64,
    pub container_height: u32,
}

impl Viewport {
    pub fn new(scroll_top: u64, container_height: u32) -> Self {
        Self {
            scroll_top,
            container_height,
        }
    }

    /// Bottom edge of the viewport (exclusive).
    pub fn scroll_bottom(&self) -> u64 {
        self.scroll_top.saturating_add(self.container_height as u64)
    }

    pub fn is_measured(&self) -> bool {
        self.container_height > 0
    }
}

/// Rows intersecting the viewport, before overscan.
///
/// `end_index` is inclusive. When `count == 0` the range is `{0, 0}` and must render nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize,
    pub count: usize,
}

impl VisibleRange {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end_index - self.start_index + 1
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        !self.is_empty() && (self.start_index..=self.end_index).contains(&index)
    }

    /// Half-open index range, empty when there are no rows.
    pub fn indices(&self) -> Range<usize> {
        if self.is_empty() {
            0..0
        } else {
            self.start_index..self.end_index + 1
        }
    }
}

/// The block of rows to materialize for one frame.
///
/// The host renders rows `start_index..=end_index` inside a spacer of `total_height`, translated
/// down by `offset_y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderWindow {
    pub start_index: usize,
    pub end_index: usize,
    pub offset_y: u64,
    pub total_height: u64,
    pub count: usize,
    /// Set when `items_to_render` cut rows off the end of the overscanned window.
    pub truncated: bool,
}

impl RenderWindow {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end_index - self.start_index + 1
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        !self.is_empty() && (self.start_index..=self.end_index).contains(&index)
    }

    pub fn indices(&self) -> Range<usize> {
        if self.is_empty() {
            0..0
        } else {
            self.start_index..self.end_index + 1
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowItem {
    pub index: usize,
    /// Absolute start offset inside the full-height spacer.
    pub start: u64,
    pub height: u32,
}

impl WindowItem {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.height as u64)
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowItemKeyed<K> {
    pub key: K,
    pub index: usize,
    pub start: u64,
    pub height: u32,
}

impl<K> WindowItemKeyed<K> {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.height as u64)
    }
}

pub type ItemKey = u64;
