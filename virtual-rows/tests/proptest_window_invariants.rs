//! Property-based invariant tests for range finding, window assembly, scroll resolution and the
//! end-reached latch.
//!
//! 1. Coverage: the visible range (before overscan) covers the whole viewport.
//! 2. Monotonicity: offsets never decrease and `offset(n)` is the total height.
//! 3. Overscan containment: the window contains the visible range, or at least its first row
//!    when `items_to_render` truncated it.
//! 4. Scroll resolution is deterministic.
//! 5. The end-reached latch fires at most once between loading completions.

use proptest::prelude::*;
use virtual_rows::{
    Align, EndReachedInput, EndReachedSignal, HeightBounds, HeightSpec, ListOptions,
    MeasurementCache, OffsetTable, Viewport, VirtualList, assemble, find_range,
    resolve_scroll_top,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn heights_strategy() -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(0u32..=120, 0..=200)
}

fn align_strategy() -> impl Strategy<Value = Align> {
    prop_oneof![
        Just(Align::Start),
        Just(Align::Center),
        Just(Align::End),
        Just(Align::Auto),
    ]
}

fn per_item_table(heights: &[u32]) -> OffsetTable {
    let hs = heights.to_vec();
    OffsetTable::compute(
        heights.len(),
        &HeightSpec::per_item(move |i| hs[i]),
        HeightBounds::default(),
        &MeasurementCache::<u64>::new(),
        |i| i as u64,
    )
}

/// True if rows `start..=end` cover `[top, top + height)` within the content.
fn covers(table: &OffsetTable, start: usize, end: usize, top: u64, height: u32) -> bool {
    let total = table.total();
    let want_start = top.min(total);
    let want_end = (top + height as u64).min(total);
    table.offset(start) <= want_start && table.offset(end + 1) >= want_end
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Coverage
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn dynamic_range_covers_viewport(
        heights in heights_strategy(),
        scroll_top in 0u64..=30_000,
        container in 1u32..=2_000,
    ) {
        prop_assume!(!heights.is_empty());
        let table = per_item_table(&heights);
        let range = find_range(Viewport::new(scroll_top, container), &table, 10);
        prop_assert!(range.start_index <= range.end_index);
        prop_assert!(range.end_index < heights.len());
        if scroll_top < table.total() {
            prop_assert!(covers(&table, range.start_index, range.end_index, scroll_top, container));
        }
    }

    #[test]
    fn fixed_range_covers_viewport(
        count in 1usize..=20_000,
        height in 1u32..=200,
        scroll_top in 0u64..=4_000_000,
        container in 1u32..=2_000,
    ) {
        let table = OffsetTable::uniform(count, height);
        let range = find_range(Viewport::new(scroll_top, container), &table, 10);
        prop_assert!(range.start_index <= range.end_index);
        prop_assert!(range.end_index < count);
        if scroll_top < table.total() {
            prop_assert!(covers(&table, range.start_index, range.end_index, scroll_top, container));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn offsets_are_monotonic(
        heights in heights_strategy(),
        min in proptest::option::of(0u32..=60),
        max in proptest::option::of(30u32..=150),
    ) {
        let hs = heights.clone();
        let list = VirtualList::new(
            ListOptions::per_item(heights.len(), move |i| hs[i]).with_height_bounds(min, max),
        );
        let table = list.offsets();
        let mut sum = 0u64;
        for i in 0..heights.len() {
            prop_assert_eq!(table.offset(i), sum);
            prop_assert!(table.offset(i) <= table.offset(i + 1));
            sum += table.height(i).unwrap_or(0) as u64;
        }
        prop_assert_eq!(table.offset(heights.len()), list.total_height());
        prop_assert_eq!(sum, list.total_height());
    }

    #[test]
    fn measurements_keep_offsets_monotonic(
        measurements in proptest::collection::vec((0usize..100, 0u32..=300), 0..=200),
    ) {
        let mut list = VirtualList::new(ListOptions::measured(100, 40));
        list.measure_many(measurements);
        let table = list.offsets();
        for i in 0..100 {
            prop_assert!(table.offset(i) <= table.offset(i + 1));
        }
        prop_assert_eq!(table.offset(100), list.total_height());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Overscan containment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn window_contains_visible_range(
        heights in heights_strategy(),
        scroll_top in 0u64..=30_000,
        container in 0u32..=2_000,
        overscan in 0usize..=20,
        cap in proptest::option::of(0usize..=40),
    ) {
        let table = per_item_table(&heights);
        let range = find_range(Viewport::new(scroll_top, container), &table, 10);
        let window = assemble(range, overscan, cap, &table);

        if heights.is_empty() {
            prop_assert!(window.is_empty());
            return Ok(());
        }
        prop_assert!(window.start_index <= window.end_index);
        prop_assert!(window.end_index < heights.len());
        prop_assert_eq!(window.offset_y, table.offset(window.start_index));
        prop_assert!(window.contains(range.start_index));
        if let Some(cap) = cap {
            prop_assert!(window.len() <= cap.max(1));
        }
        if !window.truncated {
            prop_assert!(window.start_index <= range.start_index);
            prop_assert!(window.end_index >= range.end_index);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Scroll resolution is deterministic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scroll_resolution_is_idempotent(
        heights in heights_strategy(),
        index in 0usize..=250,
        align in align_strategy(),
        scroll_top in 0u64..=30_000,
        container in 0u32..=2_000,
    ) {
        let table = per_item_table(&heights);
        let viewport = Viewport::new(scroll_top, container);
        let a = resolve_scroll_top(index, align, viewport, &table);
        let b = resolve_scroll_top(index, align, viewport, &table);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.is_some(), index < heights.len());
        if let (Some(target), Align::Start) = (a, align) {
            prop_assert_eq!(target, table.offset(index));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Single-fire latch
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn latch_fires_at_most_once_while_loading(
        frames in proptest::collection::vec((0u64..=2_000, any::<bool>()), 1..=60),
    ) {
        let mut signal = EndReachedSignal::new();
        let mut fired_since_completion = 0usize;
        let mut was_loading = false;
        for (scroll_top, is_loading) in frames {
            if was_loading && !is_loading {
                fired_since_completion = 0;
            }
            was_loading = is_loading;
            let fired = signal.evaluate(EndReachedInput {
                scroll_top,
                container_height: 300,
                total_height: 2_000,
                has_more: true,
                is_loading,
                threshold: 250,
            });
            if fired {
                prop_assert!(!is_loading);
                fired_since_completion += 1;
            }
            prop_assert!(fired_since_completion <= 1);
        }
    }
}
