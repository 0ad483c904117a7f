use crate::*;

use alloc::string::String;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use virtual_rows::{Align, ListOptions, VirtualList};

#[derive(Default)]
struct MockHost {
    scroll_top: u64,
    container_height: u32,
    commands: Vec<(u64, ScrollBehavior)>,
}

impl MockHost {
    fn new(scroll_top: u64, container_height: u32) -> Self {
        Self {
            scroll_top,
            container_height,
            commands: Vec::new(),
        }
    }
}

impl ScrollHost for MockHost {
    fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    fn container_height(&self) -> u32 {
        self.container_height
    }

    fn perform_scroll(&mut self, offset: u64, behavior: ScrollBehavior) {
        self.scroll_top = offset;
        self.commands.push((offset, behavior));
    }
}

fn fixed_controller() -> Controller {
    Controller::new(ListOptions::fixed(1_000, 60).with_overscan(0))
}

#[test]
fn first_tick_emits_then_idles() {
    let mut c = fixed_controller();
    let host = MockHost::new(0, 600);
    c.sync_from(&host);

    let w = c.tick().unwrap();
    assert_eq!((w.start_index, w.end_index), (0, 10));
    assert_eq!(w.total_height, 60_000);
    assert!(c.tick().is_none());
}

#[test]
fn events_are_coalesced_into_one_update_per_tick() {
    let updates = Arc::new(AtomicUsize::new(0));
    let seen = updates.clone();
    let mut c = Controller::new(
        ListOptions::fixed(1_000, 60)
            .with_overscan(0)
            .with_on_scroll(Some(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            })),
    );
    c.on_resize(400);
    for top in [10u64, 500, 1_200, 3_000] {
        c.on_scroll(top);
    }
    let w = c.tick().unwrap();
    assert_eq!(updates.load(Ordering::SeqCst), 1);
    assert_eq!(w.start_index, 50);
    assert_eq!(c.list().viewport().scroll_top, 3_000);

    assert!(c.tick().is_none());
    assert_eq!(updates.load(Ordering::SeqCst), 1);
}

#[test]
fn resize_keeps_last_scroll_top() {
    let mut c = fixed_controller();
    c.on_scroll(600);
    c.on_resize(300);
    c.tick();

    c.on_resize(120);
    let w = c.tick().unwrap();
    assert_eq!(c.list().viewport().scroll_top, 600);
    assert_eq!((w.start_index, w.end_index), (10, 12));
}

#[test]
fn scroll_to_forwards_offset_and_behavior() {
    let mut c = fixed_controller();
    let mut host = MockHost::new(0, 600);
    c.scroll_to(&mut host, 1_234, ScrollBehavior::Smooth);
    assert_eq!(host.commands, [(1_234, ScrollBehavior::Smooth)]);

    // The host's scroll event flows back through on_scroll.
    c.on_scroll(host.scroll_top());
    let w = c.tick().unwrap();
    assert_eq!(w.start_index, 20);
}

#[test]
fn scroll_to_index_resolves_against_pending_viewport() {
    let mut c = fixed_controller();
    let mut host = MockHost::new(0, 600);
    c.sync_from(&host);
    c.tick();

    // Not yet ticked: the pending container height still applies.
    c.on_resize(300);
    let target = c.scroll_to_index(&mut host, 100, Align::End, ScrollBehavior::Instant);
    assert_eq!(target, Some(100 * 60 + 60 - 300));
    assert_eq!(host.commands, [(5_760, ScrollBehavior::Instant)]);
}

#[test]
fn scroll_to_index_before_first_resize_keeps_row_visible() {
    let mut c = fixed_controller();
    let mut host = MockHost::new(0, 0);
    c.tick();

    assert_eq!(
        c.scroll_to_index(&mut host, 50, Align::End, ScrollBehavior::Smooth),
        Some(3_000)
    );
    assert_eq!(host.commands, [(3_000, ScrollBehavior::Smooth)]);

    c.on_scroll(host.scroll_top());
    assert!(c.tick().unwrap().contains(50));

    c.on_resize(480);
    let w = c.tick().unwrap();
    assert_eq!((w.start_index, w.end_index), (50, 58));
}

#[test]
fn instant_scroll_is_seen_by_later_commands_in_the_same_frame() {
    let mut c = fixed_controller();
    let mut host = MockHost::new(0, 600);
    c.sync_from(&host);
    c.tick();

    c.scroll_to(&mut host, 3_000, ScrollBehavior::Instant);
    assert_eq!(c.viewport().scroll_top, 3_000);
    assert!(c.is_dirty());

    // Row 52 spans [3120, 3180), inside the new viewport: nothing more to do.
    assert_eq!(
        c.scroll_to_index(&mut host, 52, Align::Auto, ScrollBehavior::Instant),
        Some(3_000)
    );
    assert_eq!(host.commands, [(3_000, ScrollBehavior::Instant)]);
    assert_eq!(c.tick().unwrap().start_index, 50);
}

#[test]
fn smooth_scroll_waits_for_the_host_event() {
    let mut c = fixed_controller();
    let mut host = MockHost::new(0, 600);
    c.sync_from(&host);
    c.tick();

    c.scroll_to(&mut host, 3_000, ScrollBehavior::Smooth);
    assert_eq!(c.viewport().scroll_top, 0);
    assert!(!c.is_dirty());
}

#[test]
fn scroll_to_index_out_of_range_issues_nothing() {
    let mut c = fixed_controller();
    let mut host = MockHost::new(0, 600);
    c.sync_from(&host);
    c.tick();

    assert_eq!(
        c.scroll_to_index(&mut host, 1_000, Align::Start, ScrollBehavior::Smooth),
        None
    );
    assert!(host.commands.is_empty());
}

#[test]
fn auto_scroll_to_visible_row_is_skipped() {
    let mut c = fixed_controller();
    let mut host = MockHost::new(600, 600);
    c.sync_from(&host);
    c.tick();

    // Row 12 spans [720, 780), inside [600, 1200).
    assert_eq!(
        c.scroll_to_index(&mut host, 12, Align::Auto, ScrollBehavior::Smooth),
        Some(600)
    );
    assert!(host.commands.is_empty());

    // Row 30 is below: minimal scroll aligns its bottom edge.
    assert_eq!(
        c.scroll_to_index(&mut host, 30, Align::Auto, ScrollBehavior::Smooth),
        Some(31 * 60 - 600)
    );
    assert_eq!(host.commands.len(), 1);
}

#[test]
fn repeated_scroll_to_index_is_idempotent() {
    let mut c = fixed_controller();
    let mut host = MockHost::new(0, 600);
    c.sync_from(&host);
    c.tick();

    let a = c.scroll_to_index(&mut host, 500, Align::Center, ScrollBehavior::Smooth);
    let b = c.scroll_to_index(&mut host, 500, Align::Center, ScrollBehavior::Smooth);
    assert_eq!(a, b);
    assert_eq!(host.commands[0], host.commands[1]);
}

#[test]
fn measurements_mark_the_controller_dirty() {
    let mut c = Controller::new(ListOptions::measured(100, 40).with_overscan(0));
    c.on_resize(200);
    c.tick();
    assert!(!c.is_dirty());

    assert!(!c.on_measurement(500, 80));
    assert!(!c.is_dirty());

    assert!(c.on_measurement(0, 100));
    assert!(c.is_dirty());
    let w = c.tick().unwrap();
    assert_eq!(w.total_height, 100 + 99 * 40);

    assert_eq!(c.measure_many([(1, 40), (2, 40)]), 0);
    assert!(!c.is_dirty());
}

#[test]
fn recalculate_heights_only_applies_to_measured_lists() {
    let mut c = Controller::new(ListOptions::measured(10, 40));
    c.on_resize(200);
    c.measure_many([(0, 10), (1, 10)]);
    c.tick();
    assert_eq!(c.window().total_height, 20 + 8 * 40);

    c.recalculate_heights();
    let w = c.tick().unwrap();
    assert_eq!(w.total_height, 400);
    assert!(c.list().measurement_cache().is_empty());

    let mut fixed = fixed_controller();
    fixed.tick();
    fixed.recalculate_heights();
    assert!(fixed.tick().is_none());
}

#[test]
fn render_calls_render_item_once_per_window_index() {
    let mut c = Controller::new(ListOptions::fixed(50, 20).with_overscan(2));
    c.on_scroll(200);
    c.on_resize(100);
    c.tick();

    let rendered = c.render(|i| alloc::format!("row-{i}"));
    let w = c.window();
    assert_eq!(rendered.len(), w.len());
    assert_eq!(rendered.first().map(String::as_str), Some("row-8"));
    assert_eq!(rendered.last().map(String::as_str), Some("row-17"));
}

#[test]
fn list_mut_changes_are_picked_up() {
    let mut c = fixed_controller();
    c.on_resize(600);
    c.tick();

    c.list_mut().set_count(5);
    let w = c.tick().unwrap();
    assert_eq!(w.total_height, 300);
    assert_eq!(w.end_index, 4);

    let list: VirtualList = c.into_list();
    assert_eq!(list.count(), 5);
}

#[test]
fn end_reached_fires_through_tick() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();
    let mut c = Controller::new(
        ListOptions::fixed(20, 50)
            .with_has_more(true)
            .with_end_reached_threshold(100)
            .with_on_end_reached(Some(move || {
                seen.fetch_add(1, Ordering::SeqCst);
            })),
    );
    c.on_resize(200);
    c.on_scroll(750);
    c.tick();
    c.on_scroll(780);
    c.tick();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    c.list_mut().set_loading(true);
    c.tick();
    c.list_mut().set_loading(false);
    c.on_scroll(790);
    c.tick();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn scroll_behavior_from_smooth() {
    assert_eq!(ScrollBehavior::from_smooth(true), ScrollBehavior::Smooth);
    assert_eq!(ScrollBehavior::from_smooth(false), ScrollBehavior::Instant);
    assert!(!ScrollBehavior::default().is_smooth());
}
