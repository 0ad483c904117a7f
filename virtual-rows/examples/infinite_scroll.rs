// Example: paginated loading driven by the end-reached latch.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use virtual_rows::{ListOptions, Viewport, VirtualList};

const PAGE: usize = 50;

fn main() {
    let requested = Arc::new(AtomicBool::new(false));
    let flag = requested.clone();
    let mut list = VirtualList::new(
        ListOptions::fixed(PAGE, 32)
            .with_has_more(true)
            .with_end_reached_threshold(300)
            .with_on_end_reached(Some(move || flag.store(true, Ordering::SeqCst))),
    );

    let mut scroll_top = 0u64;
    for frame in 0..400 {
        scroll_top += 24;
        let window = list.update(Viewport::new(scroll_top, 400));

        if requested.swap(false, Ordering::SeqCst) {
            println!(
                "frame {frame}: end reached at {scroll_top} (rows={}, window={}..={})",
                list.count(),
                window.start_index,
                window.end_index
            );
            list.set_loading(true);
            // Pretend the page arrived.
            let next = list.count() + PAGE;
            list.set_count(next);
            list.set_has_more(next < 4 * PAGE);
            list.set_loading(false);
        }
        scroll_top = scroll_top.min(list.max_scroll_top());
    }
    println!("final rows={} total_height={}", list.count(), list.total_height());
}
