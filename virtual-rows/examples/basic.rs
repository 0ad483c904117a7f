// Example: fixed-height list, one update per scroll event, and scroll-to helpers.
use virtual_rows::{Align, ListOptions, Viewport, VirtualList};

fn main() {
    let mut list = VirtualList::new(ListOptions::fixed(1_000_000, 24).with_overscan(3));

    let window = list.update(Viewport::new(123_456, 480));
    println!("total_height={}", window.total_height);
    println!("visible_range={:?}", list.visible_range());
    println!("window={window:?}");

    let mut items = Vec::new();
    list.collect_window_items(&mut items);
    println!("first_rendered={:?}", items.first());

    let off = list.scroll_to_index_offset(999_999, Align::End);
    println!("scroll_to_index(999_999, End) -> {off:?}");
    if let Some(off) = off {
        let window = list.update(Viewport::new(off, 480));
        println!("after scroll: {}..={}", window.start_index, window.end_index);
    }
}
