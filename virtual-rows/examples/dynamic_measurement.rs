// Example: measured heights with keyed rows surviving a reorder.
use virtual_rows::{HeightSpec, ListOptions, Viewport, VirtualList};

fn main() {
    let mut ids: Vec<u64> = (0..100).map(|i| 1_000 + i).collect();
    let key_ids = ids.clone();
    let mut list = VirtualList::new(ListOptions::new_with_key(
        ids.len(),
        HeightSpec::Measured {
            estimated_height: 40,
        },
        move |i| key_ids[i],
    ));

    let window = list.update(Viewport::new(0, 200));
    println!(
        "estimated: total={} range={}..={}",
        window.total_height, window.start_index, window.end_index
    );

    // The host renders the window, then reports what it measured.
    let changed = list.measure_many(window.indices().map(|i| (i, 20 + (i as u32 % 3) * 30)));
    let window = list.update(list.viewport());
    println!(
        "measured {changed} rows: total={} range={}..={}",
        window.total_height, window.start_index, window.end_index
    );

    // Reverse the data: measurements follow the ids, not the indexes.
    ids.reverse();
    let key_ids = ids.clone();
    list.set_get_item_key(move |i| key_ids[i]);
    println!(
        "after reverse: height(99)={:?} measured(99)={}",
        list.item_height(99),
        list.is_measured(99)
    );

    list.recalculate_heights();
    println!("recalculated: total={}", list.total_height());
}
