use virtual_rows::{Align, ListOptions};
use virtual_rows_adapter::{Controller, ScrollBehavior, ScrollHost};

// A stand-in for a real scroll container: smooth scrolls advance a fixed step per frame.
struct FakeHost {
    scroll_top: u64,
    target: u64,
    height: u32,
}

impl ScrollHost for FakeHost {
    fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    fn container_height(&self) -> u32 {
        self.height
    }

    fn perform_scroll(&mut self, offset: u64, behavior: ScrollBehavior) {
        self.target = offset;
        if !behavior.is_smooth() {
            self.scroll_top = offset;
        }
    }
}

impl FakeHost {
    // Returns true while the host is still moving.
    fn step(&mut self) -> bool {
        if self.scroll_top == self.target {
            return false;
        }
        self.scroll_top = if self.target > self.scroll_top {
            (self.scroll_top + 400).min(self.target)
        } else {
            self.scroll_top.saturating_sub(400).max(self.target)
        };
        true
    }
}

fn main() {
    // An adapter would:
    // - forward scroll/resize events to the controller as they arrive
    // - call tick() once per frame and render the returned window
    // - route imperative commands through scroll_to / scroll_to_index
    let mut host = FakeHost {
        scroll_top: 0,
        target: 0,
        height: 300,
    };
    let mut c = Controller::new(ListOptions::fixed(10_000, 20).with_overscan(2));
    c.sync_from(&host);

    let target = c.scroll_to_index(&mut host, 2_000, Align::Center, ScrollBehavior::Smooth);
    println!("target_offset={target:?}");

    let mut frame = 0u32;
    loop {
        let moving = host.step();
        c.on_scroll(host.scroll_top());
        if let Some(window) = c.tick() {
            let rows = c.render(|i| i);
            println!(
                "frame={frame} off={} window={}..={} rendered={}",
                host.scroll_top(),
                window.start_index,
                window.end_index,
                rows.len()
            );
        }
        if !moving {
            break;
        }
        frame += 1;
    }
}
