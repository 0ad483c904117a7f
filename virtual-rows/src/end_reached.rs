//! Single-fire "approaching end of data" latch for infinite scrolling.
//!
//! The latch fires at most once per loading session: after firing it stays disarmed until the
//! caller reports that the load finished (`is_loading` going from `true` to `false`) or calls
//! [`EndReachedSignal::reset`].

/// Inputs sampled from one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EndReachedInput {
    pub scroll_top: u64,
    pub container_height: u32,
    pub total_height: u64,
    pub has_more: bool,
    pub is_loading: bool,
    /// Distance from the content end, in pixels, below which the signal fires.
    pub threshold: u64,
}

impl EndReachedInput {
    /// `total_height - (scroll_top + container_height)`; negative when scrolled past the end.
    pub fn distance_to_end(&self) -> i128 {
        let bottom = self.scroll_top as i128 + self.container_height as i128;
        self.total_height as i128 - bottom
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EndReachedState {
    /// Ready to fire on the next threshold crossing.
    #[default]
    Armed,
    /// Fired; waiting for the load to complete.
    Fired,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EndReachedSignal {
    state: EndReachedState,
    was_loading: bool,
}

impl EndReachedSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EndReachedState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.state == EndReachedState::Armed
    }

    /// Feeds the caller's loading flag. A `true -> false` edge re-arms a fired latch.
    pub fn observe_loading(&mut self, is_loading: bool) {
        if self.was_loading && !is_loading && self.state == EndReachedState::Fired {
            vdebug!("end_reached: load completed, re-armed");
            self.state = EndReachedState::Armed;
        }
        self.was_loading = is_loading;
    }

    /// Re-arms the latch without a loading round trip (e.g. after a failed fetch that never
    /// set `is_loading`).
    pub fn reset(&mut self) {
        self.state = EndReachedState::Armed;
    }

    /// Evaluates one frame. Returns `true` exactly when the pagination callback must run.
    pub fn evaluate(&mut self, input: EndReachedInput) -> bool {
        self.observe_loading(input.is_loading);
        if self.state != EndReachedState::Armed || !input.has_more || input.is_loading {
            return false;
        }
        let distance = input.distance_to_end();
        if distance < input.threshold as i128 {
            vdebug!(
                distance = distance as i64,
                threshold = input.threshold,
                "end_reached: fired"
            );
            self.state = EndReachedState::Fired;
            return true;
        }
        false
    }
}
