/// How the host should move its scroll container.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollBehavior {
    /// Jump to the target offset.
    #[default]
    Instant,
    /// Animate to the target offset. The animation belongs to the host; a new command issued
    /// before it finishes redirects it.
    Smooth,
}

impl ScrollBehavior {
    pub fn from_smooth(smooth: bool) -> Self {
        if smooth { Self::Smooth } else { Self::Instant }
    }

    pub fn is_smooth(self) -> bool {
        matches!(self, Self::Smooth)
    }
}

/// The viewport collaborator: the real scroll container owned by the UI layer.
///
/// The controller never holds a host. Imperative commands borrow one for the duration of the
/// call, so the same controller works with DOM elements, terminal panes or test doubles.
pub trait ScrollHost {
    fn scroll_top(&self) -> u64;

    fn container_height(&self) -> u32;

    /// Moves the scroll container to `offset`. The resulting scroll event is expected to come
    /// back through [`crate::Controller::on_scroll`].
    fn perform_scroll(&mut self, offset: u64, behavior: ScrollBehavior);
}

impl<H: ScrollHost + ?Sized> ScrollHost for &mut H {
    fn scroll_top(&self) -> u64 {
        (**self).scroll_top()
    }

    fn container_height(&self) -> u32 {
        (**self).container_height()
    }

    fn perform_scroll(&mut self, offset: u64, behavior: ScrollBehavior) {
        (**self).perform_scroll(offset, behavior);
    }
}
