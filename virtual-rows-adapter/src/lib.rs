//! Adapter utilities for the `virtual-rows` crate.
//!
//! The `virtual-rows` crate is UI-agnostic and only does the math and state. This crate holds
//! the small, framework-neutral pieces every adapter needs on top of it:
//!
//! - [`ScrollHost`]: the contract for the real scroll container (read position and size,
//!   perform a scroll)
//! - [`Controller`]: coalesces scroll/resize events into one engine update per frame and
//!   exposes the imperative handle (`scroll_to`, `scroll_to_index`, `recalculate_heights`)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui/DOM bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod host;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use host::{ScrollBehavior, ScrollHost};
