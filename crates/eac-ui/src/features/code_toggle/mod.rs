//! Show/hide wiring for the example code listings.
//!
//! # Design
//! - Keep expand/collapse state in a DOM-free slice so it is testable natively.
//! - Button copy is derived from the expanded flag, never stored separately.

pub mod actions;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
