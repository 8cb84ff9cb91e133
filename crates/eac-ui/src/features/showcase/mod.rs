//! Numbered showcase panels on the landing page.
//!
//! # Design
//! - Exactly one panel is selected at a time; selection is never validated.
//! - Highlight classes are derived from the selection on every read.

pub mod actions;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
