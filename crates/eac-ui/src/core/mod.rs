//! Core, DOM-free primitives and helpers for the page UI.
pub mod examples;
pub mod store;
