//! Feature slices for the page controllers.
pub mod code_toggle;
pub mod showcase;
