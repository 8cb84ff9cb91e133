#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! EAC page Web UI.
//! Holds the show/hide and showcase-selection controllers for the documentation
//! page, plus the Yew front-end that renders them.

pub mod config;
pub mod core;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

pub use config::{ConfigError, PageConfig};
pub use crate::core::examples::{ExampleId, UnknownExample};
pub use crate::core::store::AppStore;
pub use features::code_toggle::state::ExampleVisibilityToggle;
pub use features::showcase::state::ActiveExampleSelector;
