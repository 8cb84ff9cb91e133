//! Code toggle actions.

use crate::core::examples::ExampleId;

/// User intent emitted by the example cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeToggleAction {
    /// Flip the expanded state of one example.
    Toggle(ExampleId),
}
