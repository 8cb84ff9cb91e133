//! Showcase actions.

/// User intent emitted by the showcase buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowcaseAction {
    /// Make the given panel the selected one.
    Select(i64),
}
