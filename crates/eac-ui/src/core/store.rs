//! App-wide yewdux store.
//!
//! # Design
//! - One slice per controller; slices never read each other.
//! - Reducers are plain functions so they can be exercised without a DOM.

use crate::config::PageConfig;
use crate::features::code_toggle::actions::CodeToggleAction;
use crate::features::code_toggle::state::ExampleVisibilityToggle;
use crate::features::showcase::actions::ShowcaseAction;
use crate::features::showcase::state::ActiveExampleSelector;
use yewdux::store::Store;

/// Global application store for the page controllers.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Example code show/hide state.
    pub examples: ExampleVisibilityToggle,
    /// Selected showcase panel.
    pub showcase: ActiveExampleSelector,
}

impl AppStore {
    /// Build a store whose controllers use the supplied presentation constants.
    #[must_use]
    pub fn with_config(config: &PageConfig) -> Self {
        Self {
            examples: ExampleVisibilityToggle::new(config),
            showcase: ActiveExampleSelector::new(config),
        }
    }
}

/// Apply a code toggle action to the store.
pub fn apply_code_toggle(store: &mut AppStore, action: CodeToggleAction) {
    match action {
        CodeToggleAction::Toggle(id) => store.examples.toggle_example(id),
    }
}

/// Apply a showcase action to the store.
pub fn apply_showcase(store: &mut AppStore, action: ShowcaseAction) {
    match action {
        ShowcaseAction::Select(id) => store.showcase.select(id),
    }
}

#[cfg(test)]
mod tests {
    use super::{AppStore, apply_code_toggle, apply_showcase};
    use crate::config::PageConfig;
    use crate::core::examples::ExampleId;
    use crate::features::code_toggle::actions::CodeToggleAction;
    use crate::features::showcase::actions::ShowcaseAction;

    #[test]
    fn actions_only_touch_their_slice() {
        let mut store = AppStore::default();
        apply_code_toggle(&mut store, CodeToggleAction::Toggle(ExampleId::Links));
        assert!(store.examples.expanded(ExampleId::Links));
        assert_eq!(store.showcase.selected(), 1);

        apply_showcase(&mut store, ShowcaseAction::Select(4));
        assert!(store.showcase.is_selected(4));
        assert!(store.examples.expanded(ExampleId::Links));
    }

    #[test]
    fn config_reaches_both_slices() {
        let config = PageConfig {
            collapsed_class: "d-none".to_string(),
            glow_class: "shadow".to_string(),
            ..PageConfig::default()
        };
        let store = AppStore::with_config(&config);
        assert_eq!(store.examples.collapsed_class_for(ExampleId::Mail), "d-none");
        assert_eq!(store.showcase.glow_class(1), "shadow");
        assert_ne!(store, AppStore::default());
    }
}
