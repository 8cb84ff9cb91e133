use crate::core::store::{AppStore, apply_code_toggle, apply_showcase};
use crate::features::code_toggle::actions::CodeToggleAction;
use crate::features::code_toggle::view::ExampleCards;
use crate::features::showcase::actions::ShowcaseAction;
use crate::features::showcase::view::Showcase;
use page_config::load_page_config;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod page_config;

#[function_component(EacApp)]
pub(crate) fn eac_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let examples = use_selector(|store: &AppStore| store.examples.clone());
    let showcase = use_selector(|store: &AppStore| store.showcase.clone());

    let on_code_toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |action: CodeToggleAction| {
            dispatch.reduce_mut(move |store| apply_code_toggle(store, action));
        })
    };
    let on_showcase = Callback::from(move |action: ShowcaseAction| {
        dispatch.reduce_mut(move |store| apply_showcase(store, action));
    });

    html! {
        <main class="container mx-auto space-y-10 p-6">
            <Showcase state={(*showcase).clone()} on_action={on_showcase} />
            <ExampleCards state={(*examples).clone()} on_action={on_code_toggle} />
        </main>
    }
}

/// Entrypoint for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let config = load_page_config();
    Dispatch::<AppStore>::new().reduce_mut(move |store| *store = AppStore::with_config(&config));
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<EacApp>::with_root(root).render();
    } else {
        yew::Renderer::<EacApp>::new().render();
    }
}
