//! Numbered showcase buttons and the panel for the selected example.

use crate::components::daisy::{Button, Card, DaisyColor, DaisySize, Input};
use crate::features::showcase::actions::ShowcaseAction;
use crate::features::showcase::state::ActiveExampleSelector;
use yew::prelude::*;

/// Showcase panel contents keyed by identifier.
pub(crate) struct ShowcasePanel {
    pub id: i64,
    pub title: &'static str,
    pub sample_url: &'static str,
}

pub(crate) static SHOWCASE_PANELS: [ShowcasePanel; 3] = [
    ShowcasePanel {
        id: 1,
        title: "Extract e-mail addresses",
        sample_url: "https://example.com/contact",
    },
    ShowcasePanel {
        id: 2,
        title: "Extract an article",
        sample_url: "https://example.com/blog/post",
    },
    ShowcasePanel {
        id: 3,
        title: "Scrape search results",
        sample_url: "https://duckduckgo.com/html/?q=rust",
    },
];

#[derive(Properties, PartialEq)]
pub(crate) struct ShowcaseProps {
    pub state: ActiveExampleSelector,
    pub on_action: Callback<ShowcaseAction>,
}

#[function_component(Showcase)]
pub(crate) fn showcase(props: &ShowcaseProps) -> Html {
    let state = &props.state;
    html! {
        <section class="space-y-4" aria-label="Showcase">
            <div class="join" role="tablist">
                { for SHOWCASE_PANELS.iter().map(|panel| {
                    let id = panel.id;
                    let onclick = {
                        let on_action = props.on_action.clone();
                        Callback::from(move |_: MouseEvent| on_action.emit(ShowcaseAction::Select(id)))
                    };
                    html! {
                        <Button
                            key={id}
                            size={DaisySize::Sm}
                            tone={(!state.is_selected(id)).then_some(DaisyColor::Neutral)}
                            class={classes!("join-item", state.active_class(id).to_string())}
                            aria_pressed={AttrValue::from(state.is_selected(id).to_string())}
                            onclick={onclick}
                        >
                            {id.to_string()}
                        </Button>
                    }
                }) }
            </div>
            { for SHOWCASE_PANELS.iter().filter(|panel| state.is_selected(panel.id)).map(|panel| html! {
                <Card key={panel.id} title={panel.title}>
                    <Input
                        id={AttrValue::from(format!("showcase-{}-url", panel.id))}
                        value={panel.sample_url}
                        aria_label={panel.title}
                        readonly={true}
                        class={classes!(state.glow_class(panel.id).to_string())}
                    />
                </Card>
            }) }
        </section>
    }
}
