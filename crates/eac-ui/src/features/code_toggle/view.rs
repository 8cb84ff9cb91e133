//! Example cards with show/hide code buttons.
//!
//! # Design
//! - Stateless: the card list renders whatever slice the store hands it.
//! - Clicks are reported as [`CodeToggleAction`]s; the store applies them.

use crate::components::daisy::{Button, Card, DaisyColor, DaisySize, DaisyVariant};
use crate::core::examples::ExampleId;
use crate::features::code_toggle::actions::CodeToggleAction;
use crate::features::code_toggle::state::ExampleVisibilityToggle;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ExampleCardsProps {
    pub state: ExampleVisibilityToggle,
    pub on_action: Callback<CodeToggleAction>,
}

#[function_component(ExampleCards)]
pub(crate) fn example_cards(props: &ExampleCardsProps) -> Html {
    html! {
        <section class="grid gap-4" aria-label="Examples">
            { for ExampleId::all().into_iter().map(|id| render_card(&props.state, id, &props.on_action)) }
        </section>
    }
}

fn render_card(
    state: &ExampleVisibilityToggle,
    id: ExampleId,
    on_action: &Callback<CodeToggleAction>,
) -> Html {
    let description_id = format!("example-{}-code", id.key());
    let onclick = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(CodeToggleAction::Toggle(id)))
    };
    let actions = html! {
        <Button
            variant={DaisyVariant::Outline}
            size={DaisySize::Sm}
            tone={Some(DaisyColor::Primary)}
            aria_pressed={AttrValue::from(state.expanded(id).to_string())}
            aria_controls={AttrValue::from(description_id.clone())}
            onclick={onclick}
        >
            {state.label_for(id).to_string()}
        </Button>
    };
    html! {
        <Card key={id.key()} id={AttrValue::from(format!("example-{}", id.key()))} title={id.title()} actions={actions}>
            <div
                id={description_id}
                class={classes!("example-description", state.collapsed_class_for(id).to_string())}
            >
                <pre class="mockup-code text-sm"><code>{format!("examples/{}.json", id.key())}</code></pre>
            </div>
        </Card>
    }
}
