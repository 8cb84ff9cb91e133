use crate::components::daisy::foundations::{DaisyColor, DaisySize, DaisyVariant, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or(DaisySize::Md)]
    pub size: DaisySize,
    #[prop_or(DaisyVariant::Solid)]
    pub variant: DaisyVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_pressed: Option<AttrValue>,
    #[prop_or_default]
    pub aria_controls: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let tone = tone_class("btn", props.tone);
    let size = props.size.with_prefix("btn");
    let mut classes = classes!("btn", props.variant.as_class(), size, props.class.clone());
    if let Some(tone) = tone {
        classes.push(tone);
    }

    html! {
        <button
            class={classes}
            type="button"
            aria-pressed={props.aria_pressed.clone()}
            aria-controls={props.aria_controls.clone()}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
