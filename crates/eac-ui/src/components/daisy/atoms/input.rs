use crate::components::daisy::foundations::{DaisyColor, DaisySize, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct InputProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or(DaisySize::Md)]
    pub size: DaisySize,
    #[prop_or_default]
    pub readonly: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Input)]
pub(crate) fn input(props: &InputProps) -> Html {
    let tone = tone_class("input", props.tone);
    let size = props.size.with_prefix("input");
    let mut classes = classes!("input", "input-bordered", "w-full", size, props.class.clone());
    if let Some(tone) = tone {
        classes.push(tone);
    }
    html! {
        <input
            class={classes}
            type="text"
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            id={props.id.clone()}
            aria-label={props.aria_label.clone()}
            readonly={props.readonly}
        />
    }
}
