use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Controls rendered on the right of the title row.
    #[prop_or_default]
    pub actions: Option<Html>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub(crate) fn card(props: &CardProps) -> Html {
    let classes = classes!("card", "shadow", "bg-base-200", props.class.clone());
    html! {
        <article class={classes} id={props.id.clone()}>
            <div class="card-body gap-3">
                <header class="flex items-center justify-between gap-4">
                    <h3 class="card-title text-lg">{props.title.clone()}</h3>
                    {props.actions.clone().unwrap_or_default()}
                </header>
                { for props.children.iter() }
            </div>
        </article>
    }
}
