use yew::prelude::*;
use crate::models::GENERIC_ICON;

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// An `<img>` that swaps to the generic coin icon if its source fails.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let src = use_state(|| props.src.clone());

    let onerror = {
        let src = src.clone();
        Callback::from(move |_: Event| {
            if &**src != GENERIC_ICON {
                src.set(AttrValue::Static(GENERIC_ICON));
            }
        })
    };

    html! {
        <img src={(*src).clone()} alt={props.alt.clone()} class={props.class.clone()} {onerror} />
    }
}
