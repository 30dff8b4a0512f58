use yew::prelude::*;
use crate::catalog::{self, CATALOG};
use crate::components::FallbackImage;
use crate::models::CurrencyOption;

#[derive(Properties, PartialEq)]
pub struct CryptoSelectProps {
    pub on_select: Callback<&'static CurrencyOption>,
}

#[function_component(CryptoSelect)]
pub fn crypto_select(props: &CryptoSelectProps) -> Html {
    let tokens = catalog::unique_by_symbol(CATALOG.iter());

    html! {
        <div class="screen-container scroll-list">
            <div class="option-list">
                { for tokens.into_iter().map(|option| {
                    let onclick = props.on_select.reform(move |_: MouseEvent| option);
                    let badge = if catalog::is_multi_network(option.token) {
                        html! { <span class="badge badge-multi">{"Multiple Networks"}</span> }
                    } else {
                        html! { <span class={classes!("badge", option.network.badge_class())}>{ option.network.code() }</span> }
                    };

                    html! {
                        <button class="option-button" key={option.id} {onclick}>
                            <span class="coin-icon">
                                <FallbackImage src={option.token.icon_url()} alt={option.symbol()} />
                            </span>
                            <span class="option-text">
                                <span class="option-title">{ option.symbol() }{" "}{ badge }</span>
                                <span class="option-caption">{ option.name() }</span>
                            </span>
                            <span class="option-arrow">{"→"}</span>
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
