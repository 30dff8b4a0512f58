use yew::prelude::*;
use crate::catalog;
use crate::components::FallbackImage;
use crate::models::{CurrencyOption, Token};
use crate::utils::abbreviate_address;

#[derive(Properties, PartialEq)]
pub struct NetworkSelectProps {
    pub token: Token,
    pub on_select: Callback<&'static CurrencyOption>,
}

#[function_component(NetworkSelect)]
pub fn network_select(props: &NetworkSelectProps) -> Html {
    let token = props.token;

    html! {
        <div class="screen-container">
            <div class="network-token">
                <FallbackImage src={token.icon_url()} alt={token.symbol()} class={classes!("network-token-icon")} />
                <span class="network-token-symbol">{ token.symbol() }</span>
            </div>
            <p class="instruction-text">
                { format!("Choose the blockchain network for your {} payment", token) }
            </p>

            <div class="option-list">
                { for catalog::options_for(token).into_iter().map(|option| {
                    let onclick = props.on_select.reform(move |_: MouseEvent| option);
                    html! {
                        <button class="option-button network-option" key={option.id} {onclick}>
                            <span class="coin-icon large">
                                <FallbackImage src={option.network.icon_url()} alt={option.network.code()} />
                            </span>
                            <span class="option-text">
                                <span class="option-title">
                                    { option.network.code() }{" "}
                                    <span class={classes!("badge", option.network.badge_class())}>
                                        { format!("{} Network", option.network) }
                                    </span>
                                </span>
                                <span class="option-caption">{ option.network.description() }</span>
                                <span class="option-address">{ format!("Address: {}", abbreviate_address(option.address)) }</span>
                            </span>
                            <span class="option-arrow">{"→"}</span>
                        </button>
                    }
                })}
            </div>

            <div class="warning-box">
                <h4>{"Important"}</h4>
                <p>
                    { format!("Make sure to send {} only to the selected network. Sending to the wrong network may result in permanent loss of funds.", token) }
                </p>
            </div>
        </div>
    }
}
