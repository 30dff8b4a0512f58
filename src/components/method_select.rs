use yew::prelude::*;
use crate::components::FallbackImage;
use crate::models::{PaymentMethod, PaymentRequest};
use crate::utils::format_fiat;

#[derive(Properties, PartialEq)]
pub struct MethodSelectProps {
    pub request: PaymentRequest,
    pub on_select: Callback<PaymentMethod>,
}

#[function_component(MethodSelect)]
pub fn method_select(props: &MethodSelectProps) -> Html {
    let recipient = &props.request.recipient;
    let choose = |method: PaymentMethod| props.on_select.reform(move |_: MouseEvent| method);

    html! {
        <div class="screen-container">
            <div class="recipient">
                <FallbackImage src={recipient.avatar.clone()} alt={recipient.name.clone()} class={classes!("recipient-avatar")} />
                <div>
                    <h3 class="recipient-name">{ &recipient.name }</h3>
                    <p class="recipient-handle">{ &recipient.handle }</p>
                </div>
            </div>

            <div class="detail-card">
                <div class="detail-row">
                    <span class="detail-label">{"Purpose"}</span>
                    <span class="detail-value">{ &props.request.purpose }</span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">{"Amount"}</span>
                    <span class="detail-amount">{ format_fiat(&props.request) }</span>
                </div>
            </div>

            <h4 class="section-title">{"Choose Payment Method"}</h4>
            <div class="option-list">
                <button class="option-button" onclick={choose(PaymentMethod::Crypto)}>
                    <span class="option-icon crypto">{"₿"}</span>
                    <span class="option-text">
                        <span class="option-title">{"Cryptocurrency"}</span>
                        <span class="option-caption">{"Pay with Bitcoin, Ethereum, USDT, etc."}</span>
                    </span>
                    <span class="option-arrow">{"→"}</span>
                </button>
                <button class="option-button" onclick={choose(PaymentMethod::Fiat)}>
                    <span class="option-icon card">{"▭"}</span>
                    <span class="option-text">
                        <span class="option-title">{"Card Payment"}</span>
                        <span class="option-caption">{"Pay with credit or debit card"}</span>
                    </span>
                    <span class="option-arrow">{"→"}</span>
                </button>
            </div>
        </div>
    }
}
