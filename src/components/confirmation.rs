use yew::prelude::*;
use crate::models::{CurrencyOption, PaymentRequest};
use crate::utils::{crypto_amount, format_fiat};

#[derive(Properties, PartialEq)]
pub struct ConfirmationProps {
    pub request: PaymentRequest,
    pub option: &'static CurrencyOption,
    pub on_confirm: Callback<()>,
}

#[function_component(Confirmation)]
pub fn confirmation(props: &ConfirmationProps) -> Html {
    let option = props.option;
    let amount = crypto_amount(&props.request, option);

    html! {
        <div class="screen-container">
            <div class="summary-card">
                <div class="summary-amount">{ format!("{} {}", amount, option.symbol()) }</div>
                <div class="summary-fiat">{ format!("≈ {}", format_fiat(&props.request)) }</div>
            </div>

            <div class="detail-list">
                <div class="detail-row bordered">
                    <span class="detail-label">{"Recipient"}</span>
                    <span class="detail-value">{ &props.request.recipient.name }</span>
                </div>
                <div class="detail-row bordered">
                    <span class="detail-label">{"Purpose"}</span>
                    <span class="detail-value">{ &props.request.purpose }</span>
                </div>
                <div class="detail-row bordered">
                    <span class="detail-label">{"Currency"}</span>
                    <span class="detail-value">
                        { option.symbol() }{" "}
                        <span class={classes!("badge", option.network.badge_class())}>{ option.network.code() }</span>
                    </span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">{"Amount"}</span>
                    <span class="detail-value">{ format!("{} {}", amount, option.symbol()) }</span>
                </div>
            </div>

            <button class="btn btn-primary btn-block" onclick={props.on_confirm.reform(|_| ())}>
                {"Continue to Email"}
            </button>
        </div>
    }
}
