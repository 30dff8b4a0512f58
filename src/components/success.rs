use log::error;
use yew::prelude::*;

use crate::models::{CurrencyOption, PaymentRequest};
use crate::utils::{
    build_receipt, crypto_amount, download_receipt, format_fiat, local_date,
    new_transaction_reference, open_external,
};

#[derive(Properties, PartialEq)]
pub struct SuccessProps {
    pub request: PaymentRequest,
    pub option: &'static CurrencyOption,
    pub email: String,
}

#[function_component(Success)]
pub fn success(props: &SuccessProps) -> Html {
    let option = props.option;
    let reference = use_state(|| {
        new_transaction_reference().unwrap_or_else(|e| {
            error!("{}", e);
            "tx_unavailable".to_string()
        })
    });
    let date = use_state(local_date);

    let on_download = {
        let receipt = build_receipt(&props.request, option, &props.email, &reference, &date);
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = download_receipt(&receipt) {
                error!("Failed to download receipt: {}", e);
            }
        })
    };

    let on_explorer = {
        let url = option.network.explorer_address_url(option.address);
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = open_external(&url) {
                error!("Failed to open explorer: {}", e);
            }
        })
    };

    let rows = [
        ("Transaction ID", (*reference).clone()),
        ("Amount Paid", format!("{} {}", crypto_amount(&props.request, option), option.symbol())),
        ("Network", option.network.code().to_string()),
        ("USD Value", format_fiat(&props.request)),
        ("Recipient", props.request.recipient.name.clone()),
        ("Purpose", props.request.purpose.clone()),
        ("Receipt Email", props.email.clone()),
        ("Date", (*date).clone()),
    ];

    html! {
        <div class="screen-container success-screen">
            <div class="success-icon">
                <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><path d="M22 4L12 14.01l-3-3"/>
                </svg>
            </div>
            <h2>{"Payment Received!"}</h2>
            <p class="instruction-text">{"Your payment has been successfully processed."}</p>

            <div class="detail-card">
                { for rows.iter().map(|(label, value)| html! {
                    <div class="detail-row" key={*label}>
                        <span class="detail-label">{ *label }</span>
                        <span class="detail-value">{ value }</span>
                    </div>
                })}
            </div>

            <div class="button-group">
                <button class="btn btn-primary btn-block" onclick={on_download}>{"Download Receipt"}</button>
                <button class="btn btn-secondary btn-block" onclick={on_explorer}>{"View on Blockchain"}</button>
            </div>

            <div class="success-note">
                { format!("A confirmation email has been sent to {}.", props.email) }
            </div>
        </div>
    }
}
