use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use gloo_timers::callback::Interval;
use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{CurrencyOption, PaymentRequest};
use crate::utils::{
    copy_to_clipboard, crypto_amount, generate_qr_data_url, open_external, qr_image_url,
    wallet_uri, CopyFeedback, Countdown,
};

impl Reducible for Countdown {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(self.tick())
    }
}

pub enum CopyAction {
    Copied,
    Expire,
}

impl Reducible for CopyFeedback {
    type Action = CopyAction;

    fn reduce(self: Rc<Self>, action: CopyAction) -> Rc<Self> {
        Rc::new(match action {
            CopyAction::Copied => self.copied(),
            CopyAction::Expire => self.expire(),
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct AddressDisplayProps {
    pub request: PaymentRequest,
    pub option: &'static CurrencyOption,
    pub email: String,
    pub countdown_secs: u32,
    pub copy_reset_ms: u32,
    pub qr_endpoint: String,
    pub qr_size: u32,
    pub on_payment_sent: Callback<()>,
}

#[function_component(AddressDisplay)]
pub fn address_display(props: &AddressDisplayProps) -> Html {
    let option = props.option;
    let amount = crypto_amount(&props.request, option);

    let countdown = use_reducer(|| Countdown::new(props.countdown_secs));
    {
        let dispatcher = countdown.dispatcher();
        use_effect_with((), move |_| {
            debug!("Payment countdown started");
            let interval = Interval::new(1_000, move || dispatcher.dispatch(()));
            move || {
                debug!("Payment countdown stopped");
                drop(interval)
            }
        });
    }

    let qr_src = use_state(|| qr_image_url(&props.qr_endpoint, props.qr_size, option.address));
    let on_qr_error = {
        let qr_src = qr_src.clone();
        let size = props.qr_size;
        Callback::from(move |_: Event| {
            if qr_src.starts_with("data:") {
                return;
            }
            match generate_qr_data_url(option.address, size) {
                Ok(url) => {
                    debug!("Hosted QR image failed, rendering locally");
                    qr_src.set(url);
                }
                Err(e) => error!("Failed to render QR code: {}", e),
            }
        })
    };

    let copied = use_reducer(CopyFeedback::default);
    let on_copy = {
        let copied = copied.clone();
        let reset_ms = props.copy_reset_ms;
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            spawn_local(async move {
                match copy_to_clipboard(option.address).await {
                    Ok(()) => {
                        copied.dispatch(CopyAction::Copied);
                        TimeoutFuture::new(reset_ms).await;
                        copied.dispatch(CopyAction::Expire);
                    }
                    Err(e) => error!("Failed to copy address: {}", e),
                }
            });
        })
    };

    let on_open_wallet = {
        let uri = wallet_uri(option, &amount);
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = open_external(&uri) {
                error!("Failed to open wallet link: {}", e);
            }
        })
    };

    html! {
        <div class="screen-container">
            <div class={classes!("timer-box", countdown.is_expired().then_some("expired"))}>
                <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="12" r="10"/><path d="M12 6v6l4 2"/>
                </svg>
                <span>{ format!("Payment expires in {}", *countdown) }</span>
            </div>

            <div class="qr-container">
                <img src={(*qr_src).clone()} alt={format!("QR code for {}", option.address)} class="qr-code" onerror={on_qr_error} />
                <p class="instruction-text">{"Scan QR code with your wallet app"}</p>
            </div>

            <div class="detail-card">
                <div class="detail-row">
                    <span class="detail-label">{"Amount"}</span>
                    <span class="detail-value mono">{ format!("{} {}", amount, option.symbol()) }</span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">{"Network"}</span>
                    <span class={classes!("badge", option.network.badge_class())}>{ option.network.code() }</span>
                </div>
            </div>

            <label class="field-label" for="pay-address">{"Send to Address"}</label>
            <div class="address-container">
                <input id="pay-address" type="text" class="input mono" value={option.address} readonly=true />
                <button class="copy-button" onclick={on_copy} title="Copy to clipboard">
                    if copied.is_shown() {
                        <svg class="icon check" viewBox="0 0 24 24" fill="currentColor">
                            <path d="M9 16.17L4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z"/>
                        </svg>
                        <span class="copied">{"Copied"}</span>
                    } else {
                        <svg class="icon copy" viewBox="0 0 24 24" fill="currentColor">
                            <path d="M16 1H4c-1.1 0-2 .9-2 2v14h2V3h12V1zm3 4H8c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h11c1.1 0 2-.9 2-2V7c0-1.1-.9-2-2-2zm0 16H8V7h11v14z"/>
                        </svg>
                        <span>{"Copy"}</span>
                    }
                </button>
            </div>

            <div class="button-group">
                <button class="btn btn-success btn-block" onclick={props.on_payment_sent.reform(|_| ())}>
                    {"I've Sent the Payment"}
                </button>
                <button class="btn btn-link" onclick={on_open_wallet}>{"Open in Wallet App"}</button>
            </div>

            <div class="info-box">
                <h4>{"Important Instructions:"}</h4>
                <ul>
                    <li>{ format!("Send exactly {} {}", amount, option.symbol()) }</li>
                    <li>{ format!("Use {} network only", option.network) }</li>
                    <li>{"Payment will be confirmed automatically"}</li>
                    <li>{ format!("Receipt will be sent to {}", props.email) }</li>
                </ul>
            </div>
        </div>
    }
}
