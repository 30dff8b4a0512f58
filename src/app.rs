use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::checkout::{transition, Event, Session};
use crate::components::toast::use_toast;
use crate::components::*;
use crate::config::CheckoutConfig;
use crate::error::ErrorKind;
use crate::models::Step;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<CheckoutConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let session = use_state(Session::default);
    let email_error = use_state(|| None::<String>);
    let (push_toast, render_toast) = use_toast(config.notice_ms);

    let dispatch = {
        let session = session.clone();
        let email_error = email_error.clone();
        let push_toast = push_toast.clone();
        Callback::from(move |event: Event| match transition(&session, event) {
            Ok(next) => {
                email_error.set(None);
                session.set(next);
            }
            Err(err) => match (err.kind(), err.notice()) {
                (_, Some(notice)) => push_toast.emit(notice),
                (ErrorKind::Validation, None) => email_error.set(Some(err.to_string())),
                _ => warn!("Ignored checkout event: {}", err),
            },
        })
    };

    let on_back = dispatch.reform(|_: ()| Event::Back);
    let header = |title: &'static str, subtitle: Option<String>| {
        html! {
            <StepHeader
                title={title}
                subtitle={subtitle.map(AttrValue::from)}
                step={session.step.number()}
                on_back={on_back.clone()}
            />
        }
    };

    let request = config.request.clone();
    let email = session.email.clone().unwrap_or_default();

    let screen = match (session.step, session.token, session.option) {
        (Step::MethodSelect, _, _) => html! {
            <MethodSelect request={request} on_select={dispatch.reform(Event::ChooseMethod)} />
        },

        (Step::CryptoSelect, _, _) => html! {
            <>
                { header(Step::CryptoSelect.title(), None) }
                <CryptoSelect on_select={dispatch.reform(Event::ChooseToken)} />
            </>
        },

        (Step::NetworkSelect, Some(token), _) => html! {
            <>
                { header(Step::NetworkSelect.title(), Some(format!("Choose network for {}", token))) }
                <NetworkSelect token={token} on_select={dispatch.reform(Event::ChooseNetwork)} />
            </>
        },

        (Step::Confirmation, _, Some(option)) => html! {
            <>
                { header(Step::Confirmation.title(), None) }
                <Confirmation
                    request={request}
                    option={option}
                    on_confirm={dispatch.reform(|_: ()| Event::Confirm)}
                />
            </>
        },

        (Step::EmailCapture, _, _) => {
            let on_edit = {
                let email_error = email_error.clone();
                Callback::from(move |_: ()| email_error.set(None))
            };
            html! {
                <>
                    { header(Step::EmailCapture.title(), None) }
                    <EmailCapture
                        initial={email}
                        error={(*email_error).clone()}
                        on_submit={dispatch.reform(Event::SubmitEmail)}
                        {on_edit}
                    />
                </>
            }
        }

        (Step::AddressDisplay, _, Some(option)) => html! {
            <>
                { header(Step::AddressDisplay.title(), None) }
                <AddressDisplay
                    request={request}
                    option={option}
                    email={email}
                    countdown_secs={config.countdown_secs}
                    copy_reset_ms={config.copy_reset_ms}
                    qr_endpoint={config.qr_endpoint.clone()}
                    qr_size={config.qr_size}
                    on_payment_sent={dispatch.reform(|_: ()| Event::PaymentSent)}
                />
            </>
        },

        (Step::Success, _, Some(option)) => html! {
            <Success request={request} option={option} email={email} />
        },

        (step, _, _) => {
            warn!("Step {:?} reached without its selection", step);
            html! {}
        }
    };

    html! {
        <div class="checkout-page">
            <div class="checkout-card" role="main" aria-label="Checkout">
                { screen }
            </div>
            { render_toast }
        </div>
    }
}
