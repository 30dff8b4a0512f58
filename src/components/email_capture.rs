use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmailCaptureProps {
    #[prop_or_default]
    pub initial: String,
    /// Validation message from the last rejected submit.
    #[prop_or_default]
    pub error: Option<String>,
    pub on_submit: Callback<String>,
    pub on_edit: Callback<()>,
}

#[function_component(EmailCapture)]
pub fn email_capture(props: &EmailCaptureProps) -> Html {
    let email = use_state(|| props.initial.clone());

    let oninput = {
        let email = email.clone();
        let on_edit = props.on_edit.clone();
        let has_error = props.error.is_some();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                email.set(input.value());
                if has_error {
                    on_edit.emit(());
                }
            }
        })
    };

    let onsubmit = {
        let email = email.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*email).clone());
        })
    };

    html! {
        <div class="screen-container">
            <div class="email-intro">
                <div class="email-icon">{"✉"}</div>
                <h3>{"Email Address Required"}</h3>
                <p class="instruction-text">{"We'll send payment confirmation and receipt to this email"}</p>
            </div>

            <form class="email-form" {onsubmit} novalidate=true>
                <label for="email-input" class="field-label">{"Email Address"}</label>
                <input
                    id="email-input"
                    type="email"
                    placeholder="Enter your email address"
                    value={(*email).clone()}
                    {oninput}
                    class={classes!("input", props.error.is_some().then_some("error"))}
                    aria-invalid={props.error.is_some().to_string()}
                />
                if let Some(error) = &props.error {
                    <p class="status error" aria-live="assertive">{ error }</p>
                }
                <button type="submit" class="btn btn-primary btn-block">{"Continue to Payment"}</button>
            </form>
        </div>
    }
}
