use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::debug;

const WARNING_ICON: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='none' stroke='%23fbbf24' stroke-width='2'%3E%3Cpath d='M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z'%3E%3C/path%3E%3C/svg%3E";

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: String,
    pub on_close: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class={classes!("toast", "toast-warning")} role="alertdialog">
            <span class="toast-icon" style={format!("-webkit-mask-image: url(\"{}\"); mask-image: url(\"{}\");", WARNING_ICON, WARNING_ICON)}></span>
            <span class="toast-message">{ &props.message }</span>
            <button class="toast-close" onclick={close}>{ "×" }</button>
        </div>
    }
}

/// Blocking notice: an overlay plus a centered toast that closes on click
/// or after `duration_ms`.
#[hook]
pub fn use_toast(duration_ms: u32) -> (Callback<String>, Html) {
    let toast = use_state(|| None::<String>);
    {
        let toast = toast.clone();
        use_effect_with(toast.clone(), move |t| {
            let handle = t.is_some().then(|| {
                let toast = toast.clone();
                Timeout::new(duration_ms, move || toast.set(None))
            });
            move || drop(handle)
        });
    }

    let clear_toast = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    let push_toast = {
        let toast = toast.clone();
        Callback::from(move |msg: String| {
            debug!("Notice: {}", msg);
            toast.set(Some(msg))
        })
    };

    let render_toast = html! {
        <div class="toast-container">
            if let Some(msg) = &*toast {
                <div class="toast-overlay" onclick={clear_toast.reform(|_| ())}></div>
                <div class="toast-center">
                    <Toast message={msg.clone()} on_close={clear_toast.clone()} />
                </div>
            }
        </div>
    };

    (push_toast, render_toast)
}
