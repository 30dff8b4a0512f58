use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StepHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub step: u8,
    pub on_back: Callback<()>,
}

#[function_component(StepHeader)]
pub fn step_header(props: &StepHeaderProps) -> Html {
    html! {
        <div class="step-header">
            <div class="step-header-row">
                <button class="back-button" onclick={props.on_back.reform(|_| ())} aria-label="Go back">
                    <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path d="M19 12H5M12 19l-7-7 7-7"/>
                    </svg>
                    {"Back"}
                </button>
                <span class="step-counter">{ format!("Step {} of 7", props.step) }</span>
            </div>
            <h2 class="step-title">{ props.title.clone() }</h2>
            if let Some(subtitle) = &props.subtitle {
                <p class="step-subtitle">{ subtitle.clone() }</p>
            }
        </div>
    }
}
