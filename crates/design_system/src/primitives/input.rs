use super::*;
use crate::styles::input::{
    InputStyles, INPUT_ERROR_CLASS, INPUT_HELPER_CLASS, INPUT_LABEL_CLASS, INPUT_WRAPPER_CLASS,
};
use crate::InputSize;

fn visible_message(message: Option<&str>) -> Option<&str> {
    message.filter(|message| !message.is_empty())
}

/// `aria-describedby` target: the error when present, otherwise the helper text.
pub(crate) fn input_described_by(
    input_id: &str,
    error: Option<&str>,
    helper_text: Option<&str>,
) -> Option<String> {
    if visible_message(error).is_some() {
        Some(format!("{input_id}-error"))
    } else {
        visible_message(helper_text).map(|_| format!("{input_id}-helper"))
    }
}

#[component]
/// Labelled text field with helper and error messaging.
///
/// An error message replaces the helper text, turns the border red, and sets `aria-invalid`.
/// Without an `id`, a unique one is generated so the label and messages stay linked.
pub fn Input(
    #[prop(optional)] size: InputSize,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional, into)] input_class_name: Option<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let input_id = id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(next_input_id);
    let error = Signal::derive(move || error.get());
    let has_error = move || error.with(|error| visible_message(error.as_deref()).is_some());

    let described_by = {
        let input_id = input_id.clone();
        let helper_text = helper_text.clone();
        move || input_described_by(&input_id, error.get().as_deref(), helper_text.as_deref())
    };
    let input_class = move || {
        InputStyles {
            size,
            error: has_error(),
            disabled: disabled.get(),
            class: input_class_name.clone(),
        }
        .to_class()
    };
    let error_id = format!("{input_id}-error");
    let helper_id = format!("{input_id}-helper");
    let label = label.map(|label| {
        view! { <label for=input_id.clone() class=INPUT_LABEL_CLASS>{label}</label> }
    });
    let wrapper_class = cn!(INPUT_WRAPPER_CLASS, class_name);

    view! {
        <div
            class=wrapper_class
            data-ui-primitive="true"
            data-ui-kind="input"
            data-ui-size=size.token()
        >
            {label}
            <input
                id=input_id
                name=name
                type=input_type
                placeholder=placeholder
                class=input_class
                disabled=move || disabled.get()
                aria-invalid=move || bool_token(has_error())
                aria-describedby=described_by
                prop:value=move || value.get()
                on:input=move |ev| {
                    forward_unless_inactive(on_input, false, event_target_value(&ev));
                }
            />
            {move || {
                error
                    .get()
                    .filter(|message| !message.is_empty())
                    .map(|message| view! {
                        <p id=error_id.clone() class=INPUT_ERROR_CLASS>{message}</p>
                    })
            }}
            {move || {
                if has_error() {
                    return None;
                }
                helper_text.clone().filter(|text| !text.is_empty()).map(|text| view! {
                    <p id=helper_id.clone() class=INPUT_HELPER_CLASS>{text}</p>
                })
            }}
        </div>
    }
}
