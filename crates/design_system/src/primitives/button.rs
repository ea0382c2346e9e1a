use super::*;
use crate::styles::button::{
    ButtonStyles, BUTTON_LOADING_CONTENT_CLASS, BUTTON_SPINNER_CLASS,
};
use crate::{ButtonSize, ButtonVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Native `type` attribute of a `<button>`.
pub enum ButtonType {
    /// Plain action; never submits a form.
    #[default]
    Button,
    /// Submits the enclosing form.
    Submit,
    /// Resets the enclosing form.
    Reset,
}

impl ButtonType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

pub(crate) fn loading_content_class(loading: bool) -> &'static str {
    if loading {
        BUTTON_LOADING_CONTENT_CLASS
    } else {
        ""
    }
}

#[component]
/// Action button with variant, size, disabled, and loading states.
///
/// Loading overlays a spinner, keeps the label's width, and marks the button busy. Clicks are
/// not forwarded while disabled or loading.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] button_type: ButtonType,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] class_name: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let inactive = move || disabled.get() || loading.get();
    let class = move || {
        ButtonStyles {
            variant,
            size,
            disabled: disabled.get(),
            loading: loading.get(),
            class: class_name.clone(),
        }
        .to_class()
    };

    view! {
        <button
            type=button_type.token()
            class=class
            id=id
            aria-label=aria_label
            disabled=inactive
            aria-disabled=move || bool_token(inactive())
            aria-busy=move || bool_token(loading.get())
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            on:click=move |ev| {
                forward_unless_inactive(on_click, inactive(), ev);
            }
        >
            <Show when=move || loading.get() fallback=|| ()>
                <span
                    data-testid="button-spinner"
                    class=BUTTON_SPINNER_CLASS
                    aria-hidden="true"
                ></span>
            </Show>
            <span class=move || loading_content_class(loading.get())>{children()}</span>
        </button>
    }
}
