use leptos::logging::debug_warn;

use super::*;
use crate::styles::alert::{
    alert_dismiss_styles, alert_icon_styles, AlertStyles, ALERT_CONTENT_CLASS,
    ALERT_DESCRIPTION_CLASS, ALERT_ICON_SLOT_CLASS, ALERT_TITLE_CLASS,
};
use crate::{AlertAnimation, AlertVariant};

/// Click path of the dismiss button. Returns whether a handler ran.
pub(crate) fn dismiss_alert(on_dismiss: Option<Callback<()>>) -> bool {
    forward_unless_inactive(on_dismiss, false, ())
}

#[component]
/// Inline message banner.
///
/// The severity icon is shown by default; pass `show_icon=false` to drop it or `icon` to replace
/// it. A dismissible alert renders a close button that calls `on_dismiss`; the alert does not
/// hide itself, so the owner decides whether to unmount it.
pub fn Alert(
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional)] animation: AlertAnimation,
    #[prop(default = true)] show_icon: bool,
    #[prop(optional, into)] icon: Option<ViewFn>,
    #[prop(optional)] dismissible: bool,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    #[prop(optional, into)] class_name: Option<String>,
    children: Children,
) -> impl IntoView {
    if dismissible && on_dismiss.is_none() {
        debug_warn!("dismissible {variant} alert rendered without an on_dismiss handler");
    }

    let class = AlertStyles {
        variant,
        animation,
        class: class_name,
    }
    .to_class();

    let icon = show_icon.then(|| {
        let glyph = match icon {
            Some(icon) => icon.run(),
            None => view! {
                <Icon icon=IconName::for_alert(variant) class_name=alert_icon_styles(variant) />
            }
            .into_view(),
        };
        view! {
            <div data-testid="alert-icon" class=ALERT_ICON_SLOT_CLASS>
                {glyph}
            </div>
        }
    });

    let dismiss = dismissible.then(|| {
        view! {
            <button
                type="button"
                aria-label="Dismiss alert"
                class=alert_dismiss_styles()
                data-ui-slot="dismiss"
                on:click=move |_| {
                    dismiss_alert(on_dismiss);
                }
            >
                <Icon icon=IconName::Dismiss size=IconSize::Sm />
            </button>
        }
    });

    view! {
        <div
            role="alert"
            aria-live=variant.aria_live()
            class=class
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-variant=variant.token()
        >
            {icon}
            <div class=ALERT_CONTENT_CLASS>{children()}</div>
            {dismiss}
        </div>
    }
}

#[component]
/// Alert heading, rendered as `<h4>`.
pub fn AlertTitle(
    #[prop(optional, into)] class_name: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = cn!(ALERT_TITLE_CLASS, class_name);
    view! {
        <h4 class=class data-ui-slot="title">
            {children()}
        </h4>
    }
}

#[component]
/// Alert body copy.
pub fn AlertDescription(
    #[prop(optional, into)] class_name: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = cn!(ALERT_DESCRIPTION_CLASS, class_name);
    view! {
        <p class=class data-ui-slot="description">
            {children()}
        </p>
    }
}
