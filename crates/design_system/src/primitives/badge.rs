use super::*;
use crate::styles::badge::{badge_dot_styles, BadgeStyles};
use crate::{BadgeShape, BadgeSize, BadgeVariant};

#[component]
/// Compact status label with an optional leading dot.
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional)] size: BadgeSize,
    #[prop(optional)] shape: BadgeShape,
    #[prop(optional)] dot: bool,
    #[prop(optional)] pulse: bool,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] class_name: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = BadgeStyles {
        variant,
        size,
        shape,
        pulse,
        class: class_name,
    }
    .to_class();

    view! {
        <span
            class=class
            role=role
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-shape=shape.token()
        >
            {dot.then(|| view! {
                <span data-testid="badge-dot" class=badge_dot_styles(variant) aria-hidden="true"></span>
            })}
            {children()}
        </span>
    }
}
