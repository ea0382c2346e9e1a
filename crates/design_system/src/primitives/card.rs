use super::*;
use crate::styles::card::{
    card_section_styles, CardStyles, CARD_CONTENT_CLASS, CARD_DESCRIPTION_CLASS,
    CARD_FOOTER_CLASS, CARD_HEADER_CLASS, CARD_TITLE_CLASS,
};
use crate::{CardPadding, CardVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Element a [`Card`] renders as.
pub enum CardElement {
    /// Generic container.
    #[default]
    Div,
    /// Thematic section of a page.
    Section,
    /// Self-contained composition.
    Article,
}

impl CardElement {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Section => "section",
            Self::Article => "article",
        }
    }
}

#[component]
/// Surface container with optional hover lift.
pub fn Card(
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] padding: CardPadding,
    #[prop(optional)] interactive: bool,
    #[prop(optional)] element: CardElement,
    #[prop(optional, into)] class_name: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = CardStyles {
        variant,
        padding,
        interactive,
        class: class_name,
    }
    .to_class();
    let interactive = bool_token(interactive);

    match element {
        CardElement::Div => view! {
            <div
                class=class
                data-ui-primitive="true"
                data-ui-kind="card"
                data-ui-variant=variant.token()
                data-ui-padding=padding.token()
                data-ui-interactive=interactive
                data-ui-element=element.token()
            >
                {children()}
            </div>
        }
        .into_view(),
        CardElement::Section => view! {
            <section
                class=class
                data-ui-primitive="true"
                data-ui-kind="card"
                data-ui-variant=variant.token()
                data-ui-padding=padding.token()
                data-ui-interactive=interactive
                data-ui-element=element.token()
            >
                {children()}
            </section>
        }
        .into_view(),
        CardElement::Article => view! {
            <article
                class=class
                data-ui-primitive="true"
                data-ui-kind="card"
                data-ui-variant=variant.token()
                data-ui-padding=padding.token()
                data-ui-interactive=interactive
                data-ui-element=element.token()
            >
                {children()}
            </article>
        }
        .into_view(),
    }
}

#[component]
/// Top section of a card.
pub fn CardHeader(
    #[prop(optional, into)] class_name: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=card_section_styles(CARD_HEADER_CLASS, class_name.as_deref()) data-ui-slot="header">
            {children()}
        </div>
    }
}

#[component]
/// Card heading, rendered as `<h3>`.
pub fn CardTitle(
    #[prop(optional, into)] class_name: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <h3 class=card_section_styles(CARD_TITLE_CLASS, class_name.as_deref()) data-ui-slot="title">
            {children()}
        </h3>
    }
}

#[component]
/// Supporting copy under the title.
pub fn CardDescription(
    #[prop(optional, into)] class_name: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <p
            class=card_section_styles(CARD_DESCRIPTION_CLASS, class_name.as_deref())
            data-ui-slot="description"
        >
            {children()}
        </p>
    }
}

#[component]
/// Card body.
pub fn CardContent(
    #[prop(optional, into)] class_name: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=card_section_styles(CARD_CONTENT_CLASS, class_name.as_deref()) data-ui-slot="content">
            {children()}
        </div>
    }
}

#[component]
/// Action row at the bottom of a card.
pub fn CardFooter(
    #[prop(optional, into)] class_name: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=card_section_styles(CARD_FOOTER_CLASS, class_name.as_deref()) data-ui-slot="footer">
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn card_renders_as_div_unless_asked() {
        assert_eq!(CardElement::default(), CardElement::Div);
        assert_eq!(CardElement::Article.token(), "article");
        assert_eq!(CardElement::Section.token(), "section");
    }

    #[test]
    fn element_prop_picks_the_tag() {
        let html = render(|| {
            view! {
                <Card element=CardElement::Article interactive=true>
                    <CardTitle>"Title"</CardTitle>
                </Card>
            }
        });
        assert!(html.contains("<article"));
        assert!(html.contains(r#"data-ui-interactive="true""#));
        assert!(html.contains("<h3"));
        assert!(!html.contains("<section"));
    }
}
