//! Card container and section classes.

use super::style_enum;
use crate::cn;

style_enum! {
    /// Card surface treatment.
    pub enum CardVariant as "card variant" {
        /// White surface with a light shadow.
        Default => ("default", "bg-white shadow-sm"),
        /// White surface with a stronger shadow.
        Elevated => ("elevated", "bg-white shadow-md"),
        /// White surface with a hairline border and no shadow.
        Outlined => ("outlined", "bg-white border border-gray-200"),
        /// Muted fill.
        Filled => ("filled", "bg-gray-50"),
    }
    default = Default;
}

style_enum! {
    /// Inner padding.
    pub enum CardPadding as "card padding" {
        /// Flush content.
        None => ("none", "p-0"),
        /// Compact.
        Sm => ("sm", "p-3"),
        /// Default.
        Md => ("md", "p-4"),
        /// Roomy.
        Lg => ("lg", "p-6"),
    }
    default = Md;
}

const INTERACTIVE: [&str; 3] = [
    "transition-all duration-200 ease-out",
    "hover:shadow-md hover:scale-[1.01]",
    "cursor-pointer",
];

/// Header section.
pub const CARD_HEADER_CLASS: &str = "pb-2";
/// Title heading.
pub const CARD_TITLE_CLASS: &str = "text-lg font-semibold text-gray-900";
/// Supporting copy under the title.
pub const CARD_DESCRIPTION_CLASS: &str = "text-sm text-gray-500";
/// Body section.
pub const CARD_CONTENT_CLASS: &str = "py-2";
/// Action row, separated from the body by a rule.
pub const CARD_FOOTER_CLASS: &str = "pt-4 border-t border-gray-100 flex items-center gap-2";

/// Inputs to [`card_styles`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardStyles {
    /// Surface treatment.
    pub variant: CardVariant,
    /// Inner padding.
    pub padding: CardPadding,
    /// Adds hover lift and a pointer cursor.
    pub interactive: bool,
    /// Caller classes, merged last.
    pub class: Option<String>,
}

impl CardStyles {
    /// Merged class string.
    pub fn to_class(&self) -> String {
        card_styles(self)
    }
}

/// Class string for a card container.
pub fn card_styles(props: &CardStyles) -> String {
    cn!(
        "rounded-lg",
        props.variant.classes(),
        props.padding.classes(),
        (INTERACTIVE, props.interactive),
        props.class.as_deref(),
    )
}

/// Merges caller classes onto a card section's base class.
pub fn card_section_styles(base: &str, class: Option<&str>) -> String {
    cn!(base, class)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_card_is_small_shadow_medium_padding() {
        assert_eq!(CardStyles::default().to_class(), "rounded-lg bg-white shadow-sm p-4");
    }

    #[test]
    fn outlined_card_has_border_and_no_shadow() {
        let class = CardStyles {
            variant: CardVariant::Outlined,
            ..CardStyles::default()
        }
        .to_class();
        assert_eq!(class, "rounded-lg bg-white border border-gray-200 p-4");
    }

    #[test]
    fn padding_steps() {
        for (padding, expected) in [
            (CardPadding::None, "p-0"),
            (CardPadding::Sm, "p-3"),
            (CardPadding::Md, "p-4"),
            (CardPadding::Lg, "p-6"),
        ] {
            let class = CardStyles {
                padding,
                ..CardStyles::default()
            }
            .to_class();
            assert!(class.ends_with(expected), "{padding}: {class}");
        }
    }

    #[test]
    fn interactive_card_lifts_on_hover() {
        let class = CardStyles {
            interactive: true,
            ..CardStyles::default()
        }
        .to_class();
        assert!(class.contains("hover:shadow-md hover:scale-[1.01]"));
        assert!(class.ends_with("cursor-pointer"));
    }

    #[test]
    fn caller_padding_overrides_variant_padding() {
        let class = CardStyles {
            class: Some("p-8".to_string()),
            ..CardStyles::default()
        }
        .to_class();
        assert_eq!(class, "rounded-lg bg-white shadow-sm p-8");
    }

    #[test]
    fn section_classes_merge_caller_overrides() {
        assert_eq!(card_section_styles(CARD_HEADER_CLASS, None), "pb-2");
        assert_eq!(
            card_section_styles(CARD_TITLE_CLASS, Some("text-xl")),
            "font-semibold text-gray-900 text-xl"
        );
    }
}
