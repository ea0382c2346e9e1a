//! Button classes.

use super::style_enum;
use crate::cn;

style_enum! {
    /// Button emphasis.
    pub enum ButtonVariant as "button variant" {
        /// Filled brand action.
        Primary => (
            "primary",
            "bg-primary-500 text-white hover:bg-primary-600 focus:ring-primary-500/20"
        ),
        /// Cream secondary action.
        Secondary => (
            "secondary",
            "bg-secondary-100 text-secondary-800 hover:bg-secondary-200 focus:ring-secondary-500/20"
        ),
        /// Bordered action on a transparent fill.
        Outline => (
            "outline",
            "bg-transparent border border-primary-500 text-primary-600 hover:bg-primary-50 focus:ring-primary-500/20"
        ),
        /// Text-only action.
        Ghost => (
            "ghost",
            "bg-transparent text-gray-700 hover:bg-gray-100 focus:ring-gray-500/20"
        ),
    }
    default = Primary;
}

style_enum! {
    /// Button padding and type size.
    pub enum ButtonSize as "button size" {
        /// Compact.
        Sm => ("sm", "px-3 py-1.5 text-sm"),
        /// Default.
        Md => ("md", "px-4 py-2 text-base"),
        /// Large.
        Lg => ("lg", "px-6 py-3 text-lg"),
    }
    default = Md;
}

const BASE: [&str; 4] = [
    "inline-flex items-center justify-center font-medium rounded-button",
    "transition-all duration-200 ease-out",
    "focus:outline-none focus:ring-2 focus:ring-offset-2",
    "hover:scale-[1.02] active:scale-[0.98]",
];

/// Applied while disabled or loading; cancels the hover and press scale.
pub const BUTTON_INACTIVE_CLASS: &str =
    "opacity-50 cursor-not-allowed hover:scale-100 active:scale-100";

/// Spinner overlay shown while a button is loading.
pub const BUTTON_SPINNER_CLASS: &str =
    "absolute w-4 h-4 border-2 border-current border-b-transparent rounded-full animate-spin";

/// Hides the label while loading but keeps its width, so the button does not resize.
pub const BUTTON_LOADING_CONTENT_CLASS: &str = "invisible";

/// Inputs to [`button_styles`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonStyles {
    /// Emphasis.
    pub variant: ButtonVariant,
    /// Size.
    pub size: ButtonSize,
    /// Disabled state.
    pub disabled: bool,
    /// Loading state; renders the same as disabled.
    pub loading: bool,
    /// Caller classes, merged last.
    pub class: Option<String>,
}

impl ButtonStyles {
    /// Whether the button should ignore interaction.
    pub fn is_inactive(&self) -> bool {
        self.disabled || self.loading
    }

    /// Merged class string.
    pub fn to_class(&self) -> String {
        button_styles(self)
    }
}

/// Class string for a button.
pub fn button_styles(props: &ButtonStyles) -> String {
    cn!(
        BASE,
        props.variant.classes(),
        props.size.classes(),
        (BUTTON_INACTIVE_CLASS, props.is_inactive()),
        props.class.as_deref(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_button_is_primary_medium() {
        assert_eq!(
            ButtonStyles::default().to_class(),
            "inline-flex items-center justify-center font-medium rounded-button \
             transition-all duration-200 ease-out \
             focus:outline-none focus:ring-2 focus:ring-offset-2 \
             hover:scale-[1.02] active:scale-[0.98] \
             bg-primary-500 text-white hover:bg-primary-600 focus:ring-primary-500/20 \
             px-4 py-2 text-base"
        );
    }

    #[test]
    fn each_variant_contributes_its_fill() {
        for (variant, expected) in [
            (ButtonVariant::Primary, "bg-primary-500"),
            (ButtonVariant::Secondary, "bg-secondary-100"),
            (ButtonVariant::Outline, "border-primary-500"),
            (ButtonVariant::Ghost, "text-gray-700"),
        ] {
            let class = ButtonStyles {
                variant,
                ..ButtonStyles::default()
            }
            .to_class();
            assert!(class.split(' ').any(|token| token == expected), "{variant}: {class}");
        }
    }

    #[test]
    fn sizes_scale_padding_and_type() {
        let small = ButtonStyles {
            size: ButtonSize::Sm,
            ..ButtonStyles::default()
        }
        .to_class();
        assert!(small.ends_with("px-3 py-1.5 text-sm"));

        let large = ButtonStyles {
            size: ButtonSize::Lg,
            ..ButtonStyles::default()
        }
        .to_class();
        assert!(large.ends_with("px-6 py-3 text-lg"));
    }

    #[test]
    fn disabled_cancels_hover_and_press_scale() {
        let class = ButtonStyles {
            disabled: true,
            ..ButtonStyles::default()
        }
        .to_class();
        assert!(class.contains("opacity-50 cursor-not-allowed hover:scale-100 active:scale-100"));
        assert!(!class.contains("hover:scale-[1.02]"));
        assert!(!class.contains("active:scale-[0.98]"));
    }

    #[test]
    fn loading_renders_like_disabled() {
        let loading = ButtonStyles {
            loading: true,
            ..ButtonStyles::default()
        };
        let disabled = ButtonStyles {
            disabled: true,
            ..ButtonStyles::default()
        };
        assert!(loading.is_inactive());
        assert_eq!(loading.to_class(), disabled.to_class());
    }

    #[test]
    fn caller_class_overrides_conflicting_utilities() {
        let class = ButtonStyles {
            class: Some("px-8 w-full".to_string()),
            ..ButtonStyles::default()
        }
        .to_class();
        assert!(class.ends_with("py-2 text-base px-8 w-full"));
        assert!(!class.contains("px-4"));
    }
}
