//! Alert banner classes.

use super::style_enum;
use crate::cn;

style_enum! {
    /// Alert severity. `classes()` yields the tinted fill, border, and text.
    pub enum AlertVariant as "alert variant" {
        /// Neutral information.
        Info => ("info", "bg-blue-50 border-blue-200 text-blue-800"),
        /// Completed action.
        Success => ("success", "bg-green-50 border-green-200 text-green-800"),
        /// Needs attention.
        Warning => ("warning", "bg-yellow-50 border-yellow-200 text-yellow-800"),
        /// Failed action.
        Error => ("error", "bg-red-50 border-red-200 text-red-800"),
    }
    default = Info;
}

impl AlertVariant {
    /// Icon color for this severity.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Info => "text-blue-500",
            Self::Success => "text-green-500",
            Self::Warning => "text-yellow-500",
            Self::Error => "text-red-500",
        }
    }

    /// `aria-live` politeness; errors interrupt the screen reader.
    pub fn aria_live(self) -> &'static str {
        match self {
            Self::Error => "assertive",
            _ => "polite",
        }
    }
}

style_enum! {
    /// Entry animation.
    pub enum AlertAnimation as "alert animation" {
        /// Opacity fade.
        FadeIn => ("fade-in", "animate-fade-in"),
        /// Fade while dropping 8px into place.
        SlideDown => ("slide-down", "animate-slide-down"),
        /// Appears immediately.
        None => ("none", ""),
    }
    default = FadeIn;
}

/// Title heading inside the alert body.
pub const ALERT_TITLE_CLASS: &str = "font-semibold mb-1";
/// Description paragraph inside the alert body.
pub const ALERT_DESCRIPTION_CLASS: &str = "text-sm";
/// Body column next to the icon.
pub const ALERT_CONTENT_CLASS: &str = "flex-1";
/// Fixed-width icon slot.
pub const ALERT_ICON_SLOT_CLASS: &str = "flex-shrink-0";

/// Inputs to [`alert_styles`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertStyles {
    /// Severity.
    pub variant: AlertVariant,
    /// Entry animation.
    pub animation: AlertAnimation,
    /// Caller classes, merged last.
    pub class: Option<String>,
}

impl AlertStyles {
    /// Merged class string.
    pub fn to_class(&self) -> String {
        alert_styles(self)
    }
}

/// Class string for the alert container.
pub fn alert_styles(props: &AlertStyles) -> String {
    cn!(
        "flex gap-3 p-4 rounded-lg border",
        props.variant.classes(),
        props.animation.classes(),
        props.class.as_deref(),
    )
}

/// Class string for the severity icon.
pub fn alert_icon_styles(variant: AlertVariant) -> String {
    cn!("w-5 h-5", variant.icon_class())
}

/// Class string for the dismiss button.
pub fn alert_dismiss_styles() -> String {
    cn!(
        "flex-shrink-0 p-1 rounded-md transition-colors duration-200",
        "hover:bg-black/5 focus:outline-none focus:ring-2 focus:ring-current/20",
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_alert_is_info_fading_in() {
        assert_eq!(
            AlertStyles::default().to_class(),
            "flex gap-3 p-4 rounded-lg border bg-blue-50 border-blue-200 text-blue-800 animate-fade-in"
        );
    }

    #[test]
    fn variants_tint_container_and_icon() {
        for (variant, hue) in [
            (AlertVariant::Success, "green"),
            (AlertVariant::Warning, "yellow"),
            (AlertVariant::Error, "red"),
        ] {
            let class = AlertStyles {
                variant,
                ..AlertStyles::default()
            }
            .to_class();
            assert!(class.contains(&format!("bg-{hue}-50 border-{hue}-200 text-{hue}-800")));
            assert_eq!(alert_icon_styles(variant), format!("w-5 h-5 text-{hue}-500"));
        }
    }

    #[test]
    fn animation_none_adds_nothing() {
        let class = AlertStyles {
            animation: AlertAnimation::None,
            ..AlertStyles::default()
        }
        .to_class();
        assert!(!class.contains("animate-"));
        assert!(class.ends_with("text-blue-800"));

        let slide = AlertStyles {
            animation: AlertAnimation::SlideDown,
            ..AlertStyles::default()
        }
        .to_class();
        assert!(slide.ends_with("animate-slide-down"));
    }

    #[test]
    fn only_errors_are_assertive() {
        assert_eq!(AlertVariant::Error.aria_live(), "assertive");
        for variant in [AlertVariant::Info, AlertVariant::Success, AlertVariant::Warning] {
            assert_eq!(variant.aria_live(), "polite");
        }
    }

    #[test]
    fn dismiss_button_classes() {
        assert_eq!(
            alert_dismiss_styles(),
            "flex-shrink-0 p-1 rounded-md transition-colors duration-200 \
             hover:bg-black/5 focus:outline-none focus:ring-2 focus:ring-current/20"
        );
    }

    #[test]
    fn animation_tokens_parse_with_dashes() {
        assert_eq!("slide-down".parse::<AlertAnimation>(), Ok(AlertAnimation::SlideDown));
        assert!("slideDown".parse::<AlertAnimation>().is_err());
    }
}
