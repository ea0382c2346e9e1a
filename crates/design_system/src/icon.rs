//! Inline SVG icon set.
//!
//! Every icon is a solid 20x20 glyph filled with `currentColor`, so color comes from the
//! surrounding `text-*` class.

use leptos::*;

use crate::cn;
use crate::styles::style_enum;
use crate::AlertVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named glyphs.
pub enum IconName {
    /// Circled "i".
    Info,
    /// Circled check mark.
    Success,
    /// Triangle with exclamation mark.
    Warning,
    /// Circled cross.
    Error,
    /// Plain cross used by close buttons.
    Dismiss,
}

impl IconName {
    /// Default glyph for an alert severity.
    pub fn for_alert(variant: AlertVariant) -> Self {
        match variant {
            AlertVariant::Info => Self::Info,
            AlertVariant::Success => Self::Success,
            AlertVariant::Warning => Self::Warning,
            AlertVariant::Error => Self::Error,
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Dismiss => "dismiss",
        }
    }

    /// SVG path data on a `0 0 20 20` view box.
    pub fn path(self) -> &'static str {
        match self {
            Self::Info => "M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7-4a1 1 0 11-2 0 1 1 0 012 0zM9 9a1 1 0 000 2v3a1 1 0 001 1h1a1 1 0 100-2v-3a1 1 0 00-1-1H9z",
            Self::Success => "M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z",
            Self::Warning => "M8.257 3.099c.765-1.36 2.722-1.36 3.486 0l5.58 9.92c.75 1.334-.213 2.98-1.742 2.98H4.42c-1.53 0-2.493-1.646-1.743-2.98l5.58-9.92zM11 13a1 1 0 11-2 0 1 1 0 012 0zm-1-8a1 1 0 00-1 1v3a1 1 0 002 0V6a1 1 0 00-1-1z",
            Self::Error => "M10 18a8 8 0 100-16 8 8 0 000 16zM8.707 7.293a1 1 0 00-1.414 1.414L8.586 10l-1.293 1.293a1 1 0 101.414 1.414L10 11.414l1.293 1.293a1 1 0 001.414-1.414L11.414 10l1.293-1.293a1 1 0 00-1.414-1.414L10 8.586 8.707 7.293z",
            Self::Dismiss => "M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z",
        }
    }
}

style_enum! {
    /// Icon box size.
    pub enum IconSize as "icon size" {
        /// 16px, used inside buttons.
        Sm => ("sm", "w-4 h-4"),
        /// 20px, used inside alerts.
        Md => ("md", "w-5 h-5"),
        /// 24px.
        Lg => ("lg", "w-6 h-6"),
    }
    default = Md;
}

#[component]
/// Decorative SVG icon; hidden from assistive technology.
pub fn Icon(
    icon: IconName,
    #[prop(optional)] size: IconSize,
    #[prop(optional, into)] class_name: Option<String>,
) -> impl IntoView {
    let class = cn!(size.classes(), class_name);
    view! {
        <svg
            class=class
            viewBox="0 0 20 20"
            fill="currentColor"
            aria-hidden="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
        >
            <path fill-rule="evenodd" d=icon.path() clip-rule="evenodd"></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn alert_variants_map_to_matching_glyphs() {
        assert_eq!(IconName::for_alert(AlertVariant::Info), IconName::Info);
        assert_eq!(IconName::for_alert(AlertVariant::Error), IconName::Error);
        assert_eq!(IconName::for_alert(AlertVariant::Warning).token(), "warning");
    }

    #[test]
    fn paths_are_distinct_and_absolute() {
        let names = [
            IconName::Info,
            IconName::Success,
            IconName::Warning,
            IconName::Error,
            IconName::Dismiss,
        ];
        for (index, name) in names.iter().enumerate() {
            assert!(name.path().starts_with('M'));
            for other in &names[index + 1..] {
                assert_ne!(name.path(), other.path());
            }
        }
    }

    #[test]
    fn sizes_match_alert_and_button_slots() {
        assert_eq!(IconSize::default().classes(), "w-5 h-5");
        assert_eq!(IconSize::Sm.classes(), "w-4 h-4");
    }
}
