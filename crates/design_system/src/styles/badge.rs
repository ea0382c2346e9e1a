//! Badge and status-dot classes.

use super::style_enum;
use crate::cn;

style_enum! {
    /// Badge color role. `classes()` yields the fill and text color pair.
    pub enum BadgeVariant as "badge variant" {
        /// Neutral gray.
        Default => ("default", "bg-gray-100 text-gray-800"),
        /// Brand tint.
        Primary => ("primary", "bg-primary-100 text-primary-800"),
        /// Positive status.
        Success => ("success", "bg-green-100 text-green-800"),
        /// Cautionary status.
        Warning => ("warning", "bg-yellow-100 text-yellow-800"),
        /// Failure status.
        Error => ("error", "bg-red-100 text-red-800"),
        /// Informational status.
        Info => ("info", "bg-blue-100 text-blue-800"),
    }
    default = Default;
}

impl BadgeVariant {
    /// Solid fill for the leading status dot.
    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Default => "bg-gray-500",
            Self::Primary => "bg-primary-500",
            Self::Success => "bg-green-500",
            Self::Warning => "bg-yellow-500",
            Self::Error => "bg-red-500",
            Self::Info => "bg-blue-500",
        }
    }
}

style_enum! {
    /// Badge padding and type size.
    pub enum BadgeSize as "badge size" {
        /// Compact.
        Sm => ("sm", "px-1.5 py-0.5 text-xs"),
        /// Default.
        Md => ("md", "px-2 py-0.5 text-sm"),
        /// Large.
        Lg => ("lg", "px-2.5 py-1 text-base"),
    }
    default = Md;
}

style_enum! {
    /// Badge corner treatment.
    pub enum BadgeShape as "badge shape" {
        /// Slightly rounded corners.
        Rounded => ("rounded", "rounded-md"),
        /// Fully rounded ends.
        Pill => ("pill", "rounded-full"),
        /// Square corners.
        Square => ("square", "rounded-none"),
    }
    default = Rounded;
}

/// Inputs to [`badge_styles`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeStyles {
    /// Color role.
    pub variant: BadgeVariant,
    /// Size.
    pub size: BadgeSize,
    /// Corner treatment.
    pub shape: BadgeShape,
    /// Loops a subtle opacity pulse in place of the entry fade.
    pub pulse: bool,
    /// Caller classes, merged last.
    pub class: Option<String>,
}

impl BadgeStyles {
    /// Merged class string.
    pub fn to_class(&self) -> String {
        badge_styles(self)
    }
}

/// Class string for a badge.
pub fn badge_styles(props: &BadgeStyles) -> String {
    cn!(
        "inline-flex items-center gap-1.5 font-medium",
        props.variant.classes(),
        props.size.classes(),
        props.shape.classes(),
        "animate-fade-in",
        ("animate-pulse-subtle", props.pulse),
        props.class.as_deref(),
    )
}

/// Class string for the status dot inside a badge.
pub fn badge_dot_styles(variant: BadgeVariant) -> String {
    cn!("w-2 h-2 rounded-full", variant.dot_class())
}
