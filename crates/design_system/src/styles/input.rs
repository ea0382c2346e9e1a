//! Text input classes.

use super::style_enum;
use crate::cn;

style_enum! {
    /// Input padding and type size.
    pub enum InputSize as "input size" {
        /// Compact.
        Sm => ("sm", "px-2 py-1 text-sm"),
        /// Default.
        Md => ("md", "px-3 py-2 text-base"),
        /// Large.
        Lg => ("lg", "px-4 py-3 text-lg"),
    }
    default = Md;
}

const BASE: [&str; 4] = [
    "w-full rounded-input border bg-white",
    "transition-all duration-200 ease-out",
    "placeholder:text-gray-400",
    "focus:outline-none focus:ring-2 focus:ring-primary-500/20 focus:border-primary-500",
];

const ERROR: &str = "border-red-500 focus:border-red-500 focus:ring-red-500/20";
const RESTING: &str = "border-gray-300";
const DISABLED: &str = "opacity-50 cursor-not-allowed bg-gray-50";

/// Column wrapping label, control, and message.
pub const INPUT_WRAPPER_CLASS: &str = "flex flex-col gap-1.5";
/// Field label.
pub const INPUT_LABEL_CLASS: &str = "text-sm font-medium text-gray-700";
/// Validation message.
pub const INPUT_ERROR_CLASS: &str = "text-sm text-red-500";
/// Helper copy, shown only when there is no error.
pub const INPUT_HELPER_CLASS: &str = "text-sm text-gray-500";

/// Inputs to [`input_styles`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputStyles {
    /// Size.
    pub size: InputSize,
    /// Error state; swaps the border and focus colors to red.
    pub error: bool,
    /// Disabled state.
    pub disabled: bool,
    /// Caller classes, merged last.
    pub class: Option<String>,
}

impl InputStyles {
    /// Merged class string.
    pub fn to_class(&self) -> String {
        input_styles(self)
    }
}

/// Class string for an `<input>`.
pub fn input_styles(props: &InputStyles) -> String {
    cn!(
        BASE,
        props.size.classes(),
        if props.error { ERROR } else { RESTING },
        (DISABLED, props.disabled),
        props.class.as_deref(),
    )
}
