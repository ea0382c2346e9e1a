//! Loading spinner classes.

use super::style_enum;
use crate::cn;

style_enum! {
    /// Spinner diameter.
    pub enum SpinnerSize as "spinner size" {
        /// 16px.
        Sm => ("sm", "w-4 h-4"),
        /// 24px.
        Md => ("md", "w-6 h-6"),
        /// 32px.
        Lg => ("lg", "w-8 h-8"),
        /// 48px.
        Xl => ("xl", "w-12 h-12"),
    }
    default = Md;
}

style_enum! {
    /// Ring color; the border uses `currentColor`.
    pub enum SpinnerColor as "spinner color" {
        /// Brand color.
        Primary => ("primary", "text-primary-500"),
        /// For dark or brand fills.
        White => ("white", "text-white"),
        /// Inherits from the parent.
        Current => ("current", "text-current"),
        /// Muted.
        Gray => ("gray", "text-gray-400"),
    }
    default = Primary;
}

style_enum! {
    /// Rotation speed.
    pub enum SpinnerSpeed as "spinner speed" {
        /// One turn per second.
        Normal => ("normal", "animate-spin"),
        /// 1.5s per turn.
        Slow => ("slow", "animate-spin-slow"),
        /// 0.5s per turn.
        Fast => ("fast", "animate-spin-fast"),
    }
    default = Normal;
}

/// Inputs to [`spinner_styles`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpinnerStyles {
    /// Diameter.
    pub size: SpinnerSize,
    /// Ring color.
    pub color: SpinnerColor,
    /// Rotation speed.
    pub speed: SpinnerSpeed,
    /// Caller classes, merged last.
    pub class: Option<String>,
}

impl SpinnerStyles {
    /// Merged class string.
    pub fn to_class(&self) -> String {
        spinner_styles(self)
    }
}

/// Class string for a spinner ring.
pub fn spinner_styles(props: &SpinnerStyles) -> String {
    cn!(
        "rounded-full border-2 border-current border-b-transparent",
        props.size.classes(),
        props.color.classes(),
        props.speed.classes(),
        props.class.as_deref(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_spinner() {
        assert_eq!(
            SpinnerStyles::default().to_class(),
            "rounded-full border-2 border-current border-b-transparent w-6 h-6 text-primary-500 animate-spin"
        );
    }

    #[test]
    fn open_segment_survives_merge() {
        assert!(SpinnerStyles::default()
            .to_class()
            .contains("border-current border-b-transparent"));
    }

    #[test]
    fn sizes_colors_and_speeds() {
        let class = SpinnerStyles {
            size: SpinnerSize::Xl,
            color: SpinnerColor::White,
            speed: SpinnerSpeed::Slow,
            class: None,
        }
        .to_class();
        assert!(class.ends_with("w-12 h-12 text-white animate-spin-slow"));

        let fast = SpinnerStyles {
            speed: SpinnerSpeed::Fast,
            ..SpinnerStyles::default()
        }
        .to_class();
        assert!(fast.ends_with("animate-spin-fast"));
        assert!(!fast.contains("animate-spin "));
    }

    #[test]
    fn caller_size_override_wins() {
        let class = SpinnerStyles {
            class: Some("w-10 h-10".to_string()),
            ..SpinnerStyles::default()
        }
        .to_class();
        assert!(class.ends_with("text-primary-500 animate-spin w-10 h-10"));
        assert!(!class.contains("w-6"));
    }
}
