//! Framework-agnostic class generators, one module per component.
//!
//! Everything here returns plain `String`s so it can be used from Leptos components, server
//! templates, or hand-written HTML alike. Each closed prop set is an enum with a stable string
//! token (used for `data-ui-*` attributes and parsing) and the utility classes it contributes.

/// Declares a closed style enum with its token, classes, `Default`, `Display`, and `FromStr`.
macro_rules! style_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => ($token:literal, $classes:literal),
            )+
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable lowercase token, used in `data-ui-*` attributes.
            pub fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }

            /// Utility classes contributed by this value.
            pub fn classes(self) -> &'static str {
                match self {
                    $(Self::$variant => $classes,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.token())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::DesignSystemError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.token() == value)
                    .ok_or_else(|| $crate::DesignSystemError::UnknownVariant {
                        kind: $kind,
                        value: value.to_string(),
                        expected: $crate::styles::expected_tokens(
                            Self::ALL.iter().map(|candidate| candidate.token()),
                        ),
                    })
            }
        }
    };
}

pub(crate) use style_enum;

pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod spinner;
pub mod sync_status;

pub use alert::{
    alert_dismiss_styles, alert_icon_styles, alert_styles, AlertAnimation, AlertStyles,
    AlertVariant,
};
pub use badge::{badge_dot_styles, badge_styles, BadgeShape, BadgeSize, BadgeStyles, BadgeVariant};
pub use button::{button_styles, ButtonSize, ButtonStyles, ButtonVariant};
pub use card::{card_styles, CardPadding, CardStyles, CardVariant};
pub use input::{input_styles, InputSize, InputStyles};
pub use spinner::{spinner_styles, SpinnerColor, SpinnerSize, SpinnerSpeed, SpinnerStyles};
pub use sync_status::{
    format_last_saved, sync_status_indicator_styles, sync_status_text_for_state, SyncState,
};

pub(crate) fn expected_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> String {
    tokens.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::DesignSystemError;

    #[test]
    fn tokens_round_trip_through_from_str() {
        for variant in ButtonVariant::ALL {
            assert_eq!(variant.token().parse::<ButtonVariant>(), Ok(*variant));
        }
        for speed in SpinnerSpeed::ALL {
            assert_eq!(speed.to_string().parse::<SpinnerSpeed>(), Ok(*speed));
        }
    }

    #[test]
    fn unknown_token_lists_accepted_names() {
        let err = "huge".parse::<BadgeSize>().expect_err("closed set");
        assert_eq!(
            err,
            DesignSystemError::UnknownVariant {
                kind: "badge size",
                value: "huge".to_string(),
                expected: "sm, md, lg".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "unknown badge size `huge` (expected one of: sm, md, lg)"
        );
    }

    #[test]
    fn defaults_match_documented_props() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
        assert_eq!(BadgeVariant::default(), BadgeVariant::Default);
        assert_eq!(BadgeShape::default(), BadgeShape::Rounded);
        assert_eq!(CardVariant::default(), CardVariant::Default);
        assert_eq!(CardPadding::default(), CardPadding::Md);
        assert_eq!(InputSize::default(), InputSize::Md);
        assert_eq!(AlertVariant::default(), AlertVariant::Info);
        assert_eq!(AlertAnimation::default(), AlertAnimation::FadeIn);
        assert_eq!(SpinnerSize::default(), SpinnerSize::Md);
        assert_eq!(SpinnerColor::default(), SpinnerColor::Primary);
        assert_eq!(SpinnerSpeed::default(), SpinnerSpeed::Normal);
    }
}
