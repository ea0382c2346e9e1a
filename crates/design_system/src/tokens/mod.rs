//! Static design tokens.
//!
//! These values are the single source for the Tailwind theme: the class strings in
//! [`crate::styles`] only reference utilities backed by a token here.

pub mod animations;
pub mod colors;
pub mod preset;
pub mod spacing;
pub mod typography;

pub use animations::{
    animation_named, keyframes_named, Animation, Keyframe, KeyframeSet, TransitionDuration,
    ANIMATIONS, KEYFRAMES, TIMING_FUNCTIONS,
};
pub use colors::{
    BackgroundColors, BorderColors, ColorScale, Palette, Shade, TextColors, COLORS,
};
pub use preset::{css_variables, TailwindPreset};
pub use spacing::{border_radius, spacing, BORDER_RADIUS, SPACING};
pub use typography::{FontFamilies, FontSize, Typography, TYPOGRAPHY};
