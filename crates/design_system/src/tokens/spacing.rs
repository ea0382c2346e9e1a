//! Spacing scale and corner radii.

use super::typography::lookup;

/// Spacing steps; step `n` is `n * 0.25rem`.
pub const SPACING: &[(&str, &str)] = &[
    ("px", "1px"),
    ("0", "0"),
    ("0.5", "0.125rem"),
    ("1", "0.25rem"),
    ("1.5", "0.375rem"),
    ("2", "0.5rem"),
    ("2.5", "0.625rem"),
    ("3", "0.75rem"),
    ("3.5", "0.875rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("7", "1.75rem"),
    ("8", "2rem"),
    ("9", "2.25rem"),
    ("10", "2.5rem"),
    ("11", "2.75rem"),
    ("12", "3rem"),
    ("14", "3.5rem"),
    ("16", "4rem"),
    ("20", "5rem"),
    ("24", "6rem"),
];

/// Corner radii, including the semantic `card`, `button`, and `input` keys used by components.
pub const BORDER_RADIUS: &[(&str, &str)] = &[
    ("none", "0"),
    ("sm", "0.125rem"),
    ("DEFAULT", "0.25rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("full", "9999px"),
    ("card", "0.75rem"),
    ("button", "0.375rem"),
    ("input", "0.375rem"),
];

/// CSS length for a spacing step (`"4"` is `1rem`).
pub fn spacing(step: &str) -> Option<&'static str> {
    lookup(SPACING, step)
}

/// CSS length for a radius key.
pub fn border_radius(key: &str) -> Option<&'static str> {
    lookup(BORDER_RADIUS, key)
}
