//! Font stacks, type scale, weights, and line heights.

use serde::Serialize;

/// Font size with its paired line height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontSize {
    /// Tailwind key (`sm`, `base`, ...).
    pub key: &'static str,
    /// CSS font-size.
    pub size: &'static str,
    /// CSS line-height used with this size.
    pub line_height: &'static str,
}

/// Font family stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontFamilies {
    /// UI and body text.
    pub sans: &'static [&'static str],
    /// Code and tabular figures.
    pub mono: &'static [&'static str],
}

/// The complete typography token set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// Font stacks.
    pub font_family: FontFamilies,
    /// Type scale, smallest first.
    pub font_size: &'static [FontSize],
    /// Named weights.
    pub font_weight: &'static [(&'static str, &'static str)],
    /// Named line heights.
    pub line_height: &'static [(&'static str, &'static str)],
}

impl Typography {
    /// Size entry for a Tailwind key.
    pub fn font_size(&self, key: &str) -> Option<&'static FontSize> {
        self.font_size.iter().find(|size| size.key == key)
    }

    /// Numeric weight for a named weight.
    pub fn font_weight(&self, key: &str) -> Option<&'static str> {
        lookup(self.font_weight, key)
    }

    /// Line height for a named leading.
    pub fn line_height(&self, key: &str) -> Option<&'static str> {
        lookup(self.line_height, key)
    }
}

pub(crate) fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find_map(|(name, value)| (*name == key).then_some(*value))
}

/// The design system typography.
pub const TYPOGRAPHY: Typography = Typography {
    font_family: FontFamilies {
        sans: &[
            "Pretendard",
            "-apple-system",
            "BlinkMacSystemFont",
            "system-ui",
            "Roboto",
            "\"Helvetica Neue\"",
            "\"Segoe UI\"",
            "\"Apple SD Gothic Neo\"",
            "\"Noto Sans KR\"",
            "\"Malgun Gothic\"",
            "sans-serif",
        ],
        mono: &[
            "JetBrains Mono",
            "ui-monospace",
            "SFMono-Regular",
            "Menlo",
            "Monaco",
            "Consolas",
            "monospace",
        ],
    },
    font_size: &[
        FontSize {
            key: "xs",
            size: "0.75rem",
            line_height: "1rem",
        },
        FontSize {
            key: "sm",
            size: "0.875rem",
            line_height: "1.25rem",
        },
        FontSize {
            key: "base",
            size: "1rem",
            line_height: "1.5rem",
        },
        FontSize {
            key: "lg",
            size: "1.125rem",
            line_height: "1.75rem",
        },
        FontSize {
            key: "xl",
            size: "1.25rem",
            line_height: "1.75rem",
        },
        FontSize {
            key: "2xl",
            size: "1.5rem",
            line_height: "2rem",
        },
        FontSize {
            key: "3xl",
            size: "1.875rem",
            line_height: "2.25rem",
        },
        FontSize {
            key: "4xl",
            size: "2.25rem",
            line_height: "2.5rem",
        },
    ],
    font_weight: &[
        ("normal", "400"),
        ("medium", "500"),
        ("semibold", "600"),
        ("bold", "700"),
    ],
    line_height: &[("tight", "1.25"), ("normal", "1.5"), ("relaxed", "1.625")],
};
