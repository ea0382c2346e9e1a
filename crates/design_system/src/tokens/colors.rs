//! Brand and semantic color palette.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::DesignSystemError;

/// Step on an 11-shade color scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    /// Lightest tint.
    S50,
    /// Shade 100.
    S100,
    /// Shade 200.
    S200,
    /// Shade 300.
    S300,
    /// Shade 400.
    S400,
    /// Base shade.
    S500,
    /// Shade 600.
    S600,
    /// Shade 700.
    S700,
    /// Shade 800.
    S800,
    /// Shade 900.
    S900,
    /// Darkest shade.
    S950,
}

impl Shade {
    /// Every shade, lightest first.
    pub const ALL: [Shade; 11] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
        Self::S950,
    ];

    /// Tailwind key for the shade (`"500"`).
    pub fn token(self) -> &'static str {
        match self {
            Self::S50 => "50",
            Self::S100 => "100",
            Self::S200 => "200",
            Self::S300 => "300",
            Self::S400 => "400",
            Self::S500 => "500",
            Self::S600 => "600",
            Self::S700 => "700",
            Self::S800 => "800",
            Self::S900 => "900",
            Self::S950 => "950",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Shade {
    type Err = DesignSystemError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shade| shade.token() == value)
            .ok_or_else(|| DesignSystemError::UnknownShade(value.to_string()))
    }
}

/// Eleven hex values, indexed by [`Shade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScale([&'static str; 11]);

impl ColorScale {
    /// Builds a scale from hex values ordered 50 through 950.
    pub const fn new(shades: [&'static str; 11]) -> Self {
        Self(shades)
    }

    /// Hex value for `shade`.
    pub fn shade(&self, shade: Shade) -> &'static str {
        self.0[shade.index()]
    }

    /// `(shade, hex)` pairs, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, &'static str)> + '_ {
        Shade::ALL.into_iter().map(|shade| (shade, self.shade(shade)))
    }
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (shade, hex) in self.iter() {
            map.serialize_entry(shade.token(), hex)?;
        }
        map.end()
    }
}

/// Page and surface backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackgroundColors {
    /// Page background.
    pub default: &'static str,
    /// Card surface.
    pub card: &'static str,
    /// Muted section background.
    pub muted: &'static str,
    /// Modal scrim.
    pub overlay: &'static str,
}

/// Foreground text colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextColors {
    /// Body copy.
    pub primary: &'static str,
    /// Supporting copy.
    pub secondary: &'static str,
    /// Placeholder and disabled copy.
    pub muted: &'static str,
    /// Text on dark or brand fills.
    pub inverse: &'static str,
}

/// Border colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BorderColors {
    /// Resting border.
    pub default: &'static str,
    /// Focus border.
    pub focus: &'static str,
}

/// Full palette: brand scales, semantic scales, and surface roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Warm terracotta brand scale.
    pub primary: ColorScale,
    /// Cream complementary scale.
    pub secondary: ColorScale,
    /// Neutral scale.
    pub gray: ColorScale,
    /// Positive status.
    pub success: ColorScale,
    /// Cautionary status.
    pub warning: ColorScale,
    /// Failure status.
    pub error: ColorScale,
    /// Informational status.
    pub info: ColorScale,
    /// Surface backgrounds.
    pub background: BackgroundColors,
    /// Text roles.
    pub text: TextColors,
    /// Border roles.
    pub border: BorderColors,
}

impl Palette {
    /// Named scales in preset order.
    pub fn scales(&self) -> [(&'static str, &ColorScale); 7] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("gray", &self.gray),
            ("success", &self.success),
            ("warning", &self.warning),
            ("error", &self.error),
            ("info", &self.info),
        ]
    }

    /// Looks up a scale by name (`"primary"`, `"gray"`, ...).
    pub fn scale(&self, name: &str) -> Option<&ColorScale> {
        self.scales()
            .into_iter()
            .find_map(|(key, scale)| (key == name).then_some(scale))
    }
}

/// The design system palette.
pub const COLORS: Palette = Palette {
    primary: ColorScale::new([
        "#FDF8F7", "#FBEFED", "#F5DCD7", "#EEC3BB", "#E29C8F", "#D38475", "#C06A59", "#A15548",
        "#84463C", "#6D3B33", "#3A1E1A",
    ]),
    secondary: ColorScale::new([
        "#F8F7F6", "#EEE7DF", "#E5DCD2", "#D4C8BA", "#BBA898", "#A28B78", "#8D7565", "#756054",
        "#615047", "#52443D", "#2B231F",
    ]),
    gray: ColorScale::new([
        "#F9FAFB", "#F3F4F6", "#E5E7EB", "#D1D5DB", "#9CA3AF", "#6B7280", "#4B5563", "#374151",
        "#1F2937", "#111827", "#030712",
    ]),
    success: ColorScale::new([
        "#F0FDF4", "#DCFCE7", "#BBF7D0", "#86EFAC", "#4ADE80", "#22C55E", "#16A34A", "#15803D",
        "#166534", "#14532D", "#052E16",
    ]),
    warning: ColorScale::new([
        "#FFFBEB", "#FEF3C7", "#FDE68A", "#FCD34D", "#FBBF24", "#F59E0B", "#D97706", "#B45309",
        "#92400E", "#78350F", "#451A03",
    ]),
    error: ColorScale::new([
        "#FEF2F2", "#FEE2E2", "#FECACA", "#FCA5A5", "#F87171", "#EF4444", "#DC2626", "#B91C1C",
        "#991B1B", "#7F1D1D", "#450A0A",
    ]),
    info: ColorScale::new([
        "#EFF6FF", "#DBEAFE", "#BFDBFE", "#93C5FD", "#60A5FA", "#3B82F6", "#2563EB", "#1D4ED8",
        "#1E40AF", "#1E3A8A", "#172554",
    ]),
    background: BackgroundColors {
        default: "#FFFFFF",
        card: "#FFFFFF",
        muted: "#F9FAFB",
        overlay: "rgba(0, 0, 0, 0.5)",
    },
    text: TextColors {
        primary: "#111827",
        secondary: "#6B7280",
        muted: "#9CA3AF",
        inverse: "#FFFFFF",
    },
    border: BorderColors {
        default: "#E5E7EB",
        focus: "#D38475",
    },
};
