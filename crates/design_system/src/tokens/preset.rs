//! Tailwind preset and CSS custom property export.
//!
//! [`TailwindPreset::from_tokens`] mirrors the token modules into the `theme.extend` shape a
//! `tailwind.config.js` expects, so the utilities referenced by [`crate::styles`] (for example
//! `rounded-button`, `animate-fade-in`, `bg-primary-500`) resolve to the same values the Rust
//! side documents. [`css_variables`] renders the same tokens for plain stylesheets.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::animations::{
    Animation, Keyframe, KeyframeSet, TransitionDuration, ANIMATIONS, KEYFRAMES, TIMING_FUNCTIONS,
};
use super::colors::{Palette, COLORS};
use super::spacing::{BORDER_RADIUS, SPACING};
use super::typography::{FontFamilies, FontSize, TYPOGRAPHY};

/// Serializable Tailwind preset (`{ "theme": { "extend": { ... } } }`).
#[derive(Debug, Clone, Serialize)]
pub struct TailwindPreset {
    theme: Theme,
}

#[derive(Debug, Clone, Serialize)]
struct Theme {
    extend: ThemeExtension,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeExtension {
    colors: Palette,
    font_family: FontFamilies,
    font_size: FontSizes,
    font_weight: Pairs,
    line_height: Pairs,
    border_radius: Pairs,
    keyframes: Keyframes,
    animation: Animations,
    transition_duration: Durations,
    transition_timing_function: Pairs,
}

impl TailwindPreset {
    /// Builds the preset from the crate's token constants.
    pub fn from_tokens() -> Self {
        Self {
            theme: Theme {
                extend: ThemeExtension {
                    colors: COLORS,
                    font_family: TYPOGRAPHY.font_family,
                    font_size: FontSizes(TYPOGRAPHY.font_size),
                    font_weight: Pairs(TYPOGRAPHY.font_weight),
                    line_height: Pairs(TYPOGRAPHY.line_height),
                    border_radius: Pairs(BORDER_RADIUS),
                    keyframes: Keyframes(KEYFRAMES),
                    animation: Animations(ANIMATIONS),
                    transition_duration: Durations,
                    transition_timing_function: Pairs(TIMING_FUNCTIONS),
                },
            },
        }
    }

    /// Palette carried by the preset.
    pub fn colors(&self) -> &Palette {
        &self.theme.extend.colors
    }

    /// JSON encoding of the preset.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl Default for TailwindPreset {
    fn default() -> Self {
        Self::from_tokens()
    }
}

#[derive(Debug, Clone, Copy)]
struct Pairs(&'static [(&'static str, &'static str)]);

impl Serialize for Pairs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
struct LineHeight {
    line_height: &'static str,
}

/// `{ "sm": ["0.875rem", { "lineHeight": "1.25rem" }] }`
#[derive(Debug, Clone, Copy)]
struct FontSizes(&'static [FontSize]);

impl Serialize for FontSizes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for size in self.0 {
            let line_height = LineHeight {
                line_height: size.line_height,
            };
            map.serialize_entry(size.key, &(size.size, line_height))?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy)]
struct Keyframes(&'static [KeyframeSet]);

impl Serialize for Keyframes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for set in self.0 {
            map.serialize_entry(set.name, &Frames(set.frames))?;
        }
        map.end()
    }
}

struct Frames(&'static [Keyframe]);

impl Serialize for Frames {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for frame in self.0 {
            map.serialize_entry(frame.offset, &Pairs(frame.declarations))?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy)]
struct Animations(&'static [Animation]);

impl Serialize for Animations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for animation in self.0 {
            map.serialize_entry(animation.name, &animation.css_value())?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy)]
struct Durations;

impl Serialize for Durations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TransitionDuration::ALL.len()))?;
        for duration in TransitionDuration::ALL {
            map.serialize_entry(duration.token(), &duration.css_value())?;
        }
        map.end()
    }
}

fn var_name(prefix: &str, key: &str) -> String {
    if key == "DEFAULT" {
        format!("--{prefix}")
    } else {
        format!("--{prefix}-{}", key.replace('.', "_"))
    }
}

fn push_var(out: &mut String, name: String, value: &str) {
    out.push_str("  ");
    out.push_str(&name);
    out.push_str(": ");
    out.push_str(value);
    out.push_str(";\n");
}

/// Renders every token as a CSS custom property inside a `:root` block.
///
/// Keys that are not valid in a property name are normalised: `DEFAULT` drops the key suffix
/// and `.` becomes `_` (`--spacing-0_5`).
pub fn css_variables() -> String {
    let mut out = String::from(":root {\n");

    for (name, scale) in COLORS.scales() {
        for (shade, hex) in scale.iter() {
            push_var(&mut out, format!("--color-{name}-{shade}"), hex);
        }
    }
    let background = COLORS.background;
    for (role, value) in [
        ("default", background.default),
        ("card", background.card),
        ("muted", background.muted),
        ("overlay", background.overlay),
    ] {
        push_var(&mut out, var_name("color-background", role), value);
    }
    let text = COLORS.text;
    for (role, value) in [
        ("primary", text.primary),
        ("secondary", text.secondary),
        ("muted", text.muted),
        ("inverse", text.inverse),
    ] {
        push_var(&mut out, var_name("color-text", role), value);
    }
    push_var(&mut out, var_name("color-border", "default"), COLORS.border.default);
    push_var(&mut out, var_name("color-border", "focus"), COLORS.border.focus);

    push_var(
        &mut out,
        var_name("font", "sans"),
        &TYPOGRAPHY.font_family.sans.join(", "),
    );
    push_var(
        &mut out,
        var_name("font", "mono"),
        &TYPOGRAPHY.font_family.mono.join(", "),
    );
    for size in TYPOGRAPHY.font_size {
        push_var(&mut out, var_name("text", size.key), size.size);
        push_var(
            &mut out,
            var_name("text", &format!("{}--line-height", size.key)),
            size.line_height,
        );
    }
    for (key, value) in TYPOGRAPHY.font_weight {
        push_var(&mut out, var_name("font-weight", key), value);
    }
    for (key, value) in TYPOGRAPHY.line_height {
        push_var(&mut out, var_name("leading", key), value);
    }

    for (key, value) in SPACING {
        push_var(&mut out, var_name("spacing", key), value);
    }
    for (key, value) in BORDER_RADIUS {
        push_var(&mut out, var_name("radius", key), value);
    }

    for duration in TransitionDuration::ALL {
        push_var(
            &mut out,
            var_name("duration", duration.token()),
            &duration.css_value(),
        );
    }
    for (key, value) in TIMING_FUNCTIONS {
        push_var(&mut out, var_name("ease", key), value);
    }
    for animation in ANIMATIONS {
        push_var(
            &mut out,
            var_name("animate", animation.name),
            &animation.css_value(),
        );
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;

    fn extend() -> Value {
        let body = TailwindPreset::from_tokens()
            .to_json(false)
            .expect("serialize preset");
        let value: Value = serde_json::from_str(&body).expect("valid json");
        value["theme"]["extend"].clone()
    }

    #[test]
    fn preset_exposes_palette_under_theme_extend() {
        let extend = extend();
        assert_eq!(extend["colors"]["primary"]["500"], "#D38475");
        assert_eq!(extend["colors"]["gray"]["100"], "#F3F4F6");
        assert_eq!(extend["colors"]["background"]["overlay"], "rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn font_sizes_use_tailwind_tuple_form() {
        assert_eq!(
            extend()["fontSize"]["sm"],
            json!(["0.875rem", { "lineHeight": "1.25rem" }])
        );
    }

    #[test]
    fn component_radii_and_motion_resolve() {
        let extend = extend();
        assert_eq!(extend["borderRadius"]["button"], "0.375rem");
        assert_eq!(extend["borderRadius"]["card"], "0.75rem");
        assert_eq!(extend["animation"]["fade-in"], "fadeIn 200ms ease-out");
        assert_eq!(extend["animation"]["spin-slow"], "spin 1.5s linear infinite");
        assert_eq!(extend["keyframes"]["pulseSubtle"]["0%, 100%"]["opacity"], "1");
        assert_eq!(extend["transitionDuration"]["fast"], "150ms");
        assert_eq!(
            extend["transitionTimingFunction"]["bounce"],
            "cubic-bezier(0.68, -0.55, 0.265, 1.55)"
        );
    }

    #[test]
    fn pretty_and_compact_encodings_agree() {
        let preset = TailwindPreset::default();
        let pretty: Value =
            serde_json::from_str(&preset.to_json(true).expect("pretty")).expect("json");
        let compact: Value =
            serde_json::from_str(&preset.to_json(false).expect("compact")).expect("json");
        assert_eq!(pretty, compact);
        assert_eq!(preset.colors(), &COLORS);
    }

    #[test]
    fn css_variables_render_root_block() {
        let css = css_variables();
        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with("}\n"));
        assert!(css.contains("  --color-primary-500: #D38475;\n"));
        assert!(css.contains("  --spacing-0_5: 0.125rem;\n"));
        assert!(css.contains("  --radius: 0.25rem;\n"));
        assert!(css.contains("  --radius-full: 9999px;\n"));
        assert!(css.contains("  --duration-normal: 200ms;\n"));
        assert!(css.contains("  --font-weight-semibold: 600;\n"));
        assert!(css.contains("  --font-sans: Pretendard, -apple-system"));
    }
}
