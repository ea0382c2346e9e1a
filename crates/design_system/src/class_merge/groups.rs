//! Maps a base utility (no modifiers) to the CSS property group it writes.
//!
//! Two utilities in the same group and variant scope conflict; the later one wins. Groups may
//! also override narrower groups (`p` overrides `px`, `rounded` overrides `rounded-tl`, ...).

use std::borrow::Cow;

use super::MergeConfig;

/// Property group of a utility plus the narrower groups it overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Group {
    pub id: Cow<'static, str>,
    pub conflicts: &'static [&'static str],
}

impl Group {
    fn fixed(id: &'static str) -> Self {
        Self {
            id: Cow::Borrowed(id),
            conflicts: conflicts_of(id),
        }
    }
}

/// Classifies `base`; `None` means "not a known utility" and the token is always kept.
pub(crate) fn classify(base: &str, config: &MergeConfig) -> Option<Group> {
    if let Some(inner) = base.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        let (property, value) = inner.split_once(':')?;
        if property.is_empty() || value.is_empty() || property.starts_with('&') {
            return None;
        }
        return Some(Group {
            id: Cow::Owned(format!("arbitrary..{property}")),
            conflicts: &[],
        });
    }

    let base = base.strip_prefix('-').unwrap_or(base);
    if let Some(id) = standalone(base) {
        return Some(Group::fixed(id));
    }

    let (utility, value) = split_utility(base)?;
    valued(utility, value, config).map(Group::fixed)
}

fn standalone(base: &str) -> Option<&'static str> {
    let id = match base {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "table" | "inline-table"
        | "table-caption" | "table-cell" | "table-column" | "table-column-group"
        | "table-footer-group" | "table-header-group" | "table-row-group" | "table-row"
        | "flow-root" | "grid" | "inline-grid" | "contents" | "list-item" | "hidden" => "display",
        "static" | "fixed" | "absolute" | "relative" | "sticky" => "position",
        "visible" | "invisible" | "collapse" => "visibility",
        "sr-only" | "not-sr-only" => "sr",
        "underline" | "overline" | "line-through" | "no-underline" => "text-decoration",
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => "text-transform",
        "italic" | "not-italic" => "font-style",
        "truncate" | "text-ellipsis" | "text-clip" => "text-overflow",
        "isolate" | "isolation-auto" => "isolation",
        "antialiased" | "subpixel-antialiased" => "font-smoothing",
        "box-border" | "box-content" => "box-sizing",
        "container" => "container",
        "grow" | "flex-grow" => "grow",
        "shrink" | "flex-shrink" => "shrink",
        "border" => "border-w",
        "border-x" => "border-w-x",
        "border-y" => "border-w-y",
        "border-s" => "border-w-s",
        "border-e" => "border-w-e",
        "border-t" => "border-w-t",
        "border-r" => "border-w-r",
        "border-b" => "border-w-b",
        "border-l" => "border-w-l",
        "rounded" => "rounded",
        "shadow" => "shadow",
        "ring" => "ring-w",
        "outline" => "outline-style",
        "transition" => "transition",
        "transform" | "transform-gpu" | "transform-cpu" | "transform-none" => "transform",
        "blur" => "blur",
        "divide-x" => "divide-x",
        "divide-y" => "divide-y",
        _ => return rounded_side(base.strip_prefix("rounded-")?),
    };
    Some(id)
}

const PREFIXES: &[&str] = &[
    "accent", "align", "animate", "appearance", "aspect", "auto-cols", "auto-rows", "backdrop-blur",
    "basis", "bg", "blur", "border", "border-x", "border-y", "border-s", "border-e", "border-t",
    "border-r", "border-b", "border-l", "border-spacing", "bottom", "break", "brightness",
    "caret", "clear", "col-end", "col-span", "col-start", "columns", "content", "cursor",
    "decoration", "delay", "divide", "divide-x", "divide-y", "drop-shadow", "duration", "ease",
    "end", "fill", "flex", "flex-grow", "flex-shrink", "float", "font", "from", "gap", "gap-x",
    "gap-y", "grid-cols", "grid-flow", "grid-rows", "grow", "h", "inset", "inset-x", "inset-y",
    "items", "justify", "justify-items", "justify-self", "leading", "left", "line-clamp", "list",
    "m", "max-h", "max-w", "mb", "me", "min-h", "min-w", "ml", "mr", "ms", "mt", "mx", "my",
    "object", "opacity", "order", "origin", "outline", "outline-offset", "overflow",
    "overflow-x", "overflow-y", "p", "pb", "pe", "pl", "place-content", "place-items",
    "place-self", "placeholder", "pointer-events", "pr", "ps", "pt", "px", "py", "resize",
    "right", "ring", "ring-offset", "ring-opacity", "rotate", "rounded", "rounded-s",
    "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l", "rounded-ss",
    "rounded-se", "rounded-es", "rounded-ee", "rounded-tl", "rounded-tr", "rounded-br",
    "rounded-bl", "row-end", "row-span", "row-start", "scale", "scale-x", "scale-y", "select",
    "self", "shadow", "shrink", "size", "skew-x", "skew-y", "space-x", "space-y", "start",
    "stroke", "text", "to", "top", "touch", "tracking", "transition", "translate-x",
    "translate-y", "underline-offset", "via", "w", "whitespace", "will-change", "z",
];

/// Longest known utility prefix followed by `-` and a non-empty value.
fn split_utility(base: &str) -> Option<(&'static str, &str)> {
    PREFIXES
        .iter()
        .filter_map(|prefix| {
            let value = base.strip_prefix(prefix)?.strip_prefix('-')?;
            (!value.is_empty()).then_some((*prefix, value))
        })
        .max_by_key(|(prefix, _)| prefix.len())
}

fn valued(utility: &'static str, value: &str, config: &MergeConfig) -> Option<&'static str> {
    let id = match utility {
        "text" => text_group(value, config),
        "font" => {
            if is_keyword(
                value,
                &[
                    "thin",
                    "extralight",
                    "light",
                    "normal",
                    "medium",
                    "semibold",
                    "bold",
                    "extrabold",
                    "black",
                ],
            ) || is_number(value)
                || arbitrary(value).is_some_and(is_number)
            {
                "font-weight"
            } else {
                "font-family"
            }
        }
        "bg" => bg_group(value),
        "border" => {
            if is_keyword(value, &["solid", "dashed", "dotted", "double", "hidden", "none"]) {
                "border-style"
            } else if is_keyword(value, &["collapse", "separate"]) {
                "border-collapse"
            } else if value.starts_with("opacity-") {
                "border-opacity"
            } else if is_width(value) {
                "border-w"
            } else {
                "border-color"
            }
        }
        "border-x" | "border-y" | "border-s" | "border-e" | "border-t" | "border-r"
        | "border-b" | "border-l" => border_side(&utility["border-".len()..], is_width(value))?,
        "rounded" => "rounded",
        "rounded-s" | "rounded-e" | "rounded-t" | "rounded-r" | "rounded-b" | "rounded-l"
        | "rounded-ss" | "rounded-se" | "rounded-es" | "rounded-ee" | "rounded-tl"
        | "rounded-tr" | "rounded-br" | "rounded-bl" => rounded_side(&utility["rounded-".len()..])?,
        "shadow" => {
            if is_keyword(value, &["sm", "md", "lg", "xl", "2xl", "inner", "none"])
                || config.shadows.iter().any(|shadow| shadow == value)
                || arbitrary(value).is_some_and(|inner| !is_color_literal(inner))
            {
                "shadow"
            } else {
                "shadow-color"
            }
        }
        "ring" => {
            if value == "inset" {
                "ring-inset"
            } else if is_width(value) {
                "ring-w"
            } else {
                "ring-color"
            }
        }
        "ring-offset" => {
            if is_width(value) {
                "ring-offset-w"
            } else {
                "ring-offset-color"
            }
        }
        "outline" => {
            if is_keyword(value, &["none", "dashed", "dotted", "double", "solid", "hidden"]) {
                "outline-style"
            } else if is_width(value) {
                "outline-w"
            } else {
                "outline-color"
            }
        }
        "flex" => {
            if is_keyword(value, &["row", "row-reverse", "col", "col-reverse"]) {
                "flex-direction"
            } else if is_keyword(value, &["wrap", "wrap-reverse", "nowrap"]) {
                "flex-wrap"
            } else {
                "flex"
            }
        }
        "flex-grow" | "grow" => "grow",
        "flex-shrink" | "shrink" => "shrink",
        "content" => {
            if is_keyword(
                value,
                &[
                    "normal", "center", "start", "end", "between", "around", "evenly", "baseline",
                    "stretch",
                ],
            ) {
                "align-content"
            } else {
                "content"
            }
        }
        "divide" => {
            if is_keyword(value, &["solid", "dashed", "dotted", "double", "none"]) {
                "divide-style"
            } else if value.starts_with("opacity-") {
                "divide-opacity"
            } else {
                "divide-color"
            }
        }
        "decoration" => {
            if is_keyword(value, &["solid", "double", "dotted", "dashed", "wavy"]) {
                "decoration-style"
            } else if value == "auto" || value == "from-font" || is_width(value) {
                "decoration-thickness"
            } else {
                "decoration-color"
            }
        }
        "stroke" => {
            if is_width(value) {
                "stroke-w"
            } else {
                "stroke"
            }
        }
        "list" => {
            if is_keyword(value, &["inside", "outside"]) {
                "list-position"
            } else {
                "list-type"
            }
        }
        "object" => {
            if is_keyword(value, &["contain", "cover", "fill", "none", "scale-down"]) {
                "object-fit"
            } else {
                "object-position"
            }
        }
        "placeholder" => {
            if value.starts_with("opacity-") {
                "placeholder-opacity"
            } else {
                "placeholder-color"
            }
        }
        "from" | "via" | "to" => gradient_stop(utility, value),
        "col-span" => "col-start-end",
        "row-span" => "row-start-end",
        other => other,
    };
    Some(id)
}

fn text_group(value: &str, config: &MergeConfig) -> &'static str {
    let head = value.split('/').next().unwrap_or(value);
    if value.starts_with("opacity-") {
        "text-opacity"
    } else if is_keyword(head, &["left", "center", "right", "justify", "start", "end"]) {
        "text-alignment"
    } else if is_keyword(head, &["wrap", "nowrap", "balance", "pretty"]) {
        "text-wrap"
    } else if is_keyword(
        head,
        &[
            "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
        ],
    ) || config.font_sizes.iter().any(|size| size == head)
        || arbitrary(value).is_some_and(is_length)
    {
        "font-size"
    } else {
        "text-color"
    }
}

fn bg_group(value: &str) -> &'static str {
    if is_keyword(value, &["fixed", "local", "scroll"]) {
        "bg-attachment"
    } else if value.starts_with("clip-") {
        "bg-clip"
    } else if value.starts_with("origin-") {
        "bg-origin"
    } else if value.starts_with("opacity-") {
        "bg-opacity"
    } else if value.starts_with("blend-") {
        "bg-blend"
    } else if is_keyword(
        value,
        &[
            "bottom",
            "center",
            "left",
            "left-bottom",
            "left-top",
            "right",
            "right-bottom",
            "right-top",
            "top",
        ],
    ) {
        "bg-position"
    } else if is_keyword(
        value,
        &["repeat", "no-repeat", "repeat-x", "repeat-y", "repeat-round", "repeat-space"],
    ) {
        "bg-repeat"
    } else if is_keyword(value, &["auto", "cover", "contain"]) {
        "bg-size"
    } else if value == "none" || value.starts_with("gradient-to-") {
        "bg-image"
    } else if let Some(inner) = arbitrary(value) {
        if inner.starts_with("url(") || inner.starts_with("image:") {
            "bg-image"
        } else if inner.starts_with("length:") || inner.starts_with("size:") {
            "bg-size"
        } else {
            "bg-color"
        }
    } else {
        "bg-color"
    }
}

fn gradient_stop(utility: &str, value: &str) -> &'static str {
    let is_position = value.ends_with('%') && is_number(value.trim_end_matches('%'));
    match (utility, is_position) {
        ("from", true) => "gradient-from-pos",
        ("from", false) => "gradient-from",
        ("via", true) => "gradient-via-pos",
        ("via", false) => "gradient-via",
        (_, true) => "gradient-to-pos",
        (_, false) => "gradient-to",
    }
}

fn border_side(side: &str, width: bool) -> Option<&'static str> {
    let id = match (side, width) {
        ("x", true) => "border-w-x",
        ("y", true) => "border-w-y",
        ("s", true) => "border-w-s",
        ("e", true) => "border-w-e",
        ("t", true) => "border-w-t",
        ("r", true) => "border-w-r",
        ("b", true) => "border-w-b",
        ("l", true) => "border-w-l",
        ("x", false) => "border-color-x",
        ("y", false) => "border-color-y",
        ("s", false) => "border-color-s",
        ("e", false) => "border-color-e",
        ("t", false) => "border-color-t",
        ("r", false) => "border-color-r",
        ("b", false) => "border-color-b",
        ("l", false) => "border-color-l",
        _ => return None,
    };
    Some(id)
}

fn rounded_side(side: &str) -> Option<&'static str> {
    let id = match side {
        "s" => "rounded-s",
        "e" => "rounded-e",
        "t" => "rounded-t",
        "r" => "rounded-r",
        "b" => "rounded-b",
        "l" => "rounded-l",
        "ss" => "rounded-ss",
        "se" => "rounded-se",
        "es" => "rounded-es",
        "ee" => "rounded-ee",
        "tl" => "rounded-tl",
        "tr" => "rounded-tr",
        "br" => "rounded-br",
        "bl" => "rounded-bl",
        _ => return None,
    };
    Some(id)
}

fn conflicts_of(id: &str) -> &'static [&'static str] {
    match id {
        "overflow" => &["overflow-x", "overflow-y"],
        "inset" => &[
            "inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left",
        ],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "flex" => &["basis", "grow", "shrink"],
        "gap" => &["gap-x", "gap-y"],
        "p" => &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "size" => &["w", "h"],
        "font-size" => &["leading"],
        "rounded" => &[
            "rounded-s",
            "rounded-e",
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-ss",
            "rounded-se",
            "rounded-ee",
            "rounded-es",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
        "rounded-s" => &["rounded-ss", "rounded-es"],
        "rounded-e" => &["rounded-se", "rounded-ee"],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-s",
            "border-w-e",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x",
            "border-color-y",
            "border-color-s",
            "border-color-e",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        "scale" => &["scale-x", "scale-y"],
        "line-clamp" => &["display", "overflow"],
        _ => &[],
    }
}

fn is_keyword(value: &str, keywords: &[&str]) -> bool {
    keywords.contains(&value)
}

fn is_number(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
        && value.chars().any(|ch| ch.is_ascii_digit())
}

fn arbitrary(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']')
}

/// Bare number (`2`, `0.5`) or an arbitrary length (`[3px]`).
fn is_width(value: &str) -> bool {
    is_number(value) || arbitrary(value).is_some_and(is_length)
}

fn is_length(inner: &str) -> bool {
    const UNITS: &[&str] = &[
        "px", "rem", "em", "%", "vh", "vw", "vmin", "vmax", "dvh", "svh", "lvh", "ch", "ex", "pt",
        "pc", "cm", "mm", "in",
    ];
    if inner.starts_with("length:") || inner == "0" {
        return true;
    }
    if ["calc(", "min(", "max(", "clamp("]
        .iter()
        .any(|function| inner.starts_with(function))
    {
        return true;
    }
    UNITS.iter().any(|unit| {
        inner
            .strip_suffix(unit)
            .is_some_and(|number| is_number(number.trim_start_matches('-')))
    })
}

fn is_color_literal(inner: &str) -> bool {
    inner.starts_with('#')
        || inner.starts_with("rgb")
        || inner.starts_with("hsl")
        || inner.starts_with("color:")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(base: &str) -> Option<String> {
        classify(base, &MergeConfig::default()).map(|group| group.id.into_owned())
    }

    #[test]
    fn text_utilities_split_into_size_color_and_alignment() {
        assert_eq!(id("text-sm").as_deref(), Some("font-size"));
        assert_eq!(id("text-lg/7").as_deref(), Some("font-size"));
        assert_eq!(id("text-[14px]").as_deref(), Some("font-size"));
        assert_eq!(id("text-gray-800").as_deref(), Some("text-color"));
        assert_eq!(id("text-white").as_deref(), Some("text-color"));
        assert_eq!(id("text-[#333]").as_deref(), Some("text-color"));
        assert_eq!(id("text-center").as_deref(), Some("text-alignment"));
    }

    #[test]
    fn opacity_utilities_have_their_own_groups() {
        assert_eq!(id("text-opacity-50").as_deref(), Some("text-opacity"));
        assert_eq!(id("divide-opacity-25").as_deref(), Some("divide-opacity"));
        assert_eq!(id("divide-gray-200").as_deref(), Some("divide-color"));
        assert_eq!(id("placeholder-opacity-50").as_deref(), Some("placeholder-opacity"));
        assert_eq!(id("placeholder-gray-400").as_deref(), Some("placeholder-color"));
    }

    #[test]
    fn arbitrary_numeric_font_is_a_weight() {
        assert_eq!(id("font-[500]").as_deref(), Some("font-weight"));
        assert_eq!(id("font-semibold").as_deref(), Some("font-weight"));
        assert_eq!(id("font-sans").as_deref(), Some("font-family"));
    }

    #[test]
    fn border_utilities_split_width_color_and_sides() {
        assert_eq!(id("border").as_deref(), Some("border-w"));
        assert_eq!(id("border-2").as_deref(), Some("border-w"));
        assert_eq!(id("border-current").as_deref(), Some("border-color"));
        assert_eq!(id("border-t").as_deref(), Some("border-w-t"));
        assert_eq!(id("border-b-transparent").as_deref(), Some("border-color-b"));
        assert_eq!(id("border-transparent").as_deref(), Some("border-color"));
        assert_eq!(id("border-dashed").as_deref(), Some("border-style"));
    }

    #[test]
    fn rounded_custom_keys_and_corners() {
        assert_eq!(id("rounded-button").as_deref(), Some("rounded"));
        assert_eq!(id("rounded-t").as_deref(), Some("rounded-t"));
        assert_eq!(id("rounded-tl-lg").as_deref(), Some("rounded-tl"));
        assert_eq!(id("rounded-lg").as_deref(), Some("rounded"));
    }

    #[test]
    fn ring_and_outline_groups() {
        assert_eq!(id("ring-2").as_deref(), Some("ring-w"));
        assert_eq!(id("ring-primary-500/20").as_deref(), Some("ring-color"));
        assert_eq!(id("ring-offset-2").as_deref(), Some("ring-offset-w"));
        assert_eq!(id("outline-none").as_deref(), Some("outline-style"));
    }

    #[test]
    fn standalone_keywords_and_negatives() {
        assert_eq!(id("inline-flex").as_deref(), Some("display"));
        assert_eq!(id("invisible").as_deref(), Some("visibility"));
        assert_eq!(id("-mt-2").as_deref(), Some("mt"));
        assert_eq!(id("scale-[1.02]").as_deref(), Some("scale"));
        assert_eq!(id("flex-shrink-0").as_deref(), Some("shrink"));
        assert_eq!(id("flex-1").as_deref(), Some("flex"));
    }

    #[test]
    fn arbitrary_properties_group_by_property_name() {
        assert_eq!(id("[mask-type:luminance]").as_deref(), Some("arbitrary..mask-type"));
        assert_eq!(id("[&>*]"), None);
    }

    #[test]
    fn unknown_classes_have_no_group() {
        assert_eq!(id("custom-class"), None);
        assert_eq!(id("foo"), None);
    }

    #[test]
    fn configured_font_sizes_win_over_color_guess() {
        let config = MergeConfig {
            font_sizes: vec!["display".to_string()],
            ..MergeConfig::default()
        };
        let group = classify("text-display", &config).expect("group");
        assert_eq!(group.id, "font-size");
    }
}
