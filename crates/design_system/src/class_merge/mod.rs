//! Conditional class composition with utility conflict resolution.
//!
//! [`classes!`](crate::classes) joins class fragments and skips the falsy ones.
//! [`cn!`](crate::cn) does the same and then runs [`merge_classes`], so that when two utilities
//! target the same CSS property group under the same variant scope, only the later one survives:
//!
//! ```
//! use design_system::cn;
//!
//! assert_eq!(cn!("px-2 py-1", "px-4"), "py-1 px-4");
//! assert_eq!(cn!("base", false.then_some("hidden"), Some("end")), "base end");
//! ```

use std::collections::HashSet;

use leptos::logging;
use serde::{Deserialize, Serialize};

use crate::DesignSystemError;

mod groups;
mod parse;

/// A value that contributes zero or more class tokens.
///
/// Implemented for strings, `Option`, `(value, condition)` pairs, and sequences of class values,
/// mirroring the argument shapes accepted by `classes!` and `cn!`.
pub trait ClassValue {
    /// Appends this value's tokens to `out`, space separated.
    fn write_classes(&self, out: &mut String);
}

fn push_tokens(raw: &str, out: &mut String) {
    for token in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
}

impl ClassValue for str {
    fn write_classes(&self, out: &mut String) {
        push_tokens(self, out);
    }
}

impl ClassValue for String {
    fn write_classes(&self, out: &mut String) {
        push_tokens(self, out);
    }
}

impl<T: ClassValue + ?Sized> ClassValue for &T {
    fn write_classes(&self, out: &mut String) {
        (**self).write_classes(out);
    }
}

impl<T: ClassValue> ClassValue for Option<T> {
    fn write_classes(&self, out: &mut String) {
        if let Some(value) = self {
            value.write_classes(out);
        }
    }
}

/// Object syntax: `("class", condition)` contributes `class` only when `condition` holds.
impl<T: ClassValue> ClassValue for (T, bool) {
    fn write_classes(&self, out: &mut String) {
        if self.1 {
            self.0.write_classes(out);
        }
    }
}

impl<T: ClassValue> ClassValue for [T] {
    fn write_classes(&self, out: &mut String) {
        for value in self {
            value.write_classes(out);
        }
    }
}

impl<T: ClassValue, const N: usize> ClassValue for [T; N] {
    fn write_classes(&self, out: &mut String) {
        self.as_slice().write_classes(out);
    }
}

impl<T: ClassValue> ClassValue for Vec<T> {
    fn write_classes(&self, out: &mut String) {
        self.as_slice().write_classes(out);
    }
}

/// Joins class values without conflict resolution.
///
/// ```
/// use design_system::classes;
///
/// assert_eq!(classes!("foo", ("bar", false), ["baz"]), "foo baz");
/// ```
#[macro_export]
macro_rules! classes {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut out = ::std::string::String::new();
        $( $crate::class_merge::ClassValue::write_classes(&$value, &mut out); )+
        out
    }};
}

/// Joins class values and resolves utility conflicts (last wins).
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::class_merge::merge_classes(&$crate::classes!($($value),+))
    };
}

/// Theme extensions the default classifier cannot infer from class names alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Utility prefix configured in Tailwind (e.g. `tw-`). Tokens without it are left alone.
    pub prefix: Option<String>,
    /// Extra `text-*` keys that are font sizes rather than colors.
    pub font_sizes: Vec<String>,
    /// Extra `shadow-*` keys that are box shadows rather than shadow colors.
    pub shadows: Vec<String>,
}

impl MergeConfig {
    /// Decodes a JSON config object; unknown keys are ignored and missing keys default.
    pub fn from_json(body: &str) -> Result<Self, DesignSystemError> {
        serde_json::from_str(body).map_err(|err| {
            logging::warn!("class merge config rejected: {err}");
            DesignSystemError::InvalidMergeConfig(err.to_string())
        })
    }
}

/// Resolves utility class conflicts according to a [`MergeConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClassMerger {
    config: MergeConfig,
}

impl ClassMerger {
    /// Creates a merger for the given theme extensions.
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Drops every utility overridden by a later one in the same group and variant scope.
    ///
    /// Surviving tokens keep their original relative order. Tokens that are not recognised as
    /// utilities are always kept.
    pub fn merge(&self, input: &str) -> String {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let mut keep = vec![false; tokens.len()];
        let mut claimed: HashSet<String> = HashSet::new();

        for (index, raw) in tokens.iter().enumerate().rev() {
            let Some(parsed) = parse::parse_class(raw, self.config.prefix.as_deref()) else {
                keep[index] = true;
                continue;
            };
            let Some(group) = groups::classify(parsed.base, &self.config) else {
                keep[index] = true;
                continue;
            };

            let scope = parsed.scope();
            let key = format!("{scope}{}", group.id);
            if claimed.contains(&key) {
                continue;
            }
            keep[index] = true;
            for conflict in group.conflicts {
                claimed.insert(format!("{scope}{conflict}"));
            }
            claimed.insert(key);
        }

        tokens
            .into_iter()
            .zip(keep)
            .filter_map(|(token, kept)| kept.then_some(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Resolves conflicts with the default Tailwind theme.
pub fn merge_classes(input: &str) -> String {
    ClassMerger::default().merge(input)
}
