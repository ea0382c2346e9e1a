//! Splits a single utility class into variant modifiers, important flag, and base utility.

/// One whitespace-free class token, borrowed from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedClass<'a> {
    pub modifiers: Vec<&'a str>,
    pub important: bool,
    pub base: &'a str,
}

impl ParsedClass<'_> {
    /// Variant scope used as the prefix of a conflict key.
    ///
    /// Modifiers are order-insensitive (`hover:focus:` equals `focus:hover:`) except across an
    /// arbitrary variant such as `[&>*]:`, which keeps its position.
    pub(crate) fn scope(&self) -> String {
        let mut sorted: Vec<&str> = Vec::with_capacity(self.modifiers.len());
        let mut run: Vec<&str> = Vec::new();
        for &modifier in &self.modifiers {
            if modifier.starts_with('[') {
                run.sort_unstable();
                sorted.append(&mut run);
                sorted.push(modifier);
            } else {
                run.push(modifier);
            }
        }
        run.sort_unstable();
        sorted.append(&mut run);

        let mut scope = String::new();
        for modifier in sorted {
            scope.push_str(modifier);
            scope.push(':');
        }
        if self.important {
            scope.push('!');
        }
        scope
    }
}

/// Parses `raw`; `None` means the token cannot be a utility (empty base, unbalanced brackets,
/// or a missing configured prefix).
pub(crate) fn parse_class<'a>(raw: &'a str, prefix: Option<&str>) -> Option<ParsedClass<'a>> {
    let mut modifiers = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;
    for (index, ch) in raw.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            ':' if depth == 0 => {
                modifiers.push(&raw[start..index]);
                start = index + 1;
            }
            _ => {}
        }
        if depth < 0 {
            return None;
        }
    }
    if depth != 0 {
        return None;
    }

    let mut base = &raw[start..];
    let mut important = false;
    if let Some(rest) = base.strip_prefix('!') {
        base = rest;
        important = true;
    } else if let Some(rest) = base.strip_suffix('!') {
        base = rest;
        important = true;
    }

    if let Some(prefix) = prefix.filter(|prefix| !prefix.is_empty()) {
        // The sign carries no weight in conflict resolution, so `-tw-mt-2` reduces to `mt-2`.
        base = base.strip_prefix('-').unwrap_or(base).strip_prefix(prefix)?;
    }

    if base.is_empty() || modifiers.iter().any(|modifier| modifier.is_empty()) {
        return None;
    }

    Some(ParsedClass {
        modifiers,
        important,
        base,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn splits_modifiers_and_base() {
        let parsed = parse_class("md:hover:bg-red-500", None).expect("parse");
        assert_eq!(parsed.modifiers, vec!["md", "hover"]);
        assert_eq!(parsed.base, "bg-red-500");
        assert!(!parsed.important);
    }

    #[test]
    fn colons_inside_brackets_do_not_split() {
        let parsed = parse_class("[&>*]:[mask-type:luminance]", None).expect("parse");
        assert_eq!(parsed.modifiers, vec!["[&>*]"]);
        assert_eq!(parsed.base, "[mask-type:luminance]");
    }

    #[test]
    fn important_marker_is_accepted_on_either_side() {
        assert!(parse_class("!p-4", None).expect("parse").important);
        assert!(parse_class("p-4!", None).expect("parse").important);
        assert_eq!(parse_class("!p-4", None).expect("parse").base, "p-4");
    }

    #[test]
    fn scope_sorts_plain_modifiers() {
        let a = parse_class("hover:focus:p-2", None).expect("parse");
        let b = parse_class("focus:hover:p-4", None).expect("parse");
        assert_eq!(a.scope(), b.scope());
        assert_eq!(a.scope(), "focus:hover:");
    }

    #[test]
    fn scope_keeps_arbitrary_variant_position() {
        let a = parse_class("hover:[&>*]:p-2", None).expect("parse");
        let b = parse_class("[&>*]:hover:p-2", None).expect("parse");
        assert_ne!(a.scope(), b.scope());
    }

    #[test]
    fn rejects_empty_and_unbalanced_tokens() {
        assert_eq!(parse_class("hover:", None), None);
        assert_eq!(parse_class("w-[10px", None), None);
        assert_eq!(parse_class("::p-2", None), None);
    }

    #[test]
    fn configured_prefix_is_required_and_stripped() {
        assert_eq!(parse_class("p-4", Some("tw-")), None);
        assert_eq!(parse_class("hover:tw-p-4", Some("tw-")).expect("parse").base, "p-4");
        assert_eq!(parse_class("-tw-mt-2", Some("tw-")).expect("parse").base, "mt-2");
    }
}
