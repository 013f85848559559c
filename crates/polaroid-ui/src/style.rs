//! Inline style merging.
//!
//! Components carry a base inline style and accept a caller style on top.
//! [`merge_styles`] combines them property by property: a caller declaration
//! replaces the base declaration of the same property in place, new
//! properties are appended, and everything else keeps its original order.

use std::fmt;

/// Ordered list of CSS declarations
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleDeclarations {
    entries: Vec<(String, String)>,
}

impl StyleDeclarations {
    /// Parse `prop: value; prop: value`.
    ///
    /// Property names are trimmed and lowercased. Semicolons inside
    /// parentheses or quotes do not end a declaration. Entries without a
    /// colon or with an empty name are dropped. A repeated property keeps
    /// its first position and its last value, like the cascade.
    pub fn parse(style: &str) -> Self {
        let mut parsed = Self::default();
        for chunk in split_declarations(style) {
            let Some((name, value)) = chunk.split_once(':') else {
                continue;
            };
            let name = name.trim().to_ascii_lowercase();
            if name.is_empty() {
                continue;
            }
            parsed.set(name, value.trim().to_string());
        }
        parsed
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        let property = property.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply `overrides` on top of `self`; overrides win.
    pub fn merged(mut self, overrides: &StyleDeclarations) -> Self {
        if overrides.is_empty() {
            return self;
        }
        for (name, value) in &overrides.entries {
            self.set(name.clone(), value.clone());
        }
        self
    }
}

impl fmt::Display for StyleDeclarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in &self.entries {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", name, value)?;
            first = false;
        }
        Ok(())
    }
}

/// Merge a base inline style with caller overrides; the caller wins.
pub fn merge_styles(base: &str, overrides: &str) -> String {
    StyleDeclarations::parse(base)
        .merged(&StyleDeclarations::parse(overrides))
        .to_string()
}

fn split_declarations(style: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in style.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                chunks.push(&style[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    chunks.push(&style[start..]);
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_override_wins_in_place() {
        let merged = merge_styles(
            "min-width: 8rem; padding: 0.25rem 1rem; background: #4f46e5;",
            "background: crimson",
        );
        assert_eq!(
            merged,
            "min-width: 8rem; padding: 0.25rem 1rem; background: crimson;"
        );
    }

    #[test]
    fn test_new_properties_appended() {
        let merged = merge_styles("color: white", "width: 100%; COLOR: black");
        assert_eq!(merged, "color: black; width: 100%;");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(merge_styles("", ""), "");
        assert_eq!(merge_styles("color: red;", ""), "color: red;");
        assert_eq!(merge_styles("", "color: red"), "color: red;");
    }

    #[test]
    fn test_semicolons_inside_parens_and_quotes() {
        let parsed = StyleDeclarations::parse(
            "background: url(\"data:image/png;base64,AAA\"); font-family: 'A;B', serif",
        );
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.get("background"), Some("url(\"data:image/png;base64,AAA\")"));
        assert_eq!(parsed.get("font-family"), Some("'A;B', serif"));
    }

    #[test]
    fn test_malformed_entries_dropped() {
        let parsed = StyleDeclarations::parse("nonsense; : red; color: blue;;");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get("color"), Some("blue"));
    }

    #[test]
    fn test_repeated_property_keeps_last_value() {
        let parsed = StyleDeclarations::parse("color: red; margin: 0; color: blue");
        assert_eq!(parsed.to_string(), "color: blue; margin: 0;");
    }

    proptest! {
        #[test]
        fn override_value_always_present(
            base_value in "[a-z0-9#]{1,10}",
            override_value in "[a-z0-9#]{1,10}",
        ) {
            let base = format!("color: {}; padding: 1px", base_value);
            let over = format!("color: {}", override_value);
            let merged = StyleDeclarations::parse(&merge_styles(&base, &over));
            prop_assert_eq!(merged.get("color"), Some(override_value.as_str()));
            prop_assert_eq!(merged.get("padding"), Some("1px"));
            prop_assert_eq!(merged.len(), 2);
        }
    }
}
