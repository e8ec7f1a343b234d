//! Placeholder scanning and substitution
//!
//! A placeholder is the literal token `{{identifier}}`. Matching is purely
//! lexical: no whitespace inside the braces, no expressions, no format
//! directives. Substitution is a single pass, so values containing
//! `{{...}}` are never expanded again.

use crate::variables::Variables;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Regex matching one placeholder token; group 1 is the name.
pub static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{([A-Za-z_$][A-Za-z0-9_$]*)\}\}").expect("Invalid placeholder regex pattern")
});

/// Placeholder names used by `template`, deduplicated and sorted.
pub fn placeholders(template: &str) -> BTreeSet<&str> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Whether `template` contains at least one placeholder.
pub fn has_placeholders(template: &str) -> bool {
    PLACEHOLDER_REGEX.is_match(template)
}

/// Replace every bound placeholder; unbound tokens stay untouched.
///
/// Borrows `template` when nothing was replaced.
pub fn interpolate<'a>(template: &'a str, variables: Option<&Variables>) -> Cow<'a, str> {
    let Some(variables) = variables.filter(|vars| !vars.is_empty()) else {
        return Cow::Borrowed(template);
    };

    PLACEHOLDER_REGEX.replace_all(template, |caps: &Captures<'_>| {
        match variables.get(&caps[1]) {
            Some(value) => value.render().into_owned(),
            None => caps[0].to_string(),
        }
    })
}

/// Placeholders of `template` with no value in `variables`.
pub fn missing_variables(template: &str, variables: Option<&Variables>) -> Vec<String> {
    placeholders(template)
        .into_iter()
        .filter(|name| !variables.is_some_and(|vars| vars.contains(name)))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars;

    #[test]
    fn test_placeholders_are_collected_once() {
        let names = placeholders("{{user}} has {{count}} items, {{user}}!");
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["count", "user"]);
    }

    #[test]
    fn test_non_tokens_are_ignored() {
        assert!(placeholders("Hello, {name}").is_empty());
        assert!(placeholders("Hello, {{ name }}").is_empty());
        assert!(placeholders("Hello, {{a.b}}").is_empty());
        assert!(placeholders("Hello, {{}}").is_empty());
        assert!(!has_placeholders("plain text"));
        assert!(has_placeholders("{{$x}}"));
    }

    #[test]
    fn test_interpolate_substitutes_known_names() {
        let vars = vars!["name" => "John"];
        assert_eq!(interpolate("Hello, {{name}}", Some(&vars)), "Hello, John");
    }

    #[test]
    fn test_interpolate_keeps_unknown_tokens() {
        let vars = vars!["other" => "x"];
        assert_eq!(interpolate("Hello, {{name}}", Some(&vars)), "Hello, {{name}}");
        assert_eq!(interpolate("Hello, {{name}}", None), "Hello, {{name}}");
    }

    #[test]
    fn test_interpolate_borrows_when_untouched() {
        assert!(matches!(interpolate("Hello", None), Cow::Borrowed("Hello")));
        let empty = Variables::new();
        assert!(matches!(interpolate("Hi {{name}}", Some(&empty)), Cow::Borrowed(_)));
    }

    #[test]
    fn test_interpolate_is_single_pass() {
        let vars = vars!["a" => "{{b}}", "b" => "nope"];
        assert_eq!(interpolate("{{a}}", Some(&vars)), "{{b}}");
    }

    #[test]
    fn test_repeated_tokens_all_replaced() {
        let vars = vars!["x" => 1];
        assert_eq!(interpolate("{{x}}+{{x}}={{y}}", Some(&vars)), "1+1={{y}}");
    }

    #[test]
    fn test_missing_variables() {
        let vars = vars!["name" => "John"];
        assert_eq!(missing_variables("{{name}} {{count}}", Some(&vars)), vec!["count"]);
        assert_eq!(missing_variables("{{name}}", None), vec!["name"]);
        assert!(missing_variables("plain", None).is_empty());
    }
}
