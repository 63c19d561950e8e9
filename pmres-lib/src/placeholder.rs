use crate::environment::VariableMap;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\{\{([^{}]+)\}\}").unwrap();
}

/// Distinct placeholder names in `raw`, in order of first occurrence.
pub fn placeholder_names(raw: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for caps in PLACEHOLDER_REGEX.captures_iter(raw) {
        if let Some(name) = caps.get(1).map(|m| m.as_str()) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

/// Replaces every `{{name}}` whose name is in `variables` with its value.
///
/// Unknown placeholders stay verbatim. The scan happens once over the input, so
/// a substituted value is never expanded again even if it contains `{{...}}`.
pub fn substitute(raw: &str, variables: &VariableMap) -> String {
    PLACEHOLDER_REGEX
        .replace_all(raw, |caps: &Captures| match variables.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Placeholder names left in an already substituted URL.
pub fn unresolved_placeholders(url: &str) -> Vec<&str> {
    placeholder_names(url)
}
