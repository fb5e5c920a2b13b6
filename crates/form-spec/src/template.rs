use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::store::ValueStore;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^{}]+)\}").expect("placeholder pattern is valid"));

/// What to substitute for a placeholder whose id has no stored value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolutionMode {
    /// Substitute the empty string.
    #[default]
    Empty,
    /// Keep the `${id}` text as written.
    Verbatim,
}

impl ResolutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionMode::Empty => "empty",
            ResolutionMode::Verbatim => "verbatim",
        }
    }
}

/// Resolves `${id}` placeholders in action messages against a [`ValueStore`].
///
/// The identifier is looked up exactly as written between the braces.
/// `${}` and an unterminated `${` are plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateResolver {
    mode: ResolutionMode,
}

impl TemplateResolver {
    pub fn new(mode: ResolutionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ResolutionMode {
        self.mode
    }

    pub fn resolve(&self, template: &str, store: &ValueStore) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                let id = &caps[1];
                match self.mode {
                    ResolutionMode::Verbatim if !store.contains(id) => caps[0].to_string(),
                    _ => store.get(id).to_string(),
                }
            })
            .into_owned()
    }

    /// Identifiers referenced by `template`, in order of appearance.
    pub fn placeholders(template: &str) -> Vec<&str> {
        PLACEHOLDER
            .captures_iter(template)
            .filter_map(|caps| caps.get(1))
            .map(|id| id.as_str())
            .collect()
    }
}

/// Resolves `template` with the default [`ResolutionMode::Empty`] policy.
pub fn resolve(template: &str, store: &ValueStore) -> String {
    TemplateResolver::default().resolve(template, store)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ValueStore {
        [("person-name", "Ana"), ("city", "Lima")].into_iter().collect()
    }

    #[test]
    fn plain_text_is_returned_unchanged() {
        for template in ["", "Hello!", "cost: $5 {x}", "${", "${}", "$ {x}"] {
            assert_eq!(resolve(template, &store()), template);
            assert_eq!(resolve(template, &ValueStore::new()), template);
        }
    }

    #[test]
    fn single_placeholder_is_the_stored_value() {
        assert_eq!(resolve("${person-name}", &store()), "Ana");
        assert_eq!(resolve("${person-name}", &ValueStore::new()), "");
    }

    #[test]
    fn every_placeholder_is_substituted() {
        assert_eq!(
            resolve("${person-name} from ${city}, ${person-name}.", &store()),
            "Ana from Lima, Ana."
        );
    }

    #[test]
    fn identifiers_are_looked_up_as_written() {
        assert_eq!(resolve("Hi ${ city }", &store()), "Hi ");
        let spaced = ValueStore::new().set(" x", "spaced").set(" ", "blank");
        assert_eq!(resolve("${ x}", &spaced), spaced.get(" x"));
        assert_eq!(resolve("a${ }b", &spaced), "ablankb");
        assert_eq!(resolve("a${ }b", &ValueStore::new()), "ab");
        assert_eq!(resolve("a${}b", &ValueStore::new()), "a${}b");
        assert_eq!(TemplateResolver::placeholders("${ x}"), vec![" x"]);
    }

    #[test]
    fn missing_values_resolve_empty_by_default() {
        assert_eq!(resolve("Hello ${nobody}!", &store()), "Hello !");
    }

    #[test]
    fn verbatim_mode_keeps_unknown_placeholders() {
        let resolver = TemplateResolver::new(ResolutionMode::Verbatim);
        assert_eq!(
            resolver.resolve("${person-name} and ${nobody}", &store()),
            "Ana and ${nobody}"
        );
        let blank = ValueStore::new().set("nobody", "");
        assert_eq!(resolver.resolve("[${nobody}]", &blank), "[]");
    }

    #[test]
    fn resolution_does_not_touch_the_store() {
        let before = store();
        let _ = resolve("${person-name} ${other}", &before);
        assert_eq!(before, store());
    }

    #[test]
    fn placeholders_are_listed_in_order() {
        assert_eq!(
            TemplateResolver::placeholders("${b} ${a} ${} ${b}"),
            vec!["b", "a", "b"]
        );
    }
}
