//! Option resolution: merging caller-supplied values with schema defaults
//! and applying placeholder substitution.
//!
//! Resolution is deliberately decoupled from presentation: [`resolve`]
//! returns plain value lists so the same output can feed both file
//! generation and a `--dry-run` preview.

use std::collections::BTreeMap;

use crate::schema::OptionSchema;

/// The values the caller supplied on the command line, keyed by
/// lower-cased option key.
///
/// Built once per invocation from parsed CLI input and read-only
/// thereafter, except for the single permitted mutation via
/// [`ArgumentSet::set`]: replacing the raw executable path with its fully
/// resolved invocation string.
#[derive(Debug, Default, Clone)]
pub struct ArgumentSet {
    values: BTreeMap<String, Vec<String>>,
}

impl ArgumentSet {
    /// Empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single value for `key`. No-op when `value` is `None`.
    pub fn insert(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.values
                .insert(key.to_lowercase(), vec![value.to_string()]);
        }
    }

    /// Record every element of `values` for `key`, preserving order.
    /// No-op when `values` is empty.
    pub fn insert_all(&mut self, key: &str, values: &[String]) {
        if !values.is_empty() {
            self.values.insert(key.to_lowercase(), values.to_vec());
        }
    }

    /// Replace the value of `key`, whether or not it was present.
    pub fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_lowercase(), vec![value]);
    }

    /// Values supplied for `key`, compared case-insensitively.
    ///
    /// Returns `None` when the key is absent or its sequence is empty.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.values
            .get(&key.to_lowercase())
            .map(Vec::as_slice)
            .filter(|v| !v.is_empty())
    }

    /// First value supplied for `key`, if any.
    #[must_use]
    pub fn get_single(&self, key: &str) -> Option<&str> {
        self.get(key)?.first().map(String::as_str)
    }
}

/// Fixed per-invocation map from placeholder token to replacement text.
///
/// Applied to every resolved output value as a literal, non-recursive
/// substring replacement. A `BTreeMap` keeps iteration order deterministic;
/// since the placeholder tokens are disjoint `%`-delimited strings, the
/// application order does not affect the result.
#[derive(Debug, Default, Clone)]
pub struct Substitutions {
    entries: BTreeMap<String, String>,
}

impl Substitutions {
    /// Empty substitution map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `token` to be replaced by `replacement`.
    pub fn insert(&mut self, token: &str, replacement: &str) {
        self.entries
            .insert(token.to_string(), replacement.to_string());
    }

    /// Apply every substitution to `value`.
    ///
    /// Replacement text is never re-scanned for further placeholders.
    #[must_use]
    pub fn apply(&self, value: &str) -> String {
        let mut out = value.to_string();
        for (token, replacement) in &self.entries {
            out = out.replace(token, replacement);
        }
        out
    }
}

/// Resolve the effective value(s) of one schema entry.
///
/// User-supplied values win over the schema default; a missing value and a
/// missing default resolve to `None`, omitting the field from output
/// entirely. Every candidate value passes through `substitutions`.
///
/// An empty string after substitution never produces an output line: for a
/// singular field it collapses the whole field to `None`, and for a
/// multiple field empty elements are dropped individually.
#[must_use]
pub fn resolve(
    schema: &OptionSchema,
    args: &ArgumentSet,
    substitutions: &Substitutions,
) -> Option<Vec<String>> {
    let candidates: Vec<String> = match args.get(schema.key) {
        Some(values) => values.to_vec(),
        None => vec![schema.default?.to_string()],
    };

    let substituted: Vec<String> = candidates
        .iter()
        .map(|value| substitutions.apply(value))
        .filter(|value| !value.is_empty())
        .collect();

    if substituted.is_empty() {
        None
    } else {
        Some(substituted)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn entry(key: &'static str, default: Option<&'static str>, multiple: bool) -> OptionSchema {
        OptionSchema {
            section: "Test",
            key,
            default,
            required: false,
            multiple,
            allowed_values: None,
        }
    }

    // -----------------------------------------------------------------------
    // ArgumentSet
    // -----------------------------------------------------------------------

    #[test]
    fn lookup_is_case_insensitive() {
        let mut args = ArgumentSet::new();
        args.insert("ExecStart", Some("/bin/true"));
        assert_eq!(args.get_single("execstart"), Some("/bin/true"));
        assert_eq!(args.get_single("EXECSTART"), Some("/bin/true"));
    }

    #[test]
    fn insert_none_is_a_no_op() {
        let mut args = ArgumentSet::new();
        args.insert("description", None);
        assert!(args.get("description").is_none());
    }

    #[test]
    fn insert_all_preserves_order() {
        let mut args = ArgumentSet::new();
        args.insert_all("environment", &["A=1".to_string(), "B=2".to_string()]);
        assert_eq!(args.get("environment").unwrap(), ["A=1", "B=2"]);
    }

    #[test]
    fn insert_all_empty_is_a_no_op() {
        let mut args = ArgumentSet::new();
        args.insert_all("environment", &[]);
        assert!(args.get("environment").is_none());
    }

    #[test]
    fn set_replaces_existing_values() {
        let mut args = ArgumentSet::new();
        args.insert("execstart", Some("app"));
        args.set("execstart", "/usr/bin/app".to_string());
        assert_eq!(args.get_single("execstart"), Some("/usr/bin/app"));
    }

    // -----------------------------------------------------------------------
    // Substitutions
    // -----------------------------------------------------------------------

    #[test]
    fn apply_replaces_all_occurrences() {
        let mut subs = Substitutions::new();
        subs.insert("%unitname%", "demo");
        assert_eq!(subs.apply("%unitname%-%unitname%"), "demo-demo");
    }

    #[test]
    fn apply_is_not_recursive() {
        let mut subs = Substitutions::new();
        subs.insert("%a%", "%a%%a%");
        assert_eq!(subs.apply("%a%"), "%a%%a%");
    }

    #[test]
    fn apply_leaves_unknown_tokens_alone() {
        let subs = Substitutions::new();
        assert_eq!(subs.apply("%unknown%"), "%unknown%");
    }

    // -----------------------------------------------------------------------
    // resolve
    // -----------------------------------------------------------------------

    #[test]
    fn user_value_wins_over_default() {
        let mut args = ArgumentSet::new();
        args.insert("restart", Some("always"));
        let resolved = resolve(
            &entry("Restart", Some("on-failure"), false),
            &args,
            &Substitutions::new(),
        );
        assert_eq!(resolved, Some(vec!["always".to_string()]));
    }

    #[test]
    fn default_used_when_no_user_value() {
        let resolved = resolve(
            &entry("WantedBy", Some("multi-user.target"), false),
            &ArgumentSet::new(),
            &Substitutions::new(),
        );
        assert_eq!(resolved, Some(vec!["multi-user.target".to_string()]));
    }

    #[test]
    fn absent_without_default_resolves_to_none() {
        let resolved = resolve(
            &entry("Description", None, false),
            &ArgumentSet::new(),
            &Substitutions::new(),
        );
        assert!(resolved.is_none());
    }

    #[test]
    fn default_is_substituted() {
        let mut subs = Substitutions::new();
        subs.insert("%execstartdir%", "/srv/app");
        let resolved = resolve(
            &entry("WorkingDirectory", Some("%execstartdir%"), false),
            &ArgumentSet::new(),
            &subs,
        );
        assert_eq!(resolved, Some(vec!["/srv/app".to_string()]));
    }

    #[test]
    fn user_value_is_substituted() {
        let mut args = ArgumentSet::new();
        args.insert("syslogidentifier", Some("%unitname%"));
        let mut subs = Substitutions::new();
        subs.insert("%unitname%", "demo");
        let resolved = resolve(&entry("SyslogIdentifier", None, false), &args, &subs);
        assert_eq!(resolved, Some(vec!["demo".to_string()]));
    }

    #[test]
    fn empty_singular_value_collapses_to_none() {
        let mut args = ArgumentSet::new();
        args.insert("description", Some(""));
        let resolved = resolve(
            &entry("Description", Some("fallback"), false),
            &args,
            &Substitutions::new(),
        );
        // The user value wins the lookup, then empty-string suppression
        // drops the whole field; the default is not consulted again.
        assert!(resolved.is_none());
    }

    #[test]
    fn empty_after_substitution_collapses_to_none() {
        let mut args = ArgumentSet::new();
        args.insert("description", Some("%unitname%"));
        let mut subs = Substitutions::new();
        subs.insert("%unitname%", "");
        let resolved = resolve(&entry("Description", None, false), &args, &subs);
        assert!(resolved.is_none());
    }

    #[test]
    fn multiple_values_preserved_in_order() {
        let mut args = ArgumentSet::new();
        args.insert_all("environment", &["A=1".to_string(), "B=2".to_string()]);
        let resolved = resolve(
            &entry("Environment", None, true),
            &args,
            &Substitutions::new(),
        );
        assert_eq!(resolved, Some(vec!["A=1".to_string(), "B=2".to_string()]));
    }

    #[test]
    fn empty_elements_of_multiple_value_dropped_individually() {
        let mut args = ArgumentSet::new();
        args.insert_all(
            "environment",
            &["A=1".to_string(), String::new(), "B=2".to_string()],
        );
        let resolved = resolve(
            &entry("Environment", None, true),
            &args,
            &Substitutions::new(),
        );
        assert_eq!(resolved, Some(vec!["A=1".to_string(), "B=2".to_string()]));
    }
}
