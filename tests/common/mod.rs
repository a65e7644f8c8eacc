// Shared helpers for integration tests.
//
// Small constructors for argument sets and substitution maps so each
// integration test can state its inputs without repeating builder
// boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use unitgen::resolve::{ArgumentSet, Substitutions};

/// Build an [`ArgumentSet`] from `(key, value)` pairs.
pub fn args(pairs: &[(&str, &str)]) -> ArgumentSet {
    let mut set = ArgumentSet::new();
    for &(key, value) in pairs {
        set.insert(key, Some(value));
    }
    set
}

/// Build a [`Substitutions`] map from `(token, replacement)` pairs.
pub fn subs(pairs: &[(&str, &str)]) -> Substitutions {
    let mut map = Substitutions::new();
    for &(token, replacement) in pairs {
        map.insert(token, replacement);
    }
    map
}
