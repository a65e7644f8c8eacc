//! Rendering resolved option values into the section-grouped
//! `[Section]` / `Key=Value` unit file format.

use crate::resolve::{self, ArgumentSet, Substitutions};
use crate::schema::OptionSchema;

/// Render a unit document from `options` in declaration order.
///
/// Consecutive entries sharing a section are grouped under a single
/// `[Section]` header; a blank line separates section runs. Grouping
/// follows declaration adjacency only: two non-adjacent runs of the same
/// section produce two headers. Entries that resolve to no value are
/// skipped entirely and never force a header.
///
/// Every emitted line is newline-terminated. A schema whose entries all
/// resolve to absent renders as the empty string.
#[must_use]
pub fn build(options: &[OptionSchema], args: &ArgumentSet, substitutions: &Substitutions) -> String {
    let mut out = String::new();
    let mut current_section: Option<&str> = None;

    for option in options {
        let Some(values) = resolve::resolve(option, args, substitutions) else {
            continue;
        };
        if current_section != Some(option.section) {
            if current_section.is_some() {
                out.push('\n');
            }
            out.push('[');
            out.push_str(option.section);
            out.push_str("]\n");
            current_section = Some(option.section);
        }
        for value in &values {
            out.push_str(option.key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
    }
    out
}
