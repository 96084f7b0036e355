//! Pattern compilation for the `format` constraint and string refinements.

use regex::{Regex, RegexBuilder};

/// Compile a schema `pattern` string into a [`Regex`].
///
/// A pattern of the form `/body/flags` (flags drawn from `gimuy`) is compiled
/// from `body` with the flags applied: `i` maps to case-insensitive matching
/// and `m` to multi-line mode, while `g`, `u` and `y` affect only how a
/// pattern is *used*, not what it matches, and are ignored. Any other string
/// is treated whole as the expression body with no flags.
///
/// Returns `None` when the expression does not compile.
pub fn compile_pattern(pattern: &str) -> Option<Regex> {
    if let Some((body, flags)) = split_literal(pattern) {
        RegexBuilder::new(body)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .build()
            .ok()
    } else {
        Regex::new(pattern).ok()
    }
}

/// Split a `/body/flags` regex literal into its parts.
///
/// Requires a non-empty body and flags drawn only from `gimuy`; anything else
/// is not a literal.
fn split_literal(pattern: &str) -> Option<(&str, &str)> {
    let rest = pattern.strip_prefix('/')?;
    let slash = rest.rfind('/')?;
    let (body, flags) = (&rest[..slash], &rest[slash + 1..]);
    if body.is_empty() || !flags.chars().all(|c| "gimuy".contains(c)) {
        return None;
    }
    Some((body, flags))
}
