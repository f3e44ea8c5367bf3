//! Pattern abstractions for statute extraction.
//!
//! A pattern wraps a regex fragment plus example-based self-validation:
//! fixtures listed under `matches` must fully match the compiled fragment
//! and fixtures under `excludes` must not. The self-test runs when a
//! pattern collection is constructed, so a drifting hand-written fragment
//! is caught at startup rather than silently misfiring on real text.
//!
//! - [`SerialPattern`]: category label + serial number conventions
//!   ("Republic Act No. 386", "R.A. 386"), possibly compound.
//! - [`NamedPattern`]: one hand-written regex mapped to exactly one rule
//!   ("the Civil Code of the Philippines").

mod fragments;
mod named;
mod serial;

pub use fragments::{
    add_blg, add_num, ltr, set_digit, set_digits, split_digits, NON_ACT_INDICATORS,
};
pub use named::{NamedPattern, NamedPatternCollection};
pub use serial::{SerialPattern, SerialPatternCollection};

use regex::{Regex, RegexBuilder};

use crate::error::{Result, StatutePatternError};

/// A regex fragment that recognizes statute references.
///
/// Implementations provide a named-capture-group fragment suitable for
/// alternation with other patterns, plus their self-test fixtures.
pub trait StatutePattern {
    /// The full fragment, wrapped in a named capture group.
    fn regex_source(&self) -> String;

    /// The capture group name identifying this pattern in a combined scan.
    fn group_name(&self) -> &str;

    /// Fixtures that must fully match the fragment.
    fn match_fixtures(&self) -> &[String];

    /// Fixtures that must not match the fragment, even partially from the
    /// start of the string.
    fn exclude_fixtures(&self) -> &[String];
}

/// Compile a fragment in verbose mode.
///
/// Insignificant whitespace lets curated fragments be authored free-form;
/// meaningful whitespace is always written as `\s` classes.
pub fn compile_verbose(group: &str, source: &str) -> Result<Regex> {
    RegexBuilder::new(source)
        .ignore_whitespace(true)
        .build()
        .map_err(|e| StatutePatternError::InvalidPatternRegex {
            group: group.to_string(),
            source: Box::new(e),
        })
}

/// Run a pattern's fixture self-test.
///
/// Every `matches` fixture must match the fragment over its full length;
/// every `excludes` fixture must fail to match from the start of the
/// string. Violations reject the pattern with a
/// [`StatutePatternError::PatternDefinition`] naming the fixture.
pub fn verify_fixtures(pattern: &dyn StatutePattern) -> Result<()> {
    let source = pattern.regex_source();
    let group = pattern.group_name();
    let full = compile_verbose(group, &format!("^(?:{source})$"))?;
    let prefix = compile_verbose(group, &format!("^(?:{source})"))?;

    for fixture in pattern.match_fixtures() {
        if !full.is_match(fixture) {
            return Err(StatutePatternError::PatternDefinition {
                group: group.to_string(),
                fixture: fixture.clone(),
                reason: "fixture does not fully match".to_string(),
            });
        }
    }
    for fixture in pattern.exclude_fixtures() {
        if prefix.is_match(fixture) {
            return Err(StatutePatternError::PatternDefinition {
                group: group.to_string(),
                fixture: fixture.clone(),
                reason: "fixture matches but is intended to be excluded".to_string(),
            });
        }
    }
    Ok(())
}

/// Join pattern fragments into a single alternation, preserving order.
///
/// Order is a tie-break: where two alternatives could match at the same
/// position, the regex engine prefers the earlier one.
pub fn combine_sources<'a, P: StatutePattern + 'a>(
    patterns: impl IntoIterator<Item = &'a P>,
) -> String {
    patterns
        .into_iter()
        .map(StatutePattern::regex_source)
        .collect::<Vec<_>>()
        .join("|")
}

/// Check that no two patterns share a capture group name.
pub(crate) fn reject_duplicate_groups<'a, P: StatutePattern + 'a>(
    patterns: impl IntoIterator<Item = &'a P>,
) -> Result<()> {
    let mut seen: Vec<&str> = Vec::new();
    for pattern in patterns {
        let group = pattern.group_name();
        if seen.contains(&group) {
            return Err(StatutePatternError::DuplicateGroup {
                group: group.to_string(),
            });
        }
        seen.push(group);
    }
    Ok(())
}

/// The word immediately preceding a byte offset, if any.
///
/// Used by exclusion guards that disqualify a match based on the word in
/// front of it, e.g. "Act" preceded by "Republic".
pub(crate) fn preceding_word(text: &str, offset: usize) -> Option<&str> {
    let head = text[..offset].trim_end();
    head.rsplit(char::is_whitespace).next().filter(|w| !w.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preceding_word() {
        assert_eq!(preceding_word("Republic Act", 9), Some("Republic"));
        assert_eq!(preceding_word("An  Act", 4), Some("An"));
        assert_eq!(preceding_word("Act", 0), None);
        assert_eq!(preceding_word("  Act", 2), None);
    }

    #[test]
    fn test_compile_verbose_ignores_layout_whitespace() {
        let re = compile_verbose("test", "a\n    b\\s+c").unwrap();
        assert!(re.is_match("ab c"));
    }
}
