//! Named patterns: curated aliases for statutes without serial forms.

use regex::Regex;

use crate::error::Result;
use crate::pattern::{
    combine_sources, compile_verbose, reject_duplicate_groups, verify_fixtures, StatutePattern,
};
use crate::rule::Rule;

/// Maps one hand-written regex to exactly one fixed rule.
///
/// Some statutes are cited by name rather than serial number ("the Civil
/// Code of the Philippines", "1987 Constitution"). Each such alias gets
/// its own fragment; a match always yields the same rule, never split.
#[derive(Debug, Clone)]
pub struct NamedPattern {
    name: String,
    group_name: String,
    regex_base: String,
    rule: Rule,
    matches: Vec<String>,
    excludes: Vec<String>,
}

impl NamedPattern {
    /// Create a named pattern for a fixed rule.
    #[must_use]
    pub fn new(name: impl Into<String>, regex_base: impl Into<String>, rule: Rule) -> Self {
        Self {
            name: name.into(),
            group_name: group_slug(&rule),
            regex_base: regex_base.into(),
            rule,
            matches: Vec::new(),
            excludes: Vec::new(),
        }
    }

    /// Set the self-test fixtures that must match.
    #[must_use]
    pub fn with_matches(mut self, matches: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.matches = matches.into_iter().map(Into::into).collect();
        self
    }

    /// Set the self-test fixtures that must not match.
    #[must_use]
    pub fn with_excludes(mut self, excludes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excludes = excludes.into_iter().map(Into::into).collect();
        self
    }

    /// The human label for this alias.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fixed rule this pattern always yields.
    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }
}

impl StatutePattern for NamedPattern {
    fn regex_source(&self) -> String {
        format!("(?P<{}>{})", self.group_name, self.regex_base)
    }

    /// Unique per rule: at most one named pattern may exist per distinct
    /// `(category, id)`, since the group name doubles as the dispatch key.
    fn group_name(&self) -> &str {
        &self.group_name
    }

    fn match_fixtures(&self) -> &[String] {
        &self.matches
    }

    fn exclude_fixtures(&self) -> &[String] {
        &self.excludes
    }
}

/// Capture-group-safe slug of a rule's category code and id.
fn group_slug(rule: &Rule) -> String {
    let raw = format!("{} {}", rule.category.code(), rule.id);
    let mut slug = String::with_capacity(raw.len());
    let mut last_was_separator = false;
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_separator = false;
        } else if !last_was_separator && !slug.is_empty() {
            slug.push('_');
            last_was_separator = true;
        }
    }
    if slug.ends_with('_') {
        slug.pop();
    }
    slug
}

/// All named patterns combined into one scan.
///
/// Same construction contract as the serial collection: eager compile,
/// fixture self-test per member, duplicate group names rejected.
#[derive(Debug)]
pub struct NamedPatternCollection {
    patterns: Vec<NamedPattern>,
    combined: Regex,
}

impl NamedPatternCollection {
    /// Build the collection, verifying every member.
    pub fn new(patterns: Vec<NamedPattern>) -> Result<Self> {
        reject_duplicate_groups(&patterns)?;
        for pattern in &patterns {
            verify_fixtures(pattern)?;
        }
        let combined = compile_verbose("named_collection", &combine_sources(&patterns))?;
        Ok(Self { patterns, combined })
    }

    /// The combined alternation source, mostly useful for diagnostics.
    #[must_use]
    pub fn combined_regex(&self) -> &str {
        self.combined.as_str()
    }

    /// Scan text and yield the fixed rule of each matching alias, in
    /// text order. One mention yields exactly one rule.
    #[must_use]
    pub fn extract_rules(&self, text: &str) -> Vec<Rule> {
        let mut rules = Vec::new();
        for caps in self.combined.captures_iter(text) {
            if let Some(pattern) = self
                .patterns
                .iter()
                .find(|p| caps.name(p.group_name()).is_some())
            {
                rules.push(pattern.rule().clone());
            }
        }
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::StatuteSerialCategory;
    use pretty_assertions::assert_eq;

    fn spain_civil() -> NamedPattern {
        NamedPattern::new(
            "Old Civil Code",
            r"(?:\[?Spanish\]?|[Oo]ld)\s+Civil\s+Code(?:\s+of\s+18\d{2})?",
            Rule::new(StatuteSerialCategory::Spain, "civil"),
        )
        .with_matches(["Spanish Civil Code", "old Civil Code of 1889"])
        .with_excludes(["Civil Code"])
    }

    #[test]
    fn test_group_slug_per_rule() {
        let pattern = spain_civil();
        assert_eq!(pattern.group_name(), "spain_civil");

        let am = NamedPattern::new(
            "Sample",
            r"x",
            Rule::new(StatuteSerialCategory::AdministrativeMatter, "02-11-10-SC"),
        );
        assert_eq!(am.group_name(), "rule_am_02_11_10_sc");
    }

    #[test]
    fn test_extracts_fixed_rule_in_text_order() {
        let collection = NamedPatternCollection::new(vec![spain_civil()]).unwrap();
        let rules = collection.extract_rules("per the old Spanish Civil Code of 1889, see also");
        assert_eq!(
            rules,
            vec![Rule::new(StatuteSerialCategory::Spain, "civil")]
        );
    }

    #[test]
    fn test_duplicate_rule_rejected() {
        let result = NamedPatternCollection::new(vec![spain_civil(), spain_civil()]);
        assert!(result.is_err());
    }
}
