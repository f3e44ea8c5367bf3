//! Serial patterns: category label + serial number conventions.

use regex::Regex;

use crate::category::StatuteSerialCategory;
use crate::error::Result;
use crate::pattern::{
    combine_sources, compile_verbose, preceding_word, reject_duplicate_groups, split_digits,
    verify_fixtures, StatutePattern,
};
use crate::rule::Rule;

/// Recognizes one statute category's serial citation styles.
///
/// A category can be written too many ways for a single regex: the pattern
/// therefore carries alternative `regex_bases` (the textual forms of the
/// category label) and `regex_serials` (acceptable serial-number shapes,
/// either a generic numeric grammar or an enumerated allow-list). The full
/// fragment is the cross product of both, so any base can pair with any
/// serial shape.
#[derive(Debug, Clone)]
pub struct SerialPattern {
    category: StatuteSerialCategory,
    group_name: String,
    regex_bases: Vec<String>,
    regex_serials: Vec<String>,
    excluded_preceders: Vec<&'static str>,
    matches: Vec<String>,
    excludes: Vec<String>,
}

impl SerialPattern {
    /// Create a pattern for a category from its base and serial fragments.
    #[must_use]
    pub fn new(
        category: StatuteSerialCategory,
        regex_bases: impl IntoIterator<Item = impl Into<String>>,
        regex_serials: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            category,
            group_name: format!("serial_{}", category.code()),
            regex_bases: regex_bases.into_iter().map(Into::into).collect(),
            regex_serials: regex_serials.into_iter().map(Into::into).collect(),
            excluded_preceders: Vec::new(),
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

    /// Disqualify matches immediately preceded by any of these words.
    ///
    /// This carries the original negative-lookbehind exclusions: the regex
    /// engine here has no look-around, so the same policy is enforced as a
    /// post-match guard during dispatch.
    #[must_use]
    pub fn with_excluded_preceders(mut self, words: impl IntoIterator<Item = &'static str>) -> Self {
        self.excluded_preceders = words.into_iter().collect();
        self
    }

    /// The category this pattern recognizes.
    #[must_use]
    pub fn category(&self) -> StatuteSerialCategory {
        self.category
    }

    /// The serial-number shapes alone, without the base wrapper.
    ///
    /// Used after a combined-regex hit to isolate the serial substring
    /// within the matched span.
    #[must_use]
    pub fn serial_only_source(&self) -> String {
        self.regex_serials.join("|")
    }

    fn is_guarded_against(&self, text: &str, match_start: usize) -> bool {
        if self.excluded_preceders.is_empty() {
            return false;
        }
        preceding_word(text, match_start)
            .is_some_and(|word| self.excluded_preceders.contains(&word))
    }
}

impl StatutePattern for SerialPattern {
    /// Named group wrapping the alternation over all `(base, serial)`
    /// pairs, bases outer, serials inner.
    fn regex_source(&self) -> String {
        let mut lines = Vec::with_capacity(self.regex_bases.len() * self.regex_serials.len());
        for base in &self.regex_bases {
            for serial in &self.regex_serials {
                lines.push(format!(r"(?:{base}\s*{serial})"));
            }
        }
        format!("(?P<{}>{})", self.group_name, lines.join("|"))
    }

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

/// All serial patterns combined into one scan.
///
/// Construction compiles the combined alternation eagerly, runs every
/// member's fixture self-test and rejects duplicate group names. The
/// collection is immutable afterwards, so scans from concurrent threads
/// need no locking.
#[derive(Debug)]
pub struct SerialPatternCollection {
    patterns: Vec<SerialPattern>,
    serial_matchers: Vec<Regex>,
    combined: Regex,
}

impl SerialPatternCollection {
    /// Build the collection, verifying every member.
    ///
    /// List order is preserved in the combined alternation: earlier
    /// patterns win where alternatives overlap at the same position.
    pub fn new(patterns: Vec<SerialPattern>) -> Result<Self> {
        reject_duplicate_groups(&patterns)?;
        for pattern in &patterns {
            verify_fixtures(pattern)?;
        }
        let combined = compile_verbose("serial_collection", &combine_sources(&patterns))?;
        let serial_matchers = patterns
            .iter()
            .map(|p| compile_verbose(p.group_name(), &p.serial_only_source()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            patterns,
            serial_matchers,
            combined,
        })
    }

    /// The combined alternation source, mostly useful for diagnostics.
    #[must_use]
    pub fn combined_regex(&self) -> &str {
        self.combined.as_str()
    }

    /// Scan text and decompose every serial mention into rules.
    ///
    /// A single textual mention can yield several rules: the serial
    /// capture may be compound ("RA Nos. 965 and 2630"), in which case it
    /// is split into its component identifiers, each becoming one rule in
    /// left-to-right order.
    #[must_use]
    pub fn extract_rules(&self, text: &str) -> Vec<Rule> {
        let mut rules = Vec::new();
        for caps in self.combined.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            let Some(index) = self
                .patterns
                .iter()
                .position(|p| caps.name(p.group_name()).is_some())
            else {
                continue;
            };
            let pattern = &self.patterns[index];

            if pattern.is_guarded_against(text, whole.start()) {
                tracing::debug!(
                    group = pattern.group_name(),
                    span = whole.as_str(),
                    "Discarding guarded match"
                );
                continue;
            }

            if let Some(serials) = self.serial_matchers[index].find(whole.as_str()) {
                for token in split_digits(serials.as_str()) {
                    rules.push(Rule::new(pattern.category(), token));
                }
            }
        }
        rules
    }
}
