//! Extraction facade over the two registries.
//!
//! Text is scanned independently and fully by each registry: the serial
//! stream precedes the named stream in the combined output regardless of
//! where in the text each mention occurs.

use serde::Serialize;

use crate::category::StatuteSerialCategory;
use crate::registry::{NAMED_RULES, SERIALIZED_RULES};
use crate::rule::Rule;

/// A unique rule with its mention count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleCount {
    /// Classification under the [`StatuteSerialCategory`] taxonomy.
    pub category: StatuteSerialCategory,

    /// Serial identifier within the category.
    pub id: String,

    /// Number of textual mentions resolving to this rule.
    pub mentions: usize,
}

/// Extract every statute rule mentioned in the text.
///
/// Serialized rules ("Rep Act No. 386") come first, named rules ("the
/// Civil Code of the Philippines") second. A compound serial citation
/// yields one rule per component identifier.
///
/// # Examples
/// ```
/// use statute_patterns::extract_rules;
///
/// let text = "The Civil Code of the Philippines, the old Spanish Civil Code; Rep Act No. 386";
/// let rules = extract_rules(text);
/// assert_eq!(rules.len(), 3);
/// assert_eq!(rules[0].to_string(), "ra 386");
/// assert_eq!(rules[2].to_string(), "spain civil");
/// ```
#[must_use]
pub fn extract_rules(text: &str) -> Vec<Rule> {
    let mut rules = SERIALIZED_RULES.extract_rules(text);
    rules.extend(NAMED_RULES.extract_rules(text));
    rules
}

/// The first rule found in the text, if any.
///
/// No match in free text is an expected outcome, not an error.
#[must_use]
pub fn extract_rule(text: &str) -> Option<Rule> {
    extract_rules(text).into_iter().next()
}

/// Count mentions per unique rule, preserving first-seen order.
///
/// Counting is over rules, not textual matches: a compound citation
/// contributes one mention per component identifier, and serial and named
/// mentions of the same statute land in the same bucket.
#[must_use]
pub fn count_rules(text: &str) -> Vec<RuleCount> {
    let mut counts: Vec<RuleCount> = Vec::new();
    for rule in extract_rules(text) {
        if let Some(entry) = counts
            .iter_mut()
            .find(|c| c.category == rule.category && c.id == rule.id)
        {
            entry.mentions += 1;
        } else {
            counts.push(RuleCount {
                category: rule.category,
                id: rule.id,
                mentions: 1,
            });
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_rule_first_or_absent() {
        let rule = extract_rule("under Batas Pambansa Blg. 22 and R.A. 386").unwrap();
        assert_eq!(rule.to_string(), "bp 22");

        assert!(extract_rule("no statutes here").is_none());
    }

    #[test]
    fn test_count_rules_multiset() {
        let text = "The Civil Code of the Philippines, the old Spanish Civil Code; Rep Act No. 386";
        let counts = count_rules(text);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].id, "386");
        assert_eq!(counts[0].mentions, 2);
        assert_eq!(counts[1].id, "civil");
        assert_eq!(counts[1].mentions, 1);
    }
}
