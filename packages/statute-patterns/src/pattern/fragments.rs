//! Curated regex fragment builders.
//!
//! Statutes appear in text with wildly inconsistent styling: "R.A. 8424",
//! "RA 8424", "B.  P.   22", "Rep. Act No. 386". The builders here
//! assemble fragments tolerant of abbreviation, optional periods, optional
//! "No./Nos." markers and spacing irregularities.

use std::sync::LazyLock;

use regex::Regex;

/// Compound-identifier separator: comma, whitespace runs, or "and".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s]+").expect("valid regex"));

/// Words that indicate "Act" is part of "Republic Act" / "Commonwealth
/// Act" phrasing or a title opener, not a legacy Act of congress.
pub const NON_ACT_INDICATORS: [&str; 8] = [
    "An",
    "AN",
    "Republic",
    "Rep",
    "Rep.",
    "REPUBLIC",
    "Commonwealth",
    "COMMONWEALTH",
];

/// Join letters into an acronym fragment tolerant of periods and spacing.
///
/// Covers styles like `RA 8424`, `P.D. 1606`, `B.  P.   22`.
///
/// # Examples
/// ```
/// use statute_patterns::pattern::ltr;
///
/// assert_eq!(ltr(&["R", "A"]), r"(?:\bR\.?\s*A\.?)");
/// ```
#[must_use]
pub fn ltr(letters: &[&str]) -> String {
    let joined = letters.join(r"\.?\s*");
    format!(r"(?:\b{joined}\.?)")
}

/// Append an optional `No.` / `Nos.` marker to a category fragment.
#[must_use]
pub fn add_num(prefix: &str) -> String {
    format!(r"{prefix}(?:\s+No\.?s?\.?)?")
}

/// Append an optional `Blg.` marker (Batas Pambansa convention).
#[must_use]
pub fn add_blg(prefix: &str) -> String {
    format!(r"{prefix}(?:\s+Blg\.?)?")
}

/// Generic serial id: 1-6 digits with an optional `-A`/`-B` amendment
/// suffix, dash optional.
#[must_use]
pub fn set_digit() -> String {
    r"\d{1,6}(?:[-–]?[AB])?".to_string()
}

/// Compound serial ids: one or more [`set_digit`] tokens chained via
/// comma/whitespace separators, with an optional final "and".
#[must_use]
pub fn set_digits() -> String {
    let digit = set_digit();
    format!(r"(?:(?:{digit}[,\s]+)*(?:and\s+)?{digit})")
}

/// Split a possibly-compound serial capture into individual identifiers.
///
/// Separators are commas, whitespace runs and the word "and"; empty
/// tokens and the bare "and" are discarded.
///
/// # Examples
/// ```
/// use statute_patterns::pattern::split_digits;
///
/// let parts: Vec<&str> = split_digits("965 and 2630").collect();
/// assert_eq!(parts, ["965", "2630"]);
/// ```
pub fn split_digits(text: &str) -> impl Iterator<Item = &str> {
    SEPARATOR
        .split(text)
        .map(str::trim)
        .filter(|token| !token.is_empty() && *token != "and")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::compile_verbose;
    use pretty_assertions::assert_eq;

    fn find<'t>(fragment: &str, text: &'t str) -> Option<&'t str> {
        compile_verbose("test", fragment)
            .unwrap()
            .find(text)
            .map(|m| m.as_str())
    }

    #[test]
    fn test_ltr_matches_abbreviation_styles() {
        assert_eq!(find(&ltr(&["R", "A"]), "This is RA. 1241"), Some("RA."));
        assert_eq!(find(&ltr(&["R", "A"]), "This is R A 1241"), Some("R A"));
        assert_eq!(find(&ltr(&["A", "M"]), "A.M. 141"), Some("A.M."));
    }

    #[test]
    fn test_ltr_requires_word_boundary_and_single_periods() {
        assert_eq!(find(&ltr(&["R", "A"]), "This isR.A. 1241"), None);
        assert_eq!(find(&ltr(&["A", "M"]), "A..M. 141"), None);
    }

    #[test]
    fn test_single_digit_shapes() {
        let digit = set_digit();
        assert_eq!(find(&digit, "Hello 123"), Some("123"));
        assert_eq!(find(&digit, "This is 123-ABC"), Some("123-A"));
        assert_eq!(find(&digit, "This is 123ABC is"), Some("123A"));
        assert_eq!(find(&digit, "This is 124141414 is"), Some("124141"));
        assert_eq!(find(&digit, "Only words found here"), None);
    }

    #[test]
    fn test_compound_digit_runs() {
        let digits = set_digits();
        assert_eq!(
            find(&digits, "Hello 123, 999, and 124"),
            Some("123, 999, and 124")
        );
        assert_eq!(
            find(&digits, "Hello this is a test 123, 999, 124"),
            Some("123, 999, 124")
        );
        assert_eq!(find(&digits, "Hello X X X  123 and 124"), Some("123 and 124"));
        assert_eq!(find(&digits, "Hello YYY  123"), Some("123"));
    }

    #[test]
    fn test_split_digits() {
        let parts: Vec<&str> = split_digits("123, 999, and 124").collect();
        assert_eq!(parts, ["123", "999", "124"]);

        let parts: Vec<&str> = split_digits("123 and 124").collect();
        assert_eq!(parts, ["123", "124"]);

        let parts: Vec<&str> = split_digits("123").collect();
        assert_eq!(parts, ["123"]);
    }
}
