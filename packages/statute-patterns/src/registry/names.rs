//! Curated named patterns: statutes cited by name rather than serial.
//!
//! Each alias is a hand-written fragment mapped to one fixed rule. Codes
//! popularly cited by name resolve to the statute that enacted them, e.g.
//! the Civil Code of the Philippines is Republic Act No. 386.

use crate::category::StatuteSerialCategory::{
    Act, BatasPambansa, Constitution, ExecutiveOrder, PresidentialDecree, RepublicAct,
    RulesOfCourt, Spain,
};
use crate::error::Result;
use crate::pattern::{NamedPattern, NamedPatternCollection};
use crate::rule::Rule;

fn spanish_codes() -> Vec<NamedPattern> {
    vec![
        NamedPattern::new(
            "Old Civil Code",
            r"(?:\[?Spanish\]?|[Oo]ld)\s+Civil\s+Code(?:\s+of\s+18\d{2})?",
            Rule::new(Spain, "civil"),
        )
        .with_matches(["Spanish Civil Code", "old Civil Code of 1889"])
        .with_excludes(["Civil Code"]),
        NamedPattern::new(
            "Old Penal Code",
            r"(?:\[?Spanish\]?|[Oo]ld)\s+Penal\s+Code(?:\s+of\s+18\d{2})?",
            Rule::new(Spain, "penal"),
        )
        .with_matches(["Spanish Penal Code", "Old Penal Code"])
        .with_excludes(["Penal Code"]),
        NamedPattern::new(
            "Old Commerce Code",
            r"(?:\[?Spanish\]?|[Oo]ld)\s+Code\s+of\s+Commerce(?:\s+of\s+18\d{2})?",
            Rule::new(Spain, "commerce"),
        )
        .with_matches(["Spanish Code of Commerce", "Old Code of Commerce of 1885"])
        .with_excludes(["Code of Commerce"]),
    ]
}

fn constitution(year: &str) -> NamedPattern {
    NamedPattern::new(
        format!("{year} Constitution"),
        format!(
            r"{year}\s+(?:(?:Phil(?:ippine)?|PHIL(?:IPPINE)?)\.?\s+)?(?:Const(?:itution)?|CONST(?:ITUTION)?)\.?"
        ),
        Rule::new(Constitution, year),
    )
    .with_matches([
        format!("{year} Constitution"),
        format!("{year} PHIL CONST"),
        format!("{year} Philippine Constitution"),
    ])
    .with_excludes([year.to_string()])
}

fn codifications() -> Vec<NamedPattern> {
    vec![
        NamedPattern::new(
            "Civil Code of the Philippines",
            r"(?:[Nn]ew\s+)?Civil\s+Code\s+of\s+the\s+Philippines|[Nn]ew\s+Civil\s+Code",
            Rule::new(RepublicAct, "386"),
        )
        .with_matches(["Civil Code of the Philippines", "New Civil Code"])
        .with_excludes(["Civil Code"]),
        NamedPattern::new(
            "Revised Penal Code",
            r"Revised\s+Penal\s+Code(?:\s+of\s+the\s+Philippines)?|\bRPC\b",
            Rule::new(Act, "3815"),
        )
        .with_matches(["Revised Penal Code", "RPC"])
        .with_excludes(["Penal Code"]),
        NamedPattern::new(
            "Family Code",
            r"Family\s+Code(?:\s+of\s+the\s+Philippines)?",
            Rule::new(ExecutiveOrder, "209"),
        )
        .with_matches(["Family Code", "Family Code of the Philippines"]),
        NamedPattern::new(
            "Labor Code",
            r"Labor\s+Code(?:\s+of\s+the\s+Philippines)?",
            Rule::new(PresidentialDecree, "442"),
        )
        .with_matches(["Labor Code of the Philippines"]),
        NamedPattern::new(
            "Administrative Code of 1987",
            r"(?:Revised\s+)?Administrative\s+Code(?:\s+of\s+1987)?",
            Rule::new(ExecutiveOrder, "292"),
        )
        .with_matches(["Administrative Code of 1987"])
        .with_excludes(["Administrative Matter"]),
        NamedPattern::new(
            "Child and Youth Welfare Code",
            r"Child\s+and\s+Youth\s+Welfare\s+Code",
            Rule::new(PresidentialDecree, "603"),
        )
        .with_matches(["Child and Youth Welfare Code"]),
        NamedPattern::new(
            "Corporation Code",
            r"Corporation\s+Code(?:\s+of\s+the\s+Philippines)?",
            Rule::new(BatasPambansa, "68"),
        )
        .with_matches(["Corporation Code"]),
        NamedPattern::new(
            "Revised Corporation Code",
            r"Revised\s+Corporation\s+Code(?:\s+of\s+the\s+Philippines)?",
            Rule::new(RepublicAct, "11232"),
        )
        .with_matches(["Revised Corporation Code"]),
        NamedPattern::new(
            "National Internal Revenue Code",
            r"National\s+Internal\s+Revenue\s+Code(?:\s+of\s+1997)?|(?:1997\s+)?Tax\s+Code|\bNIRC\b",
            Rule::new(RepublicAct, "8424"),
        )
        .with_matches(["National Internal Revenue Code", "Tax Code"]),
        NamedPattern::new(
            "Local Government Code",
            r"Local\s+Government\s+Code(?:\s+of\s+1991)?",
            Rule::new(RepublicAct, "7160"),
        )
        .with_matches(["Local Government Code of 1991"]),
        NamedPattern::new(
            "Omnibus Election Code",
            r"Omnibus\s+Election\s+Code",
            Rule::new(BatasPambansa, "881"),
        )
        .with_matches(["Omnibus Election Code"]),
        NamedPattern::new(
            "Rules of Court",
            r"(?:Revised\s+)?Rules\s+of\s+Court",
            Rule::new(RulesOfCourt, "1964"),
        )
        .with_matches(["Rules of Court", "Revised Rules of Court"]),
        NamedPattern::new(
            "Code of Professional Responsibility",
            r"Code\s+of\s+Professional\s+Responsibility|\bC\.P\.R\.",
            Rule::new(RulesOfCourt, "cpr"),
        )
        .with_matches(["Code of Professional Responsibility", "C.P.R."]),
    ]
}

/// Build the named registry.
pub fn build_named_rules() -> Result<NamedPatternCollection> {
    let mut patterns = spanish_codes();
    patterns.push(constitution("1935"));
    patterns.push(constitution("1973"));
    patterns.push(constitution("1987"));
    patterns.extend(codifications());
    NamedPatternCollection::new(patterns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_builds() {
        let collection = build_named_rules().unwrap();
        assert!(collection.combined_regex().contains("spain_civil"));
        assert!(collection.combined_regex().contains("const_1987"));
        assert!(collection.combined_regex().contains("ra_386"));
    }
}
