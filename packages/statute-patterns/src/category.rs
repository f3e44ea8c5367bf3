//! The statute category taxonomy.
//!
//! Each Philippine serial-title statute belongs to a fixed category. The
//! taxonomy is a non-exhaustive but closed set: the `code` of a member is a
//! stable machine key used both as a folder name for on-disk statute files
//! and as the `category` value in extracted rules, while the CamelCase
//! variant name can be "uncameled" to produce the human-readable serial
//! title for most members.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatutePatternError};

/// Taxonomy of Philippine statutes with serial titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatuteSerialCategory {
    /// Republic Act (post-1946 congress).
    #[serde(rename = "ra")]
    RepublicAct,

    /// Commonwealth Act (1935-1946).
    #[serde(rename = "ca")]
    CommonwealthAct,

    /// Act of the Philippine Commission / Legislature (pre-1935).
    #[serde(rename = "act")]
    Act,

    /// Constitution (1935, 1973 or 1987).
    #[serde(rename = "const")]
    Constitution,

    /// Spanish-era code (civil, commerce, penal).
    #[serde(rename = "spain")]
    Spain,

    /// Batas Pambansa (interim Batasang Pambansa).
    #[serde(rename = "bp")]
    BatasPambansa,

    /// Presidential Decree (martial-law era).
    #[serde(rename = "pd")]
    PresidentialDecree,

    /// Executive Order.
    #[serde(rename = "eo")]
    ExecutiveOrder,

    /// Letter of Instruction.
    #[serde(rename = "loi")]
    LetterOfInstruction,

    /// Veto Message on a Republic Act.
    #[serde(rename = "veto")]
    VetoMessage,

    /// Rules of Court.
    #[serde(rename = "roc")]
    RulesOfCourt,

    /// Bar Matter issued by the Supreme Court.
    #[serde(rename = "rule_bm")]
    BarMatter,

    /// Administrative Matter issued by the Supreme Court.
    #[serde(rename = "rule_am")]
    AdministrativeMatter,

    /// Resolution of the Court En Banc.
    #[serde(rename = "rule_reso")]
    ResolutionEnBanc,

    /// Circular of the Office of the Court Administrator.
    #[serde(rename = "oca_cir")]
    CircularOCA,

    /// Circular of the Supreme Court.
    #[serde(rename = "sc_cir")]
    CircularSC,
}

/// All taxonomy members, in declaration order.
pub const ALL_CATEGORIES: [StatuteSerialCategory; 16] = [
    StatuteSerialCategory::RepublicAct,
    StatuteSerialCategory::CommonwealthAct,
    StatuteSerialCategory::Act,
    StatuteSerialCategory::Constitution,
    StatuteSerialCategory::Spain,
    StatuteSerialCategory::BatasPambansa,
    StatuteSerialCategory::PresidentialDecree,
    StatuteSerialCategory::ExecutiveOrder,
    StatuteSerialCategory::LetterOfInstruction,
    StatuteSerialCategory::VetoMessage,
    StatuteSerialCategory::RulesOfCourt,
    StatuteSerialCategory::BarMatter,
    StatuteSerialCategory::AdministrativeMatter,
    StatuteSerialCategory::ResolutionEnBanc,
    StatuteSerialCategory::CircularOCA,
    StatuteSerialCategory::CircularSC,
];

/// Administrative Matter ids may carry a trailing `-<digits>` variant
/// disambiguator after the `sc` marker, e.g. `00-5-03-sc-1`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static AM_VARIANT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<base>.*-sc)-\d+$").expect("valid regex"));

impl StatuteSerialCategory {
    /// The stable lowercase machine code.
    ///
    /// Used as the folder-taxonomy key and as the wire value of `category`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::RepublicAct => "ra",
            Self::CommonwealthAct => "ca",
            Self::Act => "act",
            Self::Constitution => "const",
            Self::Spain => "spain",
            Self::BatasPambansa => "bp",
            Self::PresidentialDecree => "pd",
            Self::ExecutiveOrder => "eo",
            Self::LetterOfInstruction => "loi",
            Self::VetoMessage => "veto",
            Self::RulesOfCourt => "roc",
            Self::BarMatter => "rule_bm",
            Self::AdministrativeMatter => "rule_am",
            Self::ResolutionEnBanc => "rule_reso",
            Self::CircularOCA => "oca_cir",
            Self::CircularSC => "sc_cir",
        }
    }

    /// The CamelCase descriptive name of the member.
    #[must_use]
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::RepublicAct => "RepublicAct",
            Self::CommonwealthAct => "CommonwealthAct",
            Self::Act => "Act",
            Self::Constitution => "Constitution",
            Self::Spain => "Spain",
            Self::BatasPambansa => "BatasPambansa",
            Self::PresidentialDecree => "PresidentialDecree",
            Self::ExecutiveOrder => "ExecutiveOrder",
            Self::LetterOfInstruction => "LetterOfInstruction",
            Self::VetoMessage => "VetoMessage",
            Self::RulesOfCourt => "RulesOfCourt",
            Self::BarMatter => "BarMatter",
            Self::AdministrativeMatter => "AdministrativeMatter",
            Self::ResolutionEnBanc => "ResolutionEnBanc",
            Self::CircularOCA => "CircularOCA",
            Self::CircularSC => "CircularSC",
        }
    }

    /// Parse a category from its machine code, case-insensitively.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let lowered = code.to_lowercase();
        ALL_CATEGORIES.into_iter().find(|c| c.code() == lowered)
    }

    /// The descriptive name with spaces restored.
    ///
    /// A space is inserted before an internal capital that is preceded or
    /// followed by a lowercase letter, so acronym runs stay intact:
    /// `PresidentialDecree` becomes `Presidential Decree` while
    /// `CircularSC` becomes `Circular SC`.
    #[must_use]
    pub fn uncameled(&self) -> String {
        let name = self.variant_name();
        let chars: Vec<char> = name.chars().collect();
        let mut out = String::with_capacity(name.len() + 4);
        for (i, &c) in chars.iter().enumerate() {
            if i > 0 && c.is_ascii_uppercase() {
                let after_lower = chars[i - 1].is_ascii_lowercase();
                let before_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
                if after_lower || before_lower {
                    out.push(' ');
                }
            }
            out.push(c);
        }
        out
    }

    /// Render the canonical serial title for an id under this category.
    ///
    /// Fails with [`StatutePatternError::InvalidSerial`] when the id falls
    /// outside the category's accepted domain.
    ///
    /// # Examples
    /// ```
    /// use statute_patterns::StatuteSerialCategory;
    ///
    /// let pd = StatuteSerialCategory::PresidentialDecree;
    /// assert_eq!(pd.serialize("570-a").unwrap(), "Presidential Decree No. 570-A");
    ///
    /// let bp = StatuteSerialCategory::BatasPambansa;
    /// assert_eq!(bp.serialize("22").unwrap(), "Batas Pambansa Blg. 22");
    /// ```
    pub fn serialize(&self, id: &str) -> Result<String> {
        let invalid = || StatutePatternError::InvalidSerial {
            category: self.code().to_string(),
            id: id.to_string(),
        };

        match self {
            Self::Spain => {
                let lowered = id.to_lowercase();
                match lowered.as_str() {
                    "civil" => Ok("Spanish Civil Code".to_string()),
                    "penal" => Ok("Spanish Penal Code".to_string()),
                    "commerce" => Ok("Code of Commerce".to_string()),
                    _ => Err(invalid()),
                }
            }

            Self::Constitution => match id {
                "1935" | "1973" | "1987" => Ok(format!("{id} Constitution")),
                _ => Err(invalid()),
            },

            Self::RulesOfCourt => match id {
                "1940" | "1964" => Ok(format!("{id} Rules of Court")),
                "cpr" => Ok("Code of Professional Responsibility".to_string()),
                _ => Err(invalid()),
            },

            // No need to specify "No."; understood to refer to a Republic Act.
            Self::VetoMessage => Ok(format!("Veto Message - {id}")),

            // The id is expected to be an itemized date.
            Self::ResolutionEnBanc => {
                Ok(format!("Resolution of the Court En Banc dated {id}"))
            }

            Self::CircularSC => Ok(format!("SC Circular No. {id}")),

            Self::CircularOCA => Ok(format!("OCA Circular No. {id}")),

            Self::AdministrativeMatter => {
                // Ids with variants, e.g. `00-5-03-sc-1` and `00-5-03-sc-2`,
                // are truncated at the `sc` marker before uppercasing.
                let lowered = id.to_lowercase();
                let formatted = if lowered.ends_with("sc") {
                    lowered.to_uppercase()
                } else if let Some(caps) = AM_VARIANT_SUFFIX.captures(&lowered) {
                    caps["base"].to_uppercase()
                } else {
                    lowered.to_uppercase()
                };
                Ok(format!("Administrative Matter No. {formatted}"))
            }

            Self::BatasPambansa => {
                // There are no -A / -B suffixes among Batas Pambansa.
                if is_digits(id) {
                    Ok(format!("{} Blg. {id}", self.uncameled()))
                } else {
                    Err(invalid())
                }
            }

            _ => {
                // Purely numeric ids stay as-is; letter suffixes are
                // uppercased per textual convention (570-a -> 570-A).
                let target = if is_digits(id) {
                    id.to_string()
                } else {
                    id.to_uppercase()
                };
                Ok(format!("{} No. {target}", self.uncameled()))
            }
        }
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

impl fmt::Display for StatuteSerialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for StatuteSerialCategory {
    type Err = StatutePatternError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s).ok_or_else(|| StatutePatternError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_codes_unique_and_lowercase() {
        let codes: Vec<&str> = ALL_CATEGORIES.iter().map(|c| c.code()).collect();
        for code in &codes {
            assert_eq!(*code, code.to_lowercase());
        }
        let mut deduped = codes.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), codes.len());
    }

    #[test]
    fn test_from_code_case_insensitive() {
        assert_eq!(
            StatuteSerialCategory::from_code("RA"),
            Some(StatuteSerialCategory::RepublicAct)
        );
        assert_eq!(
            StatuteSerialCategory::from_code("rule_am"),
            Some(StatuteSerialCategory::AdministrativeMatter)
        );
        assert_eq!(StatuteSerialCategory::from_code("xx"), None);
    }

    #[test]
    fn test_uncameled() {
        assert_eq!(
            StatuteSerialCategory::PresidentialDecree.uncameled(),
            "Presidential Decree"
        );
        assert_eq!(
            StatuteSerialCategory::LetterOfInstruction.uncameled(),
            "Letter Of Instruction"
        );
        assert_eq!(StatuteSerialCategory::Act.uncameled(), "Act");
        assert_eq!(StatuteSerialCategory::CircularSC.uncameled(), "Circular SC");
    }

    #[test]
    fn test_serialize_generic() {
        let pd = StatuteSerialCategory::PresidentialDecree;
        assert_eq!(pd.serialize("570-a").unwrap(), "Presidential Decree No. 570-A");
        assert_eq!(pd.serialize("1606").unwrap(), "Presidential Decree No. 1606");
        assert_eq!(
            StatuteSerialCategory::RepublicAct.serialize("386").unwrap(),
            "Republic Act No. 386"
        );
    }

    #[test]
    fn test_serialize_batas_pambansa() {
        let bp = StatuteSerialCategory::BatasPambansa;
        assert_eq!(bp.serialize("22").unwrap(), "Batas Pambansa Blg. 22");
        assert!(bp.serialize("22-a").is_err());
    }

    #[test]
    fn test_serialize_spain() {
        let spain = StatuteSerialCategory::Spain;
        assert_eq!(spain.serialize("civil").unwrap(), "Spanish Civil Code");
        assert_eq!(spain.serialize("PENAL").unwrap(), "Spanish Penal Code");
        assert_eq!(spain.serialize("commerce").unwrap(), "Code of Commerce");
        assert!(spain.serialize("klingon").is_err());
    }

    #[test]
    fn test_serialize_constitution() {
        let konst = StatuteSerialCategory::Constitution;
        assert_eq!(konst.serialize("1987").unwrap(), "1987 Constitution");
        assert!(konst.serialize("1999").is_err());
        assert!(konst.serialize("abc").is_err());
    }

    #[test]
    fn test_serialize_rules_of_court() {
        let roc = StatuteSerialCategory::RulesOfCourt;
        assert_eq!(roc.serialize("1964").unwrap(), "1964 Rules of Court");
        assert_eq!(
            roc.serialize("cpr").unwrap(),
            "Code of Professional Responsibility"
        );
        assert!(roc.serialize("2020").is_err());
    }

    #[test]
    fn test_serialize_administrative_matter() {
        let am = StatuteSerialCategory::AdministrativeMatter;
        assert_eq!(
            am.serialize("03-06-13-sc").unwrap(),
            "Administrative Matter No. 03-06-13-SC"
        );
        // Variant suffix stripped before uppercasing.
        assert_eq!(
            am.serialize("00-5-03-sc-1").unwrap(),
            "Administrative Matter No. 00-5-03-SC"
        );
        assert_eq!(
            am.serialize("99-10-05-0").unwrap(),
            "Administrative Matter No. 99-10-05-0"
        );
    }

    #[test]
    fn test_serialize_court_issuances() {
        assert_eq!(
            StatuteSerialCategory::CircularSC.serialize("19").unwrap(),
            "SC Circular No. 19"
        );
        assert_eq!(
            StatuteSerialCategory::CircularOCA.serialize("39-02").unwrap(),
            "OCA Circular No. 39-02"
        );
        assert_eq!(
            StatuteSerialCategory::VetoMessage.serialize("11534").unwrap(),
            "Veto Message - 11534"
        );
        assert_eq!(
            StatuteSerialCategory::ResolutionEnBanc
                .serialize("10-15-1991")
                .unwrap(),
            "Resolution of the Court En Banc dated 10-15-1991"
        );
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(StatuteSerialCategory::RepublicAct.to_string(), "ra");
        let parsed: StatuteSerialCategory = "RA".parse().unwrap();
        assert_eq!(parsed, StatuteSerialCategory::RepublicAct);
        assert!("nope".parse::<StatuteSerialCategory>().is_err());
    }
}
