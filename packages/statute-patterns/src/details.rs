//! Loading statute detail files from a local corpus.
//!
//! A rule doubles as a join key into an on-disk tree laid out as
//! `<base>/<category-code>/<serial-id>/`, each folder holding a
//! `details.yaml` and a units document. The combination of category and id
//! is not always unique: complex statutes keep multiple variant folders
//! (`<id>-1`, `<id>-2`) distinguished by a trailing digit.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatutePatternError};
use crate::rule::Rule;

/// Filename of the per-statute metadata document.
pub const DETAILS_FILE: &str = "details.yaml";

/// Fallback email recorded when a details file lists none.
const DEFAULT_EMAIL: &str = "bot@lawsql.com";

/// Regex for slug generation - matches non-word characters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

/// Regex for slug generation - matches whitespace and dash runs.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_SPACE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// Short titles are declared in the statute body itself, e.g.
/// `This Act shall be known as the "Civil Code of the Philippines."`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SHORT_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:shall\s+be\s+known\s+as\s+the\s+|known\s+as\s+the\s+)[“"](?P<title>[^”"]+?)\.?[”"]"#)
        .expect("valid regex")
});

/// Ways a statute's title can be referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatuteTitleCategory {
    /// Full-length title declared by the statute.
    Official,

    /// Category + serial identifier, e.g. "Republic Act No. 6552".
    Serial,

    /// Popular, undocumented way of referring to a statute.
    Alias,

    /// Short title declared in the body of the statute.
    Short,
}

/// One title row for a statute, ready for database population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatuteTitle {
    pub statute_id: String,
    pub category: StatuteTitleCategory,
    pub text: String,
}

/// A node in a statute's unit tree (containers, articles, sections).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatuteUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub units: Vec<StatuteUnit>,
}

impl StatuteUnit {
    fn placeholder(content: &str) -> Vec<StatuteUnit> {
        vec![StatuteUnit {
            item: Some("Container 1".to_string()),
            caption: None,
            content: Some(content.to_string()),
            units: Vec::new(),
        }]
    }
}

/// Raw shape of a `details.yaml` document.
#[derive(Debug, Deserialize)]
struct DetailsDoc {
    #[serde(default)]
    law_title: Option<String>,

    #[serde(default)]
    date: Option<String>,

    #[serde(default)]
    variant: Option<u32>,

    #[serde(default)]
    aliases: Vec<Option<String>>,

    #[serde(default)]
    emails: Vec<String>,
}

/// Structured information loaded from a statute folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatuteDetails {
    /// Slug id unique per folder + date + variant.
    pub id: String,

    pub emails: Vec<String>,

    pub date: NaiveDate,

    pub variant: Option<u32>,

    /// Canonical serial title derived from the rule.
    pub serial_title: String,

    /// Full-length official title from the details file.
    pub official_title: String,

    pub alias_titles: Vec<String>,

    pub units: Vec<StatuteUnit>,
}

impl StatuteDetails {
    /// Load details for a rule from the first folder it resolves to.
    ///
    /// Returns `Ok(None)` when the base path or statute folder does not
    /// exist; malformed documents are errors.
    pub fn from_rule(rule: &Rule, base_path: &Path) -> Result<Option<StatuteDetails>> {
        if !base_path.exists() {
            return Ok(None);
        }
        let Some(folder) = rule.extract_folders(base_path).into_iter().next() else {
            return Ok(None);
        };
        Self::from_folder(rule, &folder)
    }

    /// Load details from a specific statute folder.
    pub fn from_folder(rule: &Rule, folder: &Path) -> Result<Option<StatuteDetails>> {
        let details_file = folder.join(DETAILS_FILE);
        if !details_file.exists() {
            return Ok(None);
        }

        let doc: DetailsDoc = serde_yaml::from_str(&fs::read_to_string(&details_file)?)?;
        let official_title = doc.law_title.ok_or_else(|| {
            StatutePatternError::MissingDetailField {
                field: "law_title".to_string(),
                path: details_file.clone(),
            }
        })?;
        let date_str = doc.date.ok_or_else(|| StatutePatternError::MissingDetailField {
            field: "date".to_string(),
            path: details_file.clone(),
        })?;
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
            StatutePatternError::InvalidDate {
                value: date_str.clone(),
                path: details_file.clone(),
            }
        })?;

        let units = load_units(rule, folder, &official_title)?;

        let folder_name = folder
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| StatutePatternError::InvalidDetailPath(folder.to_path_buf()))?;
        let mut slug_source = format!("{} {} {}", rule.category.code(), folder_name, date_str);
        if let Some(variant) = doc.variant {
            slug_source.push_str(&format!(" {variant}"));
        }

        let emails = if doc.emails.is_empty() {
            vec![DEFAULT_EMAIL.to_string()]
        } else {
            doc.emails
        };

        Ok(Some(StatuteDetails {
            id: slugify(&slug_source),
            emails,
            date,
            variant: doc.variant,
            serial_title: rule.serial_title()?,
            official_title,
            alias_titles: doc.aliases.into_iter().flatten().collect(),
            units,
        }))
    }

    /// All title rows for this statute, aliases first.
    #[must_use]
    pub fn titles(&self) -> Vec<StatuteTitle> {
        let mut titles: Vec<StatuteTitle> = self
            .alias_titles
            .iter()
            .filter(|t| !t.is_empty())
            .map(|t| StatuteTitle {
                statute_id: self.id.clone(),
                category: StatuteTitleCategory::Alias,
                text: t.clone(),
            })
            .collect();
        if let Some(short) = short_title_from_units(&self.units) {
            titles.push(StatuteTitle {
                statute_id: self.id.clone(),
                category: StatuteTitleCategory::Short,
                text: short,
            });
        }
        titles.push(StatuteTitle {
            statute_id: self.id.clone(),
            category: StatuteTitleCategory::Serial,
            text: self.serial_title.clone(),
        });
        titles.push(StatuteTitle {
            statute_id: self.id.clone(),
            category: StatuteTitleCategory::Official,
            text: self.official_title.clone(),
        });
        titles
    }
}

fn load_units(rule: &Rule, folder: &Path, official_title: &str) -> Result<Vec<StatuteUnit>> {
    // Appropriation laws are voluminous and excluded from unit loading.
    if official_title.to_lowercase().contains("appropriat") {
        return Ok(StatuteUnit::placeholder("Appropriation laws are excluded."));
    }
    match rule.units_path(folder) {
        Some(path) => Ok(serde_yaml::from_str(&fs::read_to_string(path)?)?),
        None => Ok(StatuteUnit::placeholder(
            "Individual provisions not detected.",
        )),
    }
}

/// Generate a URL-friendly slug.
fn slugify(text: &str) -> String {
    let cleaned = SLUG_NON_WORD.replace_all(text, "");
    let dashed = SLUG_SPACE_DASH.replace_all(cleaned.trim(), "-");
    dashed.to_lowercase()
}

/// Find a declared short title anywhere in a unit tree.
///
/// Walks depth-first and returns the first quoted title following a
/// "shall be known as" clause.
#[must_use]
pub fn short_title_from_units(units: &[StatuteUnit]) -> Option<String> {
    for unit in units {
        if let Some(content) = &unit.content {
            if let Some(caps) = SHORT_TITLE.captures(content) {
                return Some(caps["title"].to_string());
            }
        }
        if let Some(found) = short_title_from_units(&unit.units) {
            return Some(found);
        }
    }
    None
}

impl Rule {
    /// The single folder for this rule, when category + id is unique.
    #[must_use]
    pub fn statute_path(&self, base_path: &Path) -> Option<PathBuf> {
        let target = base_path.join(self.category.code()).join(&self.id);
        target.exists().then_some(target)
    }

    /// Variant folders (`<id>-1`, `<id>-2`, ...) holding a details file.
    ///
    /// The serial id alone is not enough for complex statutes: several
    /// distinct documents can share one category + id, each stored under
    /// a digit-suffixed folder.
    #[must_use]
    pub fn variant_paths(&self, base_path: &Path) -> Vec<PathBuf> {
        let category_dir = base_path.join(self.category.code());
        let prefix = format!("{}-", self.id);
        let Ok(entries) = fs::read_dir(category_dir) else {
            return Vec::new();
        };
        let mut folders: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_dir()
                    && path
                        .file_name()
                        .is_some_and(|n| n.to_string_lossy().starts_with(&prefix))
                    && path.join(DETAILS_FILE).exists()
            })
            .collect();
        folders.sort();
        folders
    }

    /// Every folder this rule can resolve to: the unique path when it
    /// exists, otherwise the variant folders.
    #[must_use]
    pub fn extract_folders(&self, base_path: &Path) -> Vec<PathBuf> {
        match self.statute_path(base_path) {
            Some(folder) => vec![folder],
            None => self.variant_paths(base_path),
        }
    }

    /// The units document inside a statute folder.
    ///
    /// A preferred, hand-customized `<cat><id>.yaml` wins over the
    /// scraped `units.yaml` default.
    #[must_use]
    pub fn units_path(&self, statute_folder: &Path) -> Option<PathBuf> {
        let preferred = statute_folder.join(format!("{}{}.yaml", self.category.code(), self.id));
        if preferred.exists() {
            return Some(preferred);
        }
        let default = statute_folder.join("units.yaml");
        default.exists().then_some(default)
    }

    /// Recover a rule from a `<base>/<cat>/<id>/details.yaml` path or its
    /// parent folder.
    pub fn from_detail_path(path: &Path) -> Result<Self> {
        let folder = if path.is_file() || path.ends_with(DETAILS_FILE) {
            path.parent()
                .ok_or_else(|| StatutePatternError::InvalidDetailPath(path.to_path_buf()))?
        } else {
            path
        };
        let id = folder
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| StatutePatternError::InvalidDetailPath(path.to_path_buf()))?;
        let category = folder
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| StatutePatternError::InvalidDetailPath(path.to_path_buf()))?;
        Rule::from_parts(&category, id)
    }
}
