//! The canonical statute identifier.
//!
//! A [`Rule`] pairs a taxonomy category with a serial id and is the
//! universal output of pattern extraction. Two rules with the same
//! normalized fields are interchangeable, which is what makes multiset
//! counting of repeated mentions possible.

use serde::{Deserialize, Serialize};

use crate::category::StatuteSerialCategory;
use crate::error::Result;

/// A `(category, id)` identifier for a statute.
///
/// The id is lowercased on construction regardless of input case, so
/// `RA 386` and `ra 386` produce equal, identically-hashing values.
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    /// Classification under the closed [`StatuteSerialCategory`] taxonomy.
    pub category: StatuteSerialCategory,

    /// Serial identifier within the category, e.g. `386` or `02-11-10-sc`.
    pub id: String,
}

impl Rule {
    /// Create a rule, lowercasing the id.
    #[must_use]
    pub fn new(category: StatuteSerialCategory, id: impl Into<String>) -> Self {
        Self {
            category,
            id: id.into().to_lowercase(),
        }
    }

    /// Create a rule from a raw category code and id, normalizing both.
    ///
    /// # Examples
    /// ```
    /// use statute_patterns::Rule;
    ///
    /// let a = Rule::from_parts("RA", "386").unwrap();
    /// let b = Rule::from_parts("ra", "386").unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn from_parts(category: &str, id: impl Into<String>) -> Result<Self> {
        Ok(Self::new(category.parse()?, id))
    }

    /// The canonical human-readable title, e.g. `Republic Act No. 386`.
    ///
    /// Propagates [`crate::StatutePatternError::InvalidSerial`] when the id
    /// is outside the category's accepted domain.
    pub fn serial_title(&self) -> Result<String> {
        self.category.serialize(&self.id)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.category, self.id)
    }
}
