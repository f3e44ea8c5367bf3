//! Error types for statute pattern matching.
//!
//! Three kinds of failure exist: definition-time contract violations in the
//! curated pattern registries (fatal at startup), serialization of an id
//! outside a category's accepted domain, and I/O glue errors while loading
//! statute detail files. Absence of a match is never an error.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the statute-patterns library.
#[derive(Debug, Error)]
pub enum StatutePatternError {
    /// A curated pattern failed its own match/exclude fixture self-test.
    ///
    /// Raised only while constructing a pattern collection, never by
    /// arbitrary runtime input.
    #[error("Pattern '{group}' failed self-test on fixture '{fixture}': {reason}")]
    PatternDefinition {
        group: String,
        fixture: String,
        reason: String,
    },

    /// A regex fragment in a curated pattern did not compile.
    #[error("Pattern '{group}' has an invalid regex: {source}")]
    InvalidPatternRegex {
        group: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// Two patterns in one collection share a capture group name.
    #[error("Duplicate capture group '{group}' in pattern collection")]
    DuplicateGroup { group: String },

    /// The id is not an accepted serial value for the category.
    #[error("'{id}' is not a valid serial id for category '{category}'")]
    InvalidSerial { category: String, id: String },

    /// The category code does not belong to the taxonomy.
    #[error("Unknown statute category: '{0}'")]
    UnknownCategory(String),

    /// A detail file path does not follow the statutes/<cat>/<id> layout.
    #[error("Path does not resolve to a statute folder: {0}")]
    InvalidDetailPath(PathBuf),

    /// A required field is missing from a details.yaml file.
    #[error("Missing required field '{field}' in {path}")]
    MissingDetailField { field: String, path: PathBuf },

    /// A date field in a details.yaml file could not be parsed.
    #[error("Invalid date '{value}' in {path}")]
    InvalidDate { value: String, path: PathBuf },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for statute-patterns operations.
pub type Result<T> = std::result::Result<T, StatutePatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_serial_display() {
        let err = StatutePatternError::InvalidSerial {
            category: "spain".to_string(),
            id: "klingon".to_string(),
        };
        assert!(err.to_string().contains("klingon"));
        assert!(err.to_string().contains("spain"));
    }

    #[test]
    fn test_pattern_definition_display() {
        let err = StatutePatternError::PatternDefinition {
            group: "serial_ra".to_string(),
            fixture: "R.A. 386".to_string(),
            reason: "fixture does not fully match".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Pattern 'serial_ra' failed self-test on fixture 'R.A. 386': fixture does not fully match"
        );
    }
}
