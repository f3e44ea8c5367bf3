//! Statute Patterns - Detect Philippine statute citations in text.
//!
//! This crate recognizes references to Philippine statutes, whether cited
//! serially ("Republic Act No. 386") or by name ("the Civil Code of the
//! Philippines"), and normalizes each mention into a category + id pair.
//!
//! # Example
//!
//! ```
//! use statute_patterns::extract_rules;
//!
//! let rules = extract_rules("Held under P.D. No. 971, as amended.");
//! assert_eq!(rules[0].to_string(), "pd 971");
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`category`]: The statute taxonomy and serial title formatting
//! - [`rule`]: The normalized category + id value type
//! - [`error`]: Error types and Result alias
//! - [`pattern`]: Regex fragment builders and the pattern machinery
//! - [`registry`]: Curated serial and named pattern registries
//! - [`extract`]: Extraction facade over the registries
//! - [`details`]: Loading statute detail files from a local corpus
//! - [`cli`]: Command-line interface

pub mod category;
pub mod cli;
pub mod details;
pub mod error;
pub mod extract;
pub mod pattern;
pub mod registry;
pub mod rule;

// Re-export main functions
pub use extract::{count_rules, extract_rule, extract_rules};

// Re-export commonly used items
pub use category::StatuteSerialCategory;
pub use details::{StatuteDetails, StatuteTitle, StatuteTitleCategory, StatuteUnit};
pub use error::{Result, StatutePatternError};
pub use extract::RuleCount;
pub use rule::Rule;
