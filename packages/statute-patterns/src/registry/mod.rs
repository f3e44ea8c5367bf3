//! Process-wide pattern registries.
//!
//! Both registries are built once from static literals on first use and
//! never mutated afterwards; fixture self-tests run during construction,
//! so a regression in a curated fragment aborts startup instead of
//! silently drifting.

mod names;
mod serials;

pub use names::build_named_rules;
pub use serials::build_serialized_rules;

use std::sync::LazyLock;

use crate::pattern::{NamedPatternCollection, SerialPatternCollection};

/// The serial registry: category + serial-number citation styles.
#[allow(clippy::expect_used)] // Curated fixtures are verified by unit tests
pub static SERIALIZED_RULES: LazyLock<SerialPatternCollection> =
    LazyLock::new(|| build_serialized_rules().expect("serial registry passes its self-test"));

/// The named registry: hand-curated aliases mapped to fixed rules.
#[allow(clippy::expect_used)] // Curated fixtures are verified by unit tests
pub static NAMED_RULES: LazyLock<NamedPatternCollection> =
    LazyLock::new(|| build_named_rules().expect("named registry passes its self-test"));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::StatuteSerialCategory;
    use crate::rule::Rule;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serial_registry_scan() {
        let rules = SERIALIZED_RULES.extract_rules("as held under P.D. No. 971 and R.A. 3844");
        assert_eq!(
            rules,
            vec![
                Rule::new(StatuteSerialCategory::PresidentialDecree, "971"),
                Rule::new(StatuteSerialCategory::RepublicAct, "3844"),
            ]
        );
    }

    #[test]
    fn test_named_registry_scan() {
        let rules =
            NAMED_RULES.extract_rules("This is the 1987 PHIL CONST; hello world, the Spanish Penal Code.");
        assert_eq!(
            rules,
            vec![
                Rule::new(StatuteSerialCategory::Constitution, "1987"),
                Rule::new(StatuteSerialCategory::Spain, "penal"),
            ]
        );
    }
}
