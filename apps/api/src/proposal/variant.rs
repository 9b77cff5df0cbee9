//! Variant classification: maps selection volume to a cosmetic tier label.
//!
//! The tier only changes wording in the proposal. Pricing and terms never
//! depend on it.

use std::fmt;

use crate::proposal::request::{FormKind, ProposalRequest};

/// Upper bound (inclusive) of total selections for BASIC.
const BASIC_MAX_SELECTIONS: usize = 3;
/// Upper bound (inclusive) of total selections for PLUS.
const PLUS_MAX_SELECTIONS: usize = 6;

const BASIC_MAX_MODULES: usize = 2;
const BASIC_MAX_INTENSITY: u8 = 30;
const PLUS_MAX_MODULES: usize = 5;
const PLUS_MAX_INTENSITY: u8 = 70;

/// Cooperation tier. Ordered: `Basic < Plus < Pro`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    Basic,
    Plus,
    Pro,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Basic => "BASIC",
            Variant::Plus => "PLUS",
            Variant::Pro => "PRO",
        }
    }

    /// Rule for the cooperation questionnaire: areas + scenarios.
    pub fn from_selection_count(total: usize) -> Self {
        if total <= BASIC_MAX_SELECTIONS {
            Variant::Basic
        } else if total <= PLUS_MAX_SELECTIONS {
            Variant::Plus
        } else {
            Variant::Pro
        }
    }

    /// Rule for the module questionnaire. A low value on either axis caps the tier.
    pub fn from_modules(module_count: usize, intensity: u8) -> Self {
        if module_count <= BASIC_MAX_MODULES || intensity <= BASIC_MAX_INTENSITY {
            Variant::Basic
        } else if module_count <= PLUS_MAX_MODULES || intensity <= PLUS_MAX_INTENSITY {
            Variant::Plus
        } else {
            Variant::Pro
        }
    }

    /// Picks the rule matching the form the request came from.
    pub fn classify(request: &ProposalRequest) -> Self {
        match request.kind {
            FormKind::Cooperation => Self::from_selection_count(
                request.areas_of_cooperation.len() + request.selected_scenarios.len(),
            ),
            FormKind::Modules => Self::from_modules(request.modules.len(), request.intensity),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::request::ProposalForm;

    #[test]
    fn test_selection_thresholds() {
        assert_eq!(Variant::from_selection_count(0), Variant::Basic);
        assert_eq!(Variant::from_selection_count(3), Variant::Basic);
        assert_eq!(Variant::from_selection_count(4), Variant::Plus);
        assert_eq!(Variant::from_selection_count(6), Variant::Plus);
        assert_eq!(Variant::from_selection_count(7), Variant::Pro);
        assert_eq!(Variant::from_selection_count(40), Variant::Pro);
    }

    #[test]
    fn test_module_thresholds() {
        assert_eq!(Variant::from_modules(2, 100), Variant::Basic);
        assert_eq!(Variant::from_modules(10, 30), Variant::Basic);
        assert_eq!(Variant::from_modules(3, 100), Variant::Plus);
        assert_eq!(Variant::from_modules(10, 70), Variant::Plus);
        assert_eq!(Variant::from_modules(6, 71), Variant::Pro);
    }

    #[test]
    fn test_selection_rule_is_monotonic() {
        for n in 0..30 {
            assert!(Variant::from_selection_count(n) <= Variant::from_selection_count(n + 1));
        }
    }

    #[test]
    fn test_module_rule_is_monotonic_in_both_inputs() {
        for modules in 0..12 {
            for intensity in 0..100u8 {
                let here = Variant::from_modules(modules, intensity);
                assert!(here <= Variant::from_modules(modules + 1, intensity));
                assert!(here <= Variant::from_modules(modules, intensity + 1));
            }
        }
    }

    #[test]
    fn test_tier_ordering() {
        assert!(Variant::Basic < Variant::Plus);
        assert!(Variant::Plus < Variant::Pro);
    }

    #[test]
    fn test_classify_uses_form_kind() {
        let json = serde_json::json!({
            "companyName": "Acme",
            "contactPerson": "Anna",
            "contactEmail": "anna@acme.pl",
            "areasOfCooperation": ["a", "b", "c", "d"],
            "modules": ["m1"],
            "intensity": 90
        });

        let cooperation = serde_json::from_value::<ProposalForm>(json.clone())
            .unwrap()
            .validate(FormKind::Cooperation)
            .unwrap();
        assert_eq!(Variant::classify(&cooperation), Variant::Plus);

        let modules = serde_json::from_value::<ProposalForm>(json)
            .unwrap()
            .validate(FormKind::Modules)
            .unwrap();
        assert_eq!(Variant::classify(&modules), Variant::Basic);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Variant::Basic.to_string(), "BASIC");
        assert_eq!(Variant::Plus.to_string(), "PLUS");
        assert_eq!(Variant::Pro.to_string(), "PRO");
    }
}
