//! Wizard step enumeration.

use serde::{Deserialize, Serialize};

/// Steps in the listing wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    /// Category, naming, and variants.
    Identity,
    /// Images and videos.
    Media,
    /// Description, highlights, and specifications.
    Content,
    /// Prices, tax, and delivery geography.
    Pricing,
    /// Shipping, manufacturer, and policy windows.
    Logistics,
    /// Promotional offers.
    Offers,
}

impl WizardStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Identity => "identity",
            WizardStep::Media => "media",
            WizardStep::Content => "content",
            WizardStep::Pricing => "pricing",
            WizardStep::Logistics => "logistics",
            WizardStep::Offers => "offers",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WizardStep::Identity => "Identity & Variants",
            WizardStep::Media => "Media",
            WizardStep::Content => "Content",
            WizardStep::Pricing => "Pricing & Geography",
            WizardStep::Logistics => "Logistics & Policy",
            WizardStep::Offers => "Offers",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Identity => 1,
            WizardStep::Media => 2,
            WizardStep::Content => 3,
            WizardStep::Pricing => 4,
            WizardStep::Logistics => 5,
            WizardStep::Offers => 6,
        }
    }

    /// Look up a step by its 1-indexed number.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(WizardStep::Identity),
            2 => Some(WizardStep::Media),
            3 => Some(WizardStep::Content),
            4 => Some(WizardStep::Pricing),
            5 => Some(WizardStep::Logistics),
            6 => Some(WizardStep::Offers),
            _ => None,
        }
    }

    /// The step after this one, if any.
    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// The step before this one, if any.
    pub fn previous(&self) -> Option<Self> {
        match self.number() {
            0 | 1 => None,
            n => Self::from_number(n - 1),
        }
    }

    /// All six steps in wizard order.
    pub fn all() -> [WizardStep; 6] {
        [
            WizardStep::Identity,
            WizardStep::Media,
            WizardStep::Content,
            WizardStep::Pricing,
            WizardStep::Logistics,
            WizardStep::Offers,
        ]
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers_are_ordered() {
        let numbers: Vec<u8> = WizardStep::all().iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_from_number_round_trips() {
        for step in WizardStep::all() {
            assert_eq!(WizardStep::from_number(step.number()), Some(step));
        }
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(7), None);
    }

    #[test]
    fn test_next_and_previous() {
        assert_eq!(WizardStep::Identity.next(), Some(WizardStep::Media));
        assert_eq!(WizardStep::Offers.next(), None);
        assert_eq!(WizardStep::Identity.previous(), None);
        assert_eq!(WizardStep::Offers.previous(), Some(WizardStep::Logistics));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(WizardStep::Pricing.display_name(), "Pricing & Geography");
        assert_eq!(WizardStep::Media.as_str(), "media");
    }
}
