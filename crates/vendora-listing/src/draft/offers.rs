//! Step 6: promotional offer rules.

use serde::{Deserialize, Serialize};

use crate::ids::OfferId;

/// The four supported offer templates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OfferKind {
    /// Buy N units, get M more free.
    BuyXGetY,
    /// Percentage off on a named day of the week.
    SpecialDay,
    /// Percentage off inside a daily time window.
    Hourly,
    /// Percentage off when ordering at least N units.
    Bundle,
}

impl OfferKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferKind::BuyXGetY => "buy_x_get_y",
            OfferKind::SpecialDay => "special_day",
            OfferKind::Hourly => "hourly",
            OfferKind::Bundle => "bundle",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "buy_x_get_y" => Some(OfferKind::BuyXGetY),
            "special_day" => Some(OfferKind::SpecialDay),
            "hourly" => Some(OfferKind::Hourly),
            "bundle" => Some(OfferKind::Bundle),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OfferKind::BuyXGetY => "Buy X Get Y",
            OfferKind::SpecialDay => "Special Day",
            OfferKind::Hourly => "Hourly Deal",
            OfferKind::Bundle => "Bundle Discount",
        }
    }
}

impl std::fmt::Display for OfferKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The parameters of one offer, one variant per template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OfferTerms {
    BuyXGetY {
        buy_quantity: i64,
        get_quantity: i64,
    },
    SpecialDay {
        day_name: String,
        discount_percent: f64,
    },
    Hourly {
        start_time: String,
        end_time: String,
        discount_percent: f64,
    },
    Bundle {
        min_quantity: i64,
        discount_percent: f64,
    },
}

impl OfferTerms {
    /// Which template these terms belong to.
    pub fn kind(&self) -> OfferKind {
        match self {
            OfferTerms::BuyXGetY { .. } => OfferKind::BuyXGetY,
            OfferTerms::SpecialDay { .. } => OfferKind::SpecialDay,
            OfferTerms::Hourly { .. } => OfferKind::Hourly,
            OfferTerms::Bundle { .. } => OfferKind::Bundle,
        }
    }

    /// Pull the terms into their valid ranges: quantities at least 1
    /// (bundle minimum at least 2), percentages within 0-100.
    pub fn sanitized(self) -> Self {
        match self {
            OfferTerms::BuyXGetY {
                buy_quantity,
                get_quantity,
            } => OfferTerms::BuyXGetY {
                buy_quantity: buy_quantity.max(1),
                get_quantity: get_quantity.max(1),
            },
            OfferTerms::SpecialDay {
                day_name,
                discount_percent,
            } => OfferTerms::SpecialDay {
                day_name,
                discount_percent: discount_percent.clamp(0.0, 100.0),
            },
            OfferTerms::Hourly {
                start_time,
                end_time,
                discount_percent,
            } => OfferTerms::Hourly {
                start_time,
                end_time,
                discount_percent: discount_percent.clamp(0.0, 100.0),
            },
            OfferTerms::Bundle {
                min_quantity,
                discount_percent,
            } => OfferTerms::Bundle {
                min_quantity: min_quantity.max(2),
                discount_percent: discount_percent.clamp(0.0, 100.0),
            },
        }
    }

    /// Human-readable summary line for listings and buyer surfaces.
    pub fn describe(&self) -> String {
        match self {
            OfferTerms::BuyXGetY {
                buy_quantity,
                get_quantity,
            } => format!("Buy {} Get {} Free", buy_quantity, get_quantity),
            OfferTerms::SpecialDay {
                day_name,
                discount_percent,
            } => format!("{} - {}% OFF", day_name, discount_percent),
            OfferTerms::Hourly {
                start_time,
                end_time,
                discount_percent,
            } => format!("{} - {}: {}% OFF", start_time, end_time, discount_percent),
            OfferTerms::Bundle {
                min_quantity,
                discount_percent,
            } => format!("Buy {}+ Get {}% OFF", min_quantity, discount_percent),
        }
    }
}

/// One configured offer on the draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfferRule {
    pub id: OfferId,
    /// Active offers apply at buy time; inactive ones stay configured.
    pub is_active: bool,
    pub terms: OfferTerms,
}

impl OfferRule {
    /// New active rule with sanitized terms.
    pub fn new(id: OfferId, terms: OfferTerms) -> Self {
        Self {
            id,
            is_active: true,
            terms: terms.sanitized(),
        }
    }

    pub fn describe(&self) -> String {
        self.terms.describe()
    }
}

/// Step 6 of the listing draft: the offer collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OfferSet {
    pub offers: Vec<OfferRule>,
}

impl OfferSet {
    /// Add a new offer, active by default.
    pub fn add(&mut self, id: OfferId, terms: OfferTerms) -> OfferId {
        self.offers.push(OfferRule::new(id.clone(), terms));
        id
    }

    /// Flip the active flag on an offer. Returns false for unknown ids.
    pub fn toggle_active(&mut self, id: &OfferId) -> bool {
        match self.offers.iter_mut().find(|o| &o.id == id) {
            Some(offer) => {
                offer.is_active = !offer.is_active;
                true
            }
            None => false,
        }
    }

    /// Remove an offer by id.
    pub fn remove(&mut self, id: &OfferId) -> bool {
        let len_before = self.offers.len();
        self.offers.retain(|o| &o.id != id);
        self.offers.len() < len_before
    }

    pub fn get(&self, id: &OfferId) -> Option<&OfferRule> {
        self.offers.iter().find(|o| &o.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.offers.iter().filter(|o| o.is_active).count()
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer_id(n: u64) -> OfferId {
        OfferId::new(format!("offer-{}", n))
    }

    #[test]
    fn test_describe_buy_x_get_y() {
        let terms = OfferTerms::BuyXGetY {
            buy_quantity: 2,
            get_quantity: 1,
        };
        assert_eq!(terms.describe(), "Buy 2 Get 1 Free");
    }

    #[test]
    fn test_describe_special_day() {
        let terms = OfferTerms::SpecialDay {
            day_name: "Friday".to_string(),
            discount_percent: 15.0,
        };
        assert_eq!(terms.describe(), "Friday - 15% OFF");
    }

    #[test]
    fn test_describe_hourly() {
        let terms = OfferTerms::Hourly {
            start_time: "18:00".to_string(),
            end_time: "21:00".to_string(),
            discount_percent: 10.0,
        };
        assert_eq!(terms.describe(), "18:00 - 21:00: 10% OFF");
    }

    #[test]
    fn test_describe_bundle() {
        let terms = OfferTerms::Bundle {
            min_quantity: 5,
            discount_percent: 12.5,
        };
        assert_eq!(terms.describe(), "Buy 5+ Get 12.5% OFF");
    }

    #[test]
    fn test_sanitized_floors_quantities() {
        let terms = OfferTerms::BuyXGetY {
            buy_quantity: 0,
            get_quantity: -3,
        }
        .sanitized();
        assert_eq!(
            terms,
            OfferTerms::BuyXGetY {
                buy_quantity: 1,
                get_quantity: 1,
            }
        );

        let terms = OfferTerms::Bundle {
            min_quantity: 1,
            discount_percent: 120.0,
        }
        .sanitized();
        assert_eq!(
            terms,
            OfferTerms::Bundle {
                min_quantity: 2,
                discount_percent: 100.0,
            }
        );
    }

    #[test]
    fn test_new_rule_is_active_and_sanitized() {
        let rule = OfferRule::new(
            offer_id(1),
            OfferTerms::SpecialDay {
                day_name: "Monday".to_string(),
                discount_percent: -10.0,
            },
        );
        assert!(rule.is_active);
        assert_eq!(rule.describe(), "Monday - 0% OFF");
    }

    #[test]
    fn test_toggle_active() {
        let mut set = OfferSet::default();
        set.add(
            offer_id(1),
            OfferTerms::BuyXGetY {
                buy_quantity: 2,
                get_quantity: 1,
            },
        );
        assert_eq!(set.active_count(), 1);

        assert!(set.toggle_active(&offer_id(1)));
        assert_eq!(set.active_count(), 0);
        assert_eq!(set.len(), 1);

        assert!(set.toggle_active(&offer_id(1)));
        assert_eq!(set.active_count(), 1);

        assert!(!set.toggle_active(&offer_id(99)));
    }

    #[test]
    fn test_remove_offer() {
        let mut set = OfferSet::default();
        set.add(
            offer_id(1),
            OfferTerms::Bundle {
                min_quantity: 3,
                discount_percent: 10.0,
            },
        );
        assert!(set.remove(&offer_id(1)));
        assert!(set.is_empty());
        assert!(!set.remove(&offer_id(1)));
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(OfferKind::from_str("hourly"), Some(OfferKind::Hourly));
        assert_eq!(OfferKind::from_str("nope"), None);
        assert_eq!(OfferKind::Bundle.display_name(), "Bundle Discount");
        let terms = OfferTerms::Hourly {
            start_time: "09:00".to_string(),
            end_time: "11:00".to_string(),
            discount_percent: 5.0,
        };
        assert_eq!(terms.kind(), OfferKind::Hourly);
    }
}
