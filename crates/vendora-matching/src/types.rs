//! Request-scoped result types.

use serde::Serialize;
use vendora_core::VendorRecord;

/// Location tier. Declaration order is display priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    ExactArea,
    Nearby,
    SameCity,
    AdjacentCity,
    All,
}

impl Tier {
    /// Every tier in the order sections are rendered.
    pub const ORDERED: [Tier; 5] = [
        Tier::ExactArea,
        Tier::Nearby,
        Tier::SameCity,
        Tier::AdjacentCity,
        Tier::All,
    ];

    /// 1-based priority; lower is shown first.
    #[must_use]
    pub fn priority(self) -> u8 {
        match self {
            Tier::ExactArea => 1,
            Tier::Nearby => 2,
            Tier::SameCity => 3,
            Tier::AdjacentCity => 4,
            Tier::All => 5,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::ExactArea => "exact_area",
            Tier::Nearby => "nearby",
            Tier::SameCity => "same_city",
            Tier::AdjacentCity => "adjacent_city",
            Tier::All => "all",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a vendor's price compares to the requester's budget. Annotation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetFit {
    InRange,
    SlightlyAbove,
    Value,
    /// Beyond the slightly-above band; still returned, for de-emphasis.
    AboveBudget,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub vendor: VendorRecord,
    pub distance_km: Option<f64>,
    pub tier: Tier,
    pub budget_fit: BudgetFit,
    pub match_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierGroup {
    pub tier: Tier,
    pub label: String,
    pub description: String,
    pub priority: u8,
    /// Size of the whole tier before pagination.
    pub total_count: usize,
    /// The slice of this tier that falls on the requested page.
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub tiers: Vec<TierGroup>,
    pub total_count: usize,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl SearchResponse {
    /// Candidates on this page in display order.
    pub fn candidates(&self) -> impl Iterator<Item = &Candidate> {
        self.tiers.iter().flat_map(|g| g.candidates.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_order_matches_priority() {
        let priorities: Vec<u8> = Tier::ORDERED.iter().map(|t| t.priority()).collect();
        assert_eq!(priorities, vec![1, 2, 3, 4, 5]);
        let mut sorted = Tier::ORDERED;
        sorted.sort();
        assert_eq!(sorted, Tier::ORDERED);
    }

    #[test]
    fn tier_serializes_as_snake_case() {
        for tier in Tier::ORDERED {
            let json = serde_json::to_string(&tier).unwrap();
            assert_eq!(json, format!("\"{}\"", tier.as_str()));
        }
    }

    #[test]
    fn budget_fit_serializes_as_kebab_case() {
        assert_eq!(
            serde_json::to_string(&BudgetFit::SlightlyAbove).unwrap(),
            "\"slightly-above\""
        );
        assert_eq!(
            serde_json::to_string(&BudgetFit::InRange).unwrap(),
            "\"in-range\""
        );
    }
}
