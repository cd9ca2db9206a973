//! Tier grouping, labelling and pagination.

use vendora_core::SearchRequest;

use crate::rank::rank;
use crate::types::{Candidate, SearchResponse, Tier, TierGroup};

/// Build the paginated, tier-ordered response from scored candidates.
///
/// Pagination runs over the flattened sequence (all of `ExactArea`, then all
/// of `Nearby`, ...). Each emitted group still reports the size of its whole
/// tier.
#[must_use]
pub fn assemble(
    candidates: Vec<Candidate>,
    request: &SearchRequest,
    adjacent_radius_multiplier: f64,
) -> SearchResponse {
    let total_count = candidates.len();
    let mut buckets: [Vec<Candidate>; 5] = Default::default();
    for candidate in candidates {
        buckets[usize::from(candidate.tier.priority() - 1)].push(candidate);
    }
    for bucket in &mut buckets {
        rank(bucket, request.sort);
    }

    let page_size = request.page_size.max(1) as usize;
    let offset = (request.page.saturating_sub(1) as usize).saturating_mul(page_size);
    let labels = TierLabels::new(request, adjacent_radius_multiplier);

    let mut tiers = Vec::new();
    let mut skipped = 0usize;
    let mut remaining = page_size;
    for (tier, bucket) in Tier::ORDERED.into_iter().zip(buckets) {
        let tier_total = bucket.len();
        if tier_total == 0 {
            continue;
        }

        // Portion of this tier that precedes the page start.
        let skip_here = offset.saturating_sub(skipped).min(tier_total);
        skipped += skip_here;
        let take_here = (tier_total - skip_here).min(remaining);
        if take_here == 0 {
            continue;
        }
        remaining -= take_here;

        let (label, description) = labels.for_tier(tier);
        tiers.push(TierGroup {
            tier,
            label,
            description,
            priority: tier.priority(),
            total_count: tier_total,
            candidates: bucket.into_iter().skip(skip_here).take(take_here).collect(),
        });
    }

    SearchResponse {
        tiers,
        total_count,
        page: request.page,
        page_size: request.page_size,
        total_pages: u32::try_from(total_count.div_ceil(page_size)).unwrap_or(u32::MAX),
    }
}

struct TierLabels<'a> {
    area: Option<&'a str>,
    city: Option<&'a str>,
    radius_km: f64,
    adjacent_km: f64,
    has_location: bool,
}

impl<'a> TierLabels<'a> {
    fn new(request: &'a SearchRequest, adjacent_radius_multiplier: f64) -> Self {
        Self {
            area: non_blank(request.area.as_deref()),
            city: non_blank(request.city.as_deref()),
            radius_km: request.radius_km,
            adjacent_km: request.radius_km * adjacent_radius_multiplier,
            has_location: request.location.is_some(),
        }
    }

    fn for_tier(&self, tier: Tier) -> (String, String) {
        match tier {
            Tier::ExactArea => match self.area {
                Some(area) => (
                    format!("In {area}"),
                    format!("Vendors based in {area}"),
                ),
                None => (
                    "In your area".to_string(),
                    "Vendors in your immediate area".to_string(),
                ),
            },
            Tier::Nearby => (
                "Nearby".to_string(),
                format!("Within {} km of you", fmt_km(self.radius_km)),
            ),
            Tier::SameCity => match self.city {
                Some(city) => (
                    format!("Elsewhere in {city}"),
                    format!("Other vendors across {city}"),
                ),
                None => (
                    "In your city".to_string(),
                    "Other vendors in your city".to_string(),
                ),
            },
            Tier::AdjacentCity => {
                let label = match self.city {
                    Some(city) => format!("Near {city}"),
                    None => "Nearby cities".to_string(),
                };
                let description = if self.has_location {
                    format!(
                        "Vendors in surrounding cities, up to {} km away",
                        fmt_km(self.adjacent_km)
                    )
                } else {
                    "Vendors in surrounding cities".to_string()
                };
                (label, description)
            }
            Tier::All => (
                "More vendors".to_string(),
                "Other vendors matching your search".to_string(),
            ),
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|v| !v.is_empty())
}

fn fmt_km(km: f64) -> String {
    if (km - km.round()).abs() < 1e-9 {
        format!("{km:.0}")
    } else {
        format!("{km:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BudgetFit;
    use vendora_core::{Coordinate, PriceRange, VendorDisplay, VendorRecord};

    fn candidate(id: i64, tier: Tier) -> Candidate {
        Candidate {
            vendor: VendorRecord {
                id,
                public_id: uuid::Uuid::nil(),
                service_type: "photograph".to_string(),
                city: None,
                area: None,
                location: None,
                price: PriceRange::default(),
                rating: None,
                review_count: 0,
                is_verified: false,
                display: VendorDisplay::default(),
            },
            distance_km: None,
            tier,
            budget_fit: BudgetFit::InRange,
            match_score: 1.0,
        }
    }

    fn request(page: u32, page_size: u32) -> SearchRequest {
        SearchRequest {
            city: Some("Indore".to_string()),
            area: Some("Vijay Nagar".to_string()),
            location: Some(Coordinate::new(22.75, 75.89).unwrap()),
            page,
            page_size,
            ..SearchRequest::default()
        }
    }

    fn sample() -> Vec<Candidate> {
        vec![
            candidate(5, Tier::All),
            candidate(1, Tier::ExactArea),
            candidate(3, Tier::SameCity),
            candidate(2, Tier::Nearby),
            candidate(4, Tier::SameCity),
        ]
    }

    fn page_ids(resp: &SearchResponse) -> Vec<i64> {
        resp.candidates().map(|c| c.vendor.id).collect()
    }

    #[test]
    fn groups_follow_priority_and_skip_empty_tiers() {
        let resp = assemble(sample(), &request(1, 20), 3.0);
        let tiers: Vec<Tier> = resp.tiers.iter().map(|g| g.tier).collect();
        assert_eq!(tiers, vec![Tier::ExactArea, Tier::Nearby, Tier::SameCity, Tier::All]);
        assert_eq!(page_ids(&resp), vec![1, 2, 3, 4, 5]);
        assert_eq!(resp.total_count, 5);
        assert_eq!(resp.total_pages, 1);
    }

    #[test]
    fn page_spanning_two_tiers_keeps_tier_totals() {
        let resp = assemble(sample(), &request(2, 2), 3.0);
        assert_eq!(page_ids(&resp), vec![3, 4]);
        assert_eq!(resp.tiers.len(), 1);
        assert_eq!(resp.tiers[0].tier, Tier::SameCity);
        assert_eq!(resp.tiers[0].total_count, 2);

        let resp = assemble(sample(), &request(1, 3), 3.0);
        assert_eq!(page_ids(&resp), vec![1, 2, 3]);
        let same_city = resp.tiers.iter().find(|g| g.tier == Tier::SameCity).unwrap();
        assert_eq!(same_city.candidates.len(), 1);
        assert_eq!(same_city.total_count, 2);
        assert_eq!(resp.total_pages, 2);
    }

    #[test]
    fn page_past_the_end_is_empty_with_totals() {
        let resp = assemble(sample(), &request(9, 2), 3.0);
        assert!(resp.tiers.is_empty());
        assert_eq!(resp.total_count, 5);
        assert_eq!(resp.total_pages, 3);
        assert_eq!(resp.page, 9);
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let resp = assemble(sample(), &request(u32::MAX, 100), 3.0);
        assert!(resp.tiers.is_empty());
    }

    #[test]
    fn no_candidates_gives_empty_response() {
        let resp = assemble(Vec::new(), &request(1, 20), 3.0);
        assert!(resp.tiers.is_empty());
        assert_eq!(resp.total_count, 0);
        assert_eq!(resp.total_pages, 0);
    }

    #[test]
    fn labels_use_requester_place_names() {
        let resp = assemble(sample(), &request(1, 20), 3.0);
        let label = |t: Tier| {
            let g = resp.tiers.iter().find(|g| g.tier == t).unwrap();
            (g.label.clone(), g.description.clone())
        };
        assert_eq!(label(Tier::ExactArea).0, "In Vijay Nagar");
        assert_eq!(label(Tier::Nearby).1, "Within 10 km of you");
        assert_eq!(label(Tier::SameCity).0, "Elsewhere in Indore");
    }

    #[test]
    fn labels_fall_back_to_generic_wording() {
        let req = SearchRequest {
            radius_km: 7.5,
            ..SearchRequest::default()
        };
        let labels = TierLabels::new(&req, 3.0);
        assert_eq!(labels.for_tier(Tier::ExactArea).0, "In your area");
        assert_eq!(labels.for_tier(Tier::SameCity).0, "In your city");
        assert_eq!(labels.for_tier(Tier::Nearby).1, "Within 7.5 km of you");
        assert_eq!(labels.for_tier(Tier::AdjacentCity).0, "Nearby cities");
    }

    #[test]
    fn adjacent_label_reports_widened_radius() {
        let req = request(1, 20);
        let labels = TierLabels::new(&req, 3.0);
        let (label, description) = labels.for_tier(Tier::AdjacentCity);
        assert_eq!(label, "Near Indore");
        assert_eq!(description, "Vendors in surrounding cities, up to 30 km away");
    }
}
