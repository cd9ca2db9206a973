//! Within-tier ordering.

use std::cmp::Ordering;

use vendora_core::SortMode;

use crate::types::Candidate;

/// Sort `candidates` in place for `mode`.
///
/// The comparator is total and ends on vendor id, so the result does not
/// depend on input order.
pub fn rank(candidates: &mut [Candidate], mode: SortMode) {
    candidates.sort_by(|a, b| compare(a, b, mode));
}

#[must_use]
pub fn compare(a: &Candidate, b: &Candidate, mode: SortMode) -> Ordering {
    let primary = match mode {
        SortMode::Relevance => b
            .vendor
            .is_verified
            .cmp(&a.vendor.is_verified)
            .then_with(|| rating_desc(a, b))
            .then_with(|| none_last_asc(a.distance_km, b.distance_km)),
        SortMode::Distance => {
            none_last_asc(a.distance_km, b.distance_km).then_with(|| rating_desc(a, b))
        }
        SortMode::BudgetAsc => none_last_asc(price(a), price(b)).then_with(|| rating_desc(a, b)),
        SortMode::BudgetDesc => none_last_desc(price(a), price(b)).then_with(|| rating_desc(a, b)),
        SortMode::Rating => rating_desc(a, b)
            .then_with(|| b.vendor.review_count.cmp(&a.vendor.review_count)),
    };

    primary
        .then_with(|| a.vendor.id.cmp(&b.vendor.id))
        .then_with(|| a.vendor.public_id.cmp(&b.vendor.public_id))
}

fn price(c: &Candidate) -> Option<f64> {
    c.vendor.price.reference_price()
}

fn rating_desc(a: &Candidate, b: &Candidate) -> Ordering {
    b.vendor.rating_or_zero().total_cmp(&a.vendor.rating_or_zero())
}

fn none_last_asc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn none_last_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
