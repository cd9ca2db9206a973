//! Budget fit annotation.

use vendora_core::{BudgetRange, Thresholds};

use crate::types::BudgetFit;

/// Classify a vendor's reference price against the requester's budget.
///
/// A vendor with no price data is `InRange`. Prices a little under `min` stay
/// `InRange`; only prices below `min * value_factor` are `Value`.
#[must_use]
pub fn budget_fit(price: Option<f64>, budget: &BudgetRange, thresholds: &Thresholds) -> BudgetFit {
    let Some(price) = price else {
        return BudgetFit::InRange;
    };

    if price > budget.max {
        if price <= budget.max * thresholds.slightly_above_factor {
            BudgetFit::SlightlyAbove
        } else {
            BudgetFit::AboveBudget
        }
    } else if price < budget.min * thresholds.value_factor {
        BudgetFit::Value
    } else {
        BudgetFit::InRange
    }
}
