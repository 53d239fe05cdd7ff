//! Budget aggregation: rolls one user's subscription set into per-period
//! totals and per-category annualized totals.
//!
//! The two passes deliberately use different units. Period totals are the
//! raw per-period sums (a $10 weekly subscription adds 10 to `weekly`);
//! category totals are annualized (the same subscription adds 520 to its
//! category). This mirrors the observed behavior and is pinned by tests —
//! see DESIGN.md before "fixing" it.

use rust_decimal::Decimal;

use crate::models::{BudgetSummary, Recurrence, Subscription};

/// Cost-per-period scaled to its yearly equivalent: x52 weekly, x12
/// monthly, annual (and unrecognized recurrence) unscaled.
pub fn annualized(cost: Decimal, recurrence: Option<Recurrence>) -> Decimal {
    match recurrence {
        Some(Recurrence::Weekly) => cost * Decimal::from(52),
        Some(Recurrence::Monthly) => cost * Decimal::from(12),
        Some(Recurrence::Annually) | None => cost,
    }
}

/// Two independent grouping passes over the same input set. An empty set is
/// a defined success: zero totals, empty category map.
pub fn compute_budget(subs: &[Subscription]) -> BudgetSummary {
    let mut summary = BudgetSummary::default();

    for sub in subs {
        // Period totals: raw sum into the matching recurrence bucket.
        // Unrecognized recurrence contributes to no bucket.
        match sub.recurrence {
            Some(Recurrence::Weekly) => summary.weekly += sub.cost,
            Some(Recurrence::Monthly) => summary.monthly += sub.cost,
            Some(Recurrence::Annually) => summary.annually += sub.cost,
            None => {}
        }

        // Category totals: annualize before adding into the running total.
        // Unmapped services aggregate under the empty label.
        *summary
            .categories
            .entry(sub.category.clone())
            .or_insert(Decimal::ZERO) += annualized(sub.cost, sub.recurrence);
    }

    summary
}
