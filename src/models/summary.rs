use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Computed per query, never persisted.
///
/// The period buckets hold the raw per-period sums while the category map
/// holds annualized totals; the mixed units mirror the observed behavior
/// (see DESIGN.md).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetSummary {
    pub weekly: Decimal,
    pub monthly: Decimal,
    pub annually: Decimal,
    /// Category label -> annualized total. Uncategorized subscriptions
    /// aggregate under the empty-string label; categories with no
    /// subscriptions never appear.
    pub categories: BTreeMap<String, Decimal>,
}

/// One upcoming-renewal row. `days_left` is recomputed against "now" on
/// every query and drifts as time passes; callers must not cache it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenewalAlert {
    pub service: String,
    pub cost: Decimal,
    pub days_left: i64,
}
