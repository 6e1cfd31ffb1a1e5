use super::day_key::DayKey;

/// Totals for a single day, in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub day: DayKey,
    pub count: usize,
    /// Sum of strictly positive amounts.
    pub pays: i64,
    /// Sum of the absolute values of strictly negative amounts.
    pub buys: i64,
    /// Algebraic sum of all amounts (`pays - buys`).
    pub day_total: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceSummary {
    /// One entry per day, in day order.
    pub days: Vec<DaySummary>,
    /// Sum of all `day_total`s.
    pub total: i64,
}
