use serde::Serialize;

use crate::domain::work_item::GroupId;

/// Aggregate forecast over the enabled work items.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct PortfolioResults {
    pub total_expected_hours: f64,
    pub total_variance: f64,
    /// Root-sum-of-squares of the item spreads.
    pub portfolio_range_spread: f64,
    /// Expected hours plus one portfolio spread.
    pub total_effort_hours: f64,
    pub total_effort_staff_weeks: f64,
    pub duration_weeks: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GroupSubtotal {
    /// `None` collects items without a group.
    pub group_id: Option<GroupId>,
    pub name: String,
    pub item_count: usize,
    pub expected_hours: f64,
    pub variance: f64,
    pub range_spread: f64,
}
