use serde::Serialize;

use crate::domain::weighting::Weighted;

pub type WorkItemId = i64;
pub type GroupId = i64;

/// One unit of work estimated as a best case / worst case pair of hours.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkItem {
    pub id: WorkItemId,
    pub title: String,
    pub notes: String,
    pub best_case_hours: f64,
    pub worst_case_hours: f64,
    pub enabled: bool,
    /// Number of identical, independent instances of this item.
    pub multiplier: u32,
    pub group_id: Option<GroupId>,
}

impl WorkItem {
    pub fn new(id: WorkItemId, best_case_hours: f64, worst_case_hours: f64) -> Self {
        Self {
            id,
            title: String::new(),
            notes: String::new(),
            best_case_hours,
            worst_case_hours,
            enabled: true,
            multiplier: 1,
            group_id: None,
        }
    }
}

impl Weighted for WorkItem {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn multiplier(&self) -> u32 {
        self.multiplier
    }
}

/// Single-instance derived values of a work item.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct WorkItemMetrics {
    pub expected_hours: f64,
    pub range_spread_hours: f64,
    pub variance: f64,
}

/// A work item together with its derived values. Recomputed on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkItemCalculated {
    pub item: WorkItem,
    pub metrics: WorkItemMetrics,
}

impl WorkItemCalculated {
    /// Expected hours this item adds to portfolio totals.
    pub fn weighted_expected_hours(&self) -> f64 {
        self.item.contribution(self.metrics.expected_hours)
    }

    /// Variance this item adds to portfolio totals.
    pub fn weighted_variance(&self) -> f64 {
        self.item.contribution(self.metrics.variance)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItemGroup {
    pub id: GroupId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_work_item_is_enabled_single_instance() {
        let item = WorkItem::new(7, 4.0, 10.0);
        assert_eq!(item.id, 7);
        assert!(item.enabled);
        assert_eq!(item.multiplier, 1);
        assert!(item.title.is_empty());
        assert!(item.notes.is_empty());
        assert_eq!(item.group_id, None);
    }

    #[test]
    fn weighted_values_scale_with_multiplier() {
        let mut item = WorkItem::new(1, 10.0, 20.0);
        item.multiplier = 3;
        let calculated = WorkItemCalculated {
            item,
            metrics: WorkItemMetrics {
                expected_hours: 14.0,
                range_spread_hours: 4.0,
                variance: 16.0,
            },
        };
        assert_eq!(calculated.weighted_expected_hours(), 42.0);
        assert_eq!(calculated.weighted_variance(), 48.0);
    }
}
