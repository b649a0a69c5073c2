//! Coordination overhead after Brooks's Law: `n` people working in the same
//! week share `n(n-1)/2` communication channels, each costing a fixed number
//! of hours.

use serde::Serialize;

use crate::domain::staffing::{BufferStatus, GapDecomposition, StaffingCell, StaffingRow};
use crate::domain::weighting::Weighted;

/// Buffers below this share of the adjusted effort are reported as tight.
pub const TIGHT_BUFFER_RATIO: f64 = 0.05;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct WeeklyCoordination {
    pub active_people: u32,
    pub pairs: u64,
    pub overhead_hours: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct CoordinationSummary {
    pub weekly: Vec<WeeklyCoordination>,
    pub total_overhead_hours: f64,
}

/// People with billable hours in the given week. Annotation-only and empty
/// cells do not count.
pub fn get_active_people_per_week(rows: &[StaffingRow], week_index: usize) -> u32 {
    rows.iter()
        .filter(|row| row.is_enabled())
        .filter(|row| {
            row.cells
                .get(week_index)
                .is_some_and(|cell| StaffingCell::hours(cell) > 0.0)
        })
        .map(|row| row.multiplier())
        .sum()
}

pub fn calculate_weekly_coordination(active_people: u32, cost_per_pair: f64) -> WeeklyCoordination {
    let people = u64::from(active_people);
    let pairs = people * people.saturating_sub(1) / 2;
    WeeklyCoordination {
        active_people,
        pairs,
        overhead_hours: pairs as f64 * cost_per_pair,
    }
}

pub fn calculate_coordination(
    rows: &[StaffingRow],
    week_count: usize,
    cost_per_pair: f64,
) -> CoordinationSummary {
    let weekly: Vec<WeeklyCoordination> = (0..week_count)
        .map(|week_index| {
            calculate_weekly_coordination(
                get_active_people_per_week(rows, week_index),
                cost_per_pair,
            )
        })
        .collect();
    let total_overhead_hours = weekly.iter().map(|week| week.overhead_hours).sum();
    CoordinationSummary {
        weekly,
        total_overhead_hours,
    }
}

pub fn calculate_gap_decomposition(
    base_effort_hours: f64,
    rows: &[StaffingRow],
    week_count: usize,
    cost_per_pair: f64,
    staffed_hours: f64,
) -> GapDecomposition {
    let coordination_overhead_hours =
        calculate_coordination(rows, week_count, cost_per_pair).total_overhead_hours;
    let adjusted_effort_hours = base_effort_hours + coordination_overhead_hours;
    let remaining_buffer_hours = staffed_hours - adjusted_effort_hours;

    let buffer_status = if remaining_buffer_hours < 0.0 {
        BufferStatus::Short
    } else if remaining_buffer_hours < TIGHT_BUFFER_RATIO * adjusted_effort_hours {
        BufferStatus::Tight
    } else {
        BufferStatus::Buffered
    };
    tracing::debug!(
        base_effort_hours,
        coordination_overhead_hours,
        remaining_buffer_hours,
        %buffer_status,
        "decomposed staffing gap"
    );

    GapDecomposition {
        base_effort_hours,
        coordination_overhead_hours,
        adjusted_effort_hours,
        staffed_hours,
        effective_productive_hours: staffed_hours,
        remaining_buffer_hours,
        buffer_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::build_row;

    #[test]
    fn zero_or_one_person_has_no_overhead() {
        assert_eq!(calculate_weekly_coordination(0, 1.0).overhead_hours, 0.0);
        assert_eq!(calculate_weekly_coordination(1, 1.0).overhead_hours, 0.0);
    }

    #[test]
    fn pairs_grow_quadratically() {
        let three = calculate_weekly_coordination(3, 1.0);
        assert_eq!(three.pairs, 3);
        assert_eq!(three.overhead_hours, 3.0);

        let ten = calculate_weekly_coordination(10, 0.5);
        assert_eq!(ten.pairs, 45);
        assert_eq!(ten.overhead_hours, 22.5);
    }

    #[test]
    fn active_people_skip_annotations_and_disabled_rows() {
        let mut pair = build_row(1, &["40", "PTO", ""]);
        pair.multiplier = 2;
        let solo = build_row(2, &["20", "20", "0"]);
        let mut off = build_row(3, &["40", "40", "40"]);
        off.enabled = false;
        let rows = vec![pair, solo, off];

        assert_eq!(get_active_people_per_week(&rows, 0), 3);
        assert_eq!(get_active_people_per_week(&rows, 1), 1);
        assert_eq!(get_active_people_per_week(&rows, 2), 0);
        assert_eq!(get_active_people_per_week(&rows, 7), 0);
    }

    #[test]
    fn coordination_sums_weeks() {
        let rows = vec![
            build_row(1, &["40", "40", "40"]),
            build_row(2, &["40", "40", "Holiday"]),
            build_row(3, &["40", "", ""]),
        ];
        let summary = calculate_coordination(&rows, 3, 2.0);
        assert_eq!(summary.weekly.len(), 3);
        // 3 pairs, 1 pair, 0 pairs
        assert_eq!(summary.total_overhead_hours, 8.0);
    }

    #[test]
    fn gap_decomposition_statuses() {
        let rows = vec![build_row(1, &["40", "40"]), build_row(2, &["40", "40"])];

        let gap = calculate_gap_decomposition(100.0, &rows, 2, 1.0, 160.0);
        assert_eq!(gap.coordination_overhead_hours, 2.0);
        assert_eq!(gap.adjusted_effort_hours, 102.0);
        assert_eq!(gap.effective_productive_hours, 160.0);
        assert_eq!(gap.remaining_buffer_hours, 58.0);
        assert_eq!(gap.buffer_status, BufferStatus::Buffered);

        let gap = calculate_gap_decomposition(156.0, &rows, 2, 1.0, 160.0);
        assert_eq!(gap.remaining_buffer_hours, 2.0);
        assert_eq!(gap.buffer_status, BufferStatus::Tight);

        let gap = calculate_gap_decomposition(160.0, &rows, 2, 1.0, 160.0);
        assert_eq!(gap.buffer_status, BufferStatus::Short);
    }

    #[test]
    fn exact_fit_without_effort_is_buffered() {
        let gap = calculate_gap_decomposition(0.0, &[], 0, 1.0, 0.0);
        assert_eq!(gap.remaining_buffer_hours, 0.0);
        assert_eq!(gap.buffer_status, BufferStatus::Buffered);
    }
}
