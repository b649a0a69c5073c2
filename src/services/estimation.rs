use thiserror::Error;

use crate::domain::constants::EstimationConstants;
use crate::domain::portfolio::{GroupSubtotal, PortfolioResults};
use crate::domain::weighting::Weighted;
use crate::domain::work_item::{
    WorkItem, WorkItemCalculated, WorkItemGroup, WorkItemId, WorkItemMetrics,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkItemError {
    #[error("Best case hours cannot be negative")]
    NegativeBestCase,
    #[error("Worst case hours cannot be less than best case hours")]
    WorstBelowBest,
    #[error("Hours must be finite numbers")]
    NonFiniteHours,
    #[error("Multiplier must be at least 1")]
    InvalidMultiplier,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstantsError {
    #[error("Expected case position must be between 0 and 1")]
    ExpectedCasePosition,
    #[error("Range spread divisor must be greater than 0")]
    RangeSpreadDivisor,
    #[error("Billable hours per week must be greater than 0")]
    BillableHoursPerWeek,
    #[error("Duration scaling power must be greater than 0")]
    DurationScalingPower,
    #[error("Coordination cost per pair cannot be negative")]
    CoordinationCostPerPair,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimationError {
    #[error("Invalid constants: {0}")]
    InvalidConstants(#[from] ConstantsError),
    #[error("Invalid work item {id}: {source}")]
    InvalidWorkItem {
        id: WorkItemId,
        source: WorkItemError,
    },
}

pub fn calculate_expected_hours(best: f64, worst: f64, position: f64) -> f64 {
    best + position * (worst - best)
}

pub fn calculate_range_spread(best: f64, worst: f64, divisor: f64) -> f64 {
    (worst - best) / divisor
}

pub fn calculate_variance(spread: f64) -> f64 {
    spread * spread
}

/// Single-instance metrics of one item. Multiplier weighting happens when the
/// item is folded into an aggregate, see [`WorkItemCalculated`].
pub fn calculate_work_item(item: &WorkItem, constants: &EstimationConstants) -> WorkItemCalculated {
    let expected_hours = calculate_expected_hours(
        item.best_case_hours,
        item.worst_case_hours,
        constants.expected_case_position,
    );
    let range_spread_hours = calculate_range_spread(
        item.best_case_hours,
        item.worst_case_hours,
        constants.range_spread_divisor,
    );
    WorkItemCalculated {
        item: item.clone(),
        metrics: WorkItemMetrics {
            expected_hours,
            range_spread_hours,
            variance: calculate_variance(range_spread_hours),
        },
    }
}

pub fn validate_work_item(item: &WorkItem) -> Result<(), WorkItemError> {
    if item.best_case_hours < 0.0 {
        return Err(WorkItemError::NegativeBestCase);
    }
    if item.worst_case_hours < item.best_case_hours {
        return Err(WorkItemError::WorstBelowBest);
    }
    // NaN and infinities that passed the ordering rules.
    if !item.best_case_hours.is_finite() || !item.worst_case_hours.is_finite() {
        return Err(WorkItemError::NonFiniteHours);
    }
    if item.multiplier < 1 {
        return Err(WorkItemError::InvalidMultiplier);
    }
    Ok(())
}

pub fn validate_constants(constants: &EstimationConstants) -> Result<(), ConstantsError> {
    // Written as negated ranges so NaN fails every check.
    if !(0.0..=1.0).contains(&constants.expected_case_position) {
        return Err(ConstantsError::ExpectedCasePosition);
    }
    if !(constants.range_spread_divisor > 0.0) {
        return Err(ConstantsError::RangeSpreadDivisor);
    }
    if !(constants.billable_hours_per_week > 0.0) {
        return Err(ConstantsError::BillableHoursPerWeek);
    }
    if !(constants.duration_scaling_power > 0.0) {
        return Err(ConstantsError::DurationScalingPower);
    }
    if !(constants.coordination_cost_per_pair >= 0.0) {
        return Err(ConstantsError::CoordinationCostPerPair);
    }
    Ok(())
}

/// Validates constants, then every item in input order, then computes the
/// metrics of each item.
pub fn calculate_work_items(
    items: &[WorkItem],
    constants: &EstimationConstants,
) -> Result<Vec<WorkItemCalculated>, EstimationError> {
    validate_constants(constants)?;
    for item in items {
        validate_work_item(item).map_err(|source| {
            tracing::warn!(item_id = item.id, %source, "rejected work item");
            EstimationError::InvalidWorkItem {
                id: item.id,
                source,
            }
        })?;
    }
    Ok(items
        .iter()
        .map(|item| calculate_work_item(item, constants))
        .collect())
}

pub fn calculate_portfolio(
    items: &[WorkItem],
    constants: &EstimationConstants,
) -> Result<PortfolioResults, EstimationError> {
    let calculated = calculate_work_items(items, constants)?;

    let total_expected_hours: f64 = calculated
        .iter()
        .map(WorkItemCalculated::weighted_expected_hours)
        .sum();
    // Variances of independent items add; spreads do not.
    let total_variance: f64 = calculated
        .iter()
        .map(WorkItemCalculated::weighted_variance)
        .sum();
    let portfolio_range_spread = total_variance.sqrt();
    let total_effort_hours = total_expected_hours + portfolio_range_spread;
    let total_effort_staff_weeks = total_effort_hours / constants.billable_hours_per_week;
    let duration_weeks =
        calculate_duration_weeks(total_effort_staff_weeks, constants.duration_scaling_power);

    let results = PortfolioResults {
        total_expected_hours,
        total_variance,
        portfolio_range_spread,
        total_effort_hours,
        total_effort_staff_weeks,
        duration_weeks,
    };
    tracing::debug!(
        items = items.len(),
        total_expected_hours,
        portfolio_range_spread,
        duration_weeks,
        "calculated portfolio"
    );
    Ok(results)
}

/// Cube-root calendar duration in fractional weeks, never longer than one
/// person working the whole effort alone.
pub fn scaled_duration_weeks(effort_staff_weeks: f64, scaling_power: f64) -> f64 {
    if effort_staff_weeks <= 0.0 {
        return 0.0;
    }
    (scaling_power * effort_staff_weeks.cbrt()).min(effort_staff_weeks)
}

pub fn calculate_duration_weeks(effort_staff_weeks: f64, scaling_power: f64) -> u32 {
    if effort_staff_weeks <= 0.0 {
        return 0;
    }
    let scaled = (scaling_power * effort_staff_weeks.cbrt()).ceil();
    let sequential = effort_staff_weeks.ceil();
    scaled.min(sequential) as u32
}

/// Per-group expected hours and root-sum-square spread. Items whose group is
/// unknown or unset land in a trailing "Ungrouped" bucket, emitted only when
/// it holds enabled items.
pub fn calculate_group_subtotals(
    items: &[WorkItem],
    groups: &[WorkItemGroup],
    constants: &EstimationConstants,
) -> Result<Vec<GroupSubtotal>, EstimationError> {
    let calculated = calculate_work_items(items, constants)?;

    let mut subtotals: Vec<GroupSubtotal> = groups
        .iter()
        .map(|group| subtotal_for(&calculated, Some(group.id), group.name.clone(), |item| {
            item.group_id == Some(group.id)
        }))
        .collect();

    let ungrouped = subtotal_for(&calculated, None, "Ungrouped".to_string(), |item| {
        item.group_id
            .is_none_or(|id| !groups.iter().any(|group| group.id == id))
    });
    if ungrouped.item_count > 0 {
        subtotals.push(ungrouped);
    }
    Ok(subtotals)
}

fn subtotal_for<F>(
    calculated: &[WorkItemCalculated],
    group_id: Option<i64>,
    name: String,
    belongs: F,
) -> GroupSubtotal
where
    F: Fn(&WorkItem) -> bool,
{
    let members: Vec<&WorkItemCalculated> = calculated
        .iter()
        .filter(|entry| entry.item.is_enabled() && belongs(&entry.item))
        .collect();
    let expected_hours = members.iter().map(|entry| entry.weighted_expected_hours()).sum();
    let variance: f64 = members.iter().map(|entry| entry.weighted_variance()).sum();
    GroupSubtotal {
        group_id,
        name,
        item_count: members.len(),
        expected_hours,
        variance,
        range_spread: variance.sqrt(),
    }
}
