//! Chart-ready data built from portfolio results. Nothing here renders.

use serde::Serialize;

use crate::domain::constants::EstimationConstants;
use crate::domain::portfolio::PortfolioResults;
use crate::domain::weighting::Weighted;
use crate::domain::work_item::{WorkItemCalculated, WorkItemId};
use crate::services::estimation::{calculate_duration_weeks, scaled_duration_weeks};
use crate::services::gaussian::{
    CurvePoint, DEFAULT_CURVE_POINTS, DEFAULT_CURVE_SIGMAS, NormalDistribution,
};

pub const DURATION_CURVE_POINTS: usize = 60;

/// Sigma offsets marked on the distribution curve.
const MARKER_SIGMAS: [(&str, f64); 3] = [("P50", 0.0), ("P84", 1.0), ("P98", 2.0)];

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DistributionMarker {
    pub label: String,
    pub hours: f64,
    /// Probability of finishing within `hours`.
    pub confidence: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DistributionData {
    pub mean: f64,
    pub sigma: f64,
    pub points: Vec<CurvePoint>,
    pub markers: Vec<DistributionMarker>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UncertaintyBar {
    pub id: WorkItemId,
    pub title: String,
    pub best: f64,
    pub worst: f64,
    /// Expected hours of one instance, on the same scale as `best` and `worst`.
    pub expected: f64,
    /// Variance this item adds to the portfolio, multiplier included.
    pub variance: f64,
    pub variance_pct: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RiskSegment {
    /// `None` for the folded "Other" segment.
    pub id: Option<WorkItemId>,
    pub label: String,
    pub variance: f64,
    /// Fraction of the total, all segments sum to 1.
    pub pct: f64,
    pub start: f64,
    pub end: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct DiversificationData {
    pub naive_sum_sigma: f64,
    pub actual_portfolio_sigma: f64,
    pub benefit_pct: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct DurationPoint {
    pub effort: f64,
    pub duration: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct CurrentDuration {
    pub effort: f64,
    pub duration: f64,
    pub duration_ceiled: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DurationCurveData {
    pub points: Vec<DurationPoint>,
    pub current: CurrentDuration,
}

pub fn compute_distribution_data(results: Option<&PortfolioResults>) -> Option<DistributionData> {
    let results = results?;
    let mean = results.total_expected_hours;
    let sigma = results.portfolio_range_spread;
    let distribution = NormalDistribution::new(mean, sigma);

    let markers = MARKER_SIGMAS
        .iter()
        .map(|(label, offset)| {
            let hours = mean + offset * sigma.max(0.0);
            DistributionMarker {
                label: (*label).to_string(),
                hours,
                confidence: distribution.cdf(hours),
            }
        })
        .collect();

    Some(DistributionData {
        mean,
        sigma,
        points: distribution.curve_points(DEFAULT_CURVE_POINTS, DEFAULT_CURVE_SIGMAS),
        markers,
    })
}

/// Enabled items with a non-zero range, largest variance share first.
pub fn compute_uncertainty_bars(
    items: &[WorkItemCalculated],
    total_variance: f64,
) -> Vec<UncertaintyBar> {
    let mut bars: Vec<UncertaintyBar> = items
        .iter()
        .filter(|entry| entry.item.is_enabled() && entry.metrics.range_spread_hours > 0.0)
        .map(|entry| {
            let variance = entry.weighted_variance();
            let variance_pct = if total_variance > 0.0 {
                variance / total_variance * 100.0
            } else {
                0.0
            };
            UncertaintyBar {
                id: entry.item.id,
                title: entry.item.title.clone(),
                best: entry.item.best_case_hours,
                worst: entry.item.worst_case_hours,
                expected: entry.metrics.expected_hours,
                variance,
                variance_pct,
            }
        })
        .collect();
    bars.sort_by(|a, b| b.variance_pct.total_cmp(&a.variance_pct));
    bars
}

/// Donut segments in bar order. When there are more bars than
/// `max_segments`, the tail is folded into a single "Other" segment.
pub fn compute_risk_segments(bars: &[UncertaintyBar], max_segments: usize) -> Vec<RiskSegment> {
    let total: f64 = bars.iter().map(|bar| bar.variance).sum();
    if total <= 0.0 || max_segments == 0 {
        return Vec::new();
    }

    let mut slices: Vec<(Option<WorkItemId>, String, f64)> = Vec::new();
    if bars.len() > max_segments {
        let kept = max_segments - 1;
        slices.extend(
            bars[..kept]
                .iter()
                .map(|bar| (Some(bar.id), segment_label(bar), bar.variance)),
        );
        let rest = bars[kept..].iter().map(|bar| bar.variance).sum();
        slices.push((None, "Other".to_string(), rest));
    } else {
        slices.extend(
            bars.iter()
                .map(|bar| (Some(bar.id), segment_label(bar), bar.variance)),
        );
    }

    let mut start = 0.0;
    slices
        .into_iter()
        .map(|(id, label, variance)| {
            let pct = variance / total;
            let segment = RiskSegment {
                id,
                label,
                variance,
                pct,
                start,
                end: start + pct,
            };
            start += pct;
            segment
        })
        .collect()
}

fn segment_label(bar: &UncertaintyBar) -> String {
    if bar.title.is_empty() {
        format!("Item {}", bar.id)
    } else {
        bar.title.clone()
    }
}

/// Linear sum of spreads against the root-sum-square portfolio spread.
pub fn compute_diversification_data(
    items: &[WorkItemCalculated],
    results: &PortfolioResults,
) -> DiversificationData {
    let naive_sum_sigma: f64 = items
        .iter()
        .map(|entry| entry.item.contribution(entry.metrics.range_spread_hours))
        .sum();
    let actual_portfolio_sigma = results.portfolio_range_spread;
    let benefit_pct = if naive_sum_sigma > 0.0 {
        (1.0 - actual_portfolio_sigma / naive_sum_sigma) * 100.0
    } else {
        0.0
    };
    DiversificationData {
        naive_sum_sigma,
        actual_portfolio_sigma,
        benefit_pct,
    }
}

/// Samples `min(power * effort^(1/3), effort)` from zero up to the current
/// effort in staff-weeks.
pub fn compute_duration_curve_data(
    results: &PortfolioResults,
    constants: &EstimationConstants,
) -> DurationCurveData {
    let effort = results.total_effort_staff_weeks.max(0.0);
    let power = constants.duration_scaling_power;

    let points = if effort > 0.0 {
        let step = effort / (DURATION_CURVE_POINTS - 1) as f64;
        (0..DURATION_CURVE_POINTS)
            .map(|index| {
                let sample = step * index as f64;
                DurationPoint {
                    effort: sample,
                    duration: scaled_duration_weeks(sample, power),
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    DurationCurveData {
        points,
        current: CurrentDuration {
            effort,
            duration: scaled_duration_weeks(effort, power),
            duration_ceiled: calculate_duration_weeks(effort, power),
        },
    }
}
