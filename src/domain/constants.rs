use serde::{Deserialize, Serialize};

pub const DEFAULT_EXPECTED_CASE_POSITION: f64 = 0.4;
pub const DEFAULT_RANGE_SPREAD_DIVISOR: f64 = 2.6;
pub const DEFAULT_BILLABLE_HOURS_PER_WEEK: f64 = 36.0;
pub const DEFAULT_DURATION_SCALING_POWER: f64 = 3.5;
pub const DEFAULT_COORDINATION_COST_PER_PAIR: f64 = 1.0;

/// Tunable parameters passed explicitly into every computation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct EstimationConstants {
    /// Where the expected case sits between best (0) and worst (1).
    pub expected_case_position: f64,
    /// How many spreads fit in the best..worst range.
    pub range_spread_divisor: f64,
    pub billable_hours_per_week: f64,
    /// Coefficient of the cube-root duration model.
    pub duration_scaling_power: f64,
    /// Hours per communicating pair per active week.
    pub coordination_cost_per_pair: f64,
}

impl Default for EstimationConstants {
    fn default() -> Self {
        Self {
            expected_case_position: DEFAULT_EXPECTED_CASE_POSITION,
            range_spread_divisor: DEFAULT_RANGE_SPREAD_DIVISOR,
            billable_hours_per_week: DEFAULT_BILLABLE_HOURS_PER_WEEK,
            duration_scaling_power: DEFAULT_DURATION_SCALING_POWER,
            coordination_cost_per_pair: DEFAULT_COORDINATION_COST_PER_PAIR,
        }
    }
}
