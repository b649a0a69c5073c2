use serde::Serialize;

use crate::domain::constants::EstimationConstants;
use crate::domain::portfolio::{GroupSubtotal, PortfolioResults};
use crate::domain::staffing::{GapDecomposition, StaffingComparison, StaffingGridComputed};
use crate::services::coordination::CoordinationSummary;
use crate::services::visualization::{
    CurrentDuration, DistributionMarker, DiversificationData, RiskSegment, UncertaintyBar,
};

#[derive(Serialize, Debug, Clone)]
pub struct ForecastReport {
    pub data_source: String,
    pub constants: EstimationConstants,
    pub portfolio: PortfolioResults,
    pub confidence: Vec<DistributionMarker>,
    pub diversification: DiversificationData,
    pub duration: CurrentDuration,
    pub risk_ranking: Vec<UncertaintyBar>,
    pub risk_segments: Vec<RiskSegment>,
    pub groups: Vec<GroupSubtotal>,
}

#[derive(Serialize, Debug, Clone)]
pub struct StaffingReport {
    pub data_source: String,
    pub week_count: usize,
    pub grid: StaffingGridComputed,
    pub comparison: StaffingComparison,
    pub coordination: CoordinationSummary,
    pub gap: GapDecomposition,
}
