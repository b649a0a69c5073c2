use thiserror::Error;

use crate::domain::session::SessionState;
use crate::services::constants_yaml::{ConstantsYamlError, load_constants_from_yaml_file};
use crate::services::coordination::{calculate_coordination, calculate_gap_decomposition};
use crate::services::estimation::{
    EstimationError, calculate_group_subtotals, calculate_portfolio, calculate_work_items,
};
use crate::services::forecast_types::{ForecastReport, StaffingReport};
use crate::services::session_json::{SessionImportError, load_session_from_json_file};
use crate::services::staffing_grid::{
    StaffingError, calculate_staffing_comparison, calculate_staffing_grid,
};
use crate::services::visualization::{
    compute_distribution_data, compute_diversification_data, compute_duration_curve_data,
    compute_risk_segments, compute_uncertainty_bars,
};

/// Largest number of slices in the risk donut, "Other" included.
pub const RISK_SEGMENT_LIMIT: usize = 6;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("failed to load session: {0}")]
    Session(#[from] SessionImportError),
    #[error("failed to load constants: {0}")]
    Constants(#[from] ConstantsYamlError),
    #[error(transparent)]
    Estimation(#[from] EstimationError),
    #[error(transparent)]
    Staffing(#[from] StaffingError),
}

/// Loads a session file, replacing its constants when a constants file is
/// given.
pub fn load_session_with_constants(
    session_path: &str,
    constants_path: Option<&str>,
) -> Result<SessionState, ForecastError> {
    let mut state = load_session_from_json_file(session_path)?;
    if let Some(path) = constants_path {
        state.constants = load_constants_from_yaml_file(path)?;
        tracing::info!(path, "using constants from file");
    }
    Ok(state)
}

pub fn forecast_from_session_file(
    session_path: &str,
    constants_path: Option<&str>,
) -> Result<ForecastReport, ForecastError> {
    let state = load_session_with_constants(session_path, constants_path)?;
    let mut report = build_forecast_report(&state)?;
    report.data_source = data_source_name(session_path);
    Ok(report)
}

pub fn staffing_from_session_file(
    session_path: &str,
    constants_path: Option<&str>,
) -> Result<StaffingReport, ForecastError> {
    let state = load_session_with_constants(session_path, constants_path)?;
    let mut report = build_staffing_report(&state)?;
    report.data_source = data_source_name(session_path);
    Ok(report)
}

pub fn build_forecast_report(state: &SessionState) -> Result<ForecastReport, ForecastError> {
    let constants = state.constants;
    let portfolio = calculate_portfolio(&state.work_items, &constants)?;
    let calculated = calculate_work_items(&state.work_items, &constants)?;
    let risk_ranking = compute_uncertainty_bars(&calculated, portfolio.total_variance);

    Ok(ForecastReport {
        data_source: String::new(),
        constants,
        portfolio,
        confidence: compute_distribution_data(Some(&portfolio))
            .map(|data| data.markers)
            .unwrap_or_default(),
        diversification: compute_diversification_data(&calculated, &portfolio),
        duration: compute_duration_curve_data(&portfolio, &constants).current,
        risk_segments: compute_risk_segments(&risk_ranking, RISK_SEGMENT_LIMIT),
        risk_ranking,
        groups: calculate_group_subtotals(&state.work_items, &state.groups, &constants)?,
    })
}

pub fn build_staffing_report(state: &SessionState) -> Result<StaffingReport, ForecastError> {
    let constants = state.constants;
    let portfolio = calculate_portfolio(&state.work_items, &constants)?;
    let rows = &state.staffing.rows;
    let week_count = state.staffing.week_count;
    let grid = calculate_staffing_grid(rows, week_count)?;

    Ok(StaffingReport {
        data_source: String::new(),
        week_count,
        comparison: calculate_staffing_comparison(
            portfolio.total_effort_hours,
            grid.grand_total_hours,
        ),
        coordination: calculate_coordination(
            rows,
            week_count,
            constants.coordination_cost_per_pair,
        ),
        gap: calculate_gap_decomposition(
            portfolio.total_effort_hours,
            rows,
            week_count,
            constants.coordination_cost_per_pair,
            grid.grand_total_hours,
        ),
        grid,
    })
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
