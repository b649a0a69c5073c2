use crate::services::forecast_types::{ForecastReport, StaffingReport};

/// How many risk contributors the text report lists.
const TOP_RISKS: usize = 5;

pub fn format_forecast_report(report: &ForecastReport) -> String {
    let portfolio = &report.portfolio;
    let mut lines = Vec::new();
    lines.push("Forecast Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!(
        "Expected effort: {:.2} h",
        portfolio.total_expected_hours
    ));
    lines.push(format!(
        "Portfolio spread: {:.2} h",
        portfolio.portfolio_range_spread
    ));
    lines.push(format!(
        "Planned effort: {:.2} h ({:.2} staff-weeks)",
        portfolio.total_effort_hours, portfolio.total_effort_staff_weeks
    ));
    lines.push(format!("Duration: {} weeks", portfolio.duration_weeks));
    lines.push(format!(
        "Diversification benefit: {:.1}% (naive spread {:.2} h)",
        report.diversification.benefit_pct, report.diversification.naive_sum_sigma
    ));
    lines.push(String::new());
    lines.push("Confidence:".to_string());
    lines.push("Marker | Hours | Confidence".to_string());
    lines.push("-------|-------|-----------".to_string());
    for marker in &report.confidence {
        lines.push(format!(
            "{} | {:.2} | {:.1}%",
            marker.label,
            marker.hours,
            marker.confidence * 100.0
        ));
    }

    if !report.risk_ranking.is_empty() {
        lines.push(String::new());
        lines.push("Top risks:".to_string());
        for bar in report.risk_ranking.iter().take(TOP_RISKS) {
            lines.push(format!(
                "#{id} {title} | {best:.0}-{worst:.0} h | {pct:.1}% of variance",
                id = bar.id,
                title = bar.title,
                best = bar.best,
                worst = bar.worst,
                pct = bar.variance_pct
            ));
        }
    }

    lines.join("\n")
}

pub fn format_staffing_report(report: &StaffingReport) -> String {
    let gap = &report.gap;
    let mut lines = Vec::new();
    lines.push("Staffing Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Weeks: {}", report.week_count));
    lines.push(format!(
        "Staffed: {:.2} h, cost {:.2}",
        report.grid.grand_total_hours, report.grid.grand_total_cost
    ));
    lines.push(format!(
        "Delta to estimate: {:+.2} h ({:+.1}%)",
        report.comparison.delta_hours, report.comparison.delta_percent
    ));
    lines.push(String::new());
    lines.push("Gap decomposition:".to_string());
    lines.push(format!("Base effort: {:.2} h", gap.base_effort_hours));
    lines.push(format!(
        "Coordination overhead: {:.2} h",
        gap.coordination_overhead_hours
    ));
    lines.push(format!("Adjusted effort: {:.2} h", gap.adjusted_effort_hours));
    lines.push(format!(
        "Remaining buffer: {:.2} h ({})",
        gap.remaining_buffer_hours, gap.buffer_status
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::SessionState;
    use crate::services::forecast::{build_forecast_report, build_staffing_report};
    use crate::test_support::{build_row, worked_example_items};

    fn build_state() -> SessionState {
        let mut state = SessionState {
            work_items: worked_example_items(),
            next_id: 11,
            ..SessionState::default()
        };
        state.staffing.rows = vec![build_row(1, &["36", "36"]), build_row(2, &["36", "PTO"])];
        state.staffing.week_count = 2;
        state
    }

    #[test]
    fn forecast_report_includes_totals_and_markers() {
        let mut report = build_forecast_report(&build_state()).unwrap();
        report.data_source = "session.json".to_string();
        let output = format_forecast_report(&report);

        assert!(output.contains("Forecast Report"));
        assert!(output.contains("Data source: session.json"));
        assert!(output.contains("Expected effort: 828.40 h"));
        assert!(output.contains("Duration: 11 weeks"));
        assert!(output.contains("P50 | 828.40 | 50.0%"));
        assert!(output.contains("P84"));
        assert!(output.contains("#3 Item 3 | 100-320 h"));
    }

    #[test]
    fn staffing_report_shows_buffer_status() {
        let report = build_staffing_report(&build_state()).unwrap();
        let output = format_staffing_report(&report);

        assert!(output.contains("Staffed: 108.00 h"));
        assert!(output.contains("Coordination overhead: 1.00 h"));
        assert!(output.contains("(short)"));
    }
}
