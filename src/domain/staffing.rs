use std::fmt;

use serde::Serialize;

use crate::domain::weighting::Weighted;

pub type StaffingRowId = i64;

/// One week of one staffing row.
///
/// Externally every cell is a string: a number of hours, an empty string, or
/// a label such as "PTO" marking a week without billable hours.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StaffingCell {
    #[default]
    Empty,
    Hours(f64),
    Annotation(String),
}

impl StaffingCell {
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return StaffingCell::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(hours) if hours.is_finite() && hours >= 0.0 => StaffingCell::Hours(hours),
            _ => StaffingCell::Annotation(trimmed.to_string()),
        }
    }

    /// Billable hours; annotations and empty cells count as zero.
    pub fn hours(&self) -> f64 {
        match self {
            StaffingCell::Hours(hours) => *hours,
            StaffingCell::Empty | StaffingCell::Annotation(_) => 0.0,
        }
    }

    pub fn is_annotation(&self) -> bool {
        matches!(self, StaffingCell::Annotation(_))
    }
}

impl From<&str> for StaffingCell {
    fn from(text: &str) -> Self {
        StaffingCell::parse(text)
    }
}

impl fmt::Display for StaffingCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaffingCell::Empty => Ok(()),
            StaffingCell::Hours(hours) => write!(f, "{hours}"),
            StaffingCell::Annotation(label) => f.write_str(label),
        }
    }
}

/// One discipline's planned hours per week.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffingRow {
    pub id: StaffingRowId,
    pub discipline: String,
    pub hourly_rate: f64,
    pub cells: Vec<StaffingCell>,
    pub enabled: bool,
    /// Number of people staffed identically on this row.
    pub multiplier: u32,
}

impl Weighted for StaffingRow {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn multiplier(&self) -> u32 {
        self.multiplier
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaffingState {
    pub rows: Vec<StaffingRow>,
    pub week_count: usize,
    pub next_row_id: StaffingRowId,
}

impl Default for StaffingState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            week_count: 0,
            next_row_id: 1,
        }
    }
}

/// A role to staff, e.g. "Backend engineer" at 120/h, three people.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffingRole {
    pub discipline: String,
    pub hourly_rate: f64,
    pub count: u32,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct StaffingRowComputed {
    pub row_id: StaffingRowId,
    pub total_hours: f64,
    pub total_cost: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct StaffingGridComputed {
    pub row_totals: Vec<StaffingRowComputed>,
    pub week_totals: Vec<f64>,
    pub grand_total_hours: f64,
    pub grand_total_cost: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct StaffingComparison {
    pub estimated_effort_hours: f64,
    pub staffed_hours: f64,
    /// Positive when the plan staffs more hours than estimated.
    pub delta_hours: f64,
    pub delta_percent: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BufferStatus {
    Buffered,
    Tight,
    Short,
}

impl fmt::Display for BufferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BufferStatus::Buffered => "buffered",
            BufferStatus::Tight => "tight",
            BufferStatus::Short => "short",
        };
        f.write_str(text)
    }
}

/// Where the staffed hours go: base effort, coordination tax and slack.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct GapDecomposition {
    pub base_effort_hours: f64,
    pub coordination_overhead_hours: f64,
    pub adjusted_effort_hours: f64,
    pub staffed_hours: f64,
    pub effective_productive_hours: f64,
    pub remaining_buffer_hours: f64,
    pub buffer_status: BufferStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_empty_and_annotations() {
        let test_cases = vec![
            ("8", StaffingCell::Hours(8.0)),
            (" 7.5 ", StaffingCell::Hours(7.5)),
            ("0", StaffingCell::Hours(0.0)),
            ("", StaffingCell::Empty),
            ("   ", StaffingCell::Empty),
            ("PTO", StaffingCell::Annotation("PTO".to_string())),
            ("PI Plan", StaffingCell::Annotation("PI Plan".to_string())),
            ("-4", StaffingCell::Annotation("-4".to_string())),
            ("NaN", StaffingCell::Annotation("NaN".to_string())),
        ];

        for (text, expected) in test_cases {
            assert_eq!(StaffingCell::parse(text), expected, "parsing {text:?}");
        }
    }

    #[test]
    fn display_restores_string_shape() {
        assert_eq!(StaffingCell::Hours(8.0).to_string(), "8");
        assert_eq!(StaffingCell::Hours(7.5).to_string(), "7.5");
        assert_eq!(StaffingCell::Empty.to_string(), "");
        assert_eq!(StaffingCell::from("Holiday").to_string(), "Holiday");
    }

    #[test]
    fn annotations_carry_no_hours() {
        assert_eq!(StaffingCell::from("PTO").hours(), 0.0);
        assert!(StaffingCell::from("PTO").is_annotation());
        assert!(!StaffingCell::Empty.is_annotation());
        assert!(!StaffingCell::Hours(3.0).is_annotation());
    }
}
