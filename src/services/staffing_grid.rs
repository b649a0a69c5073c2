use thiserror::Error;

use crate::domain::staffing::{
    StaffingCell, StaffingComparison, StaffingGridComputed, StaffingRole, StaffingRow,
    StaffingRowComputed, StaffingRowId,
};
use crate::domain::weighting::Weighted;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StaffingRowError {
    #[error("Hourly rate cannot be negative")]
    NegativeHourlyRate,
    #[error("Expected {expected} week cells but found {found}")]
    CellCountMismatch { expected: usize, found: usize },
    #[error("Multiplier must be at least 1")]
    InvalidMultiplier,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StaffingError {
    #[error("Invalid staffing row {id}: {source}")]
    InvalidRow {
        id: StaffingRowId,
        source: StaffingRowError,
    },
}

pub fn parse_cell_hours(cell: &str) -> f64 {
    StaffingCell::parse(cell).hours()
}

pub fn is_cell_annotation(cell: &str) -> bool {
    StaffingCell::parse(cell).is_annotation()
}

pub fn validate_staffing_row(row: &StaffingRow, week_count: usize) -> Result<(), StaffingRowError> {
    if !(row.hourly_rate >= 0.0) {
        return Err(StaffingRowError::NegativeHourlyRate);
    }
    if row.cells.len() != week_count {
        return Err(StaffingRowError::CellCountMismatch {
            expected: week_count,
            found: row.cells.len(),
        });
    }
    if row.multiplier < 1 {
        return Err(StaffingRowError::InvalidMultiplier);
    }
    Ok(())
}

pub fn calculate_row_totals(row: &StaffingRow) -> StaffingRowComputed {
    let hours: f64 = row.cells.iter().map(StaffingCell::hours).sum();
    let total_hours = row.contribution(hours);
    StaffingRowComputed {
        row_id: row.id,
        total_hours,
        total_cost: total_hours * row.hourly_rate,
    }
}

/// Hours staffed in one week. Rows shorter than `week_index` contribute zero.
pub fn calculate_week_totals(rows: &[StaffingRow], week_index: usize) -> f64 {
    rows.iter()
        .map(|row| {
            let hours = row.cells.get(week_index).map_or(0.0, StaffingCell::hours);
            row.contribution(hours)
        })
        .sum()
}

/// Rounds `value` up to the next multiple of `increment`. A non-positive
/// increment leaves the value as is.
pub fn round_up_to_cost(value: f64, increment: f64) -> f64 {
    if !(increment > 0.0) {
        return value;
    }
    (value / increment).ceil() * increment
}

pub fn calculate_staffing_grid(
    rows: &[StaffingRow],
    week_count: usize,
) -> Result<StaffingGridComputed, StaffingError> {
    for row in rows {
        validate_staffing_row(row, week_count).map_err(|source| {
            tracing::warn!(row_id = row.id, %source, "rejected staffing row");
            StaffingError::InvalidRow { id: row.id, source }
        })?;
    }

    let row_totals: Vec<StaffingRowComputed> = rows.iter().map(calculate_row_totals).collect();
    let week_totals = (0..week_count)
        .map(|week_index| calculate_week_totals(rows, week_index))
        .collect();
    let grand_total_hours = row_totals.iter().map(|row| row.total_hours).sum();
    let grand_total_cost = row_totals.iter().map(|row| row.total_cost).sum();

    Ok(StaffingGridComputed {
        row_totals,
        week_totals,
        grand_total_hours,
        grand_total_cost,
    })
}

pub fn calculate_staffing_comparison(
    estimated_effort_hours: f64,
    staffed_hours: f64,
) -> StaffingComparison {
    let delta_hours = staffed_hours - estimated_effort_hours;
    let delta_percent = if estimated_effort_hours == 0.0 {
        0.0
    } else {
        delta_hours / estimated_effort_hours * 100.0
    };
    StaffingComparison {
        estimated_effort_hours,
        staffed_hours,
        delta_hours,
        delta_percent,
    }
}

pub fn create_staffing_row(id: StaffingRowId, week_count: usize) -> StaffingRow {
    StaffingRow {
        id,
        discipline: String::new(),
        hourly_rate: 0.0,
        cells: vec![StaffingCell::Empty; week_count],
        enabled: true,
        multiplier: 1,
    }
}

/// One row per role, `multiplier = count`, with the target effort spread
/// evenly over every person-week. Hours are rounded up to whole hours and
/// capped at `billable_hours_per_week`.
pub fn create_prepopulated_rows(
    first_id: StaffingRowId,
    roles: &[StaffingRole],
    week_count: usize,
    target_effort_hours: f64,
    billable_hours_per_week: f64,
) -> Vec<StaffingRow> {
    let people: u32 = roles.iter().map(|role| role.count.max(1)).sum();
    let person_weeks = f64::from(people) * week_count as f64;
    let per_person_week = if person_weeks > 0.0 && target_effort_hours > 0.0 {
        (target_effort_hours / person_weeks)
            .ceil()
            .min(billable_hours_per_week.max(0.0))
    } else {
        0.0
    };
    let cell = if per_person_week > 0.0 {
        StaffingCell::Hours(per_person_week)
    } else {
        StaffingCell::Empty
    };

    roles
        .iter()
        .zip(first_id..)
        .map(|(role, id)| StaffingRow {
            id,
            discipline: role.discipline.clone(),
            hourly_rate: role.hourly_rate,
            cells: vec![cell.clone(); week_count],
            enabled: true,
            multiplier: role.count.max(1),
        })
        .collect()
}

/// Truncates or pads every row to `new_week_count` cells, keeping the values
/// at shared indices.
pub fn resize_row_cells(rows: &[StaffingRow], new_week_count: usize) -> Vec<StaffingRow> {
    rows.iter()
        .map(|row| {
            let mut resized = row.clone();
            resized.cells.resize(new_week_count, StaffingCell::Empty);
            resized
        })
        .collect()
}
