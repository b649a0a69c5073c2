use crate::domain::staffing::{StaffingCell, StaffingRow};
use crate::domain::work_item::WorkItem;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub fn build_item(id: i64, best: f64, worst: f64) -> WorkItem {
    let mut item = WorkItem::new(id, best, worst);
    item.title = format!("Item {id}");
    item
}

/// Ten items whose totals are known: 828.4 expected hours, 108.88 spread.
pub fn worked_example_items() -> Vec<WorkItem> {
    [
        (80.0, 120.0),
        (70.0, 200.0),
        (100.0, 320.0),
        (40.0, 80.0),
        (60.0, 90.0),
        (80.0, 160.0),
        (4.0, 16.0),
        (80.0, 100.0),
        (40.0, 100.0),
        (16.0, 30.0),
    ]
    .into_iter()
    .zip(1..)
    .map(|((best, worst), id)| build_item(id, best, worst))
    .collect()
}

pub fn build_row(id: i64, cells: &[&str]) -> StaffingRow {
    StaffingRow {
        id,
        discipline: format!("Discipline {id}"),
        hourly_rate: 0.0,
        cells: cells.iter().map(|cell| StaffingCell::parse(cell)).collect(),
        enabled: true,
        multiplier: 1,
    }
}
