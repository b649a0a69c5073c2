use estimates::domain::staffing::StaffingCell;
use estimates::services::session_json::{export_session, import_session};

const SESSION: &str = include_str!("fixtures/worked_example_session.json");

#[test]
fn export_of_imported_session_imports_identically() {
    let state = import_session(SESSION).unwrap();
    let exported = export_session(&state).unwrap();
    assert_eq!(import_session(&exported).unwrap(), state);
}

#[test]
fn imported_session_keeps_annotations_and_groups() {
    let state = import_session(SESSION).unwrap();
    assert_eq!(state.work_items.len(), 10);
    assert_eq!(state.next_id, 11);
    assert_eq!(state.groups[0].name, "Core");
    assert_eq!(state.work_items[0].group_id, Some(1));
    assert_eq!(state.work_items[9].group_id, None);
    assert_eq!(
        state.staffing.rows[0].cells[10],
        StaffingCell::Annotation("PTO".to_string())
    );
    assert_eq!(state.staffing.rows[1].cells[0], StaffingCell::Empty);
}

#[test]
fn import_rejects_item_without_id() {
    let json = r#"{"version": 1, "state": {"workItems": [{"best_case_hours": 1, "worst_case_hours": 2}], "constants": {}, "nextId": 1}}"#;
    let error = import_session(json).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Work item at index 0 is missing required field: id"
    );
}
