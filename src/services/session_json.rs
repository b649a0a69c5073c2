use std::io;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::constants::EstimationConstants;
use crate::domain::session::SessionState;
use crate::domain::staffing::{StaffingCell, StaffingRow, StaffingState};
use crate::domain::work_item::{WorkItem, WorkItemGroup};

pub const SESSION_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum SessionImportError {
    #[error("failed to read session file: {0}")]
    Read(#[from] io::Error),
    #[error("Invalid session JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Work item at index {index} is missing required field: {field}")]
    MissingWorkItemField { index: usize, field: &'static str },
    #[error("Staffing row at index {index} is missing required field: id")]
    MissingStaffingRowId { index: usize },
    #[error("Unsupported session version {found} (newest supported is {max})", max = SESSION_VERSION)]
    UnsupportedVersion { found: u32 },
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionFileRecord {
    version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exported_at: Option<String>,
    state: Option<StateRecord>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateRecord {
    #[serde(default)]
    work_items: Vec<WorkItemRecord>,
    constants: Option<EstimationConstants>,
    next_id: Option<i64>,
    staffing: Option<StaffingRecord>,
    #[serde(default)]
    groups: Vec<GroupRecord>,
    next_group_id: Option<i64>,
}

#[derive(Serialize, Deserialize)]
struct WorkItemRecord {
    id: Option<i64>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    notes: String,
    best_case_hours: Option<f64>,
    worst_case_hours: Option<f64>,
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default = "default_multiplier")]
    multiplier: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group_id: Option<i64>,
}

#[derive(Serialize, Deserialize)]
struct StaffingRecord {
    #[serde(default)]
    rows: Vec<StaffingRowRecord>,
    #[serde(default)]
    week_count: usize,
    #[serde(rename = "nextRowId", default)]
    next_row_id: Option<i64>,
}

#[derive(Serialize, Deserialize)]
struct StaffingRowRecord {
    id: Option<i64>,
    #[serde(default)]
    discipline: String,
    #[serde(default)]
    hourly_rate: f64,
    #[serde(default)]
    cells: Vec<String>,
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default = "default_multiplier")]
    multiplier: u32,
}

#[derive(Serialize, Deserialize)]
struct GroupRecord {
    id: i64,
    #[serde(default)]
    name: String,
}

fn default_enabled() -> bool {
    true
}

fn default_multiplier() -> u32 {
    1
}

/// Counter value for a file that omits it: one past the largest id in use.
fn next_free_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().map_or(1, |max| max + 1)
}

pub fn load_session_from_json_file<P: AsRef<Path>>(
    path: P,
) -> Result<SessionState, SessionImportError> {
    let contents = std::fs::read_to_string(path)?;
    import_session(&contents)
}

pub fn import_session(input: &str) -> Result<SessionState, SessionImportError> {
    let record: SessionFileRecord = serde_json::from_str(input)?;

    let version = record
        .version
        .ok_or(SessionImportError::MissingField("version"))?;
    if version > SESSION_VERSION {
        return Err(SessionImportError::UnsupportedVersion { found: version });
    }
    let state = record.state.ok_or(SessionImportError::MissingField("state"))?;
    let next_id = state
        .next_id
        .ok_or(SessionImportError::MissingField("state.nextId"))?;
    let constants = state
        .constants
        .ok_or(SessionImportError::MissingField("state.constants"))?;

    let work_items = state
        .work_items
        .into_iter()
        .enumerate()
        .map(|(index, item)| work_item_from_record(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    let staffing = match state.staffing {
        Some(staffing) => staffing_from_record(staffing)?,
        None => StaffingState::default(),
    };

    let next_group_id = state
        .next_group_id
        .unwrap_or_else(|| next_free_id(state.groups.iter().map(|group| group.id)));
    let session = SessionState {
        work_items,
        constants,
        next_id,
        staffing,
        groups: state
            .groups
            .into_iter()
            .map(|group| WorkItemGroup {
                id: group.id,
                name: group.name,
            })
            .collect(),
        next_group_id,
    };
    tracing::debug!(
        version,
        work_items = session.work_items.len(),
        staffing_rows = session.staffing.rows.len(),
        "imported session"
    );
    Ok(session)
}

fn work_item_from_record(
    index: usize,
    record: WorkItemRecord,
) -> Result<WorkItem, SessionImportError> {
    let missing = |field| SessionImportError::MissingWorkItemField { index, field };
    Ok(WorkItem {
        id: record.id.ok_or_else(|| missing("id"))?,
        title: record.title,
        notes: record.notes,
        best_case_hours: record.best_case_hours.ok_or_else(|| missing("best_case_hours"))?,
        worst_case_hours: record
            .worst_case_hours
            .ok_or_else(|| missing("worst_case_hours"))?,
        enabled: record.enabled,
        multiplier: record.multiplier,
        group_id: record.group_id,
    })
}

fn staffing_from_record(record: StaffingRecord) -> Result<StaffingState, SessionImportError> {
    let rows = record
        .rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            Ok(StaffingRow {
                id: row
                    .id
                    .ok_or(SessionImportError::MissingStaffingRowId { index })?,
                discipline: row.discipline,
                hourly_rate: row.hourly_rate,
                cells: row.cells.iter().map(|cell| StaffingCell::parse(cell)).collect(),
                enabled: row.enabled,
                multiplier: row.multiplier,
            })
        })
        .collect::<Result<Vec<_>, SessionImportError>>()?;
    let next_row_id = record
        .next_row_id
        .unwrap_or_else(|| next_free_id(rows.iter().map(|row| row.id)));
    Ok(StaffingState {
        rows,
        week_count: record.week_count,
        next_row_id,
    })
}

pub fn export_session(state: &SessionState) -> Result<String, serde_json::Error> {
    export_session_at(state, Utc::now())
}

pub fn export_session_at(
    state: &SessionState,
    exported_at: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    let record = SessionFileRecord {
        version: Some(SESSION_VERSION),
        exported_at: Some(exported_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        state: Some(state_to_record(state)),
    };
    serde_json::to_string_pretty(&record)
}

fn state_to_record(state: &SessionState) -> StateRecord {
    StateRecord {
        work_items: state
            .work_items
            .iter()
            .map(|item| WorkItemRecord {
                id: Some(item.id),
                title: item.title.clone(),
                notes: item.notes.clone(),
                best_case_hours: Some(item.best_case_hours),
                worst_case_hours: Some(item.worst_case_hours),
                enabled: item.enabled,
                multiplier: item.multiplier,
                group_id: item.group_id,
            })
            .collect(),
        constants: Some(state.constants),
        next_id: Some(state.next_id),
        staffing: Some(StaffingRecord {
            rows: state
                .staffing
                .rows
                .iter()
                .map(|row| StaffingRowRecord {
                    id: Some(row.id),
                    discipline: row.discipline.clone(),
                    hourly_rate: row.hourly_rate,
                    cells: row.cells.iter().map(StaffingCell::to_string).collect(),
                    enabled: row.enabled,
                    multiplier: row.multiplier,
                })
                .collect(),
            week_count: state.staffing.week_count,
            next_row_id: Some(state.staffing.next_row_id),
        }),
        groups: state
            .groups
            .iter()
            .map(|group| GroupRecord {
                id: group.id,
                name: group.name.clone(),
            })
            .collect(),
        next_group_id: Some(state.next_group_id),
    }
}
