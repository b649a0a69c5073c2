//! Accepting externally suggested work items and staffing roles.
//!
//! Once accepted, suggestions are ordinary work items and staffing rows.

use serde::Deserialize;
use thiserror::Error;

use crate::domain::session::SessionState;
use crate::domain::staffing::StaffingRole;
use crate::domain::work_item::{GroupId, WorkItem, WorkItemGroup};
use crate::services::estimation::{
    EstimationError, WorkItemError, calculate_portfolio, validate_work_item,
};
use crate::services::staffing_grid::{
    StaffingError, calculate_staffing_grid, create_prepopulated_rows,
};

#[derive(Error, Debug)]
pub enum SuggestionError {
    #[error("Invalid suggestions JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid suggested work item \"{title}\": {source}")]
    InvalidWorkItem {
        title: String,
        source: WorkItemError,
    },
    #[error("failed to size suggested staffing: {0}")]
    Estimation(#[from] EstimationError),
    #[error("failed to size suggested staffing: {0}")]
    Staffing(#[from] StaffingError),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SuggestedWorkItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub notes: String,
    pub best_case_hours: f64,
    pub worst_case_hours: f64,
    #[serde(rename = "groupName", default)]
    pub group_name: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SuggestedRole {
    pub discipline: String,
    #[serde(default)]
    pub hourly_rate: f64,
    #[serde(default = "default_count")]
    pub count: u32,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Suggestions {
    #[serde(rename = "workItems", default)]
    pub work_items: Vec<SuggestedWorkItem>,
    #[serde(default)]
    pub roles: Vec<SuggestedRole>,
}

fn default_count() -> u32 {
    1
}

pub fn parse_suggestions(input: &str) -> Result<Suggestions, SuggestionError> {
    Ok(serde_json::from_str(input)?)
}

/// Returns a new state with the suggested items appended and the suggested
/// roles staffed evenly against the effort the existing rows do not cover.
pub fn accept_suggestions(
    state: &SessionState,
    suggestions: &Suggestions,
) -> Result<SessionState, SuggestionError> {
    let mut next = state.clone();

    for suggested in &suggestions.work_items {
        let group_id = suggested
            .group_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| find_or_create_group(&mut next, name));

        let mut item = WorkItem::new(
            next.next_id,
            suggested.best_case_hours,
            suggested.worst_case_hours,
        );
        item.title = suggested.title.clone();
        item.notes = suggested.notes.clone();
        item.group_id = group_id;
        validate_work_item(&item).map_err(|source| SuggestionError::InvalidWorkItem {
            title: suggested.title.clone(),
            source,
        })?;

        next.work_items.push(item);
        next.next_id += 1;
    }

    if !suggestions.roles.is_empty() {
        let roles: Vec<StaffingRole> = suggestions
            .roles
            .iter()
            .map(|role| StaffingRole {
                discipline: role.discipline.clone(),
                hourly_rate: role.hourly_rate,
                count: role.count,
            })
            .collect();
        let results = calculate_portfolio(&next.work_items, &next.constants)?;
        let week_count = if next.staffing.week_count > 0 {
            next.staffing.week_count
        } else {
            results.duration_weeks as usize
        };
        // Existing rows must keep matching the grid width.
        for row in &mut next.staffing.rows {
            row.cells.resize(week_count, Default::default());
        }
        let staffed_hours =
            calculate_staffing_grid(&next.staffing.rows, week_count)?.grand_total_hours;
        let unstaffed_hours = (results.total_effort_hours - staffed_hours).max(0.0);
        let rows = create_prepopulated_rows(
            next.staffing.next_row_id,
            &roles,
            week_count,
            unstaffed_hours,
            next.constants.billable_hours_per_week,
        );
        next.staffing.next_row_id += rows.len() as i64;
        next.staffing.rows.extend(rows);
        next.staffing.week_count = week_count;
    }

    tracing::info!(
        work_items = suggestions.work_items.len(),
        roles = suggestions.roles.len(),
        "accepted suggestions"
    );
    Ok(next)
}

fn find_or_create_group(state: &mut SessionState, name: &str) -> GroupId {
    if let Some(group) = state
        .groups
        .iter()
        .find(|group| group.name.eq_ignore_ascii_case(name))
    {
        return group.id;
    }
    let id = state.next_group_id;
    state.groups.push(WorkItemGroup {
        id,
        name: name.to_string(),
    });
    state.next_group_id += 1;
    id
}
