use crate::domain::constants::EstimationConstants;
use crate::domain::staffing::StaffingState;
use crate::domain::work_item::{GroupId, WorkItem, WorkItemGroup, WorkItemId};

/// Everything the calling application keeps between edits.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub work_items: Vec<WorkItem>,
    pub constants: EstimationConstants,
    pub next_id: WorkItemId,
    pub staffing: StaffingState,
    pub groups: Vec<WorkItemGroup>,
    pub next_group_id: GroupId,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            work_items: Vec::new(),
            constants: EstimationConstants::default(),
            next_id: 1,
            staffing: StaffingState::default(),
            groups: Vec::new(),
            next_group_id: 1,
        }
    }
}
