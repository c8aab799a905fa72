use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::approval::{ApprovalFlag, ApprovalState};

/// A stored row of `shift_swapping_data`.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct ShiftSwapRecord {
    pub id: i64,
    #[schema(value_type = Option<String>, format = "date")]
    pub entry_date: Option<NaiveDate>,
    pub osms: Option<String>,
    pub agent_name: String,
    pub shift: Option<String>,
    pub team_name: Option<String>,
    pub team_leader: Option<String>,
    pub site: Option<String>,
    pub swapped_with_osms: Option<String>,
    pub swapped_with_name: Option<String>,
    pub swapped_with_shift: Option<String>,
    pub approved_by_team_lead: ApprovalFlag,
    pub approved_by_manager: ApprovalFlag,
}

impl ShiftSwapRecord {
    pub fn approval_state(&self) -> ApprovalState {
        ApprovalState::new(self.approved_by_team_lead, self.approved_by_manager)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewShiftSwap {
    pub entry_date: Option<NaiveDate>,
    pub osms: Option<String>,
    pub agent_name: String,
    pub shift: Option<String>,
    pub team_name: Option<String>,
    pub team_leader: Option<String>,
    pub site: Option<String>,
    pub swapped_with_osms: Option<String>,
    pub swapped_with_name: Option<String>,
    pub swapped_with_shift: Option<String>,
}

impl NewShiftSwap {
    pub fn validate(&self) -> Result<(), String> {
        if self.agent_name.trim().is_empty() {
            return Err("Please fill in the required fields (Agent Name)".to_string());
        }
        Ok(())
    }
}
