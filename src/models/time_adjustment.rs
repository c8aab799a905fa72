use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::approval::{ApprovalFlag, ApprovalState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema)]
pub enum LoginStatus {
    #[default]
    #[serde(rename = "On Time")]
    #[sqlx(rename = "On Time")]
    OnTime,
    Late,
    Absent,
}

/// A stored row of `time_adjustment_data`.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct TimeAdjustmentRecord {
    pub id: i64,
    pub agent_id: Option<String>,
    pub agent_name: String,
    #[schema(value_type = Option<String>, format = "date")]
    pub date_of_adjustment: Option<NaiveDate>,
    pub login_time: Option<String>,
    pub logout_time: Option<String>,
    pub login_status: LoginStatus,
    pub extended_hours: Option<String>,
    pub leave_adjustment: Option<String>,
    pub remarks: Option<String>,
    pub approved_by_team_lead: ApprovalFlag,
    pub approved_by_manager: ApprovalFlag,
}

impl TimeAdjustmentRecord {
    pub fn approval_state(&self) -> ApprovalState {
        ApprovalState::new(self.approved_by_team_lead, self.approved_by_manager)
    }
}

/// A time adjustment as submitted, before it has an id.
#[derive(Debug, Clone, Default)]
pub struct NewTimeAdjustment {
    pub agent_id: Option<String>,
    pub agent_name: String,
    pub date_of_adjustment: Option<NaiveDate>,
    pub login_time: Option<String>,
    pub logout_time: Option<String>,
    pub login_status: LoginStatus,
    pub extended_hours: Option<String>,
    pub leave_adjustment: Option<String>,
    pub remarks: Option<String>,
}

impl NewTimeAdjustment {
    /// Agent name is the only required field.
    pub fn validate(&self) -> Result<(), String> {
        if self.agent_name.trim().is_empty() {
            return Err("Please fill in the required fields (Agent Name)".to_string());
        }
        Ok(())
    }
}
