use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::session::Role;
use super::shift_swap::NewShiftSwap;
use super::time_adjustment::{LoginStatus, NewTimeAdjustment};

#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    pub role: Role,
    pub team_name: Option<String>,
    pub password: String,
}

/// Every field is optional at the wire level so a missing agent name is
/// reported as a validation error rather than a malformed body.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct TimeAdjustmentForm {
    pub agent_id: Option<String>,
    pub agent_name: Option<String>,
    #[schema(value_type = Option<String>, format = "date", example = "2024-10-01")]
    pub date_of_adjustment: Option<NaiveDate>,
    #[schema(example = "09:15")]
    pub login_time: Option<String>,
    pub logout_time: Option<String>,
    pub login_status: Option<LoginStatus>,
    pub extended_hours: Option<String>,
    pub leave_adjustment: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ShiftSwapForm {
    #[schema(value_type = Option<String>, format = "date", example = "2024-10-01")]
    pub entry_date: Option<NaiveDate>,
    pub osms: Option<String>,
    pub agent_name: Option<String>,
    pub shift: Option<String>,
    pub team_name: Option<String>,
    pub team_leader: Option<String>,
    pub site: Option<String>,
    pub swapped_with_osms: Option<String>,
    pub swapped_with_name: Option<String>,
    pub swapped_with_shift: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TeamFilterQuery {
    /// Restrict shift-swap results to one team
    pub team_name: Option<String>,
}

// An empty text box means the field was not provided.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<TimeAdjustmentForm> for NewTimeAdjustment {
    fn from(form: TimeAdjustmentForm) -> Self {
        Self {
            agent_id: non_blank(form.agent_id),
            agent_name: form.agent_name.unwrap_or_default(),
            date_of_adjustment: form.date_of_adjustment,
            login_time: non_blank(form.login_time),
            logout_time: non_blank(form.logout_time),
            login_status: form.login_status.unwrap_or_default(),
            extended_hours: non_blank(form.extended_hours),
            leave_adjustment: non_blank(form.leave_adjustment),
            remarks: non_blank(form.remarks),
        }
    }
}

impl From<ShiftSwapForm> for NewShiftSwap {
    fn from(form: ShiftSwapForm) -> Self {
        Self {
            entry_date: form.entry_date,
            osms: non_blank(form.osms),
            agent_name: form.agent_name.unwrap_or_default(),
            shift: non_blank(form.shift),
            team_name: non_blank(form.team_name),
            team_leader: non_blank(form.team_leader),
            site: non_blank(form.site),
            swapped_with_osms: non_blank(form.swapped_with_osms),
            swapped_with_name: non_blank(form.swapped_with_name),
            swapped_with_shift: non_blank(form.swapped_with_shift),
        }
    }
}
