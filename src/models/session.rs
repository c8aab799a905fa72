use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use super::approval::{ApprovalStage, ApprovalStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    TeamLead,
    Manager,
}

impl Role {
    /// The approval stage this role signs off.
    pub fn stage(self) -> ApprovalStage {
        match self {
            Role::TeamLead => ApprovalStage::TeamLead,
            Role::Manager => ApprovalStage::Manager,
        }
    }

    /// Records this role is expected to act on next.
    pub fn pending_status(self) -> ApprovalStatus {
        match self {
            Role::TeamLead => ApprovalStatus::AwaitingTeamLead,
            Role::Manager => ApprovalStatus::AwaitingManager,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::TeamLead => write!(f, "Team Lead"),
            Role::Manager => write!(f, "Manager"),
        }
    }
}

/// An authenticated approver, handed to every approval call.
///
/// A team lead session is always bound to the team it signed in for; a
/// manager session may carry a team used as the default shift-swap filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
    pub team_name: Option<String>,
}

impl Session {
    pub fn team_lead(team_name: impl Into<String>) -> Self {
        Self {
            role: Role::TeamLead,
            team_name: Some(team_name.into()),
        }
    }

    pub fn manager(team_name: Option<String>) -> Self {
        Self {
            role: Role::Manager,
            team_name,
        }
    }

    pub fn bound_team(&self) -> Option<&str> {
        self.team_name
            .as_deref()
            .map(str::trim)
            .filter(|team| !team.is_empty())
    }
}
