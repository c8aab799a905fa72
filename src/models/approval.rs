use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use super::errors::ServiceError;

/// One approval flag as stored in the `approved_by_*` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema)]
pub enum ApprovalFlag {
    #[default]
    #[serde(rename = "No")]
    #[sqlx(rename = "No")]
    Pending,
    #[serde(rename = "Yes")]
    #[sqlx(rename = "Yes")]
    Approved,
}

impl ApprovalFlag {
    pub fn is_approved(self) -> bool {
        self == ApprovalFlag::Approved
    }
}

/// The two sign-off authorities, in the order they must approve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStage {
    TeamLead,
    Manager,
}

impl fmt::Display for ApprovalStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalStage::TeamLead => write!(f, "team lead"),
            ApprovalStage::Manager => write!(f, "manager"),
        }
    }
}

/// Visible status derived from the flag pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStatus {
    AwaitingTeamLead,
    AwaitingManager,
    FullyApproved,
}

/// Result of advancing an [`ApprovalState`] by one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Applied(ApprovalState),
    Unchanged,
}

/// The `(approved_by_team_lead, approved_by_manager)` pair of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApprovalState {
    pub team_lead: ApprovalFlag,
    pub manager: ApprovalFlag,
}

impl ApprovalState {
    pub fn new(team_lead: ApprovalFlag, manager: ApprovalFlag) -> Self {
        Self { team_lead, manager }
    }

    pub fn status(&self) -> ApprovalStatus {
        match (self.team_lead, self.manager) {
            (ApprovalFlag::Pending, _) => ApprovalStatus::AwaitingTeamLead,
            (ApprovalFlag::Approved, ApprovalFlag::Pending) => ApprovalStatus::AwaitingManager,
            (ApprovalFlag::Approved, ApprovalFlag::Approved) => ApprovalStatus::FullyApproved,
        }
    }

    /// Flags only move from `No` to `Yes`, and the manager flag only after
    /// the team lead flag. Re-approving a stage is reported as `Unchanged`.
    pub fn advance(&self, stage: ApprovalStage) -> Result<Advance, ServiceError> {
        match stage {
            ApprovalStage::TeamLead => {
                if self.team_lead.is_approved() {
                    return Ok(Advance::Unchanged);
                }
                Ok(Advance::Applied(Self {
                    team_lead: ApprovalFlag::Approved,
                    ..*self
                }))
            }
            ApprovalStage::Manager => {
                if self.manager.is_approved() {
                    return Ok(Advance::Unchanged);
                }
                if !self.team_lead.is_approved() {
                    return Err(ServiceError::InvalidTransition(
                        "Entry is still awaiting team lead approval".to_string(),
                    ));
                }
                Ok(Advance::Applied(Self {
                    manager: ApprovalFlag::Approved,
                    ..*self
                }))
            }
        }
    }
}

/// Business key used to pick the record an approval applies to.
///
/// Deserializes from `{"id": 7}` or `{"osms": "A1"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalSelector {
    Id(i64),
    Osms(String),
}

impl fmt::Display for ApprovalSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalSelector::Id(id) => write!(f, "id {}", id),
            ApprovalSelector::Osms(osms) => write!(f, "OSMS {}", osms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalOutcome {
    Approved,
    AlreadyApproved,
}
