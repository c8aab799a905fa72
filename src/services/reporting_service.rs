use crate::models::{ApprovalStatus, RecordKind, RecordList, ServiceError};
use crate::repositories::{ShiftSwapRepository, TimeAdjustmentRepository};
use std::sync::Arc;

/// Read-only view over fully approved entries.
pub struct ReportingService {
    time_adjustments: Arc<dyn TimeAdjustmentRepository>,
    shift_swaps: Arc<dyn ShiftSwapRepository>,
}

impl ReportingService {
    pub fn new(
        time_adjustments: Arc<dyn TimeAdjustmentRepository>,
        shift_swaps: Arc<dyn ShiftSwapRepository>,
    ) -> Self {
        Self {
            time_adjustments,
            shift_swaps,
        }
    }

    /// Time adjustments have no team, so `team_filter` only narrows shift swaps.
    pub async fn list_approved(
        &self,
        kind: RecordKind,
        team_filter: Option<&str>,
    ) -> Result<RecordList, ServiceError> {
        let status = ApprovalStatus::FullyApproved;

        match kind {
            RecordKind::TimeAdjustment => Ok(RecordList::TimeAdjustment(
                self.time_adjustments.find_by_status(status).await?,
            )),
            RecordKind::ShiftSwap => {
                let team = team_filter.map(str::trim).filter(|team| !team.is_empty());
                Ok(RecordList::ShiftSwap(
                    self.shift_swaps.find_by_status(status, team).await?,
                ))
            }
        }
    }
}
