use crate::models::{ServiceError, Submission};
use crate::repositories::{ShiftSwapRepository, TimeAdjustmentRepository};
use std::sync::Arc;

pub struct SubmissionService {
    time_adjustments: Arc<dyn TimeAdjustmentRepository>,
    shift_swaps: Arc<dyn ShiftSwapRepository>,
}

impl SubmissionService {
    pub fn new(
        time_adjustments: Arc<dyn TimeAdjustmentRepository>,
        shift_swaps: Arc<dyn ShiftSwapRepository>,
    ) -> Self {
        Self {
            time_adjustments,
            shift_swaps,
        }
    }

    /// Stores a new record with both approval flags at `No` and returns its id.
    pub async fn submit(&self, submission: Submission) -> Result<i64, ServiceError> {
        let kind = submission.kind();

        let id = match submission {
            Submission::TimeAdjustment(record) => {
                record.validate().map_err(ServiceError::ValidationError)?;
                self.time_adjustments.insert(&record).await?
            }
            Submission::ShiftSwap(record) => {
                record.validate().map_err(ServiceError::ValidationError)?;
                self.shift_swaps.insert(&record).await?
            }
        };

        tracing::info!(%kind, id, "Submitted new entry");
        Ok(id)
    }
}
