pub mod shift_swap_repository;
pub mod time_adjustment_repository;

pub use shift_swap_repository::*;
pub use time_adjustment_repository::*;

use crate::models::{
    Advance, ApprovalFlag, ApprovalOutcome, ApprovalSelector, ApprovalStage, ApprovalState,
    ApprovalStatus, ServiceError,
};
use sqlx::SqliteConnection;

/// WHERE fragment selecting rows in exactly `status`.
pub(crate) fn status_clause(status: ApprovalStatus) -> &'static str {
    match status {
        ApprovalStatus::AwaitingTeamLead => "approved_by_team_lead = 'No'",
        ApprovalStatus::AwaitingManager => {
            "approved_by_team_lead = 'Yes' AND approved_by_manager = 'No'"
        }
        ApprovalStatus::FullyApproved => {
            "approved_by_team_lead = 'Yes' AND approved_by_manager = 'Yes'"
        }
    }
}

/// Identity plus approval columns, read inside an approval transaction.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ApprovalRow {
    pub id: i64,
    pub approved_by_team_lead: ApprovalFlag,
    pub approved_by_manager: ApprovalFlag,
}

impl ApprovalRow {
    fn state(&self) -> ApprovalState {
        ApprovalState::new(self.approved_by_team_lead, self.approved_by_manager)
    }
}

pub(crate) fn single_match(
    mut rows: Vec<ApprovalRow>,
    selector: &ApprovalSelector,
) -> Result<ApprovalRow, ServiceError> {
    match rows.len() {
        0 => Err(ServiceError::NotFound(format!(
            "No entry found for {}",
            selector
        ))),
        1 => Ok(rows.remove(0)),
        n => Err(ServiceError::ValidationError(format!(
            "{} matches {} entries; approve by id instead",
            selector, n
        ))),
    }
}

/// Applies `stage` to `row` through `update_sql`, which must take the new
/// flag pair, the row id and the previously read flag pair, in that order.
/// A guard miss means a concurrent approver got there first.
pub(crate) async fn write_transition(
    conn: &mut SqliteConnection,
    update_sql: &'static str,
    row: &ApprovalRow,
    stage: ApprovalStage,
) -> Result<ApprovalOutcome, ServiceError> {
    let next = match row.state().advance(stage)? {
        Advance::Applied(next) => next,
        Advance::Unchanged => return Ok(ApprovalOutcome::AlreadyApproved),
    };

    let result = sqlx::query(update_sql)
        .bind(next.team_lead)
        .bind(next.manager)
        .bind(row.id)
        .bind(row.approved_by_team_lead)
        .bind(row.approved_by_manager)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 1 {
        Ok(ApprovalOutcome::Approved)
    } else {
        Ok(ApprovalOutcome::AlreadyApproved)
    }
}
