use crate::models::{
    ApprovalOutcome, ApprovalSelector, ApprovalStage, ApprovalStatus, NewTimeAdjustment,
    ServiceError, TimeAdjustmentRecord,
};
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::{single_match, status_clause, write_transition, ApprovalRow};

const SELECT_TIME_ADJUSTMENT: &str = "SELECT id, agent_id, agent_name, date_of_adjustment, login_time, logout_time, login_status, extended_hours, leave_adjustment, remarks, approved_by_team_lead, approved_by_manager FROM time_adjustment_data";

const UPDATE_APPROVAL: &str = "UPDATE time_adjustment_data SET approved_by_team_lead = ?, approved_by_manager = ? WHERE id = ? AND approved_by_team_lead = ? AND approved_by_manager = ?";

#[async_trait]
pub trait TimeAdjustmentRepository: Send + Sync {
    async fn insert(&self, record: &NewTimeAdjustment) -> Result<i64, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<TimeAdjustmentRecord>, ServiceError>;
    async fn find_by_status(
        &self,
        status: ApprovalStatus,
    ) -> Result<Vec<TimeAdjustmentRecord>, ServiceError>;
    async fn count(&self) -> Result<i64, ServiceError>;
    /// Advances the record with `id` by one stage in a single transaction.
    async fn apply_approval(
        &self,
        id: i64,
        stage: ApprovalStage,
    ) -> Result<ApprovalOutcome, ServiceError>;
}

pub struct SqliteTimeAdjustmentRepository {
    pool: SqlitePool,
}

impl SqliteTimeAdjustmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimeAdjustmentRepository for SqliteTimeAdjustmentRepository {
    async fn insert(&self, record: &NewTimeAdjustment) -> Result<i64, ServiceError> {
        let result = sqlx::query(
            "INSERT INTO time_adjustment_data (agent_id, agent_name, date_of_adjustment, login_time, logout_time, login_status, extended_hours, leave_adjustment, remarks)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.agent_id)
        .bind(&record.agent_name)
        .bind(record.date_of_adjustment)
        .bind(&record.login_time)
        .bind(&record.logout_time)
        .bind(record.login_status)
        .bind(&record.extended_hours)
        .bind(&record.leave_adjustment)
        .bind(&record.remarks)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TimeAdjustmentRecord>, ServiceError> {
        let record = sqlx::query_as::<_, TimeAdjustmentRecord>(&format!(
            "{} WHERE id = ?",
            SELECT_TIME_ADJUSTMENT
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_by_status(
        &self,
        status: ApprovalStatus,
    ) -> Result<Vec<TimeAdjustmentRecord>, ServiceError> {
        let mut query = QueryBuilder::<Sqlite>::new(SELECT_TIME_ADJUSTMENT);
        query.push(" WHERE ").push(status_clause(status));
        query.push(" ORDER BY id");

        let records = query
            .build_query_as::<TimeAdjustmentRecord>()
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    async fn count(&self) -> Result<i64, ServiceError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM time_adjustment_data")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn apply_approval(
        &self,
        id: i64,
        stage: ApprovalStage,
    ) -> Result<ApprovalOutcome, ServiceError> {
        // Take the write lock before reading so racing approvers queue up
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let rows = sqlx::query_as::<_, ApprovalRow>(
            "SELECT id, approved_by_team_lead, approved_by_manager FROM time_adjustment_data WHERE id = ?",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;
        let row = single_match(rows, &ApprovalSelector::Id(id))?;

        let outcome = write_transition(&mut *tx, UPDATE_APPROVAL, &row, stage).await?;
        tx.commit().await?;

        Ok(outcome)
    }
}
