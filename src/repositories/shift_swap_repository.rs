use crate::models::{
    ApprovalOutcome, ApprovalSelector, ApprovalStage, ApprovalStatus, NewShiftSwap,
    ServiceError, ShiftSwapRecord,
};
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::{single_match, status_clause, write_transition, ApprovalRow};

const SELECT_SHIFT_SWAP: &str = "SELECT id, entry_date, osms, agent_name, shift, team_name, team_leader, site, swapped_with_osms, swapped_with_name, swapped_with_shift, approved_by_team_lead, approved_by_manager FROM shift_swapping_data";

const UPDATE_APPROVAL: &str = "UPDATE shift_swapping_data SET approved_by_team_lead = ?, approved_by_manager = ? WHERE id = ? AND approved_by_team_lead = ? AND approved_by_manager = ?";

#[async_trait]
pub trait ShiftSwapRepository: Send + Sync {
    async fn insert(&self, record: &NewShiftSwap) -> Result<i64, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ShiftSwapRecord>, ServiceError>;
    async fn find_by_status(
        &self,
        status: ApprovalStatus,
        team_name: Option<&str>,
    ) -> Result<Vec<ShiftSwapRecord>, ServiceError>;
    async fn count(&self) -> Result<i64, ServiceError>;
    /// Advances the single record matched by `selector` (and `team_name`,
    /// when given) by one stage in a single transaction.
    async fn apply_approval(
        &self,
        selector: &ApprovalSelector,
        team_name: Option<&str>,
        stage: ApprovalStage,
    ) -> Result<ApprovalOutcome, ServiceError>;
}

pub struct SqliteShiftSwapRepository {
    pool: SqlitePool,
}

impl SqliteShiftSwapRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShiftSwapRepository for SqliteShiftSwapRepository {
    async fn insert(&self, record: &NewShiftSwap) -> Result<i64, ServiceError> {
        let result = sqlx::query(
            "INSERT INTO shift_swapping_data (entry_date, osms, agent_name, shift, team_name, team_leader, site, swapped_with_osms, swapped_with_name, swapped_with_shift)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(record.entry_date)
        .bind(&record.osms)
        .bind(&record.agent_name)
        .bind(&record.shift)
        .bind(&record.team_name)
        .bind(&record.team_leader)
        .bind(&record.site)
        .bind(&record.swapped_with_osms)
        .bind(&record.swapped_with_name)
        .bind(&record.swapped_with_shift)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ShiftSwapRecord>, ServiceError> {
        let record = sqlx::query_as::<_, ShiftSwapRecord>(&format!(
            "{} WHERE id = ?",
            SELECT_SHIFT_SWAP
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_by_status(
        &self,
        status: ApprovalStatus,
        team_name: Option<&str>,
    ) -> Result<Vec<ShiftSwapRecord>, ServiceError> {
        let mut query = QueryBuilder::<Sqlite>::new(SELECT_SHIFT_SWAP);
        query.push(" WHERE ").push(status_clause(status));
        if let Some(team) = team_name {
            query.push(" AND team_name = ").push_bind(team.to_string());
        }
        query.push(" ORDER BY id");

        let records = query
            .build_query_as::<ShiftSwapRecord>()
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    async fn count(&self) -> Result<i64, ServiceError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shift_swapping_data")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn apply_approval(
        &self,
        selector: &ApprovalSelector,
        team_name: Option<&str>,
        stage: ApprovalStage,
    ) -> Result<ApprovalOutcome, ServiceError> {
        // Take the write lock before reading so racing approvers queue up
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let mut lookup = QueryBuilder::<Sqlite>::new(
            "SELECT id, approved_by_team_lead, approved_by_manager FROM shift_swapping_data WHERE ",
        );
        match selector {
            ApprovalSelector::Id(id) => {
                lookup.push("id = ").push_bind(*id);
            }
            ApprovalSelector::Osms(osms) => {
                lookup.push("osms = ").push_bind(osms.clone());
            }
        }
        if let Some(team) = team_name {
            lookup.push(" AND team_name = ").push_bind(team.to_string());
        }

        let rows = lookup
            .build_query_as::<ApprovalRow>()
            .fetch_all(&mut *tx)
            .await?;
        let row = single_match(rows, selector)?;

        let outcome = write_transition(&mut *tx, UPDATE_APPROVAL, &row, stage).await?;
        tx.commit().await?;

        Ok(outcome)
    }
}
