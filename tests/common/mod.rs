#![allow(dead_code)]

use actix_web::{test, web, App};
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;
use shift_desk::{
    auth::JwtManager,
    database::initialize_database,
    handlers,
    models::{
        ApprovalFlag, NewShiftSwap, NewTimeAdjustment, RecordList, Role, Session, Submission,
    },
    repositories::{
        ShiftSwapRepository, SqliteShiftSwapRepository, SqliteTimeAdjustmentRepository,
        TimeAdjustmentRepository,
    },
    services::{ApprovalService, AuthService, ReportingService, SubmissionService},
};

pub const TEAM_LEAD_PASSWORD: &str = "team_lead_pass";
pub const MANAGER_PASSWORD: &str = "manager_pass";

pub struct TestApp {
    pub pool: SqlitePool,
    pub jwt_manager: JwtManager,
    pub time_adjustments: Arc<SqliteTimeAdjustmentRepository>,
    pub shift_swaps: Arc<SqliteShiftSwapRepository>,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        // Create temporary database
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let database_url = format!("sqlite://{}", db_path.display());

        let pool = initialize_database(&database_url)
            .await
            .expect("Failed to initialize database");

        let time_adjustments = Arc::new(SqliteTimeAdjustmentRepository::new(pool.clone()));
        let shift_swaps = Arc::new(SqliteShiftSwapRepository::new(pool.clone()));

        Self {
            pool,
            jwt_manager: JwtManager::new("test_secret_key"),
            time_adjustments,
            shift_swaps,
            temp_dir,
        }
    }

    pub fn submission_service(&self) -> SubmissionService {
        SubmissionService::new(self.time_adjustments.clone(), self.shift_swaps.clone())
    }

    pub fn approval_service(&self) -> ApprovalService {
        ApprovalService::new(self.time_adjustments.clone(), self.shift_swaps.clone())
    }

    pub fn reporting_service(&self) -> ReportingService {
        ReportingService::new(self.time_adjustments.clone(), self.shift_swaps.clone())
    }

    pub fn auth_service(&self) -> AuthService {
        AuthService::new(TEAM_LEAD_PASSWORD.to_string(), MANAGER_PASSWORD.to_string())
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.submission_service()))
            .app_data(web::Data::new(self.approval_service()))
            .app_data(web::Data::new(self.reporting_service()))
            .app_data(web::Data::new(self.auth_service()))
            .app_data(web::Data::new(self.jwt_manager.clone()))
            .configure(handlers::configure)
    }

    pub async fn login_and_get_token(&self, role: Role, team_name: Option<&str>) -> String {
        let app = test::init_service(self.create_app()).await;

        let password = match role {
            Role::TeamLead => TEAM_LEAD_PASSWORD,
            Role::Manager => MANAGER_PASSWORD,
        };

        let login_req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({
                "role": role,
                "team_name": team_name,
                "password": password
            }))
            .to_request();

        let resp = test::call_service(&app, login_req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;

        body["token"].as_str().unwrap().to_string()
    }

    pub async fn add_shift_swap(&self, agent_name: &str, osms: &str, team_name: &str) -> i64 {
        self.submission_service()
            .submit(Submission::ShiftSwap(NewShiftSwap {
                agent_name: agent_name.to_string(),
                osms: Some(osms.to_string()),
                team_name: Some(team_name.to_string()),
                ..Default::default()
            }))
            .await
            .expect("Failed to submit shift swap")
    }

    pub async fn add_time_adjustment(&self, agent_name: &str) -> i64 {
        self.submission_service()
            .submit(Submission::TimeAdjustment(NewTimeAdjustment {
                agent_name: agent_name.to_string(),
                ..Default::default()
            }))
            .await
            .expect("Failed to submit time adjustment")
    }

    pub async fn shift_swap_flags(&self, id: i64) -> (ApprovalFlag, ApprovalFlag) {
        let record = self
            .shift_swaps
            .find_by_id(id)
            .await
            .expect("Failed to load shift swap")
            .expect("Shift swap not found");
        (record.approved_by_team_lead, record.approved_by_manager)
    }

    pub async fn time_adjustment_flags(&self, id: i64) -> (ApprovalFlag, ApprovalFlag) {
        let record = self
            .time_adjustments
            .find_by_id(id)
            .await
            .expect("Failed to load time adjustment")
            .expect("Time adjustment not found");
        (record.approved_by_team_lead, record.approved_by_manager)
    }

    /// Rows where the manager flag is set without the team lead flag.
    pub async fn count_manager_without_team_lead(&self) -> i64 {
        let time_adjustments: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM time_adjustment_data WHERE approved_by_manager = 'Yes' AND approved_by_team_lead = 'No'",
        )
        .fetch_one(&self.pool)
        .await
        .unwrap();
        let shift_swaps: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM shift_swapping_data WHERE approved_by_manager = 'Yes' AND approved_by_team_lead = 'No'",
        )
        .fetch_one(&self.pool)
        .await
        .unwrap();
        time_adjustments + shift_swaps
    }
}

pub fn team_lead(team: &str) -> Session {
    Session::team_lead(team)
}

pub fn manager() -> Session {
    Session::manager(None)
}

/// Record ids in query order.
pub fn record_ids(list: &RecordList) -> Vec<i64> {
    match list {
        RecordList::TimeAdjustment(records) => records.iter().map(|r| r.id).collect(),
        RecordList::ShiftSwap(records) => records.iter().map(|r| r.id).collect(),
    }
}
