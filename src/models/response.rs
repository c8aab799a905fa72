use serde::Serialize;
use utoipa::ToSchema;

use super::approval::ApprovalOutcome;
use super::records::RecordKind;
use super::session::Role;

// Common response types
#[derive(Serialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

// Authentication responses
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub expires_in: u64, // seconds
    pub role: Role,
    pub team_name: Option<String>,
}

// Submission responses
#[derive(Serialize, ToSchema)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub kind: RecordKind,
    pub id: i64,
}

// Approval responses
#[derive(Serialize, ToSchema)]
pub struct ApproveResponse {
    pub success: bool,
    pub message: String,
    pub kind: RecordKind,
    pub outcome: ApprovalOutcome,
}
