use actix_web::{web, HttpResponse, Result};
use serde_json;
use utoipa;

use crate::auth::JwtManager;
use crate::middleware::auth::authenticate_request;
use crate::models::{
    ApprovalOutcome, ApprovalSelector, ApproveResponse, RecordKind, ServiceError, TeamFilterQuery,
};
use crate::services::ApprovalService;

#[utoipa::path(
    get,
    path = "/api/approvals/{kind}/pending",
    params(
        ("kind" = String, Path, description = "Record kind: time-adjustment or shift-swap"),
        TeamFilterQuery
    ),
    responses(
        (status = 200, description = "Entries awaiting the caller's sign-off", body = Object),
        (status = 400, description = "Unknown record kind", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn pending_api(
    approval_service: web::Data<ApprovalService>,
    path: web::Path<String>,
    query: web::Query<TeamFilterQuery>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    let session = authenticate_request(&req, &jwt_manager)?;
    let kind: RecordKind = path.into_inner().parse()?;

    let records = approval_service
        .list_pending(&session, kind, query.team_name.as_deref())
        .await?;

    let message = if records.is_empty() {
        "No pending approvals for this section.".to_string()
    } else {
        format!("{} entries awaiting {} approval", records.len(), session.role)
    };

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": message,
        "role": session.role,
        "count": records.len(),
        "data": records
    })))
}

#[utoipa::path(
    post,
    path = "/api/approvals/{kind}/approve",
    params(
        ("kind" = String, Path, description = "Record kind: time-adjustment or shift-swap")
    ),
    request_body = ApprovalSelector,
    responses(
        (status = 200, description = "Entry approved, or already approved at this stage", body = ApproveResponse),
        (status = 400, description = "Invalid or ambiguous selector", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "No entry matches the selector", body = ErrorResponse),
        (status = 409, description = "Entry is still awaiting team lead approval", body = ErrorResponse)
    )
)]
pub async fn approve_api(
    approval_service: web::Data<ApprovalService>,
    path: web::Path<String>,
    selector: web::Json<ApprovalSelector>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    let session = authenticate_request(&req, &jwt_manager)?;
    let kind: RecordKind = path.into_inner().parse()?;
    let selector = selector.into_inner();

    let outcome = approval_service.approve(&session, kind, &selector).await?;

    let message = match outcome {
        ApprovalOutcome::Approved => format!("Entry {} approved by {}!", selector, session.role),
        ApprovalOutcome::AlreadyApproved => {
            format!("Entry {} was already approved by {}", selector, session.role)
        }
    };

    Ok(HttpResponse::Ok().json(ApproveResponse {
        success: true,
        message,
        kind,
        outcome,
    }))
}
