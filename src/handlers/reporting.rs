use actix_web::{web, HttpResponse, Result};
use serde_json;
use utoipa;

use crate::models::{RecordKind, ServiceError, TeamFilterQuery};
use crate::services::ReportingService;

#[utoipa::path(
    get,
    path = "/api/approved/{kind}",
    params(
        ("kind" = String, Path, description = "Record kind: time-adjustment or shift-swap"),
        TeamFilterQuery
    ),
    responses(
        (status = 200, description = "Fully approved entries", body = Object),
        (status = 400, description = "Unknown record kind", body = ErrorResponse)
    ),
    security()
)]
pub async fn approved_api(
    reporting_service: web::Data<ReportingService>,
    path: web::Path<String>,
    query: web::Query<TeamFilterQuery>,
) -> Result<HttpResponse, ServiceError> {
    let kind: RecordKind = path.into_inner().parse()?;

    let records = reporting_service
        .list_approved(kind, query.team_name.as_deref())
        .await?;

    let message = if records.is_empty() {
        "No approved data found for this section.".to_string()
    } else {
        format!("{} approved entries", records.len())
    };

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": message,
        "count": records.len(),
        "data": records
    })))
}
