use actix_web::{web, HttpResponse, Result};
use utoipa;

use crate::models::{
    NewShiftSwap, NewTimeAdjustment, ServiceError, ShiftSwapForm, SubmitResponse,
    Submission, TimeAdjustmentForm,
};
use crate::services::SubmissionService;

#[utoipa::path(
    post,
    path = "/api/time-adjustments",
    request_body = TimeAdjustmentForm,
    responses(
        (status = 200, description = "Time adjustment recorded", body = SubmitResponse),
        (status = 400, description = "Agent name missing", body = ErrorResponse)
    ),
    security()
)]
pub async fn submit_time_adjustment_api(
    submission_service: web::Data<SubmissionService>,
    form: web::Json<TimeAdjustmentForm>,
) -> Result<HttpResponse, ServiceError> {
    let submission = Submission::TimeAdjustment(NewTimeAdjustment::from(form.into_inner()));
    let kind = submission.kind();

    let id = submission_service.submit(submission).await?;

    Ok(HttpResponse::Ok().json(SubmitResponse {
        success: true,
        message: "Time Adjustment Data Submitted Successfully!".to_string(),
        kind,
        id,
    }))
}

#[utoipa::path(
    post,
    path = "/api/shift-swaps",
    request_body = ShiftSwapForm,
    responses(
        (status = 200, description = "Shift swap recorded", body = SubmitResponse),
        (status = 400, description = "Agent name missing", body = ErrorResponse)
    ),
    security()
)]
pub async fn submit_shift_swap_api(
    submission_service: web::Data<SubmissionService>,
    form: web::Json<ShiftSwapForm>,
) -> Result<HttpResponse, ServiceError> {
    let submission = Submission::ShiftSwap(NewShiftSwap::from(form.into_inner()));
    let kind = submission.kind();

    let id = submission_service.submit(submission).await?;

    Ok(HttpResponse::Ok().json(SubmitResponse {
        success: true,
        message: "Shift Swapping Data Submitted Successfully!".to_string(),
        kind,
        id,
    }))
}
