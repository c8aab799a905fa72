use std::collections::BTreeMap;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa::OpenApi;

use crate::handlers;
use crate::models::{
    ApiResponse, ApprovalFlag, ApprovalOutcome, ApprovalSelector, ApproveResponse, ErrorResponse,
    LoginForm, LoginResponse, LoginStatus, RecordKind, Role, ShiftSwapForm, ShiftSwapRecord,
    SubmitResponse, TimeAdjustmentForm, TimeAdjustmentRecord,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::login_api,
        handlers::auth::logout_api,
        handlers::submission::submit_time_adjustment_api,
        handlers::submission::submit_shift_swap_api,
        handlers::approval::pending_api,
        handlers::approval::approve_api,
        handlers::reporting::approved_api,
    ),
    components(schemas(
        ApiResponse,
        ErrorResponse,
        LoginForm,
        LoginResponse,
        Role,
        TimeAdjustmentForm,
        ShiftSwapForm,
        SubmitResponse,
        RecordKind,
        LoginStatus,
        ApprovalFlag,
        ApprovalSelector,
        ApprovalOutcome,
        ApproveResponse,
        TimeAdjustmentRecord,
        ShiftSwapRecord,
    )),
    info(
        title = "Shift Desk API",
        description = "Time adjustment and shift swap requests with team lead and manager approval"
    )
)]
pub struct ApiDoc;

pub fn configure_openapi(mut openapi: OpenApiSpec) -> OpenApiSpec {
    // Add Bearer token security scheme (HTTP Bearer type, not ApiKey)
    let mut security_schemes = BTreeMap::new();
    security_schemes.insert(
        "bearer_auth".to_string(),
        SecurityScheme::Http(
            HttpBuilder::new()
                .scheme(HttpAuthScheme::Bearer)
                .bearer_format("JWT")
                .description(Some("Approver session token from /api/login"))
                .build(),
        ),
    );

    if let Some(components) = openapi.components.as_mut() {
        components.security_schemes = security_schemes;
    }

    // Applies to every endpoint without a security() override
    openapi.security = Some(vec![
        utoipa::openapi::security::SecurityRequirement::new("bearer_auth", Vec::<String>::new()),
    ]);

    openapi
}
