use actix_web::{web, HttpResponse, Result};
use utoipa;

use crate::auth::{JwtManager, TOKEN_TTL_HOURS};
use crate::models::{ApiResponse, LoginForm, LoginResponse, ServiceError};
use crate::services::AuthService;

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginForm,
    responses(
        (status = 200, description = "Login successful - JWT token returned in response body", body = LoginResponse),
        (status = 401, description = "Invalid password or team name", body = ErrorResponse)
    ),
    security()
)]
pub async fn login_api(
    auth_service: web::Data<AuthService>,
    form: web::Json<LoginForm>,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    let form = form.into_inner();
    let session = auth_service.authenticate(form.role, form.team_name, &form.password)?;

    let token = jwt_manager
        .generate_token(&session)
        .map_err(|e| ServiceError::InternalError(format!("Failed to generate token: {}", e)))?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        success: true,
        message: format!("{} authenticated successfully!", session.role),
        token,
        expires_in: (TOKEN_TTL_HOURS * 3600) as u64,
        role: session.role,
        team_name: session.team_name,
    }))
}

#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 200, description = "Logout successful", body = ApiResponse)
    ),
    security()
)]
pub async fn logout_api() -> Result<HttpResponse, ServiceError> {
    // Tokens are stateless; the client drops its copy
    Ok(HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: "Logout successful - discard your token".to_string(),
    }))
}
