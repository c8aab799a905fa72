use crate::auth::{verify_jwt, JwtManager};
use crate::models::{ServiceError, Session};

/// Resolves the approver session for a protected request.
pub fn authenticate_request(
    req: &actix_web::HttpRequest,
    jwt_manager: &JwtManager,
) -> Result<Session, ServiceError> {
    let session = verify_jwt(req, jwt_manager)?;
    tracing::debug!(role = %session.role, team = ?session.team_name, "Request authenticated");
    Ok(session)
}
