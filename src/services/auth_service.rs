use crate::models::{Role, ServiceError, Session};

/// Shared-password gate for the two approver roles.
///
/// Credentials are compared in plaintext; this gate only decides which
/// approval queue a caller may act on.
pub struct AuthService {
    team_lead_password: String,
    manager_password: String,
}

impl AuthService {
    pub fn new(team_lead_password: String, manager_password: String) -> Self {
        Self {
            team_lead_password,
            manager_password,
        }
    }

    pub fn authenticate(
        &self,
        role: Role,
        team_name: Option<String>,
        password: &str,
    ) -> Result<Session, ServiceError> {
        let expected: &str = match role {
            Role::TeamLead => &self.team_lead_password,
            Role::Manager => &self.manager_password,
        };

        if password != expected {
            tracing::warn!(%role, "Rejected login with invalid password");
            return Err(ServiceError::AuthenticationError(
                "Invalid password or team name".to_string(),
            ));
        }

        let team_name = team_name
            .map(|team| team.trim().to_string())
            .filter(|team| !team.is_empty());

        let session = match role {
            Role::TeamLead => {
                let team = team_name.ok_or_else(|| {
                    tracing::warn!(%role, "Rejected login without a team name");
                    ServiceError::AuthenticationError("Invalid password or team name".to_string())
                })?;
                Session::team_lead(team)
            }
            Role::Manager => Session::manager(team_name),
        };

        tracing::info!(%role, team = ?session.team_name, "Authenticated");
        Ok(session)
    }
}
