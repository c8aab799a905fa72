use crate::models::{
    ApprovalOutcome, ApprovalSelector, RecordKind, RecordList, Role, ServiceError, Session,
};
use crate::repositories::{ShiftSwapRepository, TimeAdjustmentRepository};
use std::sync::Arc;

pub struct ApprovalService {
    time_adjustments: Arc<dyn TimeAdjustmentRepository>,
    shift_swaps: Arc<dyn ShiftSwapRepository>,
}

impl ApprovalService {
    pub fn new(
        time_adjustments: Arc<dyn TimeAdjustmentRepository>,
        shift_swaps: Arc<dyn ShiftSwapRepository>,
    ) -> Self {
        Self {
            time_adjustments,
            shift_swaps,
        }
    }

    /// Records waiting on the session's role: team leads see entries with no
    /// team lead sign-off, managers see entries signed off by a team lead only.
    pub async fn list_pending(
        &self,
        session: &Session,
        kind: RecordKind,
        team_filter: Option<&str>,
    ) -> Result<RecordList, ServiceError> {
        let status = session.role.pending_status();

        match kind {
            RecordKind::TimeAdjustment => Ok(RecordList::TimeAdjustment(
                self.time_adjustments.find_by_status(status).await?,
            )),
            RecordKind::ShiftSwap => {
                let team = listing_team(session, team_filter)?;
                Ok(RecordList::ShiftSwap(
                    self.shift_swaps.find_by_status(status, team).await?,
                ))
            }
        }
    }

    pub async fn approve(
        &self,
        session: &Session,
        kind: RecordKind,
        selector: &ApprovalSelector,
    ) -> Result<ApprovalOutcome, ServiceError> {
        let stage = session.role.stage();

        let outcome = match (kind, selector) {
            (_, ApprovalSelector::Osms(osms)) if osms.trim().is_empty() => {
                return Err(ServiceError::ValidationError(
                    "OSMS selector must not be empty".to_string(),
                ));
            }
            (RecordKind::TimeAdjustment, ApprovalSelector::Id(id)) => {
                self.time_adjustments.apply_approval(*id, stage).await?
            }
            (RecordKind::TimeAdjustment, ApprovalSelector::Osms(_)) => {
                return Err(ServiceError::ValidationError(
                    "Time adjustment entries are approved by id".to_string(),
                ));
            }
            (RecordKind::ShiftSwap, selector) => {
                let team = match session.role {
                    Role::TeamLead => Some(bound_team(session)?),
                    Role::Manager => None,
                };
                self.shift_swaps.apply_approval(selector, team, stage).await?
            }
        };

        tracing::info!(
            role = %session.role,
            %kind,
            %selector,
            ?outcome,
            "Approval requested"
        );
        Ok(outcome)
    }
}

fn bound_team(session: &Session) -> Result<&str, ServiceError> {
    session.bound_team().ok_or_else(|| {
        ServiceError::AuthenticationError("Team lead session is not bound to a team".to_string())
    })
}

/// Team lead listings are pinned to the bound team; a manager's explicit
/// filter wins over the team they signed in with.
fn listing_team<'a>(
    session: &'a Session,
    team_filter: Option<&'a str>,
) -> Result<Option<&'a str>, ServiceError> {
    let requested = team_filter.map(str::trim).filter(|team| !team.is_empty());

    match session.role {
        Role::TeamLead => {
            let bound = bound_team(session)?;
            match requested {
                Some(team) if team != bound => Err(ServiceError::AuthenticationError(format!(
                    "Team lead for {} cannot view team {}",
                    bound, team
                ))),
                _ => Ok(Some(bound)),
            }
        }
        Role::Manager => Ok(requested.or_else(|| session.bound_team())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_lead_listing_is_pinned_to_bound_team() {
        let session = Session::team_lead("Alpha");
        assert_eq!(listing_team(&session, None).unwrap(), Some("Alpha"));
        assert_eq!(listing_team(&session, Some("Alpha")).unwrap(), Some("Alpha"));
        assert!(matches!(
            listing_team(&session, Some("Bravo")),
            Err(ServiceError::AuthenticationError(_))
        ));
    }

    #[test]
    fn unbound_team_lead_is_rejected() {
        let session = Session {
            role: Role::TeamLead,
            team_name: Some("  ".to_string()),
        };
        assert!(matches!(
            listing_team(&session, None),
            Err(ServiceError::AuthenticationError(_))
        ));
    }

    #[test]
    fn manager_filter_falls_back_to_session_team() {
        let unscoped = Session::manager(None);
        assert_eq!(listing_team(&unscoped, None).unwrap(), None);
        assert_eq!(listing_team(&unscoped, Some(" ")).unwrap(), None);

        let scoped = Session::manager(Some("Alpha".to_string()));
        assert_eq!(listing_team(&scoped, None).unwrap(), Some("Alpha"));
        assert_eq!(listing_team(&scoped, Some("Bravo")).unwrap(), Some("Bravo"));
    }
}
