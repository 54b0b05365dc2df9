use log::debug;
use std::sync::Arc;

use crate::application::clock::Clock;
use crate::application::dtos::{DayStatusDto, EligibilityDto};
use pledgetrack_domain::check_in::{CheckInEvent, CheckInRepository};
use pledgetrack_domain::eligibility::{weekly_progress, EligibilityResult};
use pledgetrack_domain::shared::{DomainError, PledgeId, UserId};

/// Read side of the eligibility engine.
///
/// Both views are recomputed from a fresh read of the check-in store; store
/// failures propagate and are never reported as "not eligible".
pub struct EligibilityQueries {
    check_in_repo: Arc<dyn CheckInRepository>,
    clock: Arc<dyn Clock>,
}

impl EligibilityQueries {
    pub fn new(check_in_repo: Arc<dyn CheckInRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            check_in_repo,
            clock,
        }
    }

    pub async fn check_eligibility(
        &self,
        user_id: &str,
        pledge_id: &str,
    ) -> Result<EligibilityDto, DomainError> {
        let check_ins = self.history(user_id, pledge_id).await?;
        let result = EligibilityResult::from_check_ins(&check_ins);

        debug!(
            "[eligibility] user={} pledge={} eligible={} consecutive={} completed={}",
            user_id, pledge_id, result.eligible, result.consecutive_days, result.days_completed
        );

        Ok(EligibilityDto::from(result))
    }

    /// Seven entries, oldest first, ending today (UTC).
    pub async fn get_weekly_progress(
        &self,
        user_id: &str,
        pledge_id: &str,
    ) -> Result<Vec<DayStatusDto>, DomainError> {
        let check_ins = self.history(user_id, pledge_id).await?;
        let today = self.clock.today();

        Ok(weekly_progress(&check_ins, today)
            .into_iter()
            .map(DayStatusDto::from)
            .collect())
    }

    async fn history(
        &self,
        user_id: &str,
        pledge_id: &str,
    ) -> Result<Vec<CheckInEvent>, DomainError> {
        self.check_in_repo
            .find_by_user_and_pledge(&UserId::from_string(user_id), &PledgeId::from_string(pledge_id))
            .await
    }
}
