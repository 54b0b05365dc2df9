use std::sync::Arc;

use crate::application::dtos::PledgeDto;
use pledgetrack_domain::pledge::PledgeRepository;
use pledgetrack_domain::shared::{DomainError, PledgeId, UserId};

pub struct PledgeQueries {
    pledge_repo: Arc<dyn PledgeRepository>,
}

impl PledgeQueries {
    pub fn new(pledge_repo: Arc<dyn PledgeRepository>) -> Self {
        Self { pledge_repo }
    }

    pub async fn get_pledge(&self, pledge_id: &str) -> Result<PledgeDto, DomainError> {
        self.pledge_repo
            .find_by_id(&PledgeId::from_string(pledge_id))
            .await?
            .map(|p| PledgeDto::from(&p))
            .ok_or_else(|| DomainError::NotFound(format!("Pledge not found: {}", pledge_id)))
    }

    /// Newest first
    pub async fn list_pledges(&self) -> Result<Vec<PledgeDto>, DomainError> {
        let pledges = self.pledge_repo.find_all().await?;
        Ok(pledges.iter().map(PledgeDto::from).collect())
    }

    pub async fn list_pledges_for_user(&self, user_id: &str) -> Result<Vec<PledgeDto>, DomainError> {
        let pledges = self
            .pledge_repo
            .find_by_user(&UserId::from_string(user_id))
            .await?;
        Ok(pledges.iter().map(PledgeDto::from).collect())
    }

    pub async fn count_pledges(&self) -> Result<u64, DomainError> {
        self.pledge_repo.count().await
    }
}
