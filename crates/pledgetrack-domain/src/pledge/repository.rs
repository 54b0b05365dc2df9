use async_trait::async_trait;

use super::Pledge;
use crate::shared::{DomainError, PledgeId, UserId};

#[async_trait]
pub trait PledgeRepository: Send + Sync {
    async fn save(&self, pledge: &Pledge) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &PledgeId) -> Result<Option<Pledge>, DomainError>;

    /// All pledges, newest first.
    async fn find_all(&self) -> Result<Vec<Pledge>, DomainError>;

    /// Pledges submitted by one user, newest first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Pledge>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
