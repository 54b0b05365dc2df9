use async_trait::async_trait;

use super::CheckInEvent;
use crate::shared::{DomainError, PledgeId, UserId};

#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// All check-ins recorded for a user against one pledge, in no particular order.
    async fn find_by_user_and_pledge(
        &self,
        user_id: &UserId,
        pledge_id: &PledgeId,
    ) -> Result<Vec<CheckInEvent>, DomainError>;

    /// Atomically store `event` unless one with the same identity exists.
    ///
    /// Returns the stored event: the pre-existing one unchanged on conflict,
    /// otherwise `event` itself. Implementations must not read-then-write.
    async fn insert_if_absent(&self, event: &CheckInEvent) -> Result<StoredCheckIn, DomainError>;
}

/// Outcome of [`CheckInRepository::insert_if_absent`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoredCheckIn {
    pub event: CheckInEvent,
    /// False when the day already had an event and `event` is that one.
    pub inserted: bool,
}
