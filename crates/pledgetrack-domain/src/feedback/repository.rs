use async_trait::async_trait;

use super::Feedback;
use crate::shared::{DomainError, FeedbackId};

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn save(&self, feedback: &Feedback) -> Result<(), DomainError>;

    /// One page of feedback, newest first.
    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Feedback>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// Mean rating, or `None` when there is no feedback yet.
    async fn average_rating(&self) -> Result<Option<f64>, DomainError>;

    /// Returns false when no feedback had this id.
    async fn delete(&self, id: &FeedbackId) -> Result<bool, DomainError>;
}
